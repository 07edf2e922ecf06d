use crate::{usecases::prelude::*, util::parse};

/// Raw venue form input, exactly as an HTML form posts it.
#[rustfmt::skip]
#[derive(Default, Debug, Clone)]
pub struct VenueInput {
    pub name                : String,
    pub city                : String,
    pub state               : String,
    pub address             : String,
    pub phone               : Option<String>,
    pub image_link          : Option<String>,
    pub website             : Option<String>,
    pub facebook_link       : Option<String>,
    pub seeking_talent      : bool,
    pub genres              : Vec<String>,
    pub seeking_description : Option<String>,
}

pub fn create_venue<R: VenueRepo>(repo: &R, input: VenueInput) -> Result<VenueId> {
    let profile = parse_venue_input(input)?;
    Ok(repo.create_venue(&profile)?)
}

pub fn update_venue<R: VenueRepo>(repo: &R, id: VenueId, input: VenueInput) -> Result<()> {
    let profile = parse_venue_input(input)?;
    Ok(repo.update_venue(id, &profile)?)
}

/// Validates the form in two phases: structural checks first (required
/// fields, URL shape), and only if those pass, the semantic checks
/// (genre membership, state membership, phone format). The semantic
/// checks are evaluated independently so that every violation is
/// reported at once.
pub fn parse_venue_input(input: VenueInput) -> Result<VenueProfile> {
    let VenueInput {
        name,
        city,
        state,
        address,
        phone,
        image_link,
        website,
        facebook_link,
        seeking_talent,
        genres,
        seeking_description,
    } = input;

    let mut errors = ValidationErrors::default();
    let name = parse::required_text("name", name, &mut errors);
    let city = parse::required_text("city", city, &mut errors);
    let state = parse::required_text("state", state, &mut errors);
    let address = parse::required_text("address", address, &mut errors);
    if genres.is_empty() {
        errors.add("genres", "This field is required.");
    }
    let website = parse::url_field("website", website.as_deref(), &mut errors);
    let facebook_link = parse::url_field("facebook_link", facebook_link.as_deref(), &mut errors);
    if !errors.is_empty() {
        return Err(errors.into());
    }

    let mut errors = ValidationErrors::default();
    let genres = parse::genre_list("genres", &genres, &mut errors);
    let state = parse::state_code("state", &state, &mut errors);
    let phone = parse::phone_field("phone", phone, &mut errors);
    match (state, errors.is_empty()) {
        (Some(state), true) => Ok(VenueProfile {
            name,
            city,
            state,
            address,
            phone,
            image_link: parse::none_if_empty(image_link),
            website,
            facebook_link,
            seeking_talent,
            genres,
            seeking_description: parse::none_if_empty(seeking_description),
        }),
        _ => Err(errors.into()),
    }
}
