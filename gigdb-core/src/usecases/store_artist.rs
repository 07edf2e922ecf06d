use crate::{usecases::prelude::*, util::parse};

/// Raw artist form input, exactly as an HTML form posts it.
#[rustfmt::skip]
#[derive(Default, Debug, Clone)]
pub struct ArtistInput {
    pub name                : String,
    pub city                : String,
    pub state               : String,
    pub phone               : Option<String>,
    pub image_link          : Option<String>,
    pub website             : Option<String>,
    pub facebook_link       : Option<String>,
    pub seeking_venue       : bool,
    pub genres              : Vec<String>,
    pub seeking_description : Option<String>,
}

pub fn create_artist<R: ArtistRepo>(repo: &R, input: ArtistInput) -> Result<ArtistId> {
    let profile = parse_artist_input(input)?;
    Ok(repo.create_artist(&profile)?)
}

pub fn update_artist<R: ArtistRepo>(repo: &R, id: ArtistId, input: ArtistInput) -> Result<()> {
    let profile = parse_artist_input(input)?;
    Ok(repo.update_artist(id, &profile)?)
}

/// Same validation protocol as the venue form, minus the address field.
pub fn parse_artist_input(input: ArtistInput) -> Result<ArtistProfile> {
    let ArtistInput {
        name,
        city,
        state,
        phone,
        image_link,
        website,
        facebook_link,
        seeking_venue,
        genres,
        seeking_description,
    } = input;

    let mut errors = ValidationErrors::default();
    let name = parse::required_text("name", name, &mut errors);
    let city = parse::required_text("city", city, &mut errors);
    let state = parse::required_text("state", state, &mut errors);
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
        (Some(state), true) => Ok(ArtistProfile {
            name,
            city,
            state,
            phone,
            image_link: parse::none_if_empty(image_link),
            website,
            facebook_link,
            seeking_venue,
            genres,
            seeking_description: parse::none_if_empty(seeking_description),
        }),
        _ => Err(errors.into()),
    }
}
