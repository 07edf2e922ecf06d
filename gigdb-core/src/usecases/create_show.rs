use crate::usecases::prelude::*;

/// Raw show form input. The two ids arrive as text fields.
#[derive(Default, Debug, Clone)]
pub struct ShowInput {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

pub fn create_show<R: ShowRepo>(repo: &R, input: ShowInput) -> Result<ShowId> {
    let booking = parse_show_input(input)?;
    Ok(repo.create_show(&booking)?)
}

/// Coerces the submitted fields into a booking. Whether the referenced
/// artist and venue actually exist is checked by the store on insertion.
pub fn parse_show_input(input: ShowInput) -> Result<ShowBooking> {
    let ShowInput {
        artist_id,
        venue_id,
        start_time,
    } = input;

    let mut errors = ValidationErrors::default();
    let artist_id = match artist_id.parse::<ArtistId>() {
        Ok(id) => Some(id),
        Err(_) => {
            errors.add("artist_id", "Invalid artist id.");
            None
        }
    };
    let venue_id = match venue_id.parse::<VenueId>() {
        Ok(id) => Some(id),
        Err(_) => {
            errors.add("venue_id", "Invalid venue id.");
            None
        }
    };
    let start_time = match start_time.parse::<Timestamp>() {
        Ok(ts) => Some(ts),
        Err(_) => {
            errors.add("start_time", "Invalid date.");
            None
        }
    };
    match (artist_id, venue_id, start_time) {
        (Some(artist_id), Some(venue_id), Some(start_time)) => Ok(ShowBooking {
            artist_id,
            venue_id,
            start_time,
        }),
        _ => Err(errors.into()),
    }
}
