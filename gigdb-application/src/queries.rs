use super::*;

use gigdb_core::usecases::{ArtistDetail, SearchResults, VenueArea, VenueDetail};

pub fn list_venue_areas(
    connections: &sqlite::Connections,
    now: Timestamp,
) -> Result<Vec<VenueArea>> {
    let connection = connections.shared()?;
    Ok(usecases::venue_areas(&connection, now)?)
}

pub fn search_venues(
    connections: &sqlite::Connections,
    term: &str,
) -> Result<SearchResults<VenueRef>> {
    let connection = connections.shared()?;
    Ok(usecases::search_venues(&connection, term)?)
}

pub fn get_venue_detail(
    connections: &sqlite::Connections,
    id: VenueId,
    now: Timestamp,
) -> Result<VenueDetail> {
    let connection = connections.shared()?;
    Ok(usecases::get_venue(&connection, id, now)?)
}

pub fn list_artists(connections: &sqlite::Connections) -> Result<Vec<ArtistRef>> {
    let connection = connections.shared()?;
    Ok(usecases::list_artists(&connection)?)
}

pub fn search_artists(
    connections: &sqlite::Connections,
    term: &str,
) -> Result<SearchResults<ArtistRef>> {
    let connection = connections.shared()?;
    Ok(usecases::search_artists(&connection, term)?)
}

pub fn get_artist_detail(
    connections: &sqlite::Connections,
    id: ArtistId,
    now: Timestamp,
) -> Result<ArtistDetail> {
    let connection = connections.shared()?;
    Ok(usecases::get_artist(&connection, id, now)?)
}

pub fn list_shows(connections: &sqlite::Connections) -> Result<Vec<ShowListing>> {
    let connection = connections.shared()?;
    Ok(usecases::list_shows(&connection)?)
}
