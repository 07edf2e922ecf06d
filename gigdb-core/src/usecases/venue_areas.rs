use crate::usecases::prelude::*;

/// Venues of one `(city, state)` area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueArea {
    pub city: String,
    pub state: UsState,
    pub venues: Vec<VenueAreaEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueAreaEntry {
    pub id: VenueId,
    pub name: String,
    pub num_upcoming_shows: u64,
}

/// Groups all venues by their exact `(city, state)` pair.
///
/// Areas appear in order of first appearance, venues within an area in
/// fetch order. City comparison is case-sensitive on the stored value.
pub fn venue_areas<R>(repo: &R, now: Timestamp) -> Result<Vec<VenueArea>>
where
    R: VenueRepo + ShowRepo,
{
    let mut areas: Vec<VenueArea> = Vec::new();
    for venue in repo.all_venues()? {
        let num_upcoming_shows = repo.count_upcoming_shows_of_venue(venue.id, now)?;
        let entry = VenueAreaEntry {
            id: venue.id,
            name: venue.name,
            num_upcoming_shows,
        };
        match areas
            .iter_mut()
            .find(|area| area.city == venue.city && area.state == venue.state)
        {
            Some(area) => area.venues.push(entry),
            None => areas.push(VenueArea {
                city: venue.city,
                state: venue.state,
                venues: vec![entry],
            }),
        }
    }
    Ok(areas)
}
