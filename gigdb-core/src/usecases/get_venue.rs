use crate::usecases::prelude::*;

/// A venue page: the full record plus its shows partitioned around `now`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueDetail {
    pub venue: Venue,
    pub past_shows: Vec<ArtistAppearance>,
    pub upcoming_shows: Vec<ArtistAppearance>,
}

impl VenueDetail {
    pub fn past_shows_count(&self) -> usize {
        self.past_shows.len()
    }

    pub fn upcoming_shows_count(&self) -> usize {
        self.upcoming_shows.len()
    }
}

/// Shows starting exactly at `now` count as past.
pub fn get_venue<R>(repo: &R, id: VenueId, now: Timestamp) -> Result<VenueDetail>
where
    R: VenueRepo + ShowRepo,
{
    let venue = repo.get_venue(id)?;
    let (past_shows, upcoming_shows) = repo
        .shows_of_venue(id)?
        .into_iter()
        .partition(|appearance| appearance.start_time <= now);
    Ok(VenueDetail {
        venue,
        past_shows,
        upcoming_shows,
    })
}
