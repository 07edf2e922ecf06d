use crate::usecases::prelude::*;

/// An artist page: the full record plus its shows partitioned around `now`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub past_shows: Vec<VenueAppearance>,
    pub upcoming_shows: Vec<VenueAppearance>,
}

impl ArtistDetail {
    pub fn past_shows_count(&self) -> usize {
        self.past_shows.len()
    }

    pub fn upcoming_shows_count(&self) -> usize {
        self.upcoming_shows.len()
    }
}

/// Shows starting exactly at `now` count as past.
pub fn get_artist<R>(repo: &R, id: ArtistId, now: Timestamp) -> Result<ArtistDetail>
where
    R: ArtistRepo + ShowRepo,
{
    let artist = repo.get_artist(id)?;
    let (past_shows, upcoming_shows) = repo
        .shows_of_artist(id)?
        .into_iter()
        .partition(|appearance| appearance.start_time <= now);
    Ok(ArtistDetail {
        artist,
        past_shows,
        upcoming_shows,
    })
}
