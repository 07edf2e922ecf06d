use std::cell::RefCell;

use anyhow::anyhow;

use crate::{
    entities::*,
    repositories::{Error as RepoError, *},
};

pub mod fixtures {
    use crate::usecases::{ArtistInput, VenueInput};

    pub fn venue_input(name: &str, city: &str, state: &str) -> VenueInput {
        VenueInput {
            name: name.into(),
            city: city.into(),
            state: state.into(),
            address: "1 Main St".into(),
            genres: vec!["Other".into()],
            ..Default::default()
        }
    }

    pub fn artist_input(name: &str) -> ArtistInput {
        ArtistInput {
            name: name.into(),
            city: "Memphis".into(),
            state: "TN".into(),
            genres: vec!["Blues".into()],
            ..Default::default()
        }
    }
}

type RepoResult<T> = std::result::Result<T, RepoError>;

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

/// In-memory stand-in for the SQLite backend. Mirrors its observable
/// behavior, including the foreign-key check on show creation.
#[derive(Debug, Default)]
pub struct MockDb {
    pub venues: RefCell<Vec<Venue>>,
    pub artists: RefCell<Vec<Artist>>,
    pub shows: RefCell<Vec<Show>>,
}

impl VenueRepo for MockDb {
    fn create_venue(&self, profile: &VenueProfile) -> RepoResult<VenueId> {
        let mut venues = self.venues.borrow_mut();
        let id = VenueId::new(next_id(venues.iter().map(|v| v.id.value())));
        venues.push((id, profile.clone()).into());
        Ok(id)
    }

    fn update_venue(&self, id: VenueId, profile: &VenueProfile) -> RepoResult<()> {
        let mut venues = self.venues.borrow_mut();
        match venues.iter_mut().find(|v| v.id == id) {
            Some(venue) => {
                *venue = (id, profile.clone()).into();
                Ok(())
            }
            None => Err(RepoError::NotFound),
        }
    }

    fn delete_venue(&self, id: VenueId) -> RepoResult<()> {
        let mut venues = self.venues.borrow_mut();
        let count_before = venues.len();
        venues.retain(|v| v.id != id);
        if venues.len() == count_before {
            return Err(RepoError::NotFound);
        }
        // Cascade, like the SQLite schema.
        self.shows.borrow_mut().retain(|s| s.venue_id != id);
        Ok(())
    }

    fn get_venue(&self, id: VenueId) -> RepoResult<Venue> {
        self.venues
            .borrow()
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_venues(&self) -> RepoResult<Vec<Venue>> {
        Ok(self.venues.borrow().clone())
    }

    fn search_venues_by_name(&self, term: &str) -> RepoResult<Vec<VenueRef>> {
        let term = term.to_lowercase();
        Ok(self
            .venues
            .borrow()
            .iter()
            .filter(|v| v.name.to_lowercase().contains(&term))
            .map(|v| VenueRef {
                id: v.id,
                name: v.name.clone(),
            })
            .collect())
    }
}

impl ArtistRepo for MockDb {
    fn create_artist(&self, profile: &ArtistProfile) -> RepoResult<ArtistId> {
        let mut artists = self.artists.borrow_mut();
        let id = ArtistId::new(next_id(artists.iter().map(|a| a.id.value())));
        artists.push((id, profile.clone()).into());
        Ok(id)
    }

    fn update_artist(&self, id: ArtistId, profile: &ArtistProfile) -> RepoResult<()> {
        let mut artists = self.artists.borrow_mut();
        match artists.iter_mut().find(|a| a.id == id) {
            Some(artist) => {
                *artist = (id, profile.clone()).into();
                Ok(())
            }
            None => Err(RepoError::NotFound),
        }
    }

    fn delete_artist(&self, id: ArtistId) -> RepoResult<()> {
        let mut artists = self.artists.borrow_mut();
        let count_before = artists.len();
        artists.retain(|a| a.id != id);
        if artists.len() == count_before {
            return Err(RepoError::NotFound);
        }
        self.shows.borrow_mut().retain(|s| s.artist_id != id);
        Ok(())
    }

    fn get_artist(&self, id: ArtistId) -> RepoResult<Artist> {
        self.artists
            .borrow()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_artist_refs(&self) -> RepoResult<Vec<ArtistRef>> {
        Ok(self
            .artists
            .borrow()
            .iter()
            .map(|a| ArtistRef {
                id: a.id,
                name: a.name.clone(),
            })
            .collect())
    }

    fn search_artists_by_name(&self, term: &str) -> RepoResult<Vec<ArtistRef>> {
        let term = term.to_lowercase();
        Ok(self
            .artists
            .borrow()
            .iter()
            .filter(|a| a.name.to_lowercase().contains(&term))
            .map(|a| ArtistRef {
                id: a.id,
                name: a.name.clone(),
            })
            .collect())
    }
}

impl ShowRepo for MockDb {
    fn create_show(&self, booking: &ShowBooking) -> RepoResult<ShowId> {
        let artist_exists = self
            .artists
            .borrow()
            .iter()
            .any(|a| a.id == booking.artist_id);
        let venue_exists = self
            .venues
            .borrow()
            .iter()
            .any(|v| v.id == booking.venue_id);
        if !artist_exists || !venue_exists {
            return Err(RepoError::Other(anyhow!("FOREIGN KEY constraint failed")));
        }
        let mut shows = self.shows.borrow_mut();
        let id = ShowId::new(next_id(shows.iter().map(|s| s.id.value())));
        shows.push((id, *booking).into());
        Ok(id)
    }

    fn shows_of_venue(&self, venue_id: VenueId) -> RepoResult<Vec<ArtistAppearance>> {
        let artists = self.artists.borrow();
        self.shows
            .borrow()
            .iter()
            .filter(|s| s.venue_id == venue_id)
            .map(|show| {
                let artist = artists
                    .iter()
                    .find(|a| a.id == show.artist_id)
                    .ok_or(RepoError::NotFound)?;
                Ok(ArtistAppearance {
                    artist_id: artist.id,
                    artist_name: artist.name.clone(),
                    artist_image_link: artist.image_link.clone(),
                    start_time: show.start_time,
                })
            })
            .collect()
    }

    fn shows_of_artist(&self, artist_id: ArtistId) -> RepoResult<Vec<VenueAppearance>> {
        let venues = self.venues.borrow();
        self.shows
            .borrow()
            .iter()
            .filter(|s| s.artist_id == artist_id)
            .map(|show| {
                let venue = venues
                    .iter()
                    .find(|v| v.id == show.venue_id)
                    .ok_or(RepoError::NotFound)?;
                Ok(VenueAppearance {
                    venue_id: venue.id,
                    venue_name: venue.name.clone(),
                    venue_image_link: venue.image_link.clone(),
                    start_time: show.start_time,
                })
            })
            .collect()
    }

    fn all_shows(&self) -> RepoResult<Vec<ShowListing>> {
        let venues = self.venues.borrow();
        let artists = self.artists.borrow();
        self.shows
            .borrow()
            .iter()
            .map(|show| {
                let venue = venues
                    .iter()
                    .find(|v| v.id == show.venue_id)
                    .ok_or(RepoError::NotFound)?;
                let artist = artists
                    .iter()
                    .find(|a| a.id == show.artist_id)
                    .ok_or(RepoError::NotFound)?;
                Ok(ShowListing {
                    venue_id: venue.id,
                    venue_name: venue.name.clone(),
                    artist_id: artist.id,
                    artist_name: artist.name.clone(),
                    artist_image_link: artist.image_link.clone(),
                    start_time: show.start_time,
                })
            })
            .collect()
    }

    fn count_upcoming_shows_of_venue(
        &self,
        venue_id: VenueId,
        now: Timestamp,
    ) -> RepoResult<u64> {
        Ok(self
            .shows
            .borrow()
            .iter()
            .filter(|s| s.venue_id == venue_id && s.is_upcoming(now))
            .count() as u64)
    }
}
