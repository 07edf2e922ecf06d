// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// A venue reduced to what listings and search results display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueRef {
    pub id: VenueId,
    pub name: String,
}

/// An artist reduced to what listings and search results display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistRef {
    pub id: ArtistId,
    pub name: String,
}

/// One show at a venue, seen from the venue's side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistAppearance {
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// One show of an artist, seen from the artist's side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueAppearance {
    pub venue_id: VenueId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// One row of the flat show listing, joined with both related entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowListing {
    pub venue_id: VenueId,
    pub venue_name: String,
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

pub trait VenueRepo {
    fn create_venue(&self, profile: &VenueProfile) -> Result<VenueId>;
    fn update_venue(&self, id: VenueId, profile: &VenueProfile) -> Result<()>;
    fn delete_venue(&self, id: VenueId) -> Result<()>;

    fn get_venue(&self, id: VenueId) -> Result<Venue>;
    fn all_venues(&self) -> Result<Vec<Venue>>;

    // Case-insensitive substring match; an empty term matches all venues.
    fn search_venues_by_name(&self, term: &str) -> Result<Vec<VenueRef>>;
}

pub trait ArtistRepo {
    fn create_artist(&self, profile: &ArtistProfile) -> Result<ArtistId>;
    fn update_artist(&self, id: ArtistId, profile: &ArtistProfile) -> Result<()>;
    fn delete_artist(&self, id: ArtistId) -> Result<()>;

    fn get_artist(&self, id: ArtistId) -> Result<Artist>;
    fn all_artist_refs(&self) -> Result<Vec<ArtistRef>>;

    // Case-insensitive substring match; an empty term matches all artists.
    fn search_artists_by_name(&self, term: &str) -> Result<Vec<ArtistRef>>;
}

pub trait ShowRepo {
    // Fails if either referenced entity does not exist.
    fn create_show(&self, booking: &ShowBooking) -> Result<ShowId>;

    fn shows_of_venue(&self, venue_id: VenueId) -> Result<Vec<ArtistAppearance>>;
    fn shows_of_artist(&self, artist_id: ArtistId) -> Result<Vec<VenueAppearance>>;
    fn all_shows(&self) -> Result<Vec<ShowListing>>;

    fn count_upcoming_shows_of_venue(&self, venue_id: VenueId, now: Timestamp) -> Result<u64>;
}
