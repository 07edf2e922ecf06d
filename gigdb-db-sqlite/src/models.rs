#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// The start_time column is stored as a unix timestamp in seconds.
// Enumerated values (state, genre) are stored as their canonical
// string spelling.

use super::schema::*;

// Doubles as the full-overwrite changeset for edits: None clears the
// stored value instead of keeping it.
#[derive(Insertable, AsChangeset)]
#[diesel(table_name = venues, treat_none_as_null = true)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

#[derive(Queryable)]
pub struct VenueRecord {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = venue_genres)]
pub struct NewVenueGenre {
    pub venue_id: i64,
    pub pos: i16,
    pub genre: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = artists, treat_none_as_null = true)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

#[derive(Queryable)]
pub struct ArtistRecord {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = artist_genres)]
pub struct NewArtistGenre {
    pub artist_id: i64,
    pub pos: i16,
    pub genre: String,
}

#[derive(Insertable)]
#[diesel(table_name = shows)]
pub struct NewShow {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: i64,
}

// Joined columns from shows and artists, seen from the venue's side.
#[derive(Queryable)]
pub struct ArtistAppearanceRow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: i64,
}

// Joined columns from shows and venues, seen from the artist's side.
#[derive(Queryable)]
pub struct VenueAppearanceRow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: i64,
}

// Joined columns from shows, venues and artists.
#[derive(Queryable)]
pub struct JoinedShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: i64,
}
