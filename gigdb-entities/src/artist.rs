use crate::{genre::*, id::*, phone::*, state::*, url::*};

// Mutable part of an artist listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistProfile {
    pub name: String,
    pub city: String,
    pub state: UsState,
    pub phone: Option<PhoneNumber>,
    pub image_link: Option<String>,
    pub website: Option<Url>,
    pub facebook_link: Option<Url>,
    pub seeking_venue: bool,
    pub genres: Vec<Genre>,
    pub seeking_description: Option<String>,
}

// Convenience type that merges the tuple (ArtistId, ArtistProfile)
// into a single, flat struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub city: String,
    pub state: UsState,
    pub phone: Option<PhoneNumber>,
    pub image_link: Option<String>,
    pub website: Option<Url>,
    pub facebook_link: Option<Url>,
    pub seeking_venue: bool,
    pub genres: Vec<Genre>,
    pub seeking_description: Option<String>,
}

impl From<(ArtistId, ArtistProfile)> for Artist {
    fn from(from: (ArtistId, ArtistProfile)) -> Self {
        let (
            id,
            ArtistProfile {
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
            },
        ) = from;
        Self {
            id,
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
        }
    }
}

impl From<Artist> for (ArtistId, ArtistProfile) {
    fn from(from: Artist) -> Self {
        let Artist {
            id,
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
        } = from;
        (
            id,
            ArtistProfile {
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
            },
        )
    }
}
