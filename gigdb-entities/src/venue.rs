use crate::{genre::*, id::*, phone::*, state::*, url::*};

// Mutable part of a venue listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueProfile {
    pub name: String,
    pub city: String,
    pub state: UsState,
    pub address: String,
    pub phone: Option<PhoneNumber>,
    pub image_link: Option<String>,
    pub website: Option<Url>,
    pub facebook_link: Option<Url>,
    pub seeking_talent: bool,
    pub genres: Vec<Genre>,
    pub seeking_description: Option<String>,
}

// Convenience type that merges the tuple (VenueId, VenueProfile)
// into a single, flat struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub city: String,
    pub state: UsState,
    pub address: String,
    pub phone: Option<PhoneNumber>,
    pub image_link: Option<String>,
    pub website: Option<Url>,
    pub facebook_link: Option<Url>,
    pub seeking_talent: bool,
    pub genres: Vec<Genre>,
    pub seeking_description: Option<String>,
}

impl From<(VenueId, VenueProfile)> for Venue {
    fn from(from: (VenueId, VenueProfile)) -> Self {
        let (
            id,
            VenueProfile {
                name,
                city,
                state,
                address,
                phone,
                image_link,
                website,
                facebook_link,
                seeking_talent,
                genres,
                seeking_description,
            },
        ) = from;
        Self {
            id,
            name,
            city,
            state,
            address,
            phone,
            image_link,
            website,
            facebook_link,
            seeking_talent,
            genres,
            seeking_description,
        }
    }
}

impl From<Venue> for (VenueId, VenueProfile) {
    fn from(from: Venue) -> Self {
        let Venue {
            id,
            name,
            city,
            state,
            address,
            phone,
            image_link,
            website,
            facebook_link,
            seeking_talent,
            genres,
            seeking_description,
        } = from;
        (
            id,
            VenueProfile {
                name,
                city,
                state,
                address,
                phone,
                image_link,
                website,
                facebook_link,
                seeking_talent,
                genres,
                seeking_description,
            },
        )
    }
}
