use crate::repositories::*;

pub trait Db: VenueRepo + ArtistRepo + ShowRepo {}

impl<T> Db for T where T: VenueRepo + ArtistRepo + ShowRepo {}
