use crate::usecases::prelude::*;

/// Search result envelope: the number of matches plus the matching rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for SearchResults<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

pub fn search_venues<R: VenueRepo>(repo: &R, term: &str) -> Result<SearchResults<VenueRef>> {
    Ok(repo.search_venues_by_name(term)?.into())
}

pub fn search_artists<R: ArtistRepo>(repo: &R, term: &str) -> Result<SearchResults<ArtistRef>> {
    Ok(repo.search_artists_by_name(term)?.into())
}
