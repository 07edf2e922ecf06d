use crate::usecases::prelude::*;

/// Flat id/name listing of all artists.
pub fn list_artists<R: ArtistRepo>(repo: &R) -> Result<Vec<ArtistRef>> {
    Ok(repo.all_artist_refs()?)
}
