use crate::usecases::prelude::*;

/// Flat listing of all shows, joined with both related entities.
pub fn list_shows<R: ShowRepo>(repo: &R) -> Result<Vec<ShowListing>> {
    Ok(repo.all_shows()?)
}
