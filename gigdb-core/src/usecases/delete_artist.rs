use crate::usecases::prelude::*;

/// Deleting an already-deleted artist reports `NotFound`.
pub fn delete_artist<R: ArtistRepo>(repo: &R, id: ArtistId) -> Result<()> {
    Ok(repo.delete_artist(id)?)
}
