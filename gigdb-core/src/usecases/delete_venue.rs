use crate::usecases::prelude::*;

/// Deleting an already-deleted venue reports `NotFound`.
pub fn delete_venue<R: VenueRepo>(repo: &R, id: VenueId) -> Result<()> {
    Ok(repo.delete_venue(id)?)
}
