use super::*;

// Deleting a venue also removes its shows (cascading foreign keys).
pub fn delete_venue(connections: &sqlite::Connections, id: VenueId) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::delete_venue(conn, id).map_err(|err| {
            if let usecases::Error::Repo(RepoError::Other(ref cause)) = err {
                warn!("Failed to delete venue {}: {}", id, cause);
            }
            err
        })
    })?;
    Ok(())
}
