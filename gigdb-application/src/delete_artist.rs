use super::*;

// Deleting an artist also removes its shows (cascading foreign keys).
pub fn delete_artist(connections: &sqlite::Connections, id: ArtistId) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::delete_artist(conn, id).map_err(|err| {
            if let usecases::Error::Repo(RepoError::Other(ref cause)) = err {
                warn!("Failed to delete artist {}: {}", id, cause);
            }
            err
        })
    })?;
    Ok(())
}
