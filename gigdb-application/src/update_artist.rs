use super::*;

// Full overwrite of all editable fields, including the genre list.
pub fn update_artist(
    connections: &sqlite::Connections,
    id: ArtistId,
    update: usecases::ArtistInput,
) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::update_artist(conn, id, update).map_err(|err| {
            if let usecases::Error::Repo(RepoError::Other(ref cause)) = err {
                warn!("Failed to store updated artist {}: {}", id, cause);
            }
            err
        })
    })?;
    Ok(())
}
