use super::*;

// Full overwrite of all editable fields, including the genre list.
pub fn update_venue(
    connections: &sqlite::Connections,
    id: VenueId,
    update: usecases::VenueInput,
) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::update_venue(conn, id, update).map_err(|err| {
            if let usecases::Error::Repo(RepoError::Other(ref cause)) = err {
                warn!("Failed to store updated venue {}: {}", id, cause);
            }
            err
        })
    })?;
    Ok(())
}
