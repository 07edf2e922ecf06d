use super::*;

pub fn create_venue(
    connections: &sqlite::Connections,
    new_venue: usecases::VenueInput,
) -> Result<VenueId> {
    let id = connections.exclusive()?.transaction(|conn| {
        usecases::create_venue(conn, new_venue).map_err(|err| {
            if let usecases::Error::Repo(ref repo_err) = err {
                warn!("Failed to store new venue: {}", repo_err);
            }
            err
        })
    })?;
    Ok(id)
}
