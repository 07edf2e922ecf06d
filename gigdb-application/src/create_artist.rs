use super::*;

pub fn create_artist(
    connections: &sqlite::Connections,
    new_artist: usecases::ArtistInput,
) -> Result<ArtistId> {
    let id = connections.exclusive()?.transaction(|conn| {
        usecases::create_artist(conn, new_artist).map_err(|err| {
            if let usecases::Error::Repo(ref repo_err) = err {
                warn!("Failed to store new artist: {}", repo_err);
            }
            err
        })
    })?;
    Ok(id)
}
