use super::*;

pub fn create_show(
    connections: &sqlite::Connections,
    new_show: usecases::ShowInput,
) -> Result<ShowId> {
    let id = connections.exclusive()?.transaction(|conn| {
        usecases::create_show(conn, new_show).map_err(|err| {
            // Most prominently a dangling artist or venue reference
            // rejected by the foreign key constraints.
            if let usecases::Error::Repo(ref repo_err) = err {
                warn!("Failed to store new show: {}", repo_err);
            }
            err
        })
    })?;
    Ok(id)
}
