mod create_show;
mod delete_artist;
mod delete_venue;
mod error;
mod get_artist;
mod get_venue;
mod list_artists;
mod list_shows;
mod search;
mod store_artist;
mod store_venue;
mod venue_areas;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_show::*, delete_artist::*, delete_venue::*, error::Error, get_artist::*, get_venue::*,
    list_artists::*, list_shows::*, search::*, store_artist::*, store_venue::*, venue_areas::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        repositories::{Error as RepoError, *},
        util::validate::ValidationErrors,
    };
}
