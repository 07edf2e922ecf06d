use anyhow::anyhow;
use diesel::{
    self,
    prelude::{Connection as DieselConnection, *},
    result::Error as DieselError,
};

use gigdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod artist;
mod show;
mod venue;

type Result<T> = std::result::Result<T, repo::Error>;

define_sql_function! {
    fn last_insert_rowid() -> BigInt;
}

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

fn resolve_last_insert_rowid(conn: &mut SqliteConnection) -> QueryResult<i64> {
    diesel::select(last_insert_rowid()).get_result(conn)
}

fn load_timestamp(secs: i64) -> Result<Timestamp> {
    Timestamp::try_from_secs(secs).map_err(|_| anyhow!("Invalid timestamp: {}", secs).into())
}

fn load_state(code: &str) -> Result<UsState> {
    code.parse()
        .map_err(|_| anyhow!("Invalid state code: {}", code).into())
}

fn load_genre(genre: &str) -> Result<Genre> {
    genre
        .parse()
        .map_err(|_| anyhow!("Invalid genre: {}", genre).into())
}

fn load_url(url: String) -> Option<Url> {
    match url.parse() {
        Ok(url) => Some(url),
        Err(_) => {
            // This should never happen
            log::warn!("Failed to reload stored URL: {}", url);
            None
        }
    }
}
