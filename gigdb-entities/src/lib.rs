#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # gigdb-entities
//!
//! Reusable, agnostic domain entities for gigdb.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod artist;
pub mod genre;
pub mod id;
pub mod phone;
pub mod show;
pub mod state;
pub mod time;
pub mod venue;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
