#![cfg_attr(test, deny(warnings))]

//! # gigdb-core
//!
//! Business logic of the booking directory: repository traits,
//! validation rules and use cases.

pub mod db;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use gigdb_entities::{
        artist::*, genre::*, id::*, phone::*, show::*, state::*, time::*, url::*, venue::*,
    };
}
