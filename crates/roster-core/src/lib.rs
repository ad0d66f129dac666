pub mod activity;
pub mod config;
pub mod error;
pub mod roster;
pub mod seed;

pub use activity::{Activity, Catalog};
pub use error::{ErrorKind, Result, RosterError};
pub use roster::Roster;
