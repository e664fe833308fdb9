pub mod client;
pub mod db;
pub mod error;
pub mod model;
pub mod people;

pub use client::{Client, ResponseMeta, DEFAULT_BASE_URL};
pub use error::{RosterError, RosterResult};
pub use model::{Person, PersonSpec, PersonStatType, PersonStats};
