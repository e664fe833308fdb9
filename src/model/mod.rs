pub mod person;
pub mod stats;

// Re-exports for convenience
pub use person::{Person, PersonSpec};
pub use stats::{PersonStatType, PersonStats};
