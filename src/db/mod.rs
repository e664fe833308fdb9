pub mod schema;
pub mod stats_repo;
