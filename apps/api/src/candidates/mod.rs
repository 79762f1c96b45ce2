pub mod handlers;
pub mod pg_store;
pub mod stats;
pub mod store;
