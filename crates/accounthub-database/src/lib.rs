//! # accounthub-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations of the store contracts in `accounthub-entity`.

pub mod connection;
pub mod repositories;

pub use connection::DatabasePool;
