//! # accounthub-entity
//!
//! Domain entity models for AccountHub. Every struct in this crate
//! represents a database table row or a domain value object, and the
//! `store` module defines the async access contracts those rows are
//! reached through. All entities derive `Debug`, `Clone`, `Serialize`,
//! `Deserialize`, and database entities additionally derive
//! `sqlx::FromRow`.

pub mod store;
pub mod token;
pub mod user;
