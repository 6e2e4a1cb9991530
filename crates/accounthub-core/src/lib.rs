//! # accounthub-core
//!
//! Core crate for AccountHub. Contains configuration schemas and the
//! unified error system shared by every other crate.
//!
//! This crate has **no** internal dependencies on other AccountHub crates.

pub mod config;
pub mod error;

pub use error::{AppError, AppResult};
