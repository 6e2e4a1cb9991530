//! # accounthub-api
//!
//! The HTTP surface of AccountHub: router, handlers, the bearer-token
//! extractor, request/response DTOs, the upload store, and the mapping
//! from domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod uploads;

pub use router::build_router;
pub use state::AppState;
