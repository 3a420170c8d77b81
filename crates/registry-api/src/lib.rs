//! # registry-api
//!
//! HTTP API layer for the member registry built on Axum.
//!
//! Exposes the registry operations as JSON endpoints under `/api`, with
//! request logging, CORS, DTO validation, and error mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
