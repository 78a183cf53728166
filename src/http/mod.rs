//! Axum-based HTTP server exposing the audit and forecast engines.
//!
//! The presentation layer (charts, tables) lives in an external frontend;
//! this module only serializes engine output and maps the engines' no-data
//! sentinels onto HTTP status codes.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, AppError};
pub use router::create_router;
pub use state::AppState;
