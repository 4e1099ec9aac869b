//! HTTP API.

pub mod error;
mod handlers;
pub mod server;
pub mod types;

pub use error::{ApiError, ErrorBody};
pub use server::{AppState, router, serve, start_server};
