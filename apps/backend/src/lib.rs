#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod infra;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;
pub mod views;

// Re-exports for public API
pub use config::server::ServerConfig;
pub use domain::{color_for, GuessOutcome, PollOutcome, Rgb, Session, SessionId};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use infra::state::{build_state, StateBuilder};
pub use middleware::request_trace::RequestTrace;
pub use services::{SessionCoordinator, SessionStore};
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
