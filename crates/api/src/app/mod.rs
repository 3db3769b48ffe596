//! HTTP application wiring (axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: store/service wiring and the shared [`AppState`]
//! - `extract.rs`: the `CurrentUser` extractor (authentication boundary)
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request/response DTOs and JSON mapping
//! - `errors.rs`: consistent error responses

use axum::Router;
use axum::routing::get;

pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;
pub mod services;

pub use services::{AppConfig, AppState, BootstrapAdmin};

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: AppConfig) -> Router {
    let state = services::build_state(config);

    Router::new()
        .route("/health", get(routes::health))
        .merge(routes::router())
        .with_state(state)
}
