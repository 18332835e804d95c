//! HTTP route handlers.

pub mod health;
pub mod navigation;

use axum::Router;

use crate::state::AppState;

/// Assemble all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(navigation::router())
}
