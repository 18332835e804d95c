//! Read-only navigation API.
//!
//! Exposes the navigation structures registered at boot, for front-ends that
//! render menus client-side.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::error::{AppError, AppResult};
use crate::navigation::NavEntry;
use crate::state::AppState;

/// List registered navigation names, sorted.
async fn list_navigations(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.navigation().names())
}

/// Rendered entries for one navigation.
async fn get_navigation(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<NavEntry>>> {
    let entries = state
        .navigation()
        .get(&name)
        .ok_or(AppError::UnknownNavigation(name))?;

    Ok(Json(entries))
}

/// Create the navigation router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/navigation", get(list_navigations))
        .route("/api/navigation/{name}", get(get_navigation))
}
