//! Route definitions for ideas.
//!
//! Mounted at `/ideas` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::ideas;
use crate::state::AppState;

/// ```text
/// GET    /                          -> list_ideas (?email, status)
/// POST   /                          -> create_idea
/// GET    /{id}                      -> get_idea
/// POST   /{id}/actions/{action}     -> apply_action
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ideas::list_ideas).post(ideas::create_idea))
        .route("/{id}", get(ideas::get_idea))
        .route("/{id}/actions/{action}", post(ideas::apply_action))
}
