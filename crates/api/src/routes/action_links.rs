//! Route definitions for one-click action links.
//!
//! Mounted at `/action-links` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::action_links;
use crate::state::AppState;

/// ```text
/// GET    /{idea_id}/{action}        -> follow_action_link
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{idea_id}/{action}",
        get(action_links::follow_action_link),
    )
}
