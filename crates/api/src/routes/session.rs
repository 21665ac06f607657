//! Route definitions for the session identity.
//!
//! Mounted at `/session` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

/// ```text
/// GET    /                          -> get_session
/// PUT    /                          -> set_session
/// DELETE /                          -> clear_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(session::get_session)
            .put(session::set_session)
            .delete(session::clear_session),
    )
}
