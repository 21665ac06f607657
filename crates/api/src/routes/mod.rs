pub mod action_links;
pub mod health;
pub mod ideas;
pub mod session;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ideas                                  park (POST), board (GET ?email=&status=)
/// /ideas/{id}                             single idea card
/// /ideas/{id}/actions/{action}            build | snooze | kill | park (POST)
///
/// /action-links/{id}/{action}             one-click e-mail link (GET)
///
/// /session                                stored e-mail: get, set (PUT), forget (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/ideas", ideas::router())
        .nest("/action-links", action_links::router())
        .nest("/session", session::router())
}
