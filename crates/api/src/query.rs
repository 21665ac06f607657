//! Shared query parameter types for API handlers.

use notyetdude_core::board::StatusFilter;
use serde::Deserialize;

/// Query parameters for the idea board (`?email=&status=`).
///
/// `email` overrides the session cookie; `status` defaults to `all`.
#[derive(Debug, Default, Deserialize)]
pub struct BoardParams {
    pub email: Option<String>,
    #[serde(default)]
    pub status: StatusFilter,
}
