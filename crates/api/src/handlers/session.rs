//! Handlers for the remembered visitor e-mail.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use notyetdude_core::identity::NormalizedEmail;

use crate::error::AppResult;
use crate::middleware::identity::{forget, remember, StoredIdentity};
use crate::response::DataResponse;

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub email: Option<NormalizedEmail>,
}

#[derive(Debug, Deserialize)]
pub struct SetSessionRequest {
    pub email: String,
}

/// GET /session
pub async fn get_session(StoredIdentity(stored): StoredIdentity) -> impl IntoResponse {
    Json(DataResponse {
        data: SessionView {
            email: stored.map(|identity| identity.email),
        },
    })
}

/// PUT /session
///
/// Remember `email` for later visits.
pub async fn set_session(
    jar: CookieJar,
    Json(input): Json<SetSessionRequest>,
) -> AppResult<impl IntoResponse> {
    let email = NormalizedEmail::parse(&input.email)?;
    tracing::debug!(email = %email, "Session identity stored");

    let jar = remember(jar, &email);
    Ok((
        jar,
        Json(DataResponse {
            data: SessionView { email: Some(email) },
        }),
    ))
}

/// DELETE /session
pub async fn clear_session(jar: CookieJar) -> impl IntoResponse {
    (StatusCode::NO_CONTENT, forget(jar))
}
