//! Session identity backed by the `nyd_email` cookie.
//!
//! There is no login: the cookie only remembers which e-mail the visitor
//! last used so the board and the park form can skip asking again.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use notyetdude_core::identity::{Identity, NormalizedEmail};

/// Name of the cookie holding the normalized visitor e-mail.
pub const SESSION_COOKIE: &str = "nyd_email";

/// The identity remembered in the session cookie, if any.
///
/// A missing or malformed cookie yields `StoredIdentity(None)`; it never
/// rejects the request.
///
/// ```ignore
/// async fn my_handler(StoredIdentity(identity): StoredIdentity) -> AppResult<Json<()>> {
///     if let Some(identity) = identity {
///         tracing::info!(email = %identity.email, "returning visitor");
///     }
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct StoredIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for StoredIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let identity = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| NormalizedEmail::parse(cookie.value()).ok())
            .map(Identity::new);
        Ok(StoredIdentity(identity))
    }
}

/// Add the session cookie for `email` to the jar.
pub fn remember(jar: CookieJar, email: &NormalizedEmail) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, email.to_string()))
        .path("/")
        .same_site(SameSite::Lax)
        .permanent();
    jar.add(cookie)
}

/// Remove the session cookie from the jar.
pub fn forget(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}
