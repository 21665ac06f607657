//! Handler for one-click action links sent in reminder e-mails.
//!
//! A link names an idea and a decision (`build`, `snooze` or `kill`).
//! Following it applies the decision, remembers the idea's owner as the
//! session identity and returns a confirmation. Anything that cannot be
//! applied is reported as an invalid link and nothing is written.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;

use notyetdude_core::action_link::{parse_link_token, INVALID_LINK_MESSAGE, MISSING_IDEA_MESSAGE};
use notyetdude_core::error::CoreError;
use notyetdude_core::identity::NormalizedEmail;
use notyetdude_core::types::DbId;
use notyetdude_db::repositories::IdeaRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ideas::transition_idea;
use crate::middleware::identity::remember;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views::ActionConfirmation;

/// GET /action-links/{idea_id}/{action}
pub async fn follow_action_link(
    State(state): State<AppState>,
    jar: CookieJar,
    Path((idea_id, token)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let Some(link) = parse_link_token(&token) else {
        tracing::warn!(idea_id = %idea_id, token = %token, "Unknown action link token");
        return Err(AppError::InvalidLink(INVALID_LINK_MESSAGE.to_string()));
    };
    let action = link.action();
    let id: DbId = idea_id
        .parse()
        .map_err(|_| AppError::InvalidLink(INVALID_LINK_MESSAGE.to_string()))?;

    let idea = IdeaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::InvalidLink(MISSING_IDEA_MESSAGE.to_string()))?;

    if !idea.status.offers(action) {
        tracing::info!(
            idea_id = %id,
            action = %action,
            status = %idea.status,
            "Action link no longer applies"
        );
        return Err(AppError::InvalidLink(format!(
            "That idea is already {}, so this link has expired.",
            idea.status
        )));
    }

    // Stored e-mails are normalized on insert; a bad one is corrupt data.
    let owner = NormalizedEmail::parse(&idea.email).map_err(|_| {
        CoreError::Internal(format!("idea {id} has an unusable owner e-mail"))
    })?;
    let updated = transition_idea(&state.pool, &idea, action, Utc::now()).await?;

    let jar = remember(jar, &owner);
    let confirmation = ActionConfirmation::new(&updated, link);
    Ok((jar, Json(DataResponse { data: confirmation })))
}
