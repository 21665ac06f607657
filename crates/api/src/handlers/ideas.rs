//! Handlers for parking ideas, listing the board, and in-app transitions.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde::Deserialize;

use notyetdude_core::error::CoreError;
use notyetdude_core::identity::{Identity, NormalizedEmail};
use notyetdude_core::lifecycle::{
    compute_transition, ensure_action_offered, new_idea_lifecycle, IdeaAction, UnknownAction,
};
use notyetdude_core::types::{DbId, Timestamp};
use notyetdude_core::validation::validate_idea_form;
use notyetdude_db::models::idea::{Idea, NewIdea};
use notyetdude_db::repositories::{IdeaRepo, UserRepo};
use notyetdude_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::identity::{remember, StoredIdentity};
use crate::query::BoardParams;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views::{IdeaBoard, IdeaCard};

/// Body of `POST /ideas`.
///
/// `email` may be omitted when the session cookie already names the visitor.
#[derive(Debug, Deserialize)]
pub struct CreateIdeaRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /ideas
///
/// Park a new idea and remember the visitor's e-mail.
pub async fn create_idea(
    State(state): State<AppState>,
    StoredIdentity(stored): StoredIdentity,
    jar: CookieJar,
    Json(input): Json<CreateIdeaRequest>,
) -> AppResult<impl IntoResponse> {
    let raw_email = match input.email.as_deref().map(str::trim) {
        Some(email) if !email.is_empty() => email.to_string(),
        _ => stored
            .map(|identity| identity.email.to_string())
            .unwrap_or_default(),
    };
    let draft = validate_idea_form(&input.title, input.description.as_deref(), &raw_email)?;

    let now = Utc::now();
    let user = UserRepo::upsert(&state.pool, &draft.email).await?;
    let idea = IdeaRepo::insert(
        &state.pool,
        &NewIdea {
            user_id: user.id,
            title: draft.title,
            description: draft.description,
            email: draft.email.clone(),
            parked_at: now,
            lifecycle: new_idea_lifecycle(now),
        },
    )
    .await?;

    tracing::info!(
        idea_id = %idea.id,
        user_id = %user.id,
        remind_at = %idea.remind_at,
        "Idea parked"
    );

    let jar = remember(jar, &draft.email);
    let card = IdeaCard::build(idea, now, &state.config.public_base_url);
    Ok((StatusCode::CREATED, jar, Json(DataResponse { data: card })))
}

/// GET /ideas?email=&status=
///
/// The visitor's board. `email` falls back to the session cookie.
pub async fn list_ideas(
    State(state): State<AppState>,
    StoredIdentity(stored): StoredIdentity,
    Query(params): Query<BoardParams>,
) -> AppResult<impl IntoResponse> {
    let identity = resolve_identity(params.email.as_deref(), stored)?;
    let ideas = IdeaRepo::list_by_email(&state.pool, &identity.email).await?;

    tracing::debug!(
        email = %identity.email,
        filter = %params.status,
        total = ideas.len(),
        "Loaded idea board"
    );

    let board = IdeaBoard::build(
        identity.email,
        params.status,
        ideas,
        Utc::now(),
        &state.config.public_base_url,
    );
    Ok(Json(DataResponse { data: board }))
}

/// GET /ideas/{id}
pub async fn get_idea(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let idea = find_idea(&state.pool, id).await?;
    let card = IdeaCard::build(idea, Utc::now(), &state.config.public_base_url);
    Ok(Json(DataResponse { data: card }))
}

/// POST /ideas/{id}/actions/{action}
///
/// Apply `build`, `snooze`, `kill` or `park` (alias `revive`).
pub async fn apply_action(
    State(state): State<AppState>,
    Path((id, action)): Path<(DbId, String)>,
) -> AppResult<impl IntoResponse> {
    let action: IdeaAction = action
        .parse()
        .map_err(|e: UnknownAction| AppError::BadRequest(e.to_string()))?;

    let idea = find_idea(&state.pool, id).await?;
    let now = Utc::now();
    let updated = transition_idea(&state.pool, &idea, action, now).await?;

    let card = IdeaCard::build(updated, now, &state.config.public_base_url);
    Ok(Json(DataResponse { data: card }))
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Pick the visitor: an explicit e-mail wins over the session cookie.
fn resolve_identity(explicit: Option<&str>, stored: Option<Identity>) -> AppResult<Identity> {
    match explicit.map(str::trim) {
        Some(raw) if !raw.is_empty() => Ok(Identity::new(NormalizedEmail::parse(raw)?)),
        _ => stored.ok_or(AppError::IdentityRequired),
    }
}

async fn find_idea(pool: &DbPool, id: DbId) -> AppResult<Idea> {
    IdeaRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Idea", id }))
}

/// Gate, compute and persist one transition, returning the re-read row.
pub(crate) async fn transition_idea(
    pool: &DbPool,
    idea: &Idea,
    action: IdeaAction,
    now: Timestamp,
) -> AppResult<Idea> {
    ensure_action_offered(idea.status, action)?;

    let update = compute_transition(&idea.lifecycle(), action, now);
    let updated = IdeaRepo::update_lifecycle(pool, idea.id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Idea",
            id: idea.id,
        }))?;

    tracing::info!(
        idea_id = %idea.id,
        action = %action,
        from = %idea.status,
        to = %updated.status,
        snooze_count = updated.snooze_count,
        "Idea transitioned"
    );

    Ok(updated)
}
