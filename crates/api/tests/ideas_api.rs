//! HTTP-level integration tests for the `/ideas` endpoints.
//!
//! Ideas are parked through the API or seeded through the repository layer
//! (with fixed timestamps, so ordering is deterministic), then read back
//! through the HTTP API.

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Duration, TimeZone, Utc};
use common::{
    body_json, build_test_app, get, get_with_cookie, post, post_json, post_json_with_cookie,
    session_cookie,
};
use notyetdude_core::identity::NormalizedEmail;
use notyetdude_core::lifecycle::{compute_transition, new_idea_lifecycle, IdeaAction};
use notyetdude_core::types::Timestamp;
use notyetdude_db::models::idea::{Idea, NewIdea};
use notyetdude_db::repositories::{IdeaRepo, UserRepo};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ts(value: &serde_json::Value) -> DateTime<Utc> {
    value
        .as_str()
        .expect("timestamp should be a string")
        .parse()
        .expect("timestamp should be RFC 3339")
}

fn day(n: u32) -> Timestamp {
    Utc.with_ymd_and_hms(2026, 1, n, 10, 0, 0).unwrap()
}

/// Park an idea at `parked_at` and apply `actions` one day apart.
async fn seed(
    pool: &PgPool,
    email: &str,
    title: &str,
    parked_at: Timestamp,
    actions: &[IdeaAction],
) -> Idea {
    let email = NormalizedEmail::parse(email).unwrap();
    let user = UserRepo::upsert(pool, &email).await.unwrap();
    let mut idea = IdeaRepo::insert(
        pool,
        &NewIdea {
            user_id: user.id,
            title: title.to_string(),
            description: None,
            email,
            parked_at,
            lifecycle: new_idea_lifecycle(parked_at),
        },
    )
    .await
    .unwrap();

    for (i, action) in actions.iter().enumerate() {
        let now = parked_at + Duration::days(i as i64 + 1);
        let update = compute_transition(&idea.lifecycle(), *action, now);
        idea = IdeaRepo::update_lifecycle(pool, idea.id, &update)
            .await
            .unwrap()
            .unwrap();
    }
    idea
}

async fn count_ideas(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ideas")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

// ---------------------------------------------------------------------------
// POST /api/v1/ideas
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_idea_parks_with_normalized_email(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/ideas",
        json!({ "title": "AI dog translator", "email": "Dude@Example.com " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        session_cookie(&response).as_deref(),
        Some("nyd_email=dude@example.com")
    );

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["title"], "AI dog translator");
    assert_eq!(data["status"], "parked");
    assert_eq!(data["email"], "dude@example.com");
    assert_eq!(data["snooze_count"], 0);
    assert!(data["resolved_at"].is_null());
    assert!(data["description"].is_null());
    assert_eq!(
        ts(&data["remind_at"]) - ts(&data["created_at"]),
        Duration::days(90)
    );
    assert_eq!(data["status_label"], "Parked");
    assert_eq!(data["parked_ago"], "today");
    assert_eq!(data["reminder"], "Reminder in 3 months");
    assert_eq!(data["actions"], json!(["build", "snooze", "kill"]));
    assert_eq!(data["action_links"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_idea_with_empty_title_is_rejected_without_writes(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/ideas",
        json!({ "title": "   ", "email": "dude@example.com" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Give your idea a name at least, dude.");

    assert_eq!(count_ideas(&pool).await, 0);
    let (users,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(users, 0, "no user row should be created on validation failure");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_idea_with_malformed_email_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/ideas",
        json!({ "title": "Good idea", "email": "not-an-email" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "We need your email to remind you in 90 days.");
    assert_eq!(count_ideas(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_idea_uses_session_email_when_omitted(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json_with_cookie(
        app,
        "/api/v1/ideas",
        json!({ "title": "Cookie idea", "description": "  context  " }),
        Some("nyd_email=returning@example.com"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "returning@example.com");
    assert_eq!(json["data"]["description"], "context");
}

// ---------------------------------------------------------------------------
// GET /api/v1/ideas
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_board_counts_and_default_filter(pool: PgPool) {
    let owner = "board@example.com";
    let mut expected_order = Vec::new();
    let plan: [(&str, &[IdeaAction]); 6] = [
        ("Parked one", &[]),
        ("Killed one", &[IdeaAction::Kill]),
        ("Parked two", &[]),
        ("Building", &[IdeaAction::Build]),
        ("Killed two", &[IdeaAction::Snooze, IdeaAction::Kill]),
        ("Parked three", &[]),
    ];
    for (i, (title, actions)) in plan.iter().enumerate() {
        let idea = seed(&pool, owner, title, day(1 + i as u32), actions).await;
        expected_order.insert(0, idea.id.to_string());
    }
    seed(&pool, "other@example.com", "Not on this board", day(20), &[]).await;

    let app = build_test_app(pool);
    let response = get(app, "/api/v1/ideas?email=Board@Example.com").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["email"], owner);
    assert_eq!(data["filter"], "all");
    assert_eq!(
        data["counts"],
        json!({ "all": 6, "parked": 3, "building": 1, "snoozed": 0, "killed": 2 })
    );

    let ids: Vec<String> = data["ideas"]
        .as_array()
        .unwrap()
        .iter()
        .map(|card| card["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, expected_order, "newest idea first");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_board_status_filter_keeps_full_counts(pool: PgPool) {
    let owner = "graveyard@example.com";
    seed(&pool, owner, "Alive", day(1), &[]).await;
    seed(&pool, owner, "Dead", day(2), &[IdeaAction::Kill]).await;

    let app = build_test_app(pool);
    let response = get(app, "/api/v1/ideas?email=graveyard@example.com&status=killed").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["filter"], "killed");
    assert_eq!(data["filter_label"], "Graveyard");
    assert_eq!(data["counts"]["all"], 2);
    let ideas = data["ideas"].as_array().unwrap();
    assert_eq!(ideas.len(), 1);
    assert_eq!(ideas[0]["title"], "Dead");
    assert!(ideas[0]["reminder"].is_null(), "killed ideas show no reminder");
    assert_eq!(ideas[0]["actions"], json!(["park"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_board_falls_back_to_session_cookie(pool: PgPool) {
    seed(&pool, "cookie@example.com", "Remembered", day(1), &[]).await;

    let app = build_test_app(pool);
    let response =
        get_with_cookie(app, "/api/v1/ideas", Some("nyd_email=cookie@example.com")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["counts"]["all"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_board_without_identity_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/ideas").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "IDENTITY_REQUIRED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_board_rejects_unknown_status_filter(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/ideas?email=a@example.com&status=archived").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// GET /api/v1/ideas/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_missing_idea_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let uri = format!("/api/v1/ideas/{}", uuid::Uuid::new_v4());
    let response = get(app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// POST /api/v1/ideas/{id}/actions/{action}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_build_resolves_and_keeps_reminder(pool: PgPool) {
    let idea = seed(&pool, "build@example.com", "Ship it", day(1), &[]).await;

    let app = build_test_app(pool);
    let response = post(app, &format!("/api/v1/ideas/{}/actions/build", idea.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["status"], "building");
    assert!(!data["resolved_at"].is_null());
    assert_eq!(ts(&data["remind_at"]), idea.remind_at);
    assert_eq!(data["snooze_count"], 0);
    assert_eq!(data["actions"], json!(["park", "kill"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_snooze_twice_counts_both(pool: PgPool) {
    let idea = seed(&pool, "snooze@example.com", "Later", day(1), &[]).await;
    let uri = format!("/api/v1/ideas/{}/actions/snooze", idea.id);

    let first = post(build_test_app(pool.clone()), &uri).await;
    assert_eq!(first.status(), StatusCode::OK);

    let before = Utc::now();
    let second = post(build_test_app(pool), &uri).await;
    assert_eq!(second.status(), StatusCode::OK);

    let json = body_json(second).await;
    let data = &json["data"];
    assert_eq!(data["status"], "snoozed");
    assert_eq!(data["snooze_count"], 2);
    assert!(data["resolved_at"].is_null());
    assert_eq!(
        ts(&data["remind_at"]) - ts(&data["updated_at"]),
        Duration::days(90)
    );
    assert!(ts(&data["updated_at"]) >= before - Duration::seconds(1));
    assert!(data["reminder"]
        .as_str()
        .unwrap()
        .starts_with("Next check-in"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_revive_killed_idea(pool: PgPool) {
    let idea = seed(&pool, "revive@example.com", "Phoenix", day(1), &[IdeaAction::Kill]).await;

    let app = build_test_app(pool);
    let response = post(app, &format!("/api/v1/ideas/{}/actions/revive", idea.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["status"], "parked");
    assert!(data["resolved_at"].is_null());
    assert_eq!(
        ts(&data["remind_at"]) - ts(&data["updated_at"]),
        Duration::days(90)
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_action_not_offered_is_conflict(pool: PgPool) {
    let idea = seed(&pool, "gate@example.com", "Gone", day(1), &[IdeaAction::Kill]).await;

    let app = build_test_app(pool.clone());
    let response = post(app, &format!("/api/v1/ideas/{}/actions/snooze", idea.id)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let unchanged = IdeaRepo::find_by_id(&pool, idea.id).await.unwrap().unwrap();
    assert_eq!(unchanged.snooze_count, 0);
    assert_eq!(unchanged.updated_at, idea.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_action_is_bad_request(pool: PgPool) {
    let idea = seed(&pool, "typo@example.com", "Typo", day(1), &[]).await;

    let app = build_test_app(pool);
    let response = post(app, &format!("/api/v1/ideas/{}/actions/delete", idea.id)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}
