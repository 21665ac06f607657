//! Repository for the `ideas` table.

use notyetdude_core::identity::NormalizedEmail;
use notyetdude_core::lifecycle::LifecycleUpdate;
use notyetdude_core::types::DbId;
use sqlx::PgPool;

use crate::models::idea::{Idea, NewIdea};

/// Column list for ideas queries.
const COLUMNS: &str = "id, user_id, title, description, email, status, parked_at, \
    remind_at, resolved_at, snooze_count, created_at, updated_at";

/// Persistence for ideas. Rows are never deleted.
pub struct IdeaRepo;

impl IdeaRepo {
    /// Insert a new idea, returning the created row.
    pub async fn insert(pool: &PgPool, input: &NewIdea) -> Result<Idea, sqlx::Error> {
        let query = format!(
            "INSERT INTO ideas
                (user_id, title, description, email, status, parked_at, remind_at,
                 resolved_at, snooze_count, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $6, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Idea>(&query)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.email.as_str())
            .bind(input.lifecycle.status.as_str())
            .bind(input.parked_at)
            .bind(input.lifecycle.remind_at)
            .bind(input.lifecycle.resolved_at)
            .bind(input.lifecycle.snooze_count)
            .fetch_one(pool)
            .await
    }

    /// Find an idea by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Idea>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ideas WHERE id = $1");
        sqlx::query_as::<_, Idea>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every idea owned by `email`, newest first.
    pub async fn list_by_email(
        pool: &PgPool,
        email: &NormalizedEmail,
    ) -> Result<Vec<Idea>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ideas
             WHERE email = $1
             ORDER BY created_at DESC, id"
        );
        sqlx::query_as::<_, Idea>(&query)
            .bind(email.as_str())
            .fetch_all(pool)
            .await
    }

    /// Write the lifecycle fields computed by a transition.
    ///
    /// Returns `None` when no idea has this ID.
    pub async fn update_lifecycle(
        pool: &PgPool,
        id: DbId,
        update: &LifecycleUpdate,
    ) -> Result<Option<Idea>, sqlx::Error> {
        let query = format!(
            "UPDATE ideas SET
                status = $2,
                remind_at = $3,
                resolved_at = $4,
                snooze_count = $5,
                updated_at = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let idea = sqlx::query_as::<_, Idea>(&query)
            .bind(id)
            .bind(update.status.as_str())
            .bind(update.remind_at)
            .bind(update.resolved_at)
            .bind(update.snooze_count)
            .bind(update.updated_at)
            .fetch_optional(pool)
            .await?;

        if idea.is_some() {
            tracing::debug!(idea_id = %id, status = %update.status, "Idea lifecycle updated");
        }
        Ok(idea)
    }
}
