//! Idea model.

use notyetdude_core::identity::NormalizedEmail;
use notyetdude_core::lifecycle::{IdeaStatus, LifecycleState};
use notyetdude_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use ts_rs::TS;

/// A row from the `ideas` table.
#[derive(Debug, Clone, Serialize, FromRow, TS)]
#[ts(export)]
pub struct Idea {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub email: String,
    #[sqlx(try_from = "String")]
    pub status: IdeaStatus,
    pub parked_at: Timestamp,
    pub remind_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
    pub snooze_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Idea {
    /// The lifecycle fields the transition engine reads.
    pub fn lifecycle(&self) -> LifecycleState {
        LifecycleState {
            status: self.status,
            remind_at: self.remind_at,
            resolved_at: self.resolved_at,
            snooze_count: self.snooze_count,
        }
    }
}

/// DTO for inserting a freshly parked idea.
#[derive(Debug, Clone)]
pub struct NewIdea {
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub email: NormalizedEmail,
    /// Creation time; also the initial `parked_at` and `updated_at`.
    pub parked_at: Timestamp,
    pub lifecycle: LifecycleState,
}
