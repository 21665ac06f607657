//! Visitor model. One row per normalized e-mail address.

use serde::Serialize;
use sqlx::FromRow;
use notyetdude_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub created_at: Timestamp,
}
