//! Repository for the `users` table.

use notyetdude_core::identity::NormalizedEmail;
use sqlx::PgPool;

use crate::models::user::User;

/// Column list for users queries.
const COLUMNS: &str = "id, email, created_at";

pub struct UserRepo;

impl UserRepo {
    /// Return the user row for `email`, creating it on first use.
    ///
    /// The no-op `DO UPDATE` makes `RETURNING` yield the existing row on
    /// conflict.
    pub async fn upsert(pool: &PgPool, email: &NormalizedEmail) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email) VALUES ($1)
             ON CONFLICT (email) DO UPDATE SET email = EXCLUDED.email
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email.as_str())
            .fetch_one(pool)
            .await
    }
}
