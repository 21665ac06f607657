/// All database primary keys are UUIDv4 (`gen_random_uuid()`), so ids stay
/// opaque when they appear in action links.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
