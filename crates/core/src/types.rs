/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// The distinguished admin user, seeded at startup and never deletable.
pub const ADMIN_USER_ID: DbId = 1;
