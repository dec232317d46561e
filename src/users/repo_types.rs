use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i32,                       // assigned by the store, never reused
    pub username: String,
    pub email: String,                 // unique across the table
    pub active: bool,                  // admin-only flag, not exposed in JSON
    pub creation_date: OffsetDateTime, // set on insert, immutable
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("email already exists")]
    DuplicateEmail,

    #[error("user not found")]
    NotFound,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
