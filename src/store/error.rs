//! User Store Errors

use uuid::Uuid;

/// Errors that can occur in a user store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Username or email already taken
    #[error("Unique constraint violated: {0}")]
    Conflict(String),

    /// No row with this id
    #[error("User not found: {0}")]
    NotFound(Uuid),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Check if this error is a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict(_))
    }

    /// Map unique violations to `Conflict`, everything else to `Database`.
    pub(crate) fn from_sqlx(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                let constraint = db_err.constraint().unwrap_or("users").to_string();
                return StoreError::Conflict(constraint);
            }
        }
        StoreError::Database(err)
    }
}
