//! User Store module
//!
//! Persistence seam for users. Handlers only see the `UserStore` trait;
//! PostgreSQL and in-memory implementations live behind it.

mod error;
mod memory;
mod postgres;

pub use error::StoreError;
pub use memory::InMemoryUserStore;
pub use postgres::PgUserStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewUser, User, UserChanges};

/// Persistence contract for users.
///
/// Ids are opaque keys generated by the store. Nothing here is
/// transactional across calls: a find followed by an update may race with
/// another request touching the same row.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user and return it with its assigned id
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// Get a user by ID, active or not
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Apply a partial update and return the stored result
    async fn update(&self, id: Uuid, changes: UserChanges) -> Result<User, StoreError>;
}
