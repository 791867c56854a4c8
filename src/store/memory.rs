//! In-memory user store (development and tests)

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, UserStore};
use crate::domain::{NewUser, User, UserChanges};

/// `UserStore` backed by a `HashMap` behind a `tokio` lock.
///
/// Enforces the same uniqueness on username and email as the SQL schema.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users, active or not
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

fn find_conflict(
    users: &HashMap<Uuid, User>,
    except: Option<Uuid>,
    username: Option<&str>,
    email: Option<&str>,
) -> Option<&'static str> {
    users
        .values()
        .filter(|u| Some(u.id) != except)
        .find_map(|u| {
            if username == Some(u.username.as_str()) {
                Some("users_username_key")
            } else if email == Some(u.email.as_str()) {
                Some("users_email_key")
            } else {
                None
            }
        })
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        if let Some(constraint) =
            find_conflict(&users, None, Some(user.username.as_str()), Some(user.email.as_str()))
        {
            return Err(StoreError::Conflict(constraint.to_string()));
        }

        let now = Utc::now();
        let created = User {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            name: user.name,
            password: user.password,
            active: user.active,
            created_at: now,
            updated_at: now,
        };
        users.insert(created.id, created.clone());

        tracing::debug!(user_id = %created.id, "Stored user in memory");
        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn update(&self, id: Uuid, changes: UserChanges) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        if let Some(constraint) = find_conflict(
            &users,
            Some(id),
            changes.username.as_deref(),
            changes.email.as_deref(),
        ) {
            return Err(StoreError::Conflict(constraint.to_string()));
        }

        let user = users.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        changes.apply_to(user, Utc::now());

        Ok(user.clone())
    }
}
