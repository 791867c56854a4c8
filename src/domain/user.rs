//! User entity
//!
//! The user record, its activation state, and the change sets applied to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DomainError;

/// User status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    #[default]
    Active,
    Deactivated,
}

/// A persisted user.
///
/// `password` never leaves the process: responses go through `UserResponse`,
/// which does not carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique user ID, assigned by the store
    pub id: Uuid,

    /// Username (unique)
    pub username: String,

    /// Email (unique)
    pub email: String,

    /// Full name
    pub name: String,

    /// Password as handed to the store
    pub password: String,

    /// False once the user has been deactivated
    pub active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn status(&self) -> UserStatus {
        if self.active {
            UserStatus::Active
        } else {
            UserStatus::Deactivated
        }
    }

    /// Inactive users are reported as missing to every read and write path.
    pub fn ensure_active(self) -> Result<Self, DomainError> {
        if self.active {
            Ok(self)
        } else {
            Err(DomainError::user_not_found(self.id))
        }
    }

    /// Change set for the `active -> inactive` transition.
    ///
    /// `inactive` is terminal: deactivating again is a not-found.
    pub fn deactivation(&self) -> Result<UserChanges, DomainError> {
        if !self.active {
            return Err(DomainError::user_not_found(self.id));
        }

        Ok(UserChanges::deactivate())
    }
}

/// Fields for a user that has passed create validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub name: String,
    pub password: String,
    pub active: bool,
}

impl NewUser {
    pub fn new(username: String, email: String, name: String, password: String) -> Self {
        Self {
            username,
            email,
            name,
            password,
            active: true,
        }
    }
}

/// Partial update for a stored user. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub username: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
}

impl UserChanges {
    pub fn deactivate() -> Self {
        Self {
            active: Some(false),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.name.is_none() && self.email.is_none() && self.active.is_none()
    }

    /// Apply the change set in place, stamping `updated_at`.
    pub fn apply_to(&self, user: &mut User, now: DateTime<Utc>) {
        if let Some(username) = &self.username {
            user.username = username.clone();
        }
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(active) = self.active {
            user.active = active;
        }
        user.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
            password: "secret".to_string(),
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_new_user_defaults_active() {
        let user = NewUser::new(
            "bob".to_string(),
            "b@x.com".to_string(),
            "Bob".to_string(),
            "p".to_string(),
        );
        assert!(user.active);
    }

    #[test]
    fn test_apply_partial_changes() {
        let mut user = sample_user();
        let changes = UserChanges {
            name: Some("Alice Wonder".to_string()),
            ..UserChanges::default()
        };

        let later = user.updated_at + chrono::Duration::seconds(5);
        changes.apply_to(&mut user, later);

        assert_eq!(user.name, "Alice Wonder");
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.updated_at, later);
    }

    #[test]
    fn test_deactivation_is_one_way() {
        let mut user = sample_user();
        assert_eq!(user.status(), UserStatus::Active);

        let changes = user.deactivation().unwrap();
        assert_eq!(changes, UserChanges::deactivate());
        changes.apply_to(&mut user, Utc::now());

        assert_eq!(user.status(), UserStatus::Deactivated);
        assert!(matches!(user.deactivation(), Err(DomainError::UserNotFound(_))));
    }

    #[test]
    fn test_inactive_user_is_not_found() {
        let mut user = sample_user();
        user.active = false;

        assert!(matches!(user.ensure_active(), Err(DomainError::UserNotFound(_))));
    }

    #[test]
    fn test_empty_changes() {
        assert!(UserChanges::default().is_empty());
        assert!(!UserChanges::deactivate().is_empty());
    }
}
