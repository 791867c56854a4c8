//! Response formatter
//!
//! Allow-list of user fields that may leave the service.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::User;

/// Public view of a user. The password is never part of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            name: user.name,
            active: user.active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Serialize an entity, or nothing, into a response body (`null` for `None`).
pub fn serialize(user: Option<User>) -> Json<Option<UserResponse>> {
    Json(user.map(UserResponse::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_not_serialized() {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: "bob".to_string(),
            email: "b@x.com".to_string(),
            name: "Bob".to_string(),
            password: "p".to_string(),
            active: true,
            created_at: now,
            updated_at: now,
        };

        let Json(body) = serialize(Some(user));
        let value = serde_json::to_value(body).unwrap();

        assert_eq!(value["username"], "bob");
        assert_eq!(value["active"], true);
        assert!(value.get("password").is_none());
    }

    #[test]
    fn test_none_is_null() {
        let Json(body) = serialize(None);
        assert_eq!(serde_json::to_value(body).unwrap(), serde_json::Value::Null);
    }
}
