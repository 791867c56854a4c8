//! Command definitions
//!
//! Commands carry the raw shape of a request; `validate`/`changes` turn
//! them into store inputs or a `DomainError`.

use serde_json::Value;
use uuid::Uuid;

use crate::domain::{DomainError, NewUser, Presence, UserChanges};

/// Fields an update body may contain
pub const UPDATABLE_FIELDS: [&str; 3] = ["username", "name", "email"];

const PASSWORD_MISMATCH: &str = "Passwords do not match";
const CREATE_FIELDS_REQUIRED: &str = "Payload must contain name, username, email and password";
const UPDATE_FIELDS_ALLOWED: &str = "Payload can only contain username, email or name";

/// Parse an identifier taken from a request path.
///
/// Anything that is not a UUID cannot name a stored user, so it is a
/// not-found rather than a validation failure.
pub fn parse_user_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| DomainError::user_not_found(raw))
}

// =========================================================================
// CreateUserCommand
// =========================================================================

/// Command to create a new user
#[derive(Debug, Clone, Default)]
pub struct CreateUserCommand {
    pub username: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

impl CreateUserCommand {
    pub fn new(username: String, email: String, name: String, password: String) -> Self {
        Self {
            username: Some(username),
            email: Some(email),
            name: Some(name),
            password: Some(password.clone()),
            password_confirmation: Some(password),
        }
    }

    pub fn with_password_confirmation(mut self, confirmation: Option<String>) -> Self {
        self.password_confirmation = confirmation;
        self
    }

    /// Check the create rules and build the store input.
    ///
    /// The confirmation check runs first; two absent passwords compare equal
    /// and are then caught by the presence check.
    pub fn validate(&self) -> Result<NewUser, DomainError> {
        if self.password != self.password_confirmation {
            return Err(DomainError::validation(PASSWORD_MISMATCH));
        }

        let name = Presence::of_str(self.name.as_deref());
        let username = Presence::of_str(self.username.as_deref());
        let password = Presence::of_str(self.password.as_deref());
        let email = Presence::of_str(self.email.as_deref());

        match (username.value(), email.value(), name.value(), password.value()) {
            (Some(username), Some(email), Some(name), Some(password)) => Ok(NewUser::new(
                username.to_string(),
                email.to_string(),
                name.to_string(),
                password.to_string(),
            )),
            _ => Err(DomainError::validation(CREATE_FIELDS_REQUIRED)),
        }
    }
}

// =========================================================================
// UpdateUserCommand
// =========================================================================

/// Command to update a user's profile from a raw JSON body
#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    pub user_id: Uuid,
    pub body: Value,
}

impl UpdateUserCommand {
    pub fn new(user_id: Uuid, body: Value) -> Self {
        Self { user_id, body }
    }

    /// Turn the body into a change set.
    ///
    /// Every key in the body must be one of `UPDATABLE_FIELDS`; each one that
    /// is present must be a non-empty string. Absent keys stay unchanged.
    pub fn changes(&self) -> Result<UserChanges, DomainError> {
        let object = self
            .body
            .as_object()
            .ok_or_else(|| DomainError::validation(UPDATE_FIELDS_ALLOWED))?;

        if let Some(extra) = object
            .keys()
            .find(|key| !UPDATABLE_FIELDS.contains(&key.as_str()))
        {
            tracing::debug!(field = %extra, "Rejected update field");
            return Err(DomainError::validation(UPDATE_FIELDS_ALLOWED));
        }

        let field = |key: &str| match Presence::of_json(object.get(key)) {
            Presence::Absent => Ok(None),
            Presence::Valid(value) => Ok(Some(value.to_string())),
            Presence::Invalid => Err(DomainError::validation(format!(
                "Field '{}' must be a non-empty string",
                key
            ))),
        };

        Ok(UserChanges {
            username: field("username")?,
            name: field("name")?,
            email: field("email")?,
            active: None,
        })
    }
}

// =========================================================================
// DeactivateUserCommand
// =========================================================================

/// Command to deactivate a user
#[derive(Debug, Clone, Copy)]
pub struct DeactivateUserCommand {
    pub user_id: Uuid,
}

impl DeactivateUserCommand {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}
