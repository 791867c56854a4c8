//! API Routes
//!
//! HTTP endpoint definitions for the user resource.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::OperationContext;
use crate::error::{AppError, AppResult};
use crate::handlers::{
    parse_user_id, CreateUserCommand, CreateUserHandler, DeactivateUserCommand,
    DeactivateUserHandler, GetUserHandler, UpdateUserCommand, UpdateUserHandler,
};
use crate::store::UserStore;

use super::serializer::{serialize, UserResponse};

/// Shared state for the user routes
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

// =========================================================================
// Request types
// =========================================================================

/// Body of `POST /users`. Every field is optional here so that missing
/// fields reach validation instead of failing deserialization.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default, alias = "password_confirmation")]
    pub password_confirmation: Option<String>,
}

impl From<CreateUserRequest> for CreateUserCommand {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
            name: request.name,
            password: request.password,
            password_confirmation: request.password_confirmation,
        }
    }
}

type UserBody = Json<Option<UserResponse>>;

fn body_rejected(rejection: JsonRejection) -> AppError {
    tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
    AppError::validation(rejection.body_text())
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route(
            "/users/:user_id",
            get(get_user)
                .patch(update_user)
                .put(update_user)
                .delete(deactivate_user),
        )
        .route("/users/:user_id/deactivate", post(deactivate_user))
}

// =========================================================================
// POST /users
// =========================================================================

/// Create a new user
async fn create_user(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> AppResult<(StatusCode, UserBody)> {
    let Json(request) = payload.map_err(body_rejected)?;

    let handler = CreateUserHandler::new(state.store);
    let user = handler.execute(request.into(), &context).await?;

    Ok((StatusCode::CREATED, serialize(Some(user))))
}

// =========================================================================
// GET /users/:user_id
// =========================================================================

/// Get an active user by ID
async fn get_user(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(user_id): Path<String>,
) -> AppResult<UserBody> {
    let user_id = parse_user_id(&user_id)?;

    let handler = GetUserHandler::new(state.store);
    let user = handler.execute(user_id, &context).await?;

    Ok(serialize(Some(user)))
}

// =========================================================================
// PATCH /users/:user_id
// =========================================================================

/// Update username, name and/or email
async fn update_user(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(user_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<UserBody> {
    let user_id = parse_user_id(&user_id)?;
    let Json(body) = payload.map_err(body_rejected)?;

    let handler = UpdateUserHandler::new(state.store);
    let user = handler
        .execute(UpdateUserCommand::new(user_id, body), &context)
        .await?;

    Ok(serialize(Some(user)))
}

// =========================================================================
// DELETE /users/:user_id
// =========================================================================

/// Deactivate user (soft delete). Responds with a `null` body.
async fn deactivate_user(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(user_id): Path<String>,
) -> AppResult<UserBody> {
    let user_id = parse_user_id(&user_id)?;

    let handler = DeactivateUserHandler::new(state.store);
    handler
        .execute(DeactivateUserCommand::new(user_id), &context)
        .await?;

    Ok(serialize(None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_request_deserialize() {
        let json = r#"{
            "username": "bob",
            "email": "b@x.com",
            "name": "Bob",
            "password": "p",
            "passwordConfirmation": "p"
        }"#;

        let request: CreateUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.username.as_deref(), Some("bob"));
        assert_eq!(request.password_confirmation.as_deref(), Some("p"));
    }

    #[test]
    fn test_create_user_request_snake_case_alias() {
        let json = r#"{ "password": "p", "password_confirmation": "p" }"#;

        let request: CreateUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.password_confirmation.as_deref(), Some("p"));
        assert!(request.name.is_none());
    }

    #[test]
    fn test_create_user_request_into_command() {
        let request = CreateUserRequest {
            username: Some("bob".to_string()),
            password: Some("p".to_string()),
            ..CreateUserRequest::default()
        };

        let command: CreateUserCommand = request.into();
        assert_eq!(command.username.as_deref(), Some("bob"));
        assert!(command.password_confirmation.is_none());
    }
}
