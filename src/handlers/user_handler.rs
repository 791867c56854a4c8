//! User Creation Handler

use std::sync::Arc;

use crate::domain::{OperationContext, User};
use crate::error::AppError;
use crate::store::UserStore;

use super::CreateUserCommand;

/// Handler for user creation
pub struct CreateUserHandler {
    store: Arc<dyn UserStore>,
}

impl CreateUserHandler {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Execute the create user command
    pub async fn execute(
        &self,
        command: CreateUserCommand,
        context: &OperationContext,
    ) -> Result<User, AppError> {
        // Nothing reaches the store unless validation passes
        let new_user = command.validate()?;

        let user = self.store.create(new_user).await?;

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            correlation_id = ?context.correlation_id,
            "User created"
        );

        Ok(user)
    }
}
