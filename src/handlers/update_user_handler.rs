//! Update User Handler
//!
//! Partial profile updates restricted to username, name and email.

use std::sync::Arc;

use crate::domain::{OperationContext, User};
use crate::error::AppError;
use crate::store::UserStore;

use super::get_user_handler::load_active_user;
use super::UpdateUserCommand;

/// Handler for user updates
pub struct UpdateUserHandler {
    store: Arc<dyn UserStore>,
}

impl UpdateUserHandler {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Execute the update user command
    ///
    /// The target is checked before the body, so an inactive user reports
    /// not-found even when the body is also invalid. The read and the write
    /// are separate store calls.
    pub async fn execute(
        &self,
        command: UpdateUserCommand,
        context: &OperationContext,
    ) -> Result<User, AppError> {
        let user = load_active_user(self.store.as_ref(), command.user_id).await?;

        let changes = command.changes()?;

        let updated = self.store.update(user.id, changes).await?;

        tracing::info!(
            user_id = %updated.id,
            correlation_id = ?context.correlation_id,
            "User updated"
        );

        Ok(updated)
    }
}
