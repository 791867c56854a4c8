//! Deactivate User Handler
//!
//! Soft delete: the record stays, `active` goes to false for good.

use std::sync::Arc;

use crate::domain::OperationContext;
use crate::error::AppError;
use crate::store::UserStore;

use super::DeactivateUserCommand;

/// Handler for user deactivation
pub struct DeactivateUserHandler {
    store: Arc<dyn UserStore>,
}

impl DeactivateUserHandler {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Execute the deactivate user command
    pub async fn execute(
        &self,
        command: DeactivateUserCommand,
        context: &OperationContext,
    ) -> Result<(), AppError> {
        let user = self
            .store
            .find_by_id(command.user_id)
            .await?
            .ok_or_else(|| AppError::user_not_found(command.user_id))?;

        // Already inactive is a not-found, not a no-op
        let changes = user.deactivation()?;

        self.store.update(user.id, changes).await?;

        tracing::info!(
            user_id = %user.id,
            correlation_id = ?context.correlation_id,
            "User deactivated"
        );

        Ok(())
    }
}
