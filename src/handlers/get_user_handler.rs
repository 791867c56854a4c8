//! Get User Handler

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{OperationContext, User};
use crate::error::AppError;
use crate::store::UserStore;

/// Handler for reading a single user
pub struct GetUserHandler {
    store: Arc<dyn UserStore>,
}

impl GetUserHandler {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Load an active user; missing and inactive users are both not-found.
    pub async fn execute(
        &self,
        user_id: Uuid,
        context: &OperationContext,
    ) -> Result<User, AppError> {
        let user = load_active_user(self.store.as_ref(), user_id).await?;

        tracing::debug!(
            user_id = %user.id,
            correlation_id = ?context.correlation_id,
            "User fetched"
        );

        Ok(user)
    }
}

/// Shared lookup for every handler that targets an existing user
pub(super) async fn load_active_user(
    store: &dyn UserStore,
    user_id: Uuid,
) -> Result<User, AppError> {
    let user = store
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::user_not_found(user_id))?;

    Ok(user.ensure_active()?)
}
