//! Domain module
//!
//! Core domain types and the validation rules for the user resource.

pub mod context;
pub mod error;
pub mod presence;
pub mod user;

pub use context::OperationContext;
pub use error::DomainError;
pub use presence::Presence;
pub use user::{NewUser, User, UserChanges, UserStatus};
