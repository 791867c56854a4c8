//! user_accounts Library
//!
//! REST handlers for a user resource: create, fetch, update and deactivate.
//!
//! ```text
//! api (routes, serializer, middleware)
//!   -> handlers (commands + validation)
//!     -> store (UserStore: PostgreSQL / in-memory)
//!       -> domain (User, UserChanges, DomainError)
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod store;

mod error;

pub use config::Config;
pub use domain::{DomainError, OperationContext, User};
pub use error::{AppError, AppResult, ErrorResponse};
pub use store::{InMemoryUserStore, PgUserStore, StoreError, UserStore};
