//! Command Handlers module
//!
//! Each handler validates its command, talks to the `UserStore`, and hands
//! back a domain `User` (or nothing) for the API layer to serialize.

mod commands;
mod deactivate_user_handler;
mod get_user_handler;
mod update_user_handler;
mod user_handler;


pub use commands::*;
pub use deactivate_user_handler::DeactivateUserHandler;
pub use get_user_handler::GetUserHandler;
pub use update_user_handler::UpdateUserHandler;
pub use user_handler::CreateUserHandler;
