//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod constants;
pub mod event;
pub mod user;

pub use constants::*;
pub use event::{UserEvent, UserOperation};
pub use user::{NewUser, User, UserPatch, UserResponse};
