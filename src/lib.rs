//! Account identity validation and the persistence contract of autha users.
//!
//! A [`user::User`] is checked with [`user::User::validate`] before being
//! handed to any [`user::UserRepository`] implementation.

#![forbid(unsafe_code)]
#![deny(unused_mut)]

pub mod config;
pub mod context;
pub mod error;
pub mod telemetry;
pub mod user;

pub use context::Context;
pub use error::{Error, Result};
pub use user::{InMemoryUserRepository, User, UserRepository};
