//! # Userbase Users Crate
//!
//! Application layer for user management. The HTTP layer talks to
//! [`UserService`], which forwards every call to a [`UserRepo`] capability
//! without transforming arguments, results or errors.
//!
//! ## Architecture
//!
//! - **Services**: the pass-through [`UserService`]
//! - **Capability**: the [`UserRepo`] trait, implemented by the sqlx-backed
//!   [`UserRepository`] and, with the `test-support` feature, by `MockUserRepo`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use userbase_users::{UserRepository, UserService};
//!
//! let service = UserService::new(Arc::new(UserRepository::new(pool)));
//! let user = service.get("1").await?;
//! ```

pub mod services;

pub use userbase_database::{User, UserError, UserRepository, UserResult};

pub use services::{UserRepo, UserService};

#[cfg(any(test, feature = "test-support"))]
pub use services::MockUserRepo;
