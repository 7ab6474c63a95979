//! Application services for the user management system.
//!
//! Services sit between the HTTP gateway and storage. They depend on the
//! [`UserRepo`] capability rather than a concrete repository so that storage
//! can be swapped (for example with `MockUserRepo` in tests).

pub mod user_service;

pub use user_service::{UserRepo, UserService};

#[cfg(any(test, feature = "test-support"))]
pub use user_service::MockUserRepo;
