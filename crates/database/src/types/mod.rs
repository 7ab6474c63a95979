//! Shared types and result types for the database layer

pub mod errors;

pub use errors::{DatabaseError, UserError};

pub type DatabaseResult<T> = Result<T, DatabaseError>;
pub type UserResult<T> = Result<T, UserError>;
