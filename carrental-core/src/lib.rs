//! Core data models and types for carrental


pub mod error;
pub mod types;

pub use error::*;
pub use types::*;

/// Result type alias for carrental operations
pub type Result<T> = std::result::Result<T, RentalError>;
