// Domain Layer - Pure value types and errors

pub mod error;
pub mod timestamp;

// Re-exports
pub use error::{DomainError, RandomSourceError, Result};
pub use timestamp::Timestamp;
