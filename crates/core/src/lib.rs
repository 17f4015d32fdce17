// daterand Core - Domain, Ports & Randomizers
// Randomness enters only through the RandomSource port

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

pub use application::{DateRangeRandomizer, Randomizer};
pub use config::DateRangeConfig;
pub use domain::{DomainError, RandomSourceError, Timestamp};
pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
