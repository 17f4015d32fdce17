// Port Layer - Interfaces for external dependencies

pub mod random_source; // For deterministic testing

// Re-exports
pub use random_source::{RandomSource, SeededRandomSource, ThreadRngSource};

#[cfg(test)]
pub use random_source::MockRandomSource;
