// Application Layer - Randomizers built on the RandomSource port

pub mod date_range;
pub mod randomizer;

// Re-exports
pub use date_range::DateRangeRandomizer;
pub use randomizer::Randomizer;
