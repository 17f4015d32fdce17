// Randomizer interface

use crate::domain::Result;

/// Produces random values of type `T`
///
/// Each call is an independent draw. Implementations take `&self`, so
/// drawing never changes the randomizer's configuration.
pub trait Randomizer<T> {
    fn next_value(&self) -> Result<T>;
}
