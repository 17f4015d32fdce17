// Date Range Randomizer - uniform timestamps between two bounds

use crate::application::Randomizer;
use crate::domain::{DomainError, Result, Timestamp};
use crate::port::{RandomSource, ThreadRngSource};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

#[cfg(test)]
mod validation_test;

/// Random timestamps drawn uniformly from `[min_time, max_time]`
///
/// Both bounds are inclusive. They are validated once by the constructor
/// and never change afterwards, so `min_time <= max_time` holds for the
/// lifetime of the value.
///
/// # Example
/// ```text
/// let randomizer = DateRangeRandomizer::new(min, max)?;
/// let ts = randomizer.next_value()?;
/// assert!(min <= ts && ts <= max);
/// ```
#[derive(Clone)]
pub struct DateRangeRandomizer {
    min_time: Timestamp,
    max_time: Timestamp,
    source: Arc<dyn RandomSource>,
}

impl DateRangeRandomizer {
    /// Create a randomizer backed by the thread-local RNG
    ///
    /// Fails with `DomainError::InvalidArgument` if either bound is absent
    /// or if `min_time` is after `max_time`.
    pub fn new(
        min_time: impl Into<Option<Timestamp>>,
        max_time: impl Into<Option<Timestamp>>,
    ) -> Result<Self> {
        Self::with_source(min_time, max_time, Arc::new(ThreadRngSource))
    }

    /// Create a randomizer that draws from the given source
    ///
    /// Validation is identical to [`DateRangeRandomizer::new`].
    pub fn with_source(
        min_time: impl Into<Option<Timestamp>>,
        max_time: impl Into<Option<Timestamp>>,
        source: Arc<dyn RandomSource>,
    ) -> Result<Self> {
        let (min_time, max_time) = match validate_bounds(min_time.into(), max_time.into()) {
            Ok(bounds) => bounds,
            Err(e) => {
                warn!(error = %e, "Rejected date range");
                return Err(e);
            }
        };

        debug!(
            min_time = %min_time,
            max_time = %max_time,
            span_ms = %(max_time.as_millis() as i128 - min_time.as_millis() as i128),
            "Date range randomizer created"
        );

        Ok(Self {
            min_time,
            max_time,
            source,
        })
    }

    pub fn min_time(&self) -> Timestamp {
        self.min_time
    }

    pub fn max_time(&self) -> Timestamp {
        self.max_time
    }

    /// Draw one timestamp
    ///
    /// A failure of the underlying source is returned as
    /// `DomainError::RandomSource` without retrying.
    pub fn next_value(&self) -> Result<Timestamp> {
        let millis = self
            .source
            .next_long(self.min_time.as_millis(), self.max_time.as_millis())?;

        trace!(millis, "Drew random timestamp");

        Ok(Timestamp::from_millis(millis))
    }
}

impl Randomizer<Timestamp> for DateRangeRandomizer {
    fn next_value(&self) -> Result<Timestamp> {
        DateRangeRandomizer::next_value(self)
    }
}

impl fmt::Debug for DateRangeRandomizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateRangeRandomizer")
            .field("min_time", &self.min_time)
            .field("max_time", &self.max_time)
            .finish_non_exhaustive()
    }
}

/// Check constructor arguments in a fixed order: min, max, then ordering
pub(crate) fn validate_bounds(
    min_time: Option<Timestamp>,
    max_time: Option<Timestamp>,
) -> Result<(Timestamp, Timestamp)> {
    let min_time = min_time
        .ok_or_else(|| DomainError::InvalidArgument("min_time must not be absent".to_string()))?;
    let max_time = max_time
        .ok_or_else(|| DomainError::InvalidArgument("max_time must not be absent".to_string()))?;

    if min_time > max_time {
        return Err(DomainError::InvalidArgument(
            "min_time must be before max_time".to_string(),
        ));
    }

    Ok((min_time, max_time))
}
