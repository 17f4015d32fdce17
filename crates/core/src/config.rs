// Date range configuration

use crate::application::DateRangeRandomizer;
use crate::domain::{self, Timestamp};
use crate::error::Result;
use crate::port::RandomSource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Bounds for a `DateRangeRandomizer`, as read from configuration
///
/// Bounds are RFC 3339 strings. A missing key is an absent bound and is
/// rejected by [`DateRangeConfig::build`], not by parsing.
///
/// # Example
/// ```text
/// {"min_time": "2020-01-01T00:00:00Z", "max_time": "2020-01-02T00:00:00Z"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_time: Option<DateTime<Utc>>,
}

impl DateRangeConfig {
    pub fn new(min_time: DateTime<Utc>, max_time: DateTime<Utc>) -> Self {
        Self {
            min_time: Some(min_time),
            max_time: Some(max_time),
        }
    }

    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a randomizer backed by the thread-local RNG
    pub fn build(&self) -> domain::Result<DateRangeRandomizer> {
        DateRangeRandomizer::new(self.min_bound(), self.max_bound())
    }

    /// Build a randomizer drawing from `source`
    pub fn build_with_source(
        &self,
        source: Arc<dyn RandomSource>,
    ) -> domain::Result<DateRangeRandomizer> {
        DateRangeRandomizer::with_source(self.min_bound(), self.max_bound(), source)
    }

    fn min_bound(&self) -> Option<Timestamp> {
        self.min_time.map(Timestamp::from)
    }

    fn max_bound(&self) -> Option<Timestamp> {
        self.max_time.map(Timestamp::from)
    }
}
