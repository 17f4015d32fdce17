// Shared helpers for integration tests

use chrono::{TimeZone, Utc};
use daterand_core::Timestamp;
use tracing_subscriber::EnvFilter;

/// Install a test subscriber; RUST_LOG controls verbosity
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// UTC midnight of the given date
pub fn midnight(year: i32, month: u32, day: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .map(Timestamp::from)
        .unwrap_or_else(|| panic!("invalid test date {}-{}-{}", year, month, day))
}
