//! Unit tests for date range constructor validation

#[cfg(test)]
mod tests {
    use super::super::*;

    fn ts(millis: i64) -> Timestamp {
        Timestamp::from_millis(millis)
    }

    fn invalid_argument_message(result: Result<DateRangeRandomizer>) -> String {
        match result {
            Err(DomainError::InvalidArgument(msg)) => msg,
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_min_absent() {
        let msg = invalid_argument_message(DateRangeRandomizer::new(None, ts(10)));
        assert!(msg.contains("min_time must not be absent"));
    }

    #[test]
    fn test_validate_max_absent() {
        let msg = invalid_argument_message(DateRangeRandomizer::new(ts(10), None));
        assert!(msg.contains("max_time must not be absent"));
    }

    #[test]
    fn test_validate_both_absent_reports_min_first() {
        let msg = invalid_argument_message(DateRangeRandomizer::new(None, None));
        assert!(msg.contains("min_time"));
    }

    #[test]
    fn test_validate_min_after_max() {
        let msg = invalid_argument_message(DateRangeRandomizer::new(ts(11), ts(10)));
        assert!(msg.contains("before"));
    }

    #[test]
    fn test_validate_equal_bounds() {
        let randomizer = DateRangeRandomizer::new(ts(10), ts(10)).unwrap();
        assert_eq!(randomizer.min_time(), ts(10));
        assert_eq!(randomizer.max_time(), ts(10));
    }

    #[test]
    fn test_validate_negative_bounds() {
        // Dates before the epoch are ordinary negative millis
        assert!(DateRangeRandomizer::new(ts(-86_400_000), ts(-1)).is_ok());
        assert!(DateRangeRandomizer::new(ts(-1), ts(-86_400_000)).is_err());
    }

    #[test]
    fn test_validate_bounds_order_of_checks() {
        assert!(validate_bounds(None, None)
            .unwrap_err()
            .to_string()
            .contains("min_time must not be absent"));
        assert!(validate_bounds(Some(ts(5)), None)
            .unwrap_err()
            .to_string()
            .contains("max_time must not be absent"));
        assert_eq!(validate_bounds(Some(ts(1)), Some(ts(2))).unwrap(), (ts(1), ts(2)));
    }
}
