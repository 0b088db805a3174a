use std::time::{Duration, SystemTime};

const SECONDS_PER_HOUR: u64 = 60 * 60;

/// Converts an hour count into a `Duration`, saturating on overflow.
pub fn hours(count: u64) -> Duration {
    Duration::from_secs(count.saturating_mul(SECONDS_PER_HOUR))
}

/// How long ago `modified` was, as seen from `now`.
///
/// A modification time in the future yields an age of zero.
pub fn file_age(modified: SystemTime, now: SystemTime) -> Duration {
    now.duration_since(modified).unwrap_or(Duration::ZERO)
}

/// Decides whether a file is old enough to be deleted.
///
/// The age has to be strictly greater than the threshold; a file exactly
/// `max_age_hours` old is kept.
pub fn is_older_than(max_age_hours: u64, modified: SystemTime, now: SystemTime) -> bool {
    file_age(modified, now) > hours(max_age_hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::UNIX_EPOCH;

    fn now() -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(1_700_000_000)
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_older_than(5, now() - hours(5), now()));
        assert!(is_older_than(5, now() - hours(5) - Duration::from_nanos(1), now()));
    }

    #[test]
    fn younger_files_are_kept() {
        assert!(!is_older_than(5, now() - hours(1), now()));
        assert!(is_older_than(5, now() - hours(10), now()));
    }

    #[test]
    fn zero_hours_deletes_anything_with_a_positive_age() {
        assert!(!is_older_than(0, now(), now()));
        assert!(is_older_than(0, now() - Duration::from_secs(1), now()));
    }

    #[test]
    fn future_modification_time_counts_as_new() {
        let ahead = now() + hours(3);
        assert_eq!(file_age(ahead, now()), Duration::ZERO);
        assert!(!is_older_than(0, ahead, now()));
    }

    #[test]
    fn huge_thresholds_do_not_overflow() {
        assert!(!is_older_than(u64::MAX, UNIX_EPOCH, now()));
    }
}
