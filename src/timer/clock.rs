use chrono::{DateTime, Utc};

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now() -> i64 {
    to_millis(Utc::now())
}

/// Rounds to the nearest millisecond rather than truncating.
fn to_millis(at: DateTime<Utc>) -> i64 {
    let nanos = i64::from(at.timestamp_subsec_nanos());
    at.timestamp() * 1000 + (nanos + 500_000) / 1_000_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_millis_rounds() {
        let at = DateTime::from_timestamp(1_621_641_600, 499_999).unwrap();
        assert_eq!(to_millis(at), 1_621_641_600_000);

        let at = DateTime::from_timestamp(1_621_641_600, 500_000).unwrap();
        assert_eq!(to_millis(at), 1_621_641_600_001);

        let at = DateTime::from_timestamp(1_621_641_600, 999_600_000).unwrap();
        assert_eq!(to_millis(at), 1_621_641_601_000);
    }

    #[test]
    fn test_now_moves_forward() {
        let first = now();
        let second = now();
        assert!(first > 0);
        assert!(second >= first);
    }
}
