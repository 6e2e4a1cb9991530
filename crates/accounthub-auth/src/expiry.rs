//! Pure time-window expiry policy.
//!
//! A timestamped artifact is "within its window" while
//! `now - issued_at < window`. The auth engine instantiates this twice:
//! the OTP re-issue cooldown (60 s by default) and the OTP validity
//! window (180 s by default).

use chrono::{DateTime, Duration, Utc};

/// Whether `issued_at` is still inside `window` as of `now`.
///
/// Timestamps from the future (clock skew between app and store) count as
/// within the window.
pub fn within_window(issued_at: DateTime<Utc>, window: Duration, now: DateTime<Utc>) -> bool {
    now - issued_at < window
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_window() {
        let now = Utc::now();
        let issued = now - Duration::seconds(30);
        assert!(within_window(issued, Duration::seconds(60), now));
    }

    #[test]
    fn test_outside_window() {
        let now = Utc::now();
        let issued = now - Duration::seconds(200);
        assert!(!within_window(issued, Duration::seconds(180), now));
    }

    #[test]
    fn test_boundary_is_exclusive() {
        // Exactly `window` old is expired: the check is strict `<`.
        let now = Utc::now();
        let issued = now - Duration::seconds(60);
        assert!(!within_window(issued, Duration::seconds(60), now));
    }

    #[test]
    fn test_future_timestamp_counts_as_fresh() {
        let now = Utc::now();
        let issued = now + Duration::seconds(5);
        assert!(within_window(issued, Duration::seconds(60), now));
    }
}
