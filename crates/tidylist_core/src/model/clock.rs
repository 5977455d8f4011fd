//! Timestamp helpers shared by the service layer.
//!
//! # Invariants
//! - `next_after(prev)` always returns a value strictly greater than `prev`,
//!   so `updated_at` advances even when two mutations land inside the same
//!   millisecond.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time as Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

/// Next mutation timestamp after `prev`.
pub fn next_after(prev: i64) -> i64 {
    now_epoch_ms().max(prev + 1)
}

#[cfg(test)]
mod tests {
    use super::{next_after, now_epoch_ms};

    #[test]
    fn now_is_past_2020() {
        assert!(now_epoch_ms() > 1_577_836_800_000);
    }

    #[test]
    fn next_after_is_strictly_greater() {
        let now = now_epoch_ms();
        assert!(next_after(now) > now);

        let far_future = now + 60_000;
        assert_eq!(next_after(far_future), far_future + 1);
    }
}
