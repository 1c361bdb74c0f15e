use std::sync::OnceLock;
use std::sync::atomic::{AtomicU16, Ordering};

/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2025-01-01 UTC (~69 years)
///   - 12 bits: rolling sequence seeded randomly per process, so ids
///     generated within the same millisecond stay distinct
pub fn snowflake_id() -> i64 {
    // Custom epoch: 2025-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_735_689_600_000;

    static SEQUENCE: OnceLock<AtomicU16> = OnceLock::new();
    let seq = SEQUENCE.get_or_init(|| {
        use rand::Rng;
        AtomicU16::new(rand::thread_rng().gen_range(0..0x1000))
    });

    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let low = (seq.fetch_add(1, Ordering::Relaxed) & 0x0FFF) as i64; // 12 bits
    (ts << 12) | low
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn snowflake_ids_are_positive_and_unique() {
        let ids: Vec<i64> = (0..512).map(|_| snowflake_id()).collect();
        assert!(ids.iter().all(|id| *id > 0));
        let unique: HashSet<i64> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
    }
}
