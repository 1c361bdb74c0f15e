//! Time helpers — business-timezone conversion
//!
//! Date → timestamp conversion happens at the API handler layer; the
//! repository layer only sees `i64` Unix millis.

use chrono::NaiveDate;
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {date}")))
}

/// Date + hour/min/sec → Unix millis in the business timezone.
///
/// DST gap fallback: when the local time does not exist, fall back to UTC.
fn date_hms_to_millis(date: NaiveDate, hour: u32, min: u32, sec: u32, tz: Tz) -> i64 {
    let naive = date.and_hms_opt(hour, min, sec).unwrap();
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Start of day (00:00:00) → Unix millis in the business timezone
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    date_hms_to_millis(date, 0, 0, 0, tz)
}

/// End of day → next day 00:00:00 Unix millis; callers use `< end`
/// (exclusive) semantics
pub fn day_end_millis(date: NaiveDate, tz: Tz) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    date_hms_to_millis(next_day, 0, 0, 0, tz)
}

/// Convert an optional YYYY-MM-DD filter into a `[start, end)` millis
/// range
pub fn day_range(date: Option<&str>, tz: Tz) -> AppResult<Option<(i64, i64)>> {
    match date {
        Some(date) => {
            let parsed = parse_date(date)?;
            Ok(Some((
                day_start_millis(parsed, tz),
                day_end_millis(parsed, tz),
            )))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates_only() {
        assert!(parse_date("2025-06-02").is_ok());
        assert!(parse_date("02/06/2025").is_err());
        assert!(parse_date("2025-13-40").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn utc_day_bounds_cover_exactly_24_hours() {
        let date = parse_date("2025-06-02").unwrap();
        let start = day_start_millis(date, chrono_tz::UTC);
        let end = day_end_millis(date, chrono_tz::UTC);
        assert_eq!(start, 1_748_822_400_000);
        assert_eq!(end - start, 24 * 3_600_000);
    }

    #[test]
    fn business_timezone_shifts_the_bounds() {
        let date = parse_date("2025-06-02").unwrap();
        let utc_start = day_start_millis(date, chrono_tz::UTC);
        let sp_start = day_start_millis(date, chrono_tz::America::Sao_Paulo);
        // São Paulo midnight is 03:00 UTC
        assert_eq!(sp_start - utc_start, 3 * 3_600_000);
    }

    #[test]
    fn optional_range_passes_none_through() {
        assert_eq!(day_range(None, chrono_tz::UTC).unwrap(), None);
        let range = day_range(Some("2025-06-02"), chrono_tz::UTC)
            .unwrap()
            .unwrap();
        assert_eq!(range.1 - range.0, 24 * 3_600_000);
    }
}
