use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// A `created_at` value that could not be parsed as a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp: {0:?}")]
pub struct InvalidTimestamp(pub String);

/// An entry timestamp resolved to UTC wall-clock time plus its calendar day.
///
/// `raw` keeps the store's own representation; the API reports dates in that
/// form, never re-serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedEntry<'a> {
    pub raw: &'a str,
    pub at: NaiveDateTime,
    pub day: NaiveDate,
}

/// Parse a stored timestamp into UTC wall-clock time.
///
/// Accepted forms, tried in order: RFC 3339 (any offset, converted to UTC),
/// SQLite `CURRENT_TIMESTAMP` ("YYYY-MM-DD HH:MM:SS", optional fraction),
/// the same with a "T" separator, and a bare "YYYY-MM-DD" date (taken as
/// midnight). Offset-free input is defined to already be UTC; that single
/// policy is what keeps stored stamps and the reference clock truncating to
/// the same calendar day.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, InvalidTimestamp> {
    let value = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_utc());
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    Err(InvalidTimestamp(raw.to_string()))
}

/// Truncate a stored timestamp to its UTC calendar day.
pub fn calendar_day(raw: &str) -> Result<NaiveDate, InvalidTimestamp> {
    parse_timestamp(raw).map(|dt| dt.date())
}

/// Normalize a stored timestamp, keeping the raw form alongside the parse.
pub fn normalize(raw: &str) -> Result<NormalizedEntry<'_>, InvalidTimestamp> {
    let at = parse_timestamp(raw)?;
    Ok(NormalizedEntry {
        raw,
        at,
        day: at.date(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_sqlite_current_timestamp_format() {
        assert_eq!(calendar_day("2026-08-04 10:15:00").unwrap(), day("2026-08-04"));
    }

    #[test]
    fn test_fractional_seconds() {
        assert_eq!(
            calendar_day("2026-08-04 23:59:59.123").unwrap(),
            day("2026-08-04")
        );
    }

    #[test]
    fn test_rfc3339_utc() {
        assert_eq!(
            calendar_day("2026-08-04T00:30:00Z").unwrap(),
            day("2026-08-04")
        );
    }

    #[test]
    fn test_rfc3339_offset_shifts_day_boundary() {
        // 01:30 at +09:00 is 16:30 the previous day in UTC
        assert_eq!(
            calendar_day("2026-08-04T01:30:00+09:00").unwrap(),
            day("2026-08-03")
        );
    }

    #[test]
    fn test_t_separated_without_offset_is_utc() {
        assert_eq!(
            parse_timestamp("2026-08-04T10:15:00").unwrap(),
            day("2026-08-04").and_hms_opt(10, 15, 0).unwrap()
        );
    }

    #[test]
    fn test_bare_date() {
        assert_eq!(
            parse_timestamp("2026-08-04").unwrap(),
            day("2026-08-04").and_time(NaiveTime::MIN)
        );
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(calendar_day(" 2026-08-04 10:15:00 ").unwrap(), day("2026-08-04"));
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert_eq!(
            calendar_day("not a date"),
            Err(InvalidTimestamp("not a date".to_string()))
        );
    }

    #[test]
    fn test_empty_is_invalid() {
        assert!(calendar_day("").is_err());
    }

    #[test]
    fn test_normalize_keeps_raw_form() {
        let normalized = normalize("2026-08-04 10:15:00").unwrap();
        assert_eq!(normalized.raw, "2026-08-04 10:15:00");
        assert_eq!(normalized.day, day("2026-08-04"));
    }
}
