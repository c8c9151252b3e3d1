use chrono::{DateTime, NaiveDateTime, Utc};

/// Wire format for `last_update`. No timezone offset; both ends of the
/// feed treat these as UTC.
pub const FEED_TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_feed_timestamp(at: DateTime<Utc>) -> String {
    at.format(FEED_TS_FORMAT).to_string()
}

/// Parse a feed timestamp back to UTC. Returns `None` for anything that
/// does not match the wire format, which downstream treats as stale.
pub fn parse_feed_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw.trim(), FEED_TS_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Human display for a feed timestamp in the status line: a dash when
/// absent, the raw text when unparsable.
pub fn display_feed_timestamp(raw: Option<&str>) -> String {
    match raw {
        None => "—".to_string(),
        Some(s) => match parse_feed_timestamp(s) {
            Some(ts) => ts.format("%d.%m.%Y %H:%M").to_string(),
            None => s.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_round_trip() {
        let at = Utc.with_ymd_and_hms(2026, 2, 17, 20, 45, 0).unwrap();
        let raw = format_feed_timestamp(at);
        assert_eq!(raw, "2026-02-17 20:45:00");
        assert_eq!(parse_feed_timestamp(&raw), Some(at));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_feed_timestamp("not a date"), None);
        assert_eq!(parse_feed_timestamp("2026-02-17T20:45:00Z"), None);
        assert_eq!(parse_feed_timestamp(""), None);
    }

    #[test]
    fn test_display_fallbacks() {
        assert_eq!(display_feed_timestamp(None), "—");
        assert_eq!(display_feed_timestamp(Some("soon™")), "soon™");
        assert_eq!(
            display_feed_timestamp(Some("2026-02-17 20:45:00")),
            "17.02.2026 20:45"
        );
    }
}
