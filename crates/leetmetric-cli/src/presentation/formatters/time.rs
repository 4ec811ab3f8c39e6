use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

/// RFC 3339 with second precision, UTC
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Wall-clock time of day, e.g. `14:03:27`
pub fn format_clock<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(format_timestamp(&ts), "2025-03-09T07:05:01Z");
        assert_eq!(format_clock(&ts), "07:05:01");
    }
}
