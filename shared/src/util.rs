use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Parse the calendar day out of a server timestamp, in local time.
///
/// Accepts RFC 3339 (`2024-05-01T10:00:00Z`), SQL style
/// (`2024-05-01 10:00:00`) and bare dates (`2024-05-01`).
pub fn parse_fecha(raw: &str) -> Option<NaiveDate> {
    parse_fecha_en(raw, &Local)
}

/// Like [`parse_fecha`], with offset timestamps converted to `tz` first.
///
/// Timestamps without an offset are taken as already local.
pub fn parse_fecha_en<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz).date_naive());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn lima() -> FixedOffset {
        FixedOffset::west_opt(5 * 3600).unwrap()
    }

    #[test]
    fn test_parse_fecha_formats() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(parse_fecha_en("2024-05-01T10:00:00Z", &lima()), Some(day));
        assert_eq!(parse_fecha_en("2024-05-01T10:00:00-05:00", &lima()), Some(day));
        assert_eq!(parse_fecha("2024-05-01 23:59:59"), Some(day));
        assert_eq!(parse_fecha("2024-05-01T08:15:00.000000"), Some(day));
        assert_eq!(parse_fecha(" 2024-05-01 "), Some(day));
        assert_eq!(parse_fecha("01/05/2024"), None);
    }

    #[test]
    fn test_utc_timestamp_uses_local_day() {
        // 02:00 UTC is still the previous evening in Lima
        assert_eq!(
            parse_fecha_en("2024-03-04T02:00:00Z", &lima()),
            NaiveDate::from_ymd_opt(2024, 3, 3)
        );
        assert_eq!(
            parse_fecha_en("2024-03-04T02:00:00Z", &chrono::Utc),
            NaiveDate::from_ymd_opt(2024, 3, 4)
        );
        // naive timestamps are not shifted
        assert_eq!(
            parse_fecha_en("2024-03-04 02:00:00", &lima()),
            NaiveDate::from_ymd_opt(2024, 3, 4)
        );
    }
}
