use super::formatting::NOT_SPECIFIED;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Lenient calendar-date parser for the API's ISO-ish strings.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// Day/month/year rendering (`dd/mm/yyyy`), or the placeholder when the
/// input is missing or not a date.
pub fn format_date(date: Option<&str>) -> String {
    date.filter(|s| !s.trim().is_empty())
        .and_then(parse_date)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_dates_day_first() {
        assert_eq!(format_date(Some("2024-03-05")), "05/03/2024");
        assert_eq!(format_date(Some("2024-03-05T10:30:00.000Z")), "05/03/2024");
        assert_eq!(format_date(Some("2024-12-31T08:00:00")), "31/12/2024");
        assert_eq!(format_date(Some("2024-12-31 08:00:00")), "31/12/2024");
    }

    #[test]
    fn missing_or_invalid_dates_use_placeholder() {
        assert_eq!(format_date(None), NOT_SPECIFIED);
        assert_eq!(format_date(Some("")), NOT_SPECIFIED);
        assert_eq!(format_date(Some("demain")), NOT_SPECIFIED);
        assert_eq!(format_date(Some("2024-02-30")), NOT_SPECIFIED);
    }
}
