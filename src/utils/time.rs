//! Duration utilities: parsing "<n>h<n>m" labels and formatting minutes.

use regex::Regex;
use std::sync::LazyLock;

static HOURS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)h").expect("valid hours pattern"));
static MINUTES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)m").expect("valid minutes pattern"));

fn capture_number(re: &Regex, s: &str) -> i64 {
    re.captures(s)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .unwrap_or(0)
}

/// Total minutes of a duration label such as `"2h30m"`, `"1h"` or `"45m"`.
///
/// Lenient: empty or absent input, and tokens without digits in front of
/// `h`/`m`, count as zero. Tokens too long for an `i64` also count as zero,
/// and the total saturates at `i64::MAX`.
pub fn parse_duration_minutes(duration: Option<&str>) -> i64 {
    let Some(s) = duration.map(str::trim).filter(|s| !s.is_empty()) else {
        return 0;
    };

    let hours = capture_number(&HOURS_RE, s);
    let minutes = capture_number(&MINUTES_RE, s);
    hours.saturating_mul(60).saturating_add(minutes)
}

/// Formats minutes as `HHh MMm`.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.unsigned_abs();
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}
