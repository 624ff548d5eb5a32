//! Time utilities: parsing HH:MM, minute arithmetic, formatting.

use chrono::{Duration, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

static CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2}):?(\d{2})$").expect("valid clock pattern"));

/// Parse `HH:MM` or `HHMM` into a wall-clock time.
pub fn parse_clock(t: &str) -> Option<NaiveTime> {
    let caps = CLOCK_RE.captures(t.trim())?;
    let hours = caps.get(1)?.as_str().parse().ok()?;
    let minutes = caps.get(2)?.as_str().parse().ok()?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

/// Add minutes, carrying into hours. Past midnight the clock wraps.
pub fn add_minutes(t: NaiveTime, minutes: i64) -> NaiveTime {
    t.overflowing_add_signed(Duration::minutes(minutes)).0
}

pub fn format_hhmm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
