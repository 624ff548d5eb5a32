use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2})/?(\d{2})/?(\d{4})$").expect("valid date pattern")
});

/// Parse `DD/MM/YYYY`; either slash may be omitted (`01012025`).
pub fn parse_ddmmyyyy(s: &str) -> Option<NaiveDate> {
    let caps = DATE_RE.captures(s.trim())?;
    let day = caps.get(1)?.as_str().parse().ok()?;
    let month = caps.get(2)?.as_str().parse().ok()?;
    let year = caps.get(3)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Always with slashes, whatever the input looked like.
pub fn format_ddmmyyyy(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}
