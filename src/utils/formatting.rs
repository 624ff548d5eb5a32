//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Minutes as decimal hours, two places, comma separator: 12 → "0,20".
pub fn decimal_hours(minutes: i64) -> String {
    format!("{:.2}", minutes as f64 / 60.0).replace('.', ",")
}
