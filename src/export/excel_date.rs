// src/export/excel_date.rs

use crate::utils::date::parse_ddmmyyyy;
use crate::utils::time::parse_clock;
use chrono::{NaiveDate, Timelike};

/// Excel serial of a `DD/MM/YYYY` cell, if it is one.
pub(crate) fn date_serial(s: &str) -> Option<f64> {
    let d = parse_ddmmyyyy(s)?;
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - excel_epoch).num_days() as f64)
}

/// Fraction of a day for an `HH:MM` cell, if it is one.
pub(crate) fn time_serial(s: &str) -> Option<f64> {
    let t = parse_clock(s)?;
    Some(t.num_seconds_from_midnight() as f64 / 86400.0)
}

/// Decimal hours written with a comma ("0,20").
pub(crate) fn decimal_hours_value(s: &str) -> Option<f64> {
    s.replace(',', ".").parse().ok()
}
