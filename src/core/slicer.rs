//! Even time-slicing of a window across a list of sequences.

use crate::errors::{AppError, AppResult};
use crate::models::{SequenceId, WorkLogRow};
use crate::utils::date::format_ddmmyyyy;
use crate::utils::formatting::decimal_hours;
use crate::utils::time::{add_minutes, format_hhmm, format_minutes, minutes_between};
use chrono::{NaiveDate, NaiveTime};

/// Wall-clock window of one working session. `end >= start` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> AppResult<Self> {
        if end < start {
            return Err(AppError::InvalidWindow {
                start: format_hhmm(start),
                end: format_hhmm(end),
            });
        }
        Ok(Self { start, end })
    }

    pub fn total_minutes(&self) -> i64 {
        minutes_between(self.start, self.end)
    }
}

/// Minute offsets `(start, end)` of each slot, relative to the window start.
///
/// Slot `i` spans `floor(total * i / n) .. floor(total * (i + 1) / n)`, so
/// offsets never decrease and the last slot ends exactly at `total`.
pub fn slot_offsets(total_minutes: i64, slots: usize) -> AppResult<Vec<(i64, i64)>> {
    if total_minutes < 0 {
        return Err(AppError::InvalidWindow {
            start: format_minutes(0),
            end: format_minutes(total_minutes),
        });
    }
    if slots == 0 {
        return Err(AppError::EmptyResult(
            "the sequence interval cannot be empty".into(),
        ));
    }

    let n = slots as i64;
    if total_minutes < n {
        return Err(AppError::TooShort {
            minutes: total_minutes,
            sequences: slots,
        });
    }

    Ok((0..n)
        .map(|i| (total_minutes * i / n, total_minutes * (i + 1) / n))
        .collect())
}

/// One row per identifier, in order, all on `date`.
pub fn slice(
    ids: &[SequenceId],
    window: &TimeWindow,
    service_order: &str,
    date: NaiveDate,
) -> AppResult<Vec<WorkLogRow>> {
    let offsets = slot_offsets(window.total_minutes(), ids.len())?;
    let day = format_ddmmyyyy(date);

    Ok(ids
        .iter()
        .zip(offsets)
        .map(|(id, (from, to))| WorkLogRow {
            service_order: service_order.to_string(),
            sequence_id: *id,
            start_date: day.clone(),
            start_time: format_hhmm(add_minutes(window.start, from)),
            end_date: day.clone(),
            end_time: format_hhmm(add_minutes(window.start, to)),
            duration_hours: decimal_hours(to - from),
        })
        .collect())
}
