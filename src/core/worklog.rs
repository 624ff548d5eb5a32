//! Work-log generation: validate the header fields, resolve the sequences,
//! slice the window and render the rows.

use crate::config::Config;
use crate::core::classifier::classify_plan;
use crate::core::interval::IntervalExpr;
use crate::core::slicer::{TimeWindow, slice};
use crate::errors::{AppError, AppResult};
use crate::models::work_log_row::render_rows;
use crate::models::{PlanTask, SequenceId, ServiceMode, WorkLogRow};
use crate::utils::date::parse_ddmmyyyy;
use crate::utils::time::parse_clock;
use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info};

/// Raw header fields as typed by the planner.
#[derive(Debug, Clone, Copy)]
pub struct WorkLogRequest<'a> {
    pub service_order: &'a str,
    pub date: &'a str,
    pub start: &'a str,
    pub end: &'a str,
}

#[derive(Debug, Clone)]
struct ValidHeader {
    service_order: String,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
}

impl WorkLogRequest<'_> {
    /// Fail fast, in field order: service order, date, start, end.
    fn validate(&self) -> AppResult<ValidHeader> {
        let service_order = self.service_order.trim();
        if service_order.is_empty() {
            return Err(AppError::MissingField("service order"));
        }

        let date = parse_ddmmyyyy(self.date).ok_or_else(|| AppError::InvalidFormat {
            field: "date",
            value: self.date.to_string(),
        })?;
        let start = parse_clock(self.start).ok_or_else(|| AppError::InvalidFormat {
            field: "start time",
            value: self.start.to_string(),
        })?;
        let end = parse_clock(self.end).ok_or_else(|| AppError::InvalidFormat {
            field: "end time",
            value: self.end.to_string(),
        })?;

        Ok(ValidHeader {
            service_order: service_order.to_string(),
            date,
            start,
            end,
        })
    }
}

pub struct WorkLogLogic;

impl WorkLogLogic {
    /// Rows for a free-form interval expression (range, list or pasted table).
    pub fn build(
        cfg: &Config,
        req: &WorkLogRequest<'_>,
        interval: &str,
        mode: ServiceMode,
    ) -> AppResult<Vec<WorkLogRow>> {
        let header = req.validate()?;
        debug!(mode = mode.as_str(), "resolving sequences");

        let expr = IntervalExpr::recognize(interval)?;
        debug!(kind = expr.kind(), "interval recognized");

        // Ranges and lists are sized against the real window before expanding.
        if let Some(count) = expr.planned_len()
            && count > 0
        {
            let window = TimeWindow::new(header.start, header.end)?;
            let minutes = window.total_minutes();
            if count as i64 > minutes {
                return Err(AppError::TooShort {
                    minutes,
                    sequences: count,
                });
            }
        }

        let ids = expr.expand(mode, &cfg.rules, &cfg.pending_marker)?;
        Self::slice_header(&header, &ids)
    }

    /// Rows for the tasks of a maintenance plan, split by the plan rules.
    pub fn build_from_plan(
        cfg: &Config,
        req: &WorkLogRequest<'_>,
        tasks: &[PlanTask],
        mode: ServiceMode,
    ) -> AppResult<Vec<WorkLogRow>> {
        let header = req.validate()?;

        let split = classify_plan(tasks, &cfg.rules);
        debug!(
            tire = split.tire_service.len(),
            general = split.general.len(),
            "plan tasks classified"
        );

        let ids = split.select(mode);
        if ids.is_empty() {
            let reason = if mode.is_tire_service() {
                "this service order has no tire-service sequences"
            } else {
                "the plan has no general-service sequences"
            };
            return Err(AppError::EmptyResult(reason.into()));
        }

        Self::slice_header(&header, ids)
    }

    fn slice_header(header: &ValidHeader, ids: &[SequenceId]) -> AppResult<Vec<WorkLogRow>> {
        let window = TimeWindow::new(header.start, header.end)?;
        let rows = slice(ids, &window, &header.service_order, header.date)?;

        info!(
            service_order = header.service_order.as_str(),
            rows = rows.len(),
            minutes = window.total_minutes(),
            "work log generated"
        );
        Ok(rows)
    }
}

/// Generate the paste-ready work log for one service order.
///
/// `mode` is `"tire_service"` to keep only tire-service rows of a pasted
/// table; any other flag, `""` included, selects the general rows. Uses the
/// built-in rule table.
pub fn generate_work_log(
    service_order: &str,
    interval: &str,
    date: &str,
    start: &str,
    end: &str,
    mode: &str,
) -> AppResult<String> {
    let mode = ServiceMode::from_flag(mode);
    let req = WorkLogRequest {
        service_order,
        date,
        start,
        end,
    };
    let rows = WorkLogLogic::build(&Config::default(), &req, interval, mode)?;
    Ok(render_rows(&rows))
}

/// Same as `generate_work_log`, from maintenance-plan tasks.
pub fn generate_auto_work_log(
    service_order: &str,
    tasks: &[PlanTask],
    date: &str,
    start: &str,
    end: &str,
    mode: ServiceMode,
) -> AppResult<String> {
    let req = WorkLogRequest {
        service_order,
        date,
        start,
        end,
    };
    let rows = WorkLogLogic::build_from_plan(&Config::default(), &req, tasks, mode)?;
    Ok(render_rows(&rows))
}
