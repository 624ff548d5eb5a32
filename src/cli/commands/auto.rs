use crate::cli::commands::emit_rows;
use crate::cli::parser::Commands;
use crate::config::{Config, delimiter_byte};
use crate::core::plan::load_plan;
use crate::core::worklog::{WorkLogLogic, WorkLogRequest};
use crate::errors::AppResult;
use crate::utils::path::resolve_path;

/// Generate work-log rows from the tasks of a maintenance plan.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Auto {
        order,
        plan,
        delimiter,
        date,
        start,
        end,
        mode,
        output,
    } = cmd
    {
        let delimiter = match delimiter {
            Some(d) => delimiter_byte(d)?,
            None => cfg.plan_delimiter_byte()?,
        };
        let tasks = load_plan(&resolve_path(plan), delimiter)?;

        let req = WorkLogRequest {
            service_order: order,
            date,
            start,
            end,
        };
        let mode = mode.unwrap_or(cfg.default_mode);
        let rows = WorkLogLogic::build_from_plan(cfg, &req, &tasks, mode)?;

        emit_rows(&rows, output)?;
    }

    Ok(())
}
