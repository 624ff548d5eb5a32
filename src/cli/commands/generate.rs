use crate::cli::commands::emit_rows;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::worklog::{WorkLogLogic, WorkLogRequest};
use crate::errors::AppResult;
use crate::utils::path::resolve_path;
use std::fs;
use std::io;

/// Generate work-log rows from an interval expression.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        order,
        interval,
        from_file,
        date,
        start,
        end,
        mode,
        output,
    } = cmd
    {
        //
        // 1. Interval text: argument, file or stdin
        //
        let interval_text = match (interval, from_file) {
            (Some(expr), _) => expr.clone(),
            (None, Some(file)) => fs::read_to_string(resolve_path(file))?,
            (None, None) => io::read_to_string(io::stdin())?,
        };

        //
        // 2. Build rows
        //
        let req = WorkLogRequest {
            service_order: order,
            date,
            start,
            end,
        };
        let mode = mode.unwrap_or(cfg.default_mode);
        let rows = WorkLogLogic::build(cfg, &req, &interval_text, mode)?;

        //
        // 3. Print or export
        //
        emit_rows(&rows, output)?;
    }

    Ok(())
}
