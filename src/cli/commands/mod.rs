pub mod auto;
pub mod classify;
pub mod config;
pub mod generate;
pub mod init;

use crate::cli::parser::OutputArgs;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::WorkLogRow;
use crate::models::work_log_row::render_rows;
use crate::ui::messages::success;
use crate::utils::path::resolve_path;
use std::io::{self, Write};

/// Print rows to stdout, or export them when `--export` was given.
pub(crate) fn emit_rows(rows: &[WorkLogRow], output: &OutputArgs) -> AppResult<()> {
    if let (Some(format), Some(file)) = (output.export, output.file.as_ref()) {
        let path = resolve_path(file);
        return ExportLogic::export(rows, format, &path, output.force);
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(render_rows(rows).as_bytes())?;
    stdout.flush()?;

    success(format!("{} work-log rows generated", rows.len()));
    Ok(())
}
