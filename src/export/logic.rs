// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::models::WorkLogRow;
use crate::utils::path::ensure_parent_dir;
use std::path::Path;
use tracing::debug;

/// High-level export of generated work-log rows.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `rows` to `path` as `format`. An existing file is only replaced
    /// with `force` or after confirmation.
    pub fn export(
        rows: &[WorkLogRow],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        if rows.is_empty() {
            return Err(AppError::Export("no rows to export".into()));
        }

        debug!(format = format.as_str(), rows = rows.len(), path = %path.display(), "exporting work log");
        ensure_writable(path, force)?;
        ensure_parent_dir(path)?;

        match format {
            ExportFormat::Csv => export_csv(rows, path),
            ExportFormat::Json => export_json(rows, path),
            ExportFormat::Xlsx => export_xlsx(rows, path),
        }
    }
}
