//! Maintenance-plan tasks from CSV (`no_seq`, `de_tarefa`, `de_sub_sist`
//! headers; any other column is ignored).
//!
//! Plan exports come as UTF-8 or Latin-1; files that are not valid UTF-8 are
//! read as Latin-1.

use crate::errors::{AppError, AppResult};
use crate::models::PlanTask;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

pub fn read_plan<R: Read>(reader: R, delimiter: u8) -> AppResult<Vec<PlanTask>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let mut tasks = Vec::new();
    for record in rdr.deserialize() {
        let task: PlanTask = record?;
        tasks.push(task);
    }

    Ok(tasks)
}

pub fn load_plan(path: &Path, delimiter: u8) -> AppResult<Vec<PlanTask>> {
    let bytes = std::fs::read(path).map_err(|e| {
        AppError::from(io::Error::other(format!(
            "cannot open plan file {}: {e}",
            path.display()
        )))
    })?;
    read_plan(decode_plan(bytes).as_bytes(), delimiter)
}

/// UTF-8 as-is; anything else is Latin-1, where every byte is its own code point.
pub fn decode_plan(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            debug!("plan file is not UTF-8, reading it as Latin-1");
            err.into_bytes().into_iter().map(char::from).collect()
        }
    }
}
