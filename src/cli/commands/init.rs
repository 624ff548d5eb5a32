use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command: write the default configuration, including the
/// full rule table, so planners can tune it.
pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    info("Initializing rWorklogs…");

    Config::default().save(path, force)?;

    success(format!("Config file: {}", path.display()));
    Ok(())
}
