use std::fs;
use std::path::PathBuf;

use crate::config;
use crate::display;
use crate::error::{DigestError, Result};
use crate::export;

/// Display the most recent export
pub fn latest(config_path: Option<PathBuf>) -> Result<()> {
    let config = config::resolve(config_path)?;

    let latest_file = export::find_latest(&config.export.output_dir)?.ok_or_else(|| {
        DigestError::Config(format!(
            "No exports found in {}. Run 'gitdigest gen' first.",
            config.export.output_dir.display()
        ))
    })?;

    let content = fs::read_to_string(&latest_file)?;
    display::print_markdown(&content);

    Ok(())
}
