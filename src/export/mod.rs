//! Export module
//!
//! Names, writes, and copies generated documents.

pub mod clipboard;

pub use clipboard::{copy_with, ClipboardProvider, SystemClipboard};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{ExportDocument, ReportContext};

/// File name for an export: `{username}-{repos}-{from}.md`
pub fn file_name(context: &ReportContext) -> String {
    let repos = if context.repositories.is_empty() {
        "all".to_string()
    } else {
        context
            .repositories
            .iter()
            .map(|r| sanitize(r))
            .collect::<Vec<_>>()
            .join("_")
    };

    format!(
        "{}-{}-{}.md",
        sanitize(&context.username),
        repos,
        context.range.from().format("%Y-%m-%d")
    )
}

fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Write the document into `output_dir`, creating it if needed
pub fn write_document(document: &ExportDocument, output_dir: &Path) -> Result<PathBuf> {
    if !output_dir.exists() {
        fs::create_dir_all(output_dir)?;
    }

    let path = output_dir.join(&document.file_name);
    fs::write(&path, &document.content)?;
    Ok(path)
}

/// Most recently modified Markdown export in `output_dir`
pub fn find_latest(output_dir: &Path) -> Result<Option<PathBuf>> {
    if !output_dir.exists() {
        return Ok(None);
    }

    let mut latest: Option<(std::time::SystemTime, PathBuf)> = None;
    for entry in fs::read_dir(output_dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let modified = fs::metadata(&path)?.modified()?;
        if latest.as_ref().is_none_or(|(time, _)| modified > *time) {
            latest = Some((modified, path));
        }
    }

    Ok(latest.map(|(_, path)| path))
}
