//! Terminal display module
//!
//! Markdown previews with automatic colour detection.

mod formatter;
mod terminal;

pub use formatter::{print_markdown, repositories_table};
