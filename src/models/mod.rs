//! Data models module
//!
//! Defines the domain models for commits, repositories, detail levels,
//! date ranges, and generated reports.

pub mod detail;
pub mod report;
pub mod source;

pub use detail::DetailLevel;
pub use report::{DateRange, ExportDocument, ReportContext, ReportStats};
pub use source::{Commit, CommitStats, Repository};
