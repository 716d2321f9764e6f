//! Output formatters for ercheck reports.
//!
//! Provides two output modes:
//! - **Human** (default): Sectioned check/cross report for terminal users
//! - **JSON** (`--json`): Machine-readable structured output

pub mod human;
pub mod json;

use ercheck_engine::types::Report;

pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> String;
}
