//! Export module for the finance tracker
//!
//! Writes rendered reports to disk.

pub mod report;

pub use report::export_report;
