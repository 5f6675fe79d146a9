//! Reporting utilities: forecast sentence and evaluation summary.

pub mod format;

pub use format::*;
