//! Mathematical utilities: means, sums of deviations, error metrics.

pub mod stats;

pub use stats::*;
