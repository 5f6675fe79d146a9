//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - monthly observations (`Sample`, `Dataset`)
//! - fit outputs (`Coefficients`, `Evaluation`, `Forecast`)
//! - run configuration (`CurrencyPair`, `ForecastConfig`)

pub mod types;

pub use types::*;
