//! `fx-forecast` library crate.
//!
//! The binary (`fxp`) is a thin wrapper around this library so that:
//!
//! - the regression core is testable without network access or spawning processes
//! - the data source can be swapped (HTTP client, in-memory fixtures)

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod logging;
pub mod math;
pub mod models;
pub mod report;
