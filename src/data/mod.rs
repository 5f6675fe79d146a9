//! Rate data: the `DataSource` contract and the HTTP client that fulfils it.

pub mod fixer;
pub mod source;

pub use fixer::{FixerClient, RatesResponse};
pub use source::{DataSource, StaticSource, collect_samples};
