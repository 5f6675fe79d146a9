//! Regression model implementations.
//!
//! Models are small, stateless values so that evaluation and prediction code can
//! stay generic over them.

pub mod model;

pub use model::*;
