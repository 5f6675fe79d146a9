//! Model evaluation and forecasting.
//!
//! Responsibilities:
//!
//! - score a model in-sample (RMSE against the training targets)
//! - produce the single next-month forecast

pub mod evaluator;
pub mod predictor;

pub use evaluator::*;
pub use predictor::*;
