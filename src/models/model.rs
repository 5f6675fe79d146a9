//! Regression models.
//!
//! The evaluator and predictor only need two primitive operations:
//! - fit coefficients from a training set
//! - predict y for a query x given those coefficients
//!
//! `RegressionModel` captures that pair so other model families can be added
//! without touching the callers. `SimpleLinearRegression` is ordinary least squares
//! on a single feature.

use crate::domain::{Coefficients, Sample};
use crate::error::{ForecastError, Result};
use crate::math::{covariance, mean, variance};

pub trait RegressionModel {
    /// Parameters produced by `fit` and consumed by `predict`.
    type Params: Clone + std::fmt::Debug;

    fn fit(&self, train: &[Sample]) -> Result<Self::Params>;

    fn predict(&self, params: &Self::Params, x: f64) -> f64;

    /// Fit on `train`, then predict every value in `test`, preserving order.
    fn fit_predict(&self, train: &[Sample], test: &[f64]) -> Result<(Self::Params, Vec<f64>)> {
        let params = self.fit(train)?;
        let predictions = test.iter().map(|&x| self.predict(&params, x)).collect();
        Ok((params, predictions))
    }
}

/// Closed-form least squares line through `(x, y)` samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleLinearRegression;

impl RegressionModel for SimpleLinearRegression {
    type Params = Coefficients;

    fn fit(&self, train: &[Sample]) -> Result<Coefficients> {
        if train.len() < 2 {
            return Err(ForecastError::DegenerateInput(format!(
                "need at least 2 samples, got {}",
                train.len()
            )));
        }

        let x: Vec<f64> = train.iter().map(|s| s.x).collect();
        let y: Vec<f64> = train.iter().map(|s| s.y).collect();
        let (x_mean, y_mean) = (mean(&x), mean(&y));

        let var_x = variance(&x, x_mean);
        if var_x == 0.0 || !var_x.is_finite() {
            return Err(ForecastError::DegenerateInput(
                "x values have zero variance".to_string(),
            ));
        }

        let slope = covariance(&x, x_mean, &y, y_mean) / var_x;
        let intercept = y_mean - slope * x_mean;
        Ok(Coefficients { intercept, slope })
    }

    fn predict(&self, params: &Coefficients, x: f64) -> f64 {
        params.intercept + params.slope * x
    }
}
