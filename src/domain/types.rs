//! Shared domain types.
//!
//! Everything here is a plain value type: each fit/evaluate/predict call builds and
//! consumes its own copies, so no state is shared between calls.

use std::fmt;

use chrono::NaiveDate;

use crate::error::{ForecastError, Result};

/// Minimum number of monthly samples required to produce a forecast.
pub const MIN_DATA_POINTS: usize = 12;

/// A single observation: month index `x` (1–12) and rate ratio `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Chronologically ordered samples. The last row is the most recent month.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Build a dataset from `(x, y)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self::new(pairs.iter().map(|&(x, y)| Sample::new(x, y)).collect())
    }

    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Input-only copy of every row (target column dropped).
    pub fn inputs(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.x).collect()
    }

    /// Target column, in row order.
    pub fn targets(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.y).collect()
    }

    /// Fail with `InsufficientData` unless at least `required` rows are present.
    pub fn require_min(&self, required: usize) -> Result<()> {
        if self.len() < required {
            return Err(ForecastError::InsufficientData {
                required,
                actual: self.len(),
            });
        }
        Ok(())
    }
}

/// Fitted line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub intercept: f64,
    pub slope: f64,
}

/// Source and target currency codes (uppercased, otherwise unvalidated).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    pub from: String,
    pub to: String,
}

impl CurrencyPair {
    pub fn new(from: impl AsRef<str>, to: impl AsRef<str>) -> Self {
        Self {
            from: from.as_ref().trim().to_ascii_uppercase(),
            to: to.as_ref().trim().to_ascii_uppercase(),
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}

/// Per-row evaluation output.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<P = Coefficients> {
    pub params: P,
    pub predicted: Vec<f64>,
    pub actual: Vec<f64>,
    pub rmse: f64,
    /// RMSE of always predicting the mean target (reference point for `rmse`).
    pub baseline_rmse: f64,
}

/// A forecast value and the date it is reported for.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast<P = Coefficients> {
    pub pair: CurrencyPair,
    pub target_date: NaiveDate,
    pub value: f64,
    pub params: P,
}

/// A full run's configuration, derived from CLI flags plus defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastConfig {
    pub pair: CurrencyPair,
    /// Reference year whose months make up the dataset.
    pub year: i32,
    /// Day of month on which each rate is sampled.
    pub day: u32,
    pub timeout_secs: u64,
}

impl ForecastConfig {
    /// Observation dates: the configured day of every month of the reference year.
    pub fn observation_dates(&self) -> Result<Vec<NaiveDate>> {
        (1..=12)
            .map(|month| {
                NaiveDate::from_ymd_opt(self.year, month, self.day).ok_or_else(|| {
                    ForecastError::DataSource(format!(
                        "Invalid observation date {}-{month:02}-{:02}.",
                        self.year, self.day
                    ))
                })
            })
            .collect()
    }

    /// The date a forecast is reported for: the sampling day of January next year.
    pub fn target_date(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year + 1, 1, self.day).ok_or_else(|| {
            ForecastError::DataSource(format!(
                "Invalid forecast date {}-01-{:02}.",
                self.year + 1,
                self.day
            ))
        })
    }
}
