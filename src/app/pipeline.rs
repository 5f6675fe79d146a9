//! Shared fetch-then-model workflow used by both `predict` and `evaluate`.
//!
//! DataSource -> dataset -> (forecast | evaluation)
//!
//! The commands then only differ in what they print.

use crate::data::DataSource;
use crate::domain::{Dataset, Evaluation, Forecast, ForecastConfig};
use crate::error::Result;
use crate::fit::{evaluate_detailed, forecast};
use crate::models::SimpleLinearRegression;

/// Computed outputs of a `fxp predict` run.
#[derive(Debug, Clone)]
pub struct PredictOutput {
    pub dataset: Dataset,
    pub forecast: Forecast,
}

/// Computed outputs of a `fxp evaluate` run.
#[derive(Debug, Clone)]
pub struct EvaluateOutput {
    pub dataset: Dataset,
    pub evaluation: Evaluation,
}

/// Load the dataset and forecast the value reported for next January.
pub fn run_predict<S: DataSource>(config: &ForecastConfig, source: &S) -> Result<PredictOutput> {
    let target_date = config.target_date()?;
    let dataset = source.load_dataset(&config.pair)?;
    let forecast = forecast(&config.pair, &dataset, &SimpleLinearRegression, target_date)?;
    Ok(PredictOutput { dataset, forecast })
}

/// Load the dataset and score the model in-sample.
pub fn run_evaluate<S: DataSource>(config: &ForecastConfig, source: &S) -> Result<EvaluateOutput> {
    let dataset = source.load_dataset(&config.pair)?;
    let evaluation = evaluate_detailed(&dataset, &SimpleLinearRegression)?;
    Ok(EvaluateOutput { dataset, evaluation })
}
