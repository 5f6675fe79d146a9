//! Next-month forecast.
//!
//! The forecast is the model's fitted value at the last observed row: the model is
//! trained on every row, asked for a prediction at every row, and the prediction
//! for the most recent month is reported. It is an in-sample value, not a value
//! extrapolated past the last observed x.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::domain::{CurrencyPair, Dataset, Forecast, MIN_DATA_POINTS};
use crate::error::{ForecastError, Result};
use crate::models::RegressionModel;

/// Predicted value for the last row of `dataset`, fitted on all rows.
pub fn predict_next<M: RegressionModel>(dataset: &Dataset, model: &M) -> Result<f64> {
    Ok(predict_last(dataset, model)?.1)
}

/// `predict_next` plus the pair and the calendar date the value is reported for.
pub fn forecast<M: RegressionModel>(
    pair: &CurrencyPair,
    dataset: &Dataset,
    model: &M,
    target_date: NaiveDate,
) -> Result<Forecast<M::Params>> {
    let (params, value) = predict_last(dataset, model)?;
    info!(%pair, %target_date, value, "forecast ready");
    Ok(Forecast {
        pair: pair.clone(),
        target_date,
        value,
        params,
    })
}

fn predict_last<M: RegressionModel>(dataset: &Dataset, model: &M) -> Result<(M::Params, f64)> {
    dataset.require_min(MIN_DATA_POINTS)?;

    let test_set = dataset.inputs();
    let (params, predictions) = model.fit_predict(dataset.samples(), &test_set)?;
    debug!(?params, ?predictions, "fitted values for every month");

    let last = predictions.last().copied().ok_or(ForecastError::EmptyDataset)?;
    Ok((params, last))
}
