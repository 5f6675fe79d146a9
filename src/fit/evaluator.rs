//! In-sample evaluation of a regression model.
//!
//! The model is fitted on the whole dataset and then asked to reproduce every
//! target from its input alone; the RMSE of those reproductions is the score.

use tracing::{debug, info};

use crate::domain::{Dataset, Evaluation};
use crate::error::{ForecastError, Result};
use crate::math::{mean, rmse_metric};
use crate::models::RegressionModel;

/// Score `model` on `dataset` and return the RMSE.
pub fn evaluate<M: RegressionModel>(dataset: &Dataset, model: &M) -> Result<f64> {
    Ok(evaluate_detailed(dataset, model)?.rmse)
}

/// Score `model` on `dataset`, keeping the predicted sequence and a mean baseline.
pub fn evaluate_detailed<M: RegressionModel>(
    dataset: &Dataset,
    model: &M,
) -> Result<Evaluation<M::Params>> {
    if dataset.is_empty() {
        return Err(ForecastError::EmptyDataset);
    }

    let test_set = dataset.inputs();
    let (params, predicted) = model.fit_predict(dataset.samples(), &test_set)?;
    debug!(?params, ?predicted, "fitted in-sample predictions");

    let actual = dataset.targets();
    let rmse = rmse_metric(&actual, &predicted).ok_or(ForecastError::EmptyDataset)?;
    let baseline = vec![mean(&actual); actual.len()];
    let baseline_rmse = rmse_metric(&actual, &baseline).ok_or(ForecastError::EmptyDataset)?;
    info!(n = actual.len(), rmse, baseline_rmse, "evaluated model");

    Ok(Evaluation {
        params,
        predicted,
        actual,
        rmse,
        baseline_rmse,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SimpleLinearRegression;

    #[test]
    fn empty_dataset_is_an_error_not_nan() {
        let err = evaluate(&Dataset::default(), &SimpleLinearRegression).unwrap_err();
        assert_eq!(err, ForecastError::EmptyDataset);
    }

    #[test]
    fn single_row_is_degenerate() {
        let ds = Dataset::from_pairs(&[(1.0, 1.0)]);
        assert!(matches!(
            evaluate(&ds, &SimpleLinearRegression),
            Err(ForecastError::DegenerateInput(_))
        ));
    }

    #[test]
    fn perfect_line_scores_zero() {
        let ds = Dataset::from_pairs(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]);
        let rmse = evaluate(&ds, &SimpleLinearRegression).unwrap();
        assert!(rmse < 1e-12);
    }

    #[test]
    fn detailed_evaluation_keeps_row_order() {
        let ds = Dataset::from_pairs(&[(1.0, 1.0), (2.0, 3.0), (3.0, 2.0), (4.0, 4.0)]);
        let eval = evaluate_detailed(&ds, &SimpleLinearRegression).unwrap();

        assert_eq!(eval.actual, vec![1.0, 3.0, 2.0, 4.0]);
        assert_eq!(eval.predicted.len(), 4);
        // y = 0.5 + 0.8x
        assert!((eval.params.intercept - 0.5).abs() < 1e-12);
        assert!((eval.params.slope - 0.8).abs() < 1e-12);
        for (i, p) in eval.predicted.iter().enumerate() {
            let x = (i + 1) as f64;
            assert!((p - (0.5 + 0.8 * x)).abs() < 1e-12);
        }
        // Residuals -0.3, 0.9, -0.9, 0.3 -> mean square 0.45.
        assert!((eval.rmse - 0.45f64.sqrt()).abs() < 1e-12);
        assert!(eval.rmse <= eval.baseline_rmse);
    }
}
