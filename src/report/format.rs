//! Formatted terminal output.
//!
//! Formatting lives here so the fitting code stays free of presentation concerns.

use crate::domain::{Coefficients, CurrencyPair, Dataset, Evaluation, Forecast};

/// One-line forecast sentence, e.g.
/// `The predicted currency exchange from USD to TRY for 15/1/2017 is 3.412345`.
pub fn format_forecast(forecast: &Forecast) -> String {
    format!(
        "The predicted currency exchange from {} to {} for {} is {:.6}",
        forecast.pair.from,
        forecast.pair.to,
        forecast.target_date.format("%-d/%-m/%Y"),
        forecast.value
    )
}

/// Evaluation summary: coefficients, per-month table, RMSE against the mean baseline.
pub fn format_evaluation(pair: &CurrencyPair, dataset: &Dataset, eval: &Evaluation) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== fxp - {pair} in-sample evaluation ===\n"));
    out.push_str(&format!("Samples: n={}\n", dataset.len()));
    out.push_str(&format!("Model: {}\n\n", fmt_line(&eval.params)));

    out.push_str(&format!(
        "{:>5} {:>12} {:>12} {:>12}\n",
        "month", "actual", "predicted", "residual"
    ));
    out.push_str(&format!("{:-<5} {:-<12} {:-<12} {:-<12}\n", "", "", "", ""));
    for ((sample, actual), predicted) in dataset
        .samples()
        .iter()
        .zip(&eval.actual)
        .zip(&eval.predicted)
    {
        out.push_str(&format!(
            "{:>5} {:>12.6} {:>12.6} {:>12.6}\n",
            sample.x,
            actual,
            predicted,
            actual - predicted
        ));
    }

    out.push('\n');
    out.push_str(&format!("RMSE: {:.3}\n", eval.rmse));
    out.push_str(&format!("RMSE (mean baseline): {:.3}\n", eval.baseline_rmse));

    out
}

fn fmt_line(c: &Coefficients) -> String {
    let sign = if c.slope < 0.0 { '-' } else { '+' };
    format!("y = {:.6} {sign} {:.6} * month", c.intercept, c.slope.abs())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn forecast_sentence_uses_unpadded_date() {
        let f = Forecast {
            pair: CurrencyPair::new("USD", "TRY"),
            target_date: NaiveDate::from_ymd_opt(2017, 1, 15).unwrap(),
            value: 3.5,
            params: Coefficients {
                intercept: 2.7,
                slope: 0.066,
            },
        };
        assert_eq!(
            format_forecast(&f),
            "The predicted currency exchange from USD to TRY for 15/1/2017 is 3.500000"
        );
    }

    #[test]
    fn evaluation_lists_every_month() {
        let ds = Dataset::from_pairs(&[(1.0, 1.0), (2.0, 2.0)]);
        let eval = Evaluation {
            params: Coefficients {
                intercept: 0.0,
                slope: -1.0,
            },
            predicted: vec![1.0, 2.0],
            actual: vec![1.0, 2.0],
            rmse: 0.0,
            baseline_rmse: 0.5,
        };
        let text = format_evaluation(&CurrencyPair::new("usd", "eur"), &ds, &eval);

        assert!(text.starts_with("=== fxp - USD/EUR in-sample evaluation ===\n"));
        assert!(text.contains("y = 0.000000 - 1.000000 * month"));
        assert!(text.contains("RMSE: 0.000\n"));
        assert!(text.contains("RMSE (mean baseline): 0.500\n"));
        assert_eq!(text.lines().filter(|l| l.trim_start().starts_with(['1', '2'])).count(), 2);
    }
}
