//! Data source contract and the shared month-by-month collection loop.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::data::fixer::RatesResponse;
use crate::domain::{CurrencyPair, Dataset, Sample};
use crate::error::Result;

/// Anything that can produce the monthly ratio dataset for a currency pair.
///
/// Implementations return a short or empty dataset when fetching breaks down part
/// way; they only fail outright when a response is readable but unusable.
pub trait DataSource {
    fn load_dataset(&self, pair: &CurrencyPair) -> Result<Dataset>;
}

/// Fetch one response per date, in order, and turn each into a sample.
///
/// A failed fetch (transport, status, decoding, API-reported error) ends the loop
/// and the samples collected so far are returned. A decoded response that lacks
/// one of the requested currencies is an error.
pub fn collect_samples<F>(pair: &CurrencyPair, dates: &[NaiveDate], mut fetch: F) -> Result<Dataset>
where
    F: FnMut(NaiveDate) -> std::result::Result<RatesResponse, String>,
{
    let mut dataset = Dataset::default();

    for &date in dates {
        let response = match fetch(date).and_then(RatesResponse::into_success) {
            Ok(response) => response,
            Err(reason) => {
                warn!(
                    %pair,
                    %date,
                    %reason,
                    collected = dataset.len(),
                    "rate fetch failed; returning partial dataset"
                );
                break;
            }
        };

        let ratio = response.ratio(pair, date)?;
        debug!(%pair, %date, ratio, "fetched monthly ratio");
        dataset.push(Sample::new(f64::from(date.month()), ratio));
    }

    Ok(dataset)
}

/// A fixed, in-memory dataset. Useful for tests and offline runs.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    dataset: Dataset,
}

impl StaticSource {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

impl DataSource for StaticSource {
    fn load_dataset(&self, _pair: &CurrencyPair) -> Result<Dataset> {
        Ok(self.dataset.clone())
    }
}
