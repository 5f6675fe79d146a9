//! Fixer-style historical rates API integration.
//!
//! One request per observation date:
//!
//! ```text
//! GET {base_url}/{YYYY-MM-DD}?symbols=FROM,TO[&access_key=KEY]
//! ```
//!
//! Rates in the response are quoted against the response's `base` currency, so the
//! ratio `rate(TO) / rate(FROM)` is independent of which base the API picked.

use std::collections::HashMap;
use std::time::Duration;

use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::info;

use crate::data::source::{DataSource, collect_samples};
use crate::domain::{CurrencyPair, Dataset, ForecastConfig};
use crate::error::{AppError, ForecastError, Result};

const DEFAULT_BASE_URL: &str = "http://data.fixer.io/api";
const ENV_BASE_URL: &str = "FIXER_BASE_URL";
const ENV_API_KEY: &str = "FIXER_API_KEY";

/// Decoded body of a historical rates request.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesResponse {
    pub success: Option<bool>,
    pub base: Option<String>,
    pub date: Option<String>,
    #[serde(default)]
    pub rates: HashMap<String, f64>,
    pub error: Option<ApiError>,
}

/// Error object some deployments return alongside `"success": false`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub code: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub info: Option<String>,
}

impl RatesResponse {
    /// Reject responses the API itself flagged as failed.
    pub fn into_success(self) -> std::result::Result<Self, String> {
        if let Some(err) = &self.error {
            return Err(format!(
                "API error {}: {}",
                err.code.map(|c| c.to_string()).unwrap_or_else(|| "?".to_string()),
                err.info.as_deref().or(err.kind.as_deref()).unwrap_or("unknown")
            ));
        }
        if self.success == Some(false) {
            return Err("API reported an unsuccessful request".to_string());
        }
        Ok(self)
    }

    /// Rate for `code`; the base currency is implicitly `1.0`.
    pub fn rate(&self, code: &str) -> Option<f64> {
        if let Some(rate) = self.rates.get(code) {
            return Some(*rate);
        }
        match self.base.as_deref() {
            Some(base) if base.eq_ignore_ascii_case(code) => Some(1.0),
            _ => None,
        }
    }

    /// `rate(to) / rate(from)`, failing when either code is absent or unusable.
    pub fn ratio(&self, pair: &CurrencyPair, date: NaiveDate) -> Result<f64> {
        let lookup = |code: &str| {
            self.rate(code).ok_or_else(|| {
                ForecastError::DataSource(format!("Missing rate for {code} on {date}."))
            })
        };
        let from = lookup(&pair.from)?;
        let to = lookup(&pair.to)?;

        let ratio = to / from;
        if !(ratio.is_finite() && ratio > 0.0) {
            return Err(ForecastError::DataSource(format!(
                "Invalid {pair} ratio on {date}: {to} / {from}."
            )));
        }
        Ok(ratio)
    }
}

pub struct FixerClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    dates: Vec<NaiveDate>,
}

impl FixerClient {
    /// Build a client for `config`, reading endpoint settings from the environment (.env).
    pub fn from_env(config: &ForecastConfig) -> std::result::Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let base_url = std::env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = std::env::var(ENV_API_KEY).ok().filter(|k| !k.trim().is_empty());
        Self::new(config, base_url, api_key)
    }

    pub fn new(
        config: &ForecastConfig,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> std::result::Result<Self, AppError> {
        let dates = config
            .observation_dates()
            .map_err(|e| AppError::usage(e.to_string()))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::usage(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            dates,
        })
    }

    fn fetch_day(&self, pair: &CurrencyPair, date: NaiveDate) -> std::result::Result<RatesResponse, String> {
        let symbols = format!("{},{}", pair.from, pair.to);
        let mut req = self
            .client
            .get(format!("{}/{}", self.base_url, date.format("%Y-%m-%d")))
            .query(&[("symbols", symbols.as_str())]);

        if let Some(key) = &self.api_key {
            req = req.query(&[("access_key", key.as_str())]);
        }

        let resp = req.send().map_err(|e| format!("request failed: {e}"))?;

        if !resp.status().is_success() {
            return Err(format!("request failed with status {}", resp.status()));
        }

        resp.json()
            .map_err(|e| format!("failed to parse response: {e}"))
    }
}

impl DataSource for FixerClient {
    fn load_dataset(&self, pair: &CurrencyPair) -> Result<Dataset> {
        info!(%pair, months = self.dates.len(), base_url = %self.base_url, "fetching monthly rates");
        let dataset = collect_samples(pair, &self.dates, |date| self.fetch_day(pair, date))?;
        info!(%pair, samples = dataset.len(), "fetched dataset");
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 3, 15).unwrap()
    }

    fn parse(json: &str) -> RatesResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn decodes_legacy_response() {
        let resp = parse(r#"{"base":"EUR","date":"2016-03-15","rates":{"TRY":3.2,"USD":1.1}}"#);
        assert_eq!(resp.date.as_deref(), Some("2016-03-15"));

        let ratio = resp.ratio(&CurrencyPair::new("USD", "TRY"), date()).unwrap();
        assert!((ratio - 3.2 / 1.1).abs() < 1e-12);
    }

    #[test]
    fn base_currency_counts_as_one() {
        let resp = parse(r#"{"success":true,"base":"EUR","rates":{"USD":1.25}}"#);
        let ratio = resp.ratio(&CurrencyPair::new("EUR", "USD"), date()).unwrap();
        assert!((ratio - 1.25).abs() < 1e-12);
        let inverse = resp.ratio(&CurrencyPair::new("USD", "EUR"), date()).unwrap();
        assert!((inverse - 0.8).abs() < 1e-12);
    }

    #[test]
    fn missing_code_names_the_currency() {
        let resp = parse(r#"{"base":"EUR","rates":{"USD":1.1}}"#);
        let err = resp.ratio(&CurrencyPair::new("USD", "TRY"), date()).unwrap_err();
        assert_eq!(
            err,
            ForecastError::DataSource("Missing rate for TRY on 2016-03-15.".to_string())
        );
    }

    #[test]
    fn zero_rate_is_rejected() {
        let resp = parse(r#"{"base":"EUR","rates":{"USD":0.0,"TRY":3.0}}"#);
        assert!(resp.ratio(&CurrencyPair::new("USD", "TRY"), date()).is_err());
    }

    #[test]
    fn api_error_is_reported() {
        let resp = parse(
            r#"{"success":false,"error":{"code":101,"type":"missing_access_key","info":"No API Key was specified."}}"#,
        );
        assert_eq!(
            resp.into_success().unwrap_err(),
            "API error 101: No API Key was specified."
        );
    }

    #[test]
    fn client_rejects_invalid_sampling_day() {
        let config = ForecastConfig {
            pair: CurrencyPair::new("USD", "TRY"),
            year: 2016,
            day: 31,
            timeout_secs: 5,
        };
        let err = FixerClient::new(&config, DEFAULT_BASE_URL, None).err().unwrap();
        assert_eq!(err.exit_code(), 2);
    }
}
