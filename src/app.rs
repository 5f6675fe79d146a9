//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - initialises logging
//! - fetches the monthly rates
//! - runs the forecast or the evaluation
//! - prints the report

use clap::Parser;
use tracing::debug;

use crate::cli::{Cli, Command, PairArgs, rewrite_args};
use crate::data::FixerClient;
use crate::domain::{CurrencyPair, ForecastConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `fxp` binary.
pub fn run() -> Result<(), AppError> {
    let argv = rewrite_args(std::env::args().collect());
    let cli = Cli::parse_from(argv);
    crate::logging::init(cli.verbose);

    match cli.command {
        Command::Predict(args) => handle_predict(&args),
        Command::Evaluate(args) => handle_evaluate(&args),
    }
}

fn handle_predict(args: &PairArgs) -> Result<(), AppError> {
    let config = forecast_config_from_args(args);
    let source = FixerClient::from_env(&config)?;
    let out = pipeline::run_predict(&config, &source)?;

    println!("{}", crate::report::format_forecast(&out.forecast));
    Ok(())
}

fn handle_evaluate(args: &PairArgs) -> Result<(), AppError> {
    let config = forecast_config_from_args(args);
    let source = FixerClient::from_env(&config)?;
    let out = pipeline::run_evaluate(&config, &source)?;

    print!(
        "{}",
        crate::report::format_evaluation(&config.pair, &out.dataset, &out.evaluation)
    );
    Ok(())
}

pub fn forecast_config_from_args(args: &PairArgs) -> ForecastConfig {
    let config = ForecastConfig {
        pair: CurrencyPair::new(&args.from, &args.to),
        year: args.year,
        day: args.day,
        timeout_secs: args.timeout_secs,
    };
    debug!(?config, "resolved configuration");
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_normalises_currency_codes() {
        let args = PairArgs {
            from: "usd".to_string(),
            to: "Try".to_string(),
            year: 2019,
            day: 1,
            timeout_secs: 3,
        };
        let config = forecast_config_from_args(&args);
        assert_eq!(config.pair, CurrencyPair::new("USD", "TRY"));
        assert_eq!(config.year, 2019);
        assert_eq!(config.day, 1);
        assert_eq!(config.timeout_secs, 3);
    }
}
