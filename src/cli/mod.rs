//! Command-line parsing for the exchange-rate forecaster.
//!
//! Argument parsing and command dispatch are kept apart from the regression code.

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "fxp", version, about = "Monthly exchange-rate trend forecaster")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a year of monthly rates and print the forecast for next January.
    Predict(PairArgs),
    /// Fetch a year of monthly rates and print the in-sample fit and its RMSE.
    Evaluate(PairArgs),
}

/// Options shared by every subcommand.
#[derive(Debug, Args, Clone)]
pub struct PairArgs {
    /// Source currency code (e.g. USD).
    pub from: String,

    /// Target currency code (e.g. TRY).
    pub to: String,

    /// Reference year whose months are fetched.
    #[arg(long, default_value_t = 2016)]
    pub year: i32,

    /// Day of month on which each rate is sampled.
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..=31))]
    pub day: u32,

    /// Per-request HTTP timeout in seconds.
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}

/// Rewrite argv so `fxp FROM TO` means `fxp predict FROM TO`.
///
/// Rules:
/// - `fxp`                        -> unchanged (clap prints usage)
/// - `fxp --help/--version/-h`    -> unchanged
/// - `fxp predict|evaluate ...`   -> unchanged
/// - `fxp USD TRY ...`            -> `fxp predict USD TRY ...`
pub fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(pos) = argv
        .iter()
        .skip(1)
        .position(|arg| !is_verbosity_flag(arg))
        .map(|p| p + 1)
    else {
        return argv;
    };

    let arg = argv[pos].as_str();
    let is_top_level = matches!(
        arg,
        "-h" | "--help" | "-V" | "--version" | "help" | "predict" | "evaluate"
    );
    if is_top_level || arg.starts_with('-') {
        return argv;
    }

    argv.insert(pos, "predict".to_string());
    argv
}

fn is_verbosity_flag(arg: &str) -> bool {
    arg == "--verbose" || (arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_pair_defaults_to_predict() {
        assert_eq!(
            rewrite_args(argv(&["fxp", "USD", "TRY"])),
            argv(&["fxp", "predict", "USD", "TRY"])
        );
        assert_eq!(
            rewrite_args(argv(&["fxp", "-vv", "USD", "TRY"])),
            argv(&["fxp", "-vv", "predict", "USD", "TRY"])
        );
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        let cases: [&[&str]; 5] = [
            &["fxp"],
            &["fxp", "--help"],
            &["fxp", "-V"],
            &["fxp", "evaluate", "USD", "TRY"],
            &["fxp", "predict", "USD", "TRY", "--year", "2017"],
        ];
        for args in cases {
            assert_eq!(rewrite_args(argv(args)), argv(args));
        }
    }

    #[test]
    fn parses_predict_with_defaults() {
        let cli = Cli::try_parse_from(rewrite_args(argv(&["fxp", "usd", "try"]))).unwrap();
        let Command::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert_eq!(args.from, "usd");
        assert_eq!(args.to, "try");
        assert_eq!(args.year, 2016);
        assert_eq!(args.day, 15);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn missing_currency_is_a_usage_error() {
        assert!(Cli::try_parse_from(rewrite_args(argv(&["fxp", "USD"]))).is_err());
        assert!(Cli::try_parse_from(argv(&["fxp"])).is_err());
    }
}
