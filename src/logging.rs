//! Tracing setup for the `fxp` binary.

use tracing_subscriber::EnvFilter;

const ENV_FILTER: &str = "FX_FORECAST_LOG";

/// Initialises tracing to stderr.
///
/// `FX_FORECAST_LOG` takes precedence; otherwise the level follows `-v` count.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(ENV_FILTER)
        .unwrap_or_else(|_| EnvFilter::new(format!("fx_forecast={}", level_for(verbosity))));

    // Ignore repeat initialisation.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }
}
