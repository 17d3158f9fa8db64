use core_types::{Difficulty, StrategyId};
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::ConfigError;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub analytics: Analytics,
    pub signals: Signals,
    pub backtest: Backtest,
    pub logging: Logging,
}

/// Parameters for the performance metrics engine.
#[derive(Debug, Clone, Deserialize)]
pub struct Analytics {
    /// Number of periods in a year, used to annualize CAGR, volatility and Sharpe.
    /// 252 for daily trading bars.
    pub periods_per_year: u32,
}

/// Parameters for labelling forecasts.
#[derive(Debug, Clone, Deserialize)]
pub struct Signals {
    /// Difficulty whose return threshold is used when a forecast is labelled
    /// by magnitude alone.
    pub difficulty: Difficulty,
}

/// Contains parameters for a single backtest run.
#[derive(Debug, Clone, Deserialize)]
pub struct Backtest {
    /// The initial starting capital for the simulation.
    pub initial_capital: f64,
    /// The strategy to run when none is given on the command line.
    pub strategy: StrategyId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Logging {
    /// Default filter directive, overridden by `RUST_LOG` when set.
    pub level: String,
    /// When present, logs are also written to a daily rolling file in this directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Config {
    /// Checks invariants that the type system cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analytics.periods_per_year == 0 {
            return Err(ConfigError::ValidationError(
                "analytics.periods_per_year must be greater than zero".to_string(),
            ));
        }
        if !(self.backtest.initial_capital.is_finite() && self.backtest.initial_capital > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "backtest.initial_capital must be positive, got {}",
                self.backtest.initial_capital
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Command-line overrides that take precedence over every other source.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct ConfigOverrides {
    /// Path to a TOML configuration file (defaults to `config.toml` if present).
    #[cfg_attr(feature = "clap", arg(long, global = true))]
    pub config: Option<PathBuf>,

    /// Periods per year used for annualization (e.g. 252 for daily bars).
    #[cfg_attr(feature = "clap", arg(long, global = true))]
    pub periods_per_year: Option<u32>,

    /// Log filter directive, e.g. "debug" or "forecast=trace".
    #[cfg_attr(feature = "clap", arg(long, global = true))]
    pub log_level: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(periods) = self.periods_per_year {
            config.analytics.periods_per_year = periods;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        config
    }
}
