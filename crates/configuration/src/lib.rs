use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{Analytics, Backtest, Config, ConfigOverrides, Logging, Signals};

/// Prefix of environment variables that override file settings,
/// e.g. `STOCKCAST__ANALYTICS__PERIODS_PER_YEAR=365`.
pub const ENV_PREFIX: &str = "STOCKCAST";

/// Loads the application configuration from an optional `config.toml` in the
/// working directory, layered over built-in defaults and under environment
/// variables.
pub fn load_config() -> Result<Config, ConfigError> {
    build(
        config::File::with_name("config").required(false),
        environment(),
    )
}

/// Loads the application configuration from an explicit file, which must exist.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    build(config::File::from(path).required(true), environment())
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn build<S>(file: S, env: config::Environment) -> Result<Config, ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let builder = config::Config::builder()
        .set_default("analytics.periods_per_year", 252)?
        .set_default("signals.difficulty", "intermediate")?
        .set_default("backtest.initial_capital", 10_000.0)?
        .set_default("backtest.strategy", "lstm_signals")?
        .set_default("logging.level", "info")?
        .add_source(file)
        .add_source(env)
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
