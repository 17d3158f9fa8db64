use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A discrete trading recommendation attached to a forecasted period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    /// The direction of exposure implied by the signal: long, short or flat.
    pub fn direction(&self) -> f64 {
        match self {
            Signal::Buy => 1.0,
            Signal::Sell => -1.0,
            Signal::Hold => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Buy => "Buy",
            Signal::Sell => "Sell",
            Signal::Hold => "Hold",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Signal {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(Signal::Buy),
            "sell" => Ok(Signal::Sell),
            "hold" => Ok(Signal::Hold),
            other => Err(CoreError::InvalidInput(
                "signal".to_string(),
                format!("unknown signal '{}'", other),
            )),
        }
    }
}

/// Model difficulty requested from the prediction service.
///
/// Each level carries the return threshold the service uses to label its
/// own forecasts: a forecast must move more than the threshold in either
/// direction to be anything other than `Hold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    #[default]
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn return_threshold(&self) -> f64 {
        match self {
            Difficulty::Basic => 0.005,
            Difficulty::Intermediate => 0.002,
            Difficulty::Advanced => 0.001,
        }
    }
}

/// Identifies which backtest strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyId {
    BuyAndHold,
    #[default]
    LstmSignals,
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyId::BuyAndHold => f.write_str("buy_and_hold"),
            StrategyId::LstmSignals => f.write_str("lstm_signals"),
        }
    }
}

impl FromStr for StrategyId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "buy_and_hold" => Ok(StrategyId::BuyAndHold),
            "lstm_signals" => Ok(StrategyId::LstmSignals),
            other => Err(CoreError::InvalidInput(
                "strategy".to_string(),
                format!("unknown strategy '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_parses_case_insensitively() {
        assert_eq!("Buy".parse::<Signal>().unwrap(), Signal::Buy);
        assert_eq!(" sell ".parse::<Signal>().unwrap(), Signal::Sell);
        assert_eq!("HOLD".parse::<Signal>().unwrap(), Signal::Hold);
        assert!("strong buy".parse::<Signal>().is_err());
    }

    #[test]
    fn test_signal_serializes_as_label() {
        let json = serde_json::to_string(&Signal::Sell).unwrap();
        assert_eq!(json, "\"Sell\"");
        assert_eq!(Signal::Buy.to_string(), "Buy");
    }

    #[test]
    fn test_difficulty_thresholds() {
        assert_eq!(Difficulty::default(), Difficulty::Intermediate);
        assert_eq!(Difficulty::Basic.return_threshold(), 0.005);
        assert_eq!(Difficulty::Advanced.return_threshold(), 0.001);

        let parsed: Difficulty = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(parsed, Difficulty::Advanced);
    }

    #[test]
    fn test_strategy_id_wire_names() {
        let parsed: StrategyId = serde_json::from_str("\"buy_and_hold\"").unwrap();
        assert_eq!(parsed, StrategyId::BuyAndHold);
        assert_eq!(StrategyId::LstmSignals.to_string(), "lstm_signals");
        assert_eq!("buy-and-hold".parse::<StrategyId>().unwrap(), StrategyId::BuyAndHold);
        assert!("momentum".parse::<StrategyId>().is_err());
    }
}
