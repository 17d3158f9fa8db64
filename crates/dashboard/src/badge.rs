//! Display metadata for signals, resolved at the rendering boundary.

use core_types::Signal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Destructive,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeIcon {
    TrendingUp,
    TrendingDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalBadge {
    pub variant: BadgeVariant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<BadgeIcon>,
}

pub fn badge_for(signal: Signal) -> SignalBadge {
    match signal {
        Signal::Buy => SignalBadge {
            variant: BadgeVariant::Default,
            icon: Some(BadgeIcon::TrendingUp),
        },
        Signal::Sell => SignalBadge {
            variant: BadgeVariant::Destructive,
            icon: Some(BadgeIcon::TrendingDown),
        },
        Signal::Hold => SignalBadge {
            variant: BadgeVariant::Secondary,
            icon: None,
        },
    }
}
