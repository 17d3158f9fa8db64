//! # Dashboard Views
//!
//! Assembles the computation crates into the values a view renders: the
//! forecast table, the actual-versus-predicted chart series and the summary
//! statistics. Signal badges and percentage formatting are resolved here and
//! nowhere else.

pub mod badge;
pub mod error;
pub mod format;
pub mod view;

pub use badge::{BadgeIcon, BadgeVariant, SignalBadge, badge_for};
pub use error::DashboardError;
pub use format::{format_pct, format_price, format_ratio, to_percent};
pub use view::{ForecastRow, ForecastView};
