//! Terminal tables for the command output.

use analytics::{PerformanceSummary, TradeSummary};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use core_types::Difficulty;
use dashboard::{ForecastView, format_pct, format_price, format_ratio};

fn table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

fn right(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// One row per forecast period. The threshold column shows how the prediction
/// service itself would label the move at the configured difficulty.
pub fn forecast_table(view: &ForecastView, difficulty: Difficulty) -> Table {
    let mut table = table(vec![
        "Date",
        "Return",
        "Price",
        "Confidence",
        "Signal",
        "Threshold",
    ]);
    for row in &view.rows {
        let threshold = signals::classify_by_threshold(row.predicted_return, difficulty)
            .map_or_else(|_| "-".to_string(), |signal| signal.to_string());
        table.add_row(vec![
            Cell::new(row.timestamp),
            right(format_pct(row.predicted_return)),
            right(format_price(row.predicted_price)),
            right(format_pct(row.confidence)),
            Cell::new(row.signal),
            Cell::new(threshold),
        ]);
    }
    table
}

pub fn performance_table(summary: &PerformanceSummary) -> Table {
    let mut table = table(vec!["Metric", "Value"]);
    let rows = [
        ("Total Return", format_pct(summary.total_return)),
        ("CAGR", format_pct(summary.cagr)),
        ("Sharpe Ratio", format_ratio(summary.sharpe_ratio)),
        ("Max Drawdown", format_pct(summary.max_drawdown)),
        ("Volatility", format_pct(summary.volatility)),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), right(value)]);
    }
    table
}

pub fn trade_table(summary: &TradeSummary) -> Table {
    let mut table = table(vec!["Trades", "Value"]);
    let profit_factor = summary
        .profit_factor
        .map_or_else(|| "n/a".to_string(), format_ratio);
    let rows = [
        ("Total", summary.total_trades.to_string()),
        (
            "Won / Lost",
            format!("{} / {}", summary.winning_trades, summary.losing_trades),
        ),
        ("Win Rate", format_pct(summary.win_rate)),
        ("Average", format_pct(summary.average_trade)),
        ("Best", format_pct(summary.best_trade)),
        ("Worst", format_pct(summary.worst_trade)),
        ("Profit Factor", profit_factor),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), right(value)]);
    }
    table
}
