//! Plain-text rendering of the dashboard for headless mode

use super::state::DashboardState;
use super::widgets::{
    CATEGORY_DATASET_LABEL, ChartConfig, MONTHLY_DATASET_LABEL, TRANSACTION_HEADER, UNAVAILABLE,
    WidgetStatus,
};
use crate::models::format_number;

const CELL_SEPARATOR: &str = " | ";

/// Render every widget as text, one section per widget.
pub fn render_plain(state: &DashboardState) -> String {
    let mut out = Vec::new();

    out.push("== INSIGHTS ==".to_string());
    match state.insights() {
        WidgetStatus::Ready(lines) => out.extend(lines.iter().cloned()),
        other => out.push(status_text(other)),
    }

    let charts = [
        (CATEGORY_DATASET_LABEL, state.category_chart()),
        (MONTHLY_DATASET_LABEL, state.monthly_chart()),
    ];
    for (title, chart) in charts {
        match chart {
            WidgetStatus::Ready(config) => out.extend(chart_lines(config)),
            other => {
                out.push(format!("== {} ==", title));
                out.push(status_text(other));
            }
        }
    }

    let table = state.transactions();
    out.push(format!("== TRANSACTIONS ({} rows) ==", table.rows().len()));
    out.push(TRANSACTION_HEADER.join(CELL_SEPARATOR));
    out.extend(table.rows().iter().map(|row| row.join(CELL_SEPARATOR)));
    if !matches!(table.status(), WidgetStatus::Ready(_)) {
        out.push(status_text(table.status()));
    }

    out.join("\n")
}

fn chart_lines(config: &ChartConfig) -> Vec<String> {
    let axis = if config.y_begin_at_zero {
        ", y from 0"
    } else {
        ""
    };
    let mut lines = vec![format!("== {} ({}{}) ==", config.title(), config.kind, axis)];
    lines.extend(
        config
            .datasets
            .iter()
            .map(|dataset| format!("style: {}", dataset.style)),
    );
    lines.extend(
        config
            .points()
            .into_iter()
            .map(|(label, value)| format!("{}: {}", label, format_number(value))),
    );
    lines
}

fn status_text<T>(status: &WidgetStatus<T>) -> String {
    match status {
        WidgetStatus::Loading => "loading...".to_string(),
        WidgetStatus::Unavailable(kind) => format!("{} ({})", UNAVAILABLE, kind),
        WidgetStatus::Ready(_) => String::new(),
    }
}
