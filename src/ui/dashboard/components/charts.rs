//! Dashboard chart components
//!
//! Draws the category bar chart and the monthly line chart

use super::super::state::DashboardState;
use super::super::utils::{rgba_to_color, truncate};
use super::super::widgets::{
    CATEGORY_DATASET_LABEL, ChartConfig, MONTHLY_DATASET_LABEL, UNAVAILABLE, WidgetStatus,
};
use crate::models::format_number;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset as ChartDataset,
    GraphType, Paragraph,
};

/// Width of one bar in cells.
const BAR_WIDTH: u16 = 9;

fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title.to_uppercase())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Placeholder for a chart that is loading or unavailable.
fn render_chart_status<T>(f: &mut Frame, area: Rect, title: &str, status: &WidgetStatus<T>) {
    let (text, color) = match status {
        WidgetStatus::Unavailable(kind) => (format!("{} ({})", UNAVAILABLE, kind), Color::Red),
        _ => ("Loading...".to_string(), Color::DarkGray),
    };
    let placeholder = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(chart_block(title));
    f.render_widget(placeholder, area);
}

/// Render the sales-by-category bar chart.
pub fn render_category_chart(f: &mut Frame, area: Rect, state: &DashboardState) {
    let config = match state.category_chart() {
        WidgetStatus::Ready(config) => config,
        status => return render_chart_status(f, area, CATEGORY_DATASET_LABEL, status),
    };

    let style = &config.datasets[0].style;
    let bar_color = rgba_to_color(style.border_color);
    let bars: Vec<Bar> = config
        .points()
        .into_iter()
        .map(|(label, value)| {
            Bar::default()
                // Bar heights are whole cells; negative sales clamp to the zero baseline
                .value(value.max(0.0).round() as u64)
                .text_value(format_number(value))
                .label(Line::from(truncate(label, BAR_WIDTH as usize)))
                .style(Style::default().fg(bar_color))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(bar_color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let [_, max] = config.y_bounds();
    let chart = BarChart::default()
        .block(chart_block(config.title()))
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(1)
        .max(max.ceil() as u64);
    f.render_widget(chart, area);
}

/// Render the sales-by-month line chart.
pub fn render_monthly_chart(f: &mut Frame, area: Rect, state: &DashboardState) {
    let config = match state.monthly_chart() {
        WidgetStatus::Ready(config) => config,
        status => return render_chart_status(f, area, MONTHLY_DATASET_LABEL, status),
    };

    let points = line_points(config);
    let line_color = rgba_to_color(config.datasets[0].style.border_color);
    let dataset = ChartDataset::default()
        .name(config.title().to_string())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(line_color))
        .data(&points);

    let [y_min, y_max] = config.y_bounds();
    let x_max = config.labels.len().saturating_sub(1).max(1) as f64;
    let x_labels: Vec<Span> = match (config.labels.first(), config.labels.last()) {
        (Some(first), Some(last)) if config.labels.len() > 1 => {
            vec![Span::raw(first.clone()), Span::raw(last.clone())]
        }
        (Some(only), _) => vec![Span::raw(only.clone())],
        _ => Vec::new(),
    };

    let chart = Chart::new(vec![dataset])
        .block(chart_block(config.title()))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::raw(format_number(y_min)),
                    Span::raw(format_number(y_max.round())),
                ]),
        );
    f.render_widget(chart, area);
}

/// `(index, value)` points of the first dataset; X is the label position.
pub fn line_points(config: &ChartConfig) -> Vec<(f64, f64)> {
    config
        .points()
        .into_iter()
        .enumerate()
        .map(|(i, (_, value))| (i as f64, value))
        .collect()
}
