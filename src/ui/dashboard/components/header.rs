//! Dashboard header component
//!
//! Renders the title and flow progress gauge

use super::super::state::DashboardState;
use crate::events::Flow;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and how many flows have landed.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!(
        "SALES DASHBOARD v{}  -  {}",
        version,
        state.environment.api_url()
    );

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let total = Flow::ALL.len();
    let done = state.completed_flows();
    let (progress_text, gauge_color, progress_percent) = if done >= total {
        (
            format!("LOADED - {} of {} widgets", done, total),
            Color::LightGreen,
            100,
        )
    } else {
        // Animated while waiting so a stalled request is visible
        let dots = ".".repeat(state.tick / 5 % 4);
        (
            format!("LOADING - {} of {} widgets{}", done, total, dots),
            Color::LightBlue,
            (done * 100 / total) as u16,
        )
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
