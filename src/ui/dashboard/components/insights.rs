//! Dashboard insights component
//!
//! Renders the headline sales figures

use super::super::state::DashboardState;
use super::super::widgets::{UNAVAILABLE, WidgetStatus};
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the insights text block.
pub fn render_insights_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines: Vec<Line> = match state.insights() {
        WidgetStatus::Ready(lines) => lines
            .iter()
            .map(|line| {
                // "Label: value" with the value highlighted
                match line.split_once(": ") {
                    Some((label, value)) => Line::from(vec![
                        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
                        Span::styled(
                            value.to_string(),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    None => Line::from(line.clone()),
                }
            })
            .collect(),
        WidgetStatus::Loading => vec![Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        ))],
        WidgetStatus::Unavailable(kind) => vec![Line::from(Span::styled(
            format!("{} ({})", UNAVAILABLE, kind),
            Style::default().fg(Color::Red),
        ))],
    };

    let insights_block = Block::default()
        .title("INSIGHTS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let insights_paragraph = Paragraph::new(lines)
        .block(insights_block)
        .wrap(Wrap { trim: true });
    f.render_widget(insights_paragraph, area);
}
