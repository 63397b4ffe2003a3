//! Dashboard transaction table component

use super::super::state::DashboardState;
use super::super::widgets::{TRANSACTION_HEADER, UNAVAILABLE, WidgetStatus};
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

/// Render the transaction table, starting at the current scroll offset.
pub fn render_transactions_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    let table = state.transactions();
    let total = table.rows().len();

    let title = match table.status() {
        WidgetStatus::Loading => "TRANSACTIONS - Loading...".to_string(),
        WidgetStatus::Unavailable(kind) => {
            format!("TRANSACTIONS ({} rows) - {} ({})", total, UNAVAILABLE, kind)
        }
        WidgetStatus::Ready(_) if total == 0 => "TRANSACTIONS (0 rows)".to_string(),
        WidgetStatus::Ready(_) => format!(
            "TRANSACTIONS ({}-{} of {})",
            state.transactions_offset() + 1,
            // Borders and header take three lines
            (state.transactions_offset() + area.height.saturating_sub(3) as usize).min(total),
            total
        ),
    };
    let border_color = match table.status() {
        WidgetStatus::Unavailable(_) => Color::Red,
        _ => Color::Cyan,
    };

    let header = Row::new(TRANSACTION_HEADER.iter().map(|name| Cell::from(*name))).style(
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows = table
        .rows()
        .iter()
        .skip(state.transactions_offset())
        .take(area.height as usize)
        .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.as_str()))));

    let widths = vec![Constraint::Fill(1); table.column_count()];
    let widget = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        );
    f.render_widget(widget, area);
}
