//! Dashboard main renderer

use super::components::{charts, footer, header, insights, logs, transactions};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Percentage(40),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let widget_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(main_chunks[1]);

    insights::render_insights_panel(f, widget_chunks[0], state);
    charts::render_category_chart(f, widget_chunks[1], state);
    charts::render_monthly_chart(f, widget_chunks[2], state);

    let table_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(main_chunks[2]);

    transactions::render_transactions_table(f, table_chunks[0], state);
    logs::render_logs_panel(f, table_chunks[1], state);
    footer::render_footer(f, main_chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ErrorKind;
    use crate::environment::Environment;
    use crate::error_classifier::LogLevel;
    use crate::events::{Event, Flow, WidgetUpdate};
    use crate::models::{InsightsSummary, SalesSeries, TransactionList};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use crate::logging::LogFilter;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_dashboard_draws_every_widget() {
        let mut state = DashboardState::new(Environment::Local, LogFilter::default(), true);
        state.add_event(Event::loaded(WidgetUpdate::Insights(InsightsSummary {
            total_sales: 456000.0,
            average_age: 41.39,
            male_count: 490,
            female_count: 510,
        })));
        state.add_event(Event::loaded(WidgetUpdate::CategoryChart(
            SalesSeries::new(vec!["Beauty".into()], vec![143515.0]).unwrap(),
        )));
        state.add_event(Event::failed(
            Flow::MonthlyChart,
            ErrorKind::Format,
            "labels and data differ in length".to_string(),
            LogLevel::Error,
        ));
        let list: TransactionList =
            serde_json::from_str(r#"[{"Transaction ID":1,"Customer ID":"CUST001"}]"#).unwrap();
        state.add_event(Event::loaded(WidgetUpdate::Transactions(list)));
        state.update();

        let mut terminal = Terminal::new(TestBackend::new(200, 50)).unwrap();
        terminal.draw(|f| render_dashboard(f, &state)).unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("SALES DASHBOARD"));
        assert!(text.contains("Total Sales: $456000"));
        assert!(text.contains("SALES BY PRODUCT CATEGORY"));
        assert!(text.contains("unavailable (FormatError)"));
        assert!(text.contains("CUST001"));
        assert!(text.contains("LOADED - 4 of 4 widgets"));
    }

    #[test]
    fn test_dashboard_draws_on_tiny_terminal() {
        let state = DashboardState::new(Environment::Local, LogFilter::default(), false);
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal.draw(|f| render_dashboard(f, &state)).unwrap();
    }
}
