//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{splash_duration, ui_poll_interval};
use crate::environment::Environment;
use crate::events::Event as FlowEvent;
use crate::logging::LogFilter;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::mpsc;

/// Rows moved by PageUp/PageDown.
const PAGE_ROWS: usize = 10;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub log_filter: LogFilter,
}

impl UIConfig {
    pub fn new(with_background_color: bool, log_filter: LogFilter) -> Self {
        Self {
            with_background_color,
            log_filter,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The four dashboard widgets.
    Dashboard,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Widget state. Lives from the start so flows finishing during the
    /// splash screen are not lost.
    state: DashboardState,

    /// Receives events from the flow tasks.
    event_receiver: mpsc::Receiver<FlowEvent>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<FlowEvent>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            state: DashboardState::new(
                environment,
                ui_config.log_filter,
                ui_config.with_background_color,
            ),
            event_receiver,
        }
    }

    /// Queue all events the flows have delivered so far.
    fn drain_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.add_event(event);
        }
    }

    /// Returns true when the key asks to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if matches!(code, KeyCode::Esc | KeyCode::Char('q')) {
            return true;
        }
        match self.current_screen {
            // Any other key skips the splash screen
            Screen::Splash => self.current_screen = Screen::Dashboard,
            Screen::Dashboard => match code {
                KeyCode::Down | KeyCode::Char('j') => self.state.scroll_transactions_down(1),
                KeyCode::Up | KeyCode::Char('k') => self.state.scroll_transactions_up(1),
                KeyCode::PageDown => self.state.scroll_transactions_down(PAGE_ROWS),
                KeyCode::PageUp => self.state.scroll_transactions_up(PAGE_ROWS),
                _ => {}
            },
        }
        false
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    loop {
        app.drain_events();
        app.state.update();

        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration() {
            app.current_screen = Screen::Dashboard;
        }
        terminal.draw(|f| render(f, &app))?;

        if event::poll(ui_poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key.code) {
                    return Ok(());
                }
            }
        }
        // Let the flow tasks make progress between frames
        tokio::task::yield_now().await;
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, &app.state),
    }
}
