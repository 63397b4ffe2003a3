//! Modular dashboard implementation
//!
//! Split into logical modules for better maintainability

pub mod components;
pub mod plain;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;
pub mod widgets;

// Re-export main types and functions for external use
pub use plain::render_plain;
pub use renderer::render_dashboard;
pub use state::DashboardState;
