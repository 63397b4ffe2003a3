pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Tunables for the dashboard session, grouped by functional area.

    use std::time::Duration;

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Event buffer size between flow workers and the UI.
    /// Each flow sends exactly one event, so this never fills up.
    pub const EVENT_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Time allowed to establish a connection to the sales API (seconds).
    /// There is no overall request timeout: a slow response leaves its widget loading.
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    pub const fn connect_timeout() -> Duration {
        Duration::from_secs(CONNECT_TIMEOUT_SECS)
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// How long the splash screen stays up before the dashboard appears.
    pub const SPLASH_DURATION_MS: u64 = 1500;

    pub const fn splash_duration() -> Duration {
        Duration::from_millis(SPLASH_DURATION_MS)
    }

    /// Poll interval for keyboard input in the UI loop.
    pub const UI_POLL_INTERVAL_MS: u64 = 100;

    pub const fn ui_poll_interval() -> Duration {
        Duration::from_millis(UI_POLL_INTERVAL_MS)
    }

    // =============================================================================
    // CONFIG FILE
    // =============================================================================

    /// Directory under the user's home holding the config file.
    pub const CONFIG_DIR: &str = ".sales-dashboard";

    /// Name of the config file.
    pub const CONFIG_FILE: &str = "config.json";

    /// Environment variable overriding the backend ("local" or a URL).
    pub const ENVIRONMENT_VAR: &str = "SALES_DASHBOARD_ENVIRONMENT";
}
