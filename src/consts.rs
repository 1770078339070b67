pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Constants for the terminal host, grouped by functional area.

    // =============================================================================
    // ACTIVITY LOG CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    // =============================================================================
    // TERMINAL LOOP CONFIGURATION
    // =============================================================================

    /// Terminal event loop timing
    pub mod ui {
        use std::time::Duration;

        /// How long to wait for a key press before redrawing (milliseconds)
        pub const TICK_RATE_MS: u64 = 100;

        /// How long the splash screen stays up unless a key is pressed (seconds)
        pub const SPLASH_DURATION_SECS: u64 = 2;

        /// Number of tiles on the dashboard grid, including the overall tile
        pub const TILE_COUNT: usize = 5;

        /// Helper function to get the tick rate
        pub const fn tick_rate() -> Duration {
            Duration::from_millis(TICK_RATE_MS)
        }

        /// Helper function to get the splash duration
        pub const fn splash_duration() -> Duration {
            Duration::from_secs(SPLASH_DURATION_SECS)
        }
    }

    // =============================================================================
    // CONFIG FILE LOCATION
    // =============================================================================

    /// Directory under the home directory holding the config file
    pub const CONFIG_DIR: &str = ".sustainability";

    /// Config file name
    pub const CONFIG_FILE: &str = "config.json";

    // =============================================================================
    // HEADLESS MODE
    // =============================================================================

    /// Smallest accepted `--watch` interval (seconds)
    pub const MIN_WATCH_INTERVAL_SECS: u64 = 1;
}
