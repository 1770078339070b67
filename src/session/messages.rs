//! Session lifecycle lines printed around the TUI and headless runs

use std::time::Duration;

const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
const COLOR_RESET: &str = "\x1b[0m";

/// How the dashboard is being shown.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SessionMode {
    Interactive,
    /// Headless summary reprinted every period.
    Watch(Duration),
}

impl SessionMode {
    pub fn describe(&self) -> String {
        match self {
            SessionMode::Interactive => "interactive mode".to_string(),
            SessionMode::Watch(period) => {
                format!("watch mode, refreshing every {}s", period.as_secs())
            }
        }
    }
}

pub fn starting_line(mode: SessionMode) -> String {
    format!(
        "{}[DASHBOARD]{} Starting in {}",
        COLOR_INFO,
        COLOR_RESET,
        mode.describe()
    )
}

pub fn print_session_starting(mode: SessionMode) {
    println!("{}", starting_line(mode));
}

pub fn print_session_shutdown() {
    println!("{}[DASHBOARD]{} Ctrl+C received, stopping", COLOR_INFO, COLOR_RESET);
}

pub fn print_session_exit_success() {
    println!(
        "{}[DASHBOARD]{} Sustainability dashboard closed",
        COLOR_SUCCESS, COLOR_RESET
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_line_names_the_mode() {
        assert!(starting_line(SessionMode::Interactive).ends_with("Starting in interactive mode"));
        assert!(
            starting_line(SessionMode::Watch(Duration::from_secs(5)))
                .ends_with("watch mode, refreshing every 5s")
        );
    }
}
