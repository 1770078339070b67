//! One-shot command output
//!
//! Tagged, coloured lines for `set-filters`, `reset-config` and command
//! failures. Errors go to stderr so `summary` output stays pipeable.

/// How a command line is tagged and where it is written.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Tone {
    Info,
    Warn,
    Error,
    Success,
}

impl Tone {
    fn tag(self) -> &'static str {
        match self {
            Tone::Info => "INFO",
            Tone::Warn => "WARN",
            Tone::Error => "ERROR",
            Tone::Success => "SUCCESS",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[1;33m",
            Tone::Warn => "\x1b[1;91m",
            Tone::Error => "\x1b[1;31m",
            Tone::Success => "\x1b[1;32m",
        }
    }
}

/// `[TAG] title` with the details tab-separated when present.
pub fn format_line(tone: Tone, title: &str, details: &str) -> String {
    let mut line = format!("{}[{}]\x1b[0m {}", tone.color(), tone.tag(), title);
    if !details.is_empty() {
        line.push_str("\t ");
        line.push_str(details);
    }
    line
}

pub fn print_line(tone: Tone, title: &str, details: &str) {
    let line = format_line(tone, title, details);
    match tone {
        Tone::Error => eprintln!("{}", line),
        _ => println!("{}", line),
    }
}

/// Print an info line, e.g. the config file about to be removed
#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Info, $title, &format!($($details)*))
    };
}

/// Print a warning for a command that had nothing to do
#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Warn, $title, &format!($($details)*))
    };
}

/// Print a command failure to stderr
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Error, $title, "")
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Error, $title, $details)
    };
}

/// Print a completed command, e.g. the filters just saved
#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Success, $title, &format!($($details)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_with_details() {
        let line = format_line(Tone::Success, "Default filters saved.", "unit=unit2");
        assert_eq!(
            line,
            "\x1b[1;32m[SUCCESS]\x1b[0m Default filters saved.\t unit=unit2"
        );
    }

    #[test]
    fn test_line_without_details() {
        let line = format_line(Tone::Warn, "No config file to remove.", "");
        assert!(line.ends_with("[WARN]\x1b[0m No config file to remove."));
    }
}
