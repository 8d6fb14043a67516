//! CLI command messaging system
//!
//! Consistent prefixes for one-shot commands and startup diagnostics.
//! Errors go to stderr so table output on stdout stays clean.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
    Success,
}

impl Severity {
    fn prefix(self) -> &'static str {
        match self {
            Severity::Info => "\x1b[1;33m[INFO]\x1b[0m",
            Severity::Error => "\x1b[1;31m[ERROR]\x1b[0m",
            Severity::Success => "\x1b[1;32m[SUCCESS]\x1b[0m",
        }
    }
}

/// Render a message as it is printed.
pub fn format_message(severity: Severity, title: &str, details: Option<&str>) -> String {
    match details.filter(|d| !d.is_empty()) {
        Some(details) if severity == Severity::Error => {
            format!(
                "{} {}\n{} Details: {}",
                severity.prefix(),
                title,
                severity.prefix(),
                details
            )
        }
        Some(details) => format!("{} {}\t {}", severity.prefix(), title, details),
        None => format!("{} {}", severity.prefix(), title),
    }
}

pub fn print_message(severity: Severity, title: &str, details: Option<&str>) {
    let message = format_message(severity, title, details);
    match severity {
        Severity::Error => eprintln!("{}", message),
        Severity::Info | Severity::Success => println!("{}", message),
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::Severity::Info,
            $title,
            Some(format!($($details)*).as_str()),
        )
    };
}

/// Macro for CLI errors
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_message($crate::cli_messages::Severity::Error, $title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::Severity::Error,
            $title,
            Some($details),
        )
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::Severity::Success,
            $title,
            Some(format!($($details)*).as_str()),
        )
    };
}
