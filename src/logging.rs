// logging.rs
// Timestamped logging for the sheet generation front end

use std::fmt;

use chrono::Local;

#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Info,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

fn stamp(level: LogLevel, message: &str) -> String {
    format!("{} - {} - {}", Local::now().format("%Y-%m-%d %H:%M:%S"), level, message)
}

/// Log an info message to stdout
pub fn info(message: &str) {
    println!("{}", stamp(LogLevel::Info, message));
}

/// Log an error message to stderr
pub fn error(message: &str) {
    eprintln!("{}", stamp(LogLevel::Error, message));
}
