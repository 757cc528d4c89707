use std::fmt::Display;

use tracing::level_filters::LevelFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Verbose,
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    fn as_ansi(self) -> &'static str {
        match self {
            LogLevel::Debug => "\x1b[38;5;6m",
            LogLevel::Verbose => "\x1b[38;5;8m",
            LogLevel::Info => "\x1b[39m",
            LogLevel::Warn => "\x1b[38;5;3m",
            LogLevel::Error => "\x1b[38;5;1m",
            LogLevel::Fatal => "\x1b[38;5;0;48;5;1m",
        }
    }

    fn as_pre(self) -> &'static str {
        match self {
            LogLevel::Debug => "[DBG] ",
            LogLevel::Verbose => "[VRB] ",
            LogLevel::Info => "[INF] ",
            LogLevel::Warn => "[WRN] ",
            LogLevel::Error => "[ERR] ",
            LogLevel::Fatal => "[FTL] ",
        }
    }

    /// the matching filter for `tracing` diagnostics emitted by the parser
    pub fn as_filter(self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::TRACE,
            LogLevel::Verbose => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error | LogLevel::Fatal => LevelFilter::ERROR,
        }
    }
}

const ANSI_RESET: &str = "\x1b[0m";

/// Console reporter for the driver, warnings and above go to stderr
#[derive(Debug, Copy, Clone)]
pub struct Logger {
    use_ansi_color: bool,
    minimum_level: LogLevel,
}

impl Logger {
    pub fn new(use_ansi_color: bool, minimum_level: LogLevel) -> Self {
        Self {
            use_ansi_color,
            minimum_level,
        }
    }

    /// render a full line, without the trailing newline, or `None` if `level` is filtered out
    pub fn format<T: Display>(self, level: LogLevel, message: T) -> Option<String> {
        if self.minimum_level > level {
            return None;
        }

        if self.use_ansi_color {
            Some(format!(
                "{}{}{}{}",
                level.as_ansi(),
                level.as_pre(),
                message,
                ANSI_RESET
            ))
        } else {
            Some(format!("{}{}", level.as_pre(), message))
        }
    }

    pub fn log<T: Display>(self, level: LogLevel, message: T) {
        let Some(line) = self.format(level, message) else {
            return;
        };

        match level {
            LogLevel::Debug | LogLevel::Verbose | LogLevel::Info => println!("{line}"),
            LogLevel::Warn | LogLevel::Error | LogLevel::Fatal => eprintln!("{line}"),
        }
    }

    pub fn verbose<T: Display>(self, message: T) {
        self.log(LogLevel::Verbose, message);
    }

    pub fn info<T: Display>(self, message: T) {
        self.log(LogLevel::Info, message);
    }
}
