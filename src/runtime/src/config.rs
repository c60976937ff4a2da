//! Settings for error reports.
//!
//! Instead of reading global state while a report is written, the settings
//! are gathered here up front and handed to the execution context.

use diagnostic::{BacktraceLimit, Options, Order};
use termcolor::ColorChoice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    color: ColorChoice,
    order: Order,
    backtrace_limit: BacktraceLimit,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            color: ColorChoice::Auto,
            order: Order::Forward,
            backtrace_limit: BacktraceLimit::UNLIMITED,
        }
    }
}

impl Config {
    /// When to highlight reports. With [`ColorChoice::Auto`], reports are
    /// highlighted if the stream they're written to is a terminal, which
    /// the caller says when asking for [`options`][Config::options].
    pub fn color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    pub fn backtrace_limit(mut self, limit: BacktraceLimit) -> Self {
        self.backtrace_limit = limit;
        self
    }

    /// Should reports written to a stream be highlighted? `terminal` is
    /// whether that stream is an interactive terminal.
    pub fn highlight(&self, terminal: bool) -> bool {
        match self.color {
            ColorChoice::Always | ColorChoice::AlwaysAnsi => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => terminal,
        }
    }

    /// The options for a single report written to a stream, which is a
    /// terminal if `terminal` is set.
    pub fn options(&self, terminal: bool) -> Options {
        Options::new()
            .highlight(self.highlight(terminal))
            .order(self.order)
            .backtrace_limit(self.backtrace_limit)
    }
}

/// Is the process's standard error an interactive terminal?
///
/// Only terminals have dimensions. This says nothing about other streams a
/// report might be written to.
pub fn stderr_is_terminal() -> bool {
    term_size::dimensions_stderr().is_some()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn forced_colour() {
        let config = Config::default().color(ColorChoice::Always);
        assert!(config.options(false).is_highlighted());

        let config = config.color(ColorChoice::Never);
        assert!(!config.options(true).is_highlighted());
    }

    #[test]
    fn auto_follows_the_stream() {
        let config = Config::default();
        assert!(config.options(true).is_highlighted());
        assert!(!config.options(false).is_highlighted());
    }

    #[test]
    fn options() {
        let config = Config::default()
            .color(ColorChoice::Never)
            .order(Order::Reverse)
            .backtrace_limit(BacktraceLimit::new(4));

        assert_eq!(
            config.options(true),
            Options::new()
                .order(Order::Reverse)
                .backtrace_limit(BacktraceLimit::new(4))
        );
    }
}
