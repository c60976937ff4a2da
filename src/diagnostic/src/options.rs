//! Settings for a single report.

use std::str::FromStr;

/// Which way round a report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    /// Innermost frame first, causes after.
    #[default]
    Forward,

    /// A "Traceback" with the most recent call last, causes first.
    Reverse,
}

/// How many backtrace frames to print before cutting the rest.
///
/// This comes from a raw integer setting where any negative number means
/// there's no limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BacktraceLimit(Option<usize>);

impl BacktraceLimit {
    pub const UNLIMITED: BacktraceLimit = BacktraceLimit(None);

    pub fn new(frames: usize) -> Self {
        BacktraceLimit(Some(frames))
    }

    pub fn from_raw(raw: i64) -> Self {
        BacktraceLimit(usize::try_from(raw).ok())
    }

    pub fn get(self) -> Option<usize> {
        self.0
    }
}

impl FromStr for BacktraceLimit {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(BacktraceLimit::from_raw)
    }
}

/// The options a report is rendered with. These don't change during a
/// report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    highlight: bool,
    order: Order,
    backtrace_limit: BacktraceLimit,
}

impl Options {
    pub fn new() -> Self {
        Options::default()
    }

    /// Decorate the report with ANSI bold and underline.
    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
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

    pub fn is_highlighted(&self) -> bool {
        self.highlight
    }

    pub fn get_order(&self) -> Order {
        self.order
    }

    pub fn get_backtrace_limit(&self) -> BacktraceLimit {
        self.backtrace_limit
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn negative_limits_are_unlimited() {
        assert_eq!(BacktraceLimit::from_raw(-1), BacktraceLimit::UNLIMITED);
        assert_eq!(BacktraceLimit::from_raw(-20).get(), None);
        assert_eq!(BacktraceLimit::from_raw(0).get(), Some(0));
    }

    #[test]
    fn parse_limit() {
        let limit = |s: &str| s.parse::<BacktraceLimit>().ok();
        assert_eq!(limit("3"), Some(BacktraceLimit::new(3)));
        assert_eq!(limit(" -1"), Some(BacktraceLimit::UNLIMITED));
        assert!("many".parse::<BacktraceLimit>().is_err());
    }
}
