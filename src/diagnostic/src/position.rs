//! Position
//!
//! A [`Position`] is where execution currently is, as far as the runtime can
//! tell. It's used to label an exception which doesn't have a backtrace.

use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Position {
    file: String,
    line: u32,
    callee: Option<String>,
}

impl Position {
    /// A position in `file` at `line`. Lines are 1-indexed, and line 0 means
    /// the line isn't known.
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Position {
            file: file.into(),
            line,
            callee: None,
        }
    }

    /// The name of the method being executed.
    pub fn callee(mut self, name: impl Into<String>) -> Self {
        self.callee = Some(name.into());
        self
    }
}

impl Position {
    /// This position written as a backtrace frame, e.g. `main.rb:3:in 'f'`.
    pub fn frame(&self) -> String {
        match (self.line, &self.callee) {
            (0, _) => self.file.clone(),
            (line, Some(callee)) => {
                format!("{}:{}:in '{}'", self.file, line, callee)
            }
            (line, None) => format!("{}:{}", self.file, line),
        }
    }
}

/// This is the label form, the frame followed by `": "`.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: ", self.frame())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn file_only() {
        let p = Position::new("main.rb", 0).callee("ignored");
        assert_eq!(p.to_string(), "main.rb: ");
    }

    #[test]
    fn file_and_line() {
        assert_eq!(Position::new("main.rb", 12).to_string(), "main.rb:12: ");
    }

    #[test]
    fn frame() {
        let p = Position::new("lib/a.rb", 3).callee("frob");
        assert_eq!(p.frame(), "lib/a.rb:3:in 'frob'");
        assert_eq!(Position::new("a.rb", 0).frame(), "a.rb");
    }

    #[test]
    fn with_callee() {
        let p = Position::new("lib/a.rb", 3).callee("frob");
        assert_eq!(p.to_string(), "lib/a.rb:3:in 'frob': ");
    }
}
