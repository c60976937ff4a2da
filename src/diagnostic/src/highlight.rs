//! ANSI escape sequences used to highlight reports on a terminal.
//!
//! These are written out as-is instead of through a colour library, since the
//! exact bytes are part of the report format.

/// Bold and underlined, used for class names.
pub const UNDERLINE: &str = "\x1b[1;4m";

/// Bold, used for messages.
pub const BOLD: &str = "\x1b[1m";

/// Back to normal.
pub const RESET: &str = "\x1b[0m";
