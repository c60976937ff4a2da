//! Escaping messages before they hit the terminal.
//!
//! Messages can contain anything. On the error stream, control characters
//! other than newline and tab are replaced with escape sequences and
//! backslashes are doubled, so a message can't move the cursor around or
//! change colours. Buffers get the text untouched.

use std::{borrow::Cow, ops::Range};

use crate::target::Sink;

impl Sink<'_> {
    /// Write `text[range]`, escaped if this is the error stream.
    ///
    /// The range must fall on character boundaries.
    pub(crate) fn write_escaped(&mut self, text: &str, range: Range<usize>) {
        let text = &text[range];

        if self.is_stream() {
            escape_with(text, |piece| self.write(piece));
        } else {
            self.write(text);
        }
    }
}

/// Escape `text` the way it would be on the error stream.
pub fn escape(text: &str) -> Cow<'_, str> {
    let mut escaped = String::with_capacity(text.len());
    let mut pieces = 0;

    escape_with(text, |piece| {
        pieces += 1;
        escaped.push_str(piece);
    });

    if pieces <= 1 && escaped == text {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(escaped)
    }
}

/// Calls `emit` with consecutive pieces of escaped `text`.
///
/// Runs of plain text are emitted as one piece. If nothing needs escaping,
/// `emit` sees exactly `text` once.
fn escape_with(text: &str, mut emit: impl FnMut(&str)) {
    let mut start = 0;

    for (i, byte) in text.bytes().enumerate() {
        match byte {
            b'\n' | b'\t' => continue,
            b'\\' => {
                // Write up to and including the backslash, then start the
                // next run on it, so it's written twice.
                emit(&text[start..=i]);
                start = i;
            }
            c if c.is_ascii_control() => {
                if i > start {
                    emit(&text[start..i]);
                }
                start = i + 1;
                match escaped_name(c) {
                    Some(name) => emit(name),
                    None => emit(&format!("\\x{:02X}", c)),
                }
            }
            _ => {}
        }
    }

    if start < text.len() {
        emit(&text[start..]);
    }
}

/// The short escape for a control character, if it has one.
fn escaped_name(c: u8) -> Option<&'static str> {
    match c {
        b'\0' => Some("\\0"),
        b'\n' => Some("\\n"),
        b'\r' => Some("\\r"),
        b'\t' => Some("\\t"),
        0x0c => Some("\\f"),
        0x0b => Some("\\v"),
        0x08 => Some("\\b"),
        0x07 => Some("\\a"),
        0x1b => Some("\\e"),
        0x7f => Some("\\c?"),
        _ => None,
    }
}
