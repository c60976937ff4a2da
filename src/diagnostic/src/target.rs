//! Where a report goes.

use std::{fmt, io};

use log::warn;

/// The destination of a report.
pub enum Target<'a> {
    /// Written straight to the error stream. Messages are escaped so they
    /// can't mess with the terminal.
    Stream(&'a mut dyn io::Write),

    /// Appended to a buffer as-is, for code that wants the report as a
    /// string.
    Buffer(&'a mut String),
}

impl fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Target::Stream(_) => write!(f, "Target::Stream"),
            Target::Buffer(b) => write!(f, "Target::Buffer({} bytes)", b.len()),
        }
    }
}

/// Every write of a report funnels through here.
///
/// Writing a report must not fail, since it's what's done when everything
/// else already has. If the stream breaks the rest of the report is dropped.
pub(crate) struct Sink<'a> {
    target: Target<'a>,
    broken: bool,
}

impl<'a> Sink<'a> {
    pub(crate) fn new(target: Target<'a>) -> Self {
        Sink {
            target,
            broken: false,
        }
    }

    /// Does this sink escape what's passed to
    /// [`write_escaped`][Sink::write_escaped]?
    pub(crate) fn is_stream(&self) -> bool {
        matches!(self.target, Target::Stream(_))
    }

    /// Write some text without escaping it.
    pub(crate) fn write(&mut self, text: &str) {
        match &mut self.target {
            Target::Buffer(buffer) => buffer.push_str(text),
            Target::Stream(_) if self.broken => {}
            Target::Stream(stream) => {
                if let Err(e) = stream.write_all(text.as_bytes()) {
                    warn!("dropping the rest of an error report: {e}");
                    self.broken = true;
                }
            }
        }
    }

    pub(crate) fn write_fmt(&mut self, args: fmt::Arguments) {
        match args.as_str() {
            Some(text) => self.write(text),
            None => self.write(&args.to_string()),
        }
    }

    /// Flush anything the stream is holding on to.
    pub(crate) fn finish(mut self) {
        if let Target::Stream(stream) = &mut self.target {
            if !self.broken {
                if let Err(e) = stream.flush() {
                    warn!("could not flush an error report: {e}");
                }
            }
        }
    }
}
