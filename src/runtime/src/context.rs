//! The execution context being unwound.

use std::{fmt, io};

use diagnostic::{Position, Reporter, Target};
use exception::{Exception, ExceptionId, Exceptions};
use log::{trace, warn};
use termcolor::{ColorChoice, StandardStream};

use crate::{stderr_is_terminal, Config};

/// Flags for what's currently being raised, used to notice when an error
/// happens while dealing with another error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RaisedFlags(u8);

impl RaisedFlags {
    pub const EXCEPTION: RaisedFlags = RaisedFlags(1);
    pub const STACK_OVERFLOW: RaisedFlags = RaisedFlags(2);
    pub const NO_MEMORY: RaisedFlags = RaisedFlags(4);

    pub fn contains(self, other: RaisedFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, other: RaisedFlags) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: RaisedFlags) {
        self.0 &= !other.0;
    }
}

/// The state of the execution context which is unwinding: the exception
/// being raised, where execution is, and where errors go.
///
/// Each context has its own error stream handle, settings and cause
/// bookkeeping, so two contexts can unwind at once. Making sure their writes
/// don't interleave is up to the stream.
pub struct ExecutionContext<W = StandardStream> {
    pub(crate) exceptions: Exceptions,
    pub(crate) errinfo: Option<ExceptionId>,
    pub(crate) raised: RaisedFlags,
    pub(crate) position: Option<Position>,
    pub(crate) config: Config,
    pub(crate) stderr: W,
    pub(crate) terminal: bool,
}

impl Default for ExecutionContext {
    fn default() -> Self {
        ExecutionContext::new(
            Config::default(),
            StandardStream::stderr(ColorChoice::Never),
        )
        .terminal(stderr_is_terminal())
    }
}

impl<W: io::Write> ExecutionContext<W> {
    /// A context reporting to `stderr`, which is assumed not to be a
    /// terminal until [`terminal`][Self::terminal] says otherwise.
    pub fn new(config: Config, stderr: W) -> Self {
        ExecutionContext {
            exceptions: Exceptions::new(),
            errinfo: None,
            raised: RaisedFlags::default(),
            position: None,
            config,
            stderr,
            terminal: false,
        }
    }

    /// Is `stderr` an interactive terminal? This decides highlighting when
    /// the colour choice is [`ColorChoice::Auto`].
    pub fn terminal(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }

    pub fn exceptions(&self) -> &Exceptions {
        &self.exceptions
    }

    pub fn exceptions_mut(&mut self) -> &mut Exceptions {
        &mut self.exceptions
    }

    /// The exception currently being raised.
    pub fn errinfo(&self) -> Option<ExceptionId> {
        self.errinfo
    }

    pub fn set_errinfo(&mut self, errinfo: Option<ExceptionId>) {
        self.errinfo = errinfo;
    }

    /// Make `exception` the one being raised.
    pub fn raise(&mut self, exception: Exception) -> ExceptionId {
        let id = self.exceptions.insert(exception);
        self.errinfo = Some(id);
        id
    }

    /// Where execution currently is.
    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn set_position(&mut self, position: Option<Position>) {
        self.position = position;
    }

    pub fn raised(&self) -> RaisedFlags {
        self.raised
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stderr(&self) -> &W {
        &self.stderr
    }

    pub fn into_stderr(self) -> W {
        self.stderr
    }

    /// Mark that an exception is being raised. Returns `true` if one already
    /// was.
    pub fn set_raised(&mut self) -> bool {
        let already = self.raised.contains(RaisedFlags::EXCEPTION);
        self.raised.insert(RaisedFlags::EXCEPTION);
        already
    }

    /// Clear the mark left by [`set_raised`][Self::set_raised]. Returns
    /// `true` if it was set.
    pub fn reset_raised(&mut self) -> bool {
        let was = self.raised.contains(RaisedFlags::EXCEPTION);
        self.raised.remove(RaisedFlags::EXCEPTION);
        was
    }

    /// Print a report on `errinfo` to the error stream.
    ///
    /// Reports are always written to the stream, never to a buffer, and are
    /// highlighted according to the configuration. The raised flags are
    /// cleared while the report is written, and afterwards they and the
    /// current exception are put back.
    pub fn error_print(&mut self, errinfo: Option<ExceptionId>) {
        let Some(errinfo) = errinfo else {
            return;
        };

        let raised = self.raised;
        self.raised = RaisedFlags::default();

        trace!("printing uncaught exception {errinfo}");

        Reporter::new(&self.exceptions, self.config.options(self.terminal))
            .position(self.position.as_ref())
            .write_exception(Some(errinfo), Target::Stream(&mut self.stderr));

        self.errinfo = Some(errinfo);
        self.raised.insert(raised);
    }

    /// Print a one line message, labelled with the current position.
    pub(crate) fn warn_print(&mut self, message: &str) {
        let result = match &self.position {
            Some(position) => writeln!(self.stderr, "{position}{message}"),
            None => writeln!(self.stderr, "{message}"),
        };

        if let Err(e) = result.and_then(|()| self.stderr.flush()) {
            warn!("could not print '{message}': {e}");
        }
    }

    /// Report an internal inconsistency and abort the process.
    pub(crate) fn bug(&mut self, args: fmt::Arguments) -> ! {
        log::error!("[BUG] {args}");
        let _ = writeln!(self.stderr, "[BUG] {args}");
        let _ = self.stderr.flush();
        std::process::abort()
    }
}
