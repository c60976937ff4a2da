//! Working out how the process exits.

use std::io;

use log::debug;

use crate::{ExecutionContext, Tag};

pub const EXIT_SUCCESS: i32 = libc::EXIT_SUCCESS;
pub const EXIT_FAILURE: i32 = libc::EXIT_FAILURE;

impl<W: io::Write> ExecutionContext<W> {
    /// Deal with execution ending with the jump state `state`, printing
    /// whatever needs printing, and return the exit status for the process.
    ///
    /// An unknown state is a bug in the runtime, and aborts.
    pub fn error_handle(&mut self, state: i32) -> i32 {
        if self.set_raised() {
            debug!("error while handling an error, giving up");
            return EXIT_FAILURE;
        }

        let tag = match Tag::from_raw(state) {
            Ok(tag) => tag,
            Err(e) => self.bug(format_args!("{e}")),
        };

        let status = match tag {
            Tag::None => EXIT_SUCCESS,
            Tag::Raise => self.raise_status(),
            Tag::Fatal => {
                self.error_print(self.errinfo);
                EXIT_FAILURE
            }
            Tag::Return
            | Tag::Break
            | Tag::Next
            | Tag::Retry
            | Tag::Redo
            | Tag::Throw => {
                if let Some(message) = tag.unexpected_message() {
                    self.warn_print(message);
                }
                EXIT_FAILURE
            }
        };

        self.reset_raised();
        debug!("{tag:?} at top level, exiting with {status}");
        status
    }

    /// The exit status for an exception reaching the top level, printing a
    /// report on it unless it's a way of asking to exit.
    fn raise_status(&mut self) -> i32 {
        let exception = self.errinfo.and_then(|id| self.exceptions.get(id));
        let category = match exception {
            Some(exception) => exception.get_category(),
            None => return EXIT_FAILURE,
        };

        if let Some(status) = category.exit_status() {
            return status;
        }

        // No message when exiting by a signal, unless it's one that points
        // at a bug.
        if let Some(signo) = category.termination_signal() {
            if signo != libc::SIGSEGV {
                return EXIT_FAILURE;
            }
        }

        // Or by an error that's about to be turned into a signal.
        if category.is_mapped_system_call_error() {
            return EXIT_FAILURE;
        }

        self.error_print(self.errinfo);
        EXIT_FAILURE
    }
}
