//! Putting a whole report together.

use exception::{Exception, ExceptionId, Exceptions, Value};
use log::trace;

use crate::{
    backtrace::read_backtrace,
    cause::ShownCauses,
    highlight::{BOLD, RESET},
    target::Sink,
    Message, Options, Order, Position, Target,
};

/// Writes reports about exceptions.
///
/// A reporter is made for a single report, or a few with the same settings,
/// and is cheap to throw away.
#[derive(Debug, Clone, Copy)]
pub struct Reporter<'a> {
    pub(crate) exceptions: &'a Exceptions,
    pub(crate) options: Options,
    pub(crate) position: Option<&'a Position>,
}

impl<'a> Reporter<'a> {
    /// The banner at the top of a reversed report.
    const TRACEBACK: &'static str = "Traceback";
    const TRACEBACK_REST: &'static str = " (most recent call last):\n";

    pub fn new(exceptions: &'a Exceptions, options: Options) -> Self {
        Reporter {
            exceptions,
            options,
            position: None,
        }
    }

    /// Where execution currently is. This labels exceptions which don't have
    /// a backtrace.
    pub fn position(mut self, position: Option<&'a Position>) -> Self {
        self.position = position;
        self
    }

    /// Write a report on the exception `id`, using a message and backtrace
    /// which were already worked out by the caller.
    ///
    /// Does nothing if there's no exception. This never fails, if the output
    /// stream breaks the rest of the report is lost.
    pub fn write(
        &self,
        id: Option<ExceptionId>,
        message: Message,
        backtrace: Option<&[Value]>,
        target: Target,
    ) {
        let Some((id, exception)) = self.lookup(id) else {
            return;
        };

        trace!("writing {:?} report for {}", self.options.get_order(), id);

        let mut sink = Sink::new(target);
        let mut shown = ShownCauses::new(id);

        match self.options.get_order() {
            Order::Reverse => {
                self.print_banner(&mut sink);
                self.show_cause(&mut sink, exception, &mut shown);
                self.print_backtrace(&mut sink, exception, backtrace);
                self.print_entry(&mut sink, exception, backtrace, message);
            }
            Order::Forward => {
                self.print_entry(&mut sink, exception, backtrace, message);
                self.print_backtrace(&mut sink, exception, backtrace);
                self.show_cause(&mut sink, exception, &mut shown);
            }
        }

        sink.finish();
    }

    /// Write a report on the exception `id`, reading its message and
    /// backtrace first.
    pub fn write_exception(&self, id: Option<ExceptionId>, target: Target) {
        let Some((id, exception)) = self.lookup(id) else {
            return;
        };

        let backtrace = read_backtrace(exception);
        let message = Message::read(exception);
        self.write(Some(id), message, backtrace, target);
    }

    /// The report on `id` as a string, without any escaping.
    pub fn full_message(&self, id: ExceptionId) -> String {
        let mut buffer = String::new();
        self.write_exception(Some(id), Target::Buffer(&mut buffer));
        buffer
    }

    fn lookup(
        &self,
        id: Option<ExceptionId>,
    ) -> Option<(ExceptionId, &'a Exception)> {
        let id = id?;
        self.exceptions.get(id).map(|exception| (id, exception))
    }

    fn print_banner(&self, sink: &mut Sink) {
        if self.options.is_highlighted() {
            sink.write(BOLD);
            sink.write(Self::TRACEBACK);
            sink.write(RESET);
        } else {
            sink.write(Self::TRACEBACK);
        }
        sink.write(Self::TRACEBACK_REST);
    }
}
