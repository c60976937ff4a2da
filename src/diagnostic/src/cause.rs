//! Walking the cause chain.
//!
//! Each exception can have a cause, which can have a cause, and so on. Causes
//! can also be shared or form cycles, so each one is only shown once per
//! report.

use exception::{Exception, ExceptionId};
use rustc_hash::FxHashSet;

use crate::{backtrace::read_backtrace, target::Sink, Message, Order, Reporter};

/// The exceptions already shown in a report.
///
/// Most exceptions don't have a cause, so the set isn't made until one turns
/// up.
#[derive(Debug)]
pub(crate) struct ShownCauses {
    /// The exception the report is about.
    root: ExceptionId,
    shown: Option<FxHashSet<ExceptionId>>,
}

impl ShownCauses {
    pub(crate) fn new(root: ExceptionId) -> Self {
        ShownCauses { root, shown: None }
    }

    /// Has `id` already been shown? If not, it's marked as shown now.
    fn check_and_mark(&mut self, id: ExceptionId) -> bool {
        let root = self.root;
        let shown = self.shown.get_or_insert_with(|| {
            let mut shown = FxHashSet::default();
            shown.insert(root);
            shown
        });

        !shown.insert(id)
    }
}

impl Reporter<'_> {
    /// Show the cause of `exception`, and its cause, and so on.
    ///
    /// Going forward the nearest cause is printed first. Reversed, the
    /// deepest cause is printed first, and each cause's backtrace comes
    /// before its entry.
    pub(crate) fn show_cause(
        &self,
        sink: &mut Sink,
        exception: &Exception,
        shown: &mut ShownCauses,
    ) {
        let Some(id) = exception.get_cause().as_exception() else {
            return;
        };

        let Some(cause) = self.exceptions.get(id) else {
            return;
        };

        if shown.check_and_mark(id) {
            return;
        }

        let backtrace = read_backtrace(cause);
        let message = Message::read(cause);

        match self.options.get_order() {
            Order::Reverse => {
                self.show_cause(sink, cause, shown);
                self.print_backtrace(sink, cause, backtrace);
                self.print_entry(sink, cause, backtrace, message);
            }
            Order::Forward => {
                self.print_entry(sink, cause, backtrace, message);
                self.print_backtrace(sink, cause, backtrace);
                self.show_cause(sink, cause, shown);
            }
        }
    }
}
