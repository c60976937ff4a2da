//! Printing backtraces.
//!
//! The first frame is already shown as the label of the entry, so only the
//! frames after it are printed here, one per line:
//!
//! ``` text
//!         from main.rb:7:in 'calculate'
//!         from main.rb:12:in '<main>'
//! ```
//!
//! Reversed, each line gets its frame number:
//!
//! ``` text
//!         2: from main.rb:12:in '<main>'
//!         1: from main.rb:7:in 'calculate'
//! ```

use exception::{Category, Exception, Value};
use log::debug;

use crate::{target::Sink, BacktraceLimit, Order, Reporter};

impl Reporter<'_> {
    pub(crate) fn print_backtrace(
        &self,
        sink: &mut Sink,
        exception: &Exception,
        backtrace: Option<&[Value]>,
    ) {
        let Some(frames) = backtrace else {
            return;
        };

        let len = frames.len();
        let order = self.options.get_order();
        let width = index_width(len);
        let elision = Elision::new(
            exception.get_category(),
            len,
            self.options.get_backtrace_limit(),
        );

        let mut i = 1;
        while i < len {
            if let Some(elision) = elision.filter(|e| e.start == i) {
                write!(sink, "\t ... {} levels...\n", elision.frames);
                i += elision.frames;
                if i >= len {
                    break;
                }
            }

            let (index, frame) = match order {
                Order::Forward => (i, &frames[i]),
                Order::Reverse => (len - i, &frames[len - i]),
            };

            // Anything that isn't a string isn't a frame description.
            if let Some(line) = frame.as_str() {
                match order {
                    Order::Forward => write!(sink, "\tfrom {line}\n"),
                    Order::Reverse => {
                        write!(sink, "\t{index:>width$}: from {line}\n")
                    }
                }
            }

            i += 1;
        }
    }
}

/// Read the backtrace of `exception`.
///
/// If the reader raises, that's treated as there being no backtrace.
pub(crate) fn read_backtrace(exception: &Exception) -> Option<&[Value]> {
    match exception.get_backtrace() {
        Ok(frames) => frames,
        Err(e) => {
            let class = exception.get_class();
            debug!("reporting {class} without a backtrace: {e}");
            None
        }
    }
}

/// How many digits the largest frame number needs.
fn index_width(len: usize) -> usize {
    len.saturating_sub(1)
        .checked_ilog10()
        .map_or(1, |digits| digits as usize + 1)
}

/// A run of frames which aren't printed, replaced with a single line saying
/// how many there were.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Elision {
    /// The index of the first frame left out.
    start: usize,
    /// How many frames are left out.
    frames: usize,
}

impl Elision {
    /// Frames kept at the top of a stack overflow's backtrace.
    const OVERFLOW_HEAD: usize = 9;

    /// Frames kept at the bottom of a stack overflow's backtrace.
    const OVERFLOW_TAIL: usize = 4;

    /// Backtraces aren't cut unless at least this many more frames than the
    /// head and tail would be cut.
    const OVERFLOW_SLACK: usize = 5;

    /// Work out which frames of a `len` frame backtrace to leave out.
    ///
    /// An explicit limit wins over the stack overflow rule.
    fn new(
        category: Category,
        len: usize,
        limit: BacktraceLimit,
    ) -> Option<Self> {
        let mut elision = None;

        let overflow_max =
            Self::OVERFLOW_HEAD + Self::OVERFLOW_TAIL + Self::OVERFLOW_SLACK;

        if category.is_stack_overflow() && len > overflow_max {
            elision = Some(Elision {
                start: Self::OVERFLOW_HEAD,
                frames: len - overflow_max + Self::OVERFLOW_SLACK,
            });
        }

        if let Some(limit) = limit.get() {
            if len > limit.saturating_add(2) {
                elision = Some(Elision {
                    start: limit + 1,
                    frames: len - (limit + 1),
                });
            }
        }

        elision
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn widths() {
        assert_eq!(index_width(0), 1);
        assert_eq!(index_width(2), 1);
        assert_eq!(index_width(10), 1);
        assert_eq!(index_width(11), 2);
        assert_eq!(index_width(101), 3);
        assert_eq!(index_width(1_000_000_001), 10);
    }

    #[test]
    fn no_elision() {
        let none = BacktraceLimit::UNLIMITED;
        assert_eq!(Elision::new(Category::Other, 500, none), None);
        assert_eq!(Elision::new(Category::StackOverflow, 18, none), None);
    }

    #[test]
    fn stack_overflow_keeps_head_and_tail() {
        let e = Elision::new(Category::StackOverflow, 100, BacktraceLimit::UNLIMITED);
        assert_eq!(e, Some(Elision { start: 9, frames: 87 }));

        // Frames 1 to 8 are printed, then the last 4.
        let e = e.unwrap();
        assert_eq!(100 - (e.start + e.frames), 4);
    }

    #[test]
    fn limit() {
        let limit = BacktraceLimit::new(2);
        assert_eq!(Elision::new(Category::Other, 4, limit), None);
        assert_eq!(
            Elision::new(Category::Other, 5, limit),
            Some(Elision { start: 3, frames: 2 })
        );
    }

    #[test]
    fn limit_plus_three_frames_elides_two() {
        for limit in [0, 1, 5, 40] {
            let e = Elision::new(
                Category::Other,
                limit + 3,
                BacktraceLimit::new(limit),
            );
            assert_eq!(e, Some(Elision { start: limit + 1, frames: 2 }));
        }
    }

    #[test]
    fn limit_wins_over_stack_overflow() {
        let e = Elision::new(Category::StackOverflow, 100, BacktraceLimit::new(0));
        assert_eq!(e, Some(Elision { start: 1, frames: 99 }));

        // Even when the limit would cut less.
        let e = Elision::new(Category::StackOverflow, 100, BacktraceLimit::new(50));
        assert_eq!(e, Some(Elision { start: 51, frames: 49 }));
    }
}
