//! The entry for an exception: where it happened, what it says and what it
//! is.
//!
//! ``` text
//! main.rb:3:in 'divide': divided by 0 (ZeroDivisionError)
//! ```

use exception::{Exception, Value};

use crate::{
    highlight::{BOLD, RESET, UNDERLINE},
    target::Sink,
    Message, Reporter,
};

impl Reporter<'_> {
    /// What's printed for a generic error without a message.
    const UNHANDLED: &'static str = "unhandled exception";

    pub(crate) fn print_entry(
        &self,
        sink: &mut Sink,
        exception: &Exception,
        backtrace: Option<&[Value]>,
        message: Message,
    ) {
        let highlight = self.options.is_highlighted();

        if message.is_set() {
            self.print_position_label(sink, backtrace);
        }

        let text = message.text();

        if exception.get_category().is_generic() && text.is_empty() {
            self.print_underlined(sink, Self::UNHANDLED);
            sink.write("\n");
            return;
        }

        let class = exception.get_class();

        if text.is_empty() {
            self.print_underlined(sink, class.name());
            sink.write("\n");
            return;
        }

        let first_len = text.find('\n').unwrap_or(text.len());

        if highlight {
            sink.write(BOLD);
        }

        sink.write_escaped(text, 0..first_len);

        if !class.is_anonymous() {
            sink.write(" (");
            self.print_underlined(sink, class.name());
            if highlight {
                sink.write(BOLD);
            }
            sink.write(")");
        }

        if highlight {
            sink.write(RESET);
        }

        sink.write("\n");

        let rest = (first_len + 1).min(text.len());

        if rest == text.len() {
            return;
        }

        if highlight {
            print_highlighted_lines(sink, text, rest);
        } else {
            sink.write_escaped(text, rest..text.len());
            if !text.ends_with('\n') {
                sink.write("\n");
            }
        }
    }

    /// The first backtrace entry if there is one, otherwise wherever
    /// execution currently is, if that's known.
    fn print_position_label(
        &self,
        sink: &mut Sink,
        backtrace: Option<&[Value]>,
    ) {
        let first = backtrace
            .and_then(|frames| frames.first())
            .and_then(Value::as_str);

        match (first, self.position) {
            (Some(frame), _) => {
                sink.write(frame);
                sink.write(": ");
            }
            (None, Some(position)) => write!(sink, "{position}"),
            (None, None) => {}
        }
    }

    fn print_underlined(&self, sink: &mut Sink, text: &str) {
        if self.options.is_highlighted() {
            sink.write(UNDERLINE);
            sink.write(text);
            sink.write(RESET);
        } else {
            sink.write(text);
        }
    }
}

/// Print the lines of `text` after `start` with each line bold, but not the
/// newlines between them.
fn print_highlighted_lines(sink: &mut Sink, text: &str, start: usize) {
    let mut start = start;

    while start < text.len() {
        let end = text[start..].find('\n').map_or(text.len(), |i| start + i);

        if end > start {
            sink.write(BOLD);
            sink.write_escaped(text, start..end);
            sink.write(RESET);
        }

        if end == text.len() {
            sink.write("\n");
            break;
        }

        let newlines = text[end..]
            .find(|c| c != '\n')
            .map_or(text.len(), |i| end + i);

        sink.write_escaped(text, end..newlines);
        start = newlines;
    }
}

#[cfg(test)]
mod test {
    use exception::{Category, Class, Exception, Exceptions};

    use crate::{Options, Position, Target};

    use super::*;

    fn entry(exception: &Exception, message: Message, highlight: bool) -> String {
        let exceptions = Exceptions::new();
        let options = Options::new().highlight(highlight);
        let reporter = Reporter::new(&exceptions, options);
        let backtrace = exception.get_backtrace().ok().flatten();

        let mut out = Vec::new();
        let mut sink = Sink::new(Target::Stream(&mut out));
        reporter.print_entry(&mut sink, exception, backtrace, message);
        sink.finish();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn unset_message_has_no_label() {
        let e = Exception::new(Class::new("IOError")).backtrace(["a.rb:1"]);
        assert_eq!(entry(&e, Message::Unset, false), "IOError\n");
    }

    #[test]
    fn unhandled() {
        let e = Exception::default()
            .category(Category::Generic)
            .backtrace(["a.rb:1"]);
        assert_eq!(entry(&e, Message::Nil, false), "a.rb:1: unhandled exception\n");
        assert_eq!(
            entry(&e, Message::Text(""), true),
            "a.rb:1: \x1b[1;4munhandled exception\x1b[0m\n"
        );
    }

    #[test]
    fn class_only() {
        let e = Exception::new(Class::new("StopIteration")).backtrace(["x:9"]);
        assert_eq!(entry(&e, Message::Nil, false), "x:9: StopIteration\n");
    }

    #[test]
    fn message_and_class() {
        let e = Exception::new(Class::new("KeyError")).backtrace(["x:1"]);
        assert_eq!(
            entry(&e, Message::Text("key not found: :a"), false),
            "x:1: key not found: :a (KeyError)\n"
        );
        assert_eq!(
            entry(&e, Message::Text("key not found: :a"), true),
            "x:1: \x1b[1mkey not found: :a (\x1b[1;4mKeyError\x1b[0m\x1b[1m)\x1b[0m\n"
        );
    }

    #[test]
    fn anonymous_class_is_left_out() {
        let e = Exception::new(Class::anonymous(0x1234)).backtrace(["x:1"]);
        assert_eq!(entry(&e, Message::Text("oops"), false), "x:1: oops\n");
        assert_eq!(
            entry(&e, Message::Text("a\nb"), false),
            "x:1: a\nb\n"
        );
    }

    #[test]
    fn multi_line() {
        let e = Exception::new(Class::new("E")).backtrace(["x:1"]);
        assert_eq!(
            entry(&e, Message::Text("one\ntwo\n\nthree"), false),
            "x:1: one (E)\ntwo\n\nthree\n"
        );
        assert_eq!(
            entry(&e, Message::Text("one\ntwo\n"), false),
            "x:1: one (E)\ntwo\n"
        );
        assert_eq!(entry(&e, Message::Text("one\n"), false), "x:1: one (E)\n");
    }

    #[test]
    fn multi_line_highlighted() {
        let e = Exception::new(Class::new("E")).backtrace(["x:1"]);
        assert_eq!(
            entry(&e, Message::Text("one\ntwo\n\nthree"), true),
            "x:1: \x1b[1mone (\x1b[1;4mE\x1b[0m\x1b[1m)\x1b[0m\n\
             \x1b[1mtwo\x1b[0m\n\n\x1b[1mthree\x1b[0m\n"
        );
    }

    #[test]
    fn message_is_escaped() {
        let e = Exception::new(Class::new("E")).backtrace(["x:1"]);
        assert_eq!(
            entry(&e, Message::Text("\x1b[2Jgotcha"), false),
            "x:1: \\e[2Jgotcha (E)\n"
        );
    }

    #[test]
    fn position_label() {
        let exceptions = Exceptions::new();
        let position = Position::new("main.rb", 4).callee("run");
        let reporter = Reporter::new(&exceptions, Options::new())
            .position(Some(&position));
        let e = Exception::new(Class::new("E"));

        let mut buffer = String::new();
        let mut sink = Sink::new(Target::Buffer(&mut buffer));
        reporter.print_entry(&mut sink, &e, None, Message::Text("hi"));
        reporter.print_entry(&mut sink, &e, Some(&[]), Message::Text("hi"));
        sink.finish();

        assert_eq!(
            buffer,
            "main.rb:4:in 'run': hi (E)\nmain.rb:4:in 'run': hi (E)\n"
        );
    }
}
