//! Exception dumps
//!
//! A dump is a plain text description of some exceptions, one directive per
//! line. Blank lines and lines starting with `#` are ignored.
//!
//! ``` text
//! at main.rb 12 <main>
//!
//! exception top
//! class ConfigError
//! message could not load the config
//! from config.rb:8:in 'load'
//! from main.rb:12:in '<main>'
//! cause missing
//!
//! exception missing
//! class Errno::ENOENT
//! kind syscall
//! message No such file or directory
//! from config.rb:3:in 'read'
//! ```
//!
//! The first exception is the one that's raised. Message lines are joined
//! with newlines, and can use the escapes `\e`, `\n`, `\t`, `\\` and `\xHH`.

use std::collections::HashMap;

use diagnostic::Position;
use exception::{
    Accessor, Category, Class, Exception, ExceptionId, Exceptions, Value,
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("line {0}: unknown directive '{1}'")]
    UnknownDirective(usize, String),

    #[error("line {0}: '{1}' must come after an 'exception' line")]
    NoException(usize, &'static str),

    #[error("line {0}: '{1}' is missing its argument")]
    MissingArgument(usize, &'static str),

    #[error("line {0}: unknown kind '{1}'")]
    UnknownKind(usize, String),

    #[error("line {0}: '{1}' is not a number")]
    BadNumber(usize, String),

    #[error("line {0}: bad escape in '{1}'")]
    BadEscape(usize, String),

    #[error("line {0}: there's already an exception called '{1}'")]
    Duplicate(usize, String),

    #[error("line {0}: no exception called '{1}'")]
    UnknownCause(usize, String),

    #[error(transparent)]
    Exception(#[from] exception::Error),
}

/// A parsed dump, ready to be loaded.
#[derive(Debug, Default)]
pub struct Dump {
    position: Option<Position>,
    records: Vec<Record>,
}

/// One `exception` block.
#[derive(Debug, Default)]
struct Record {
    label: String,
    class: Option<Class>,
    category: Option<Category>,
    message: Option<Vec<String>>,
    message_raises: bool,
    frames: Option<Vec<Value>>,
    /// The label of the cause, and the line it's named on.
    cause: Option<(String, usize)>,
}

impl Record {
    fn to_exception(&self) -> Exception {
        // With no class the record is the generic error.
        let mut exception = match &self.class {
            Some(class) => Exception::new(class.clone()),
            None => Exception::default(),
        };

        if let Some(category) = self.category {
            exception = exception.category(category);
        }

        if self.message_raises {
            let raises = Accessor::Raises("NoMethodError".into());
            exception = exception.message_accessor(raises);
        } else if let Some(lines) = &self.message {
            exception = exception.message(lines.join("\n"));
        }

        if let Some(frames) = &self.frames {
            exception = exception.backtrace(frames.iter().cloned());
        }

        exception
    }
}

impl Dump {
    pub fn parse(input: &str) -> Result<Dump> {
        let mut dump = Dump::default();

        for (index, line) in input.lines().enumerate() {
            let line = line.trim_end();

            if line.trim_start().is_empty() || line.starts_with('#') {
                continue;
            }

            let (directive, argument) = match line.split_once(' ') {
                Some((directive, argument)) => (directive, argument),
                None => (line, ""),
            };

            dump.directive(index + 1, directive, argument)?;
        }

        Ok(dump)
    }

    /// Where execution was when the first exception was raised.
    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    /// Add the exceptions to `exceptions`, returning the first one.
    pub fn load(
        &self,
        exceptions: &mut Exceptions,
    ) -> Result<Option<ExceptionId>> {
        let ids: HashMap<&str, ExceptionId> = self
            .records
            .iter()
            .map(|r| (r.label.as_str(), exceptions.insert(r.to_exception())))
            .collect();

        for record in &self.records {
            if let Some((label, line)) = &record.cause {
                let cause = ids
                    .get(label.as_str())
                    .ok_or_else(|| Error::UnknownCause(*line, label.clone()))?;
                let id = ids[record.label.as_str()];
                exceptions.set_cause(id, Value::from(*cause))?;
            }
        }

        Ok(self.records.first().map(|r| ids[r.label.as_str()]))
    }

    fn directive(
        &mut self,
        line: usize,
        directive: &str,
        argument: &str,
    ) -> Result<()> {
        match directive {
            "at" => {
                self.position = Some(parse_position(line, argument)?);
            }
            "exception" => {
                let label = required(line, "exception", argument)?;
                if self.records.iter().any(|r| r.label == label) {
                    return Err(Error::Duplicate(line, label.to_owned()));
                }
                self.records.push(Record {
                    label: label.to_owned(),
                    ..Record::default()
                });
            }
            "class" => {
                let class = Class::new(required(line, "class", argument)?);
                self.current(line, "class")?.class = Some(class);
            }
            "kind" => {
                let category = parse_category(line, argument)?;
                self.current(line, "kind")?.category = Some(category);
            }
            "message" => {
                let text = unescape(line, argument)?;
                let record = self.current(line, "message")?;
                record.message.get_or_insert_with(Vec::new).push(text);
            }
            "no-message" => {
                self.current(line, "no-message")?.message_raises = true;
            }
            "from" => {
                let frame = required(line, "from", argument)?.to_owned();
                let record = self.current(line, "from")?;
                record
                    .frames
                    .get_or_insert_with(Vec::new)
                    .push(Value::from(frame));
            }
            "cause" => {
                let label = required(line, "cause", argument)?.to_owned();
                self.current(line, "cause")?.cause = Some((label, line));
            }
            other => {
                return Err(Error::UnknownDirective(line, other.to_owned()))
            }
        }

        Ok(())
    }

    /// The record being described.
    fn current(
        &mut self,
        line: usize,
        directive: &'static str,
    ) -> Result<&mut Record> {
        self.records
            .last_mut()
            .ok_or(Error::NoException(line, directive))
    }
}

fn required<'a>(
    line: usize,
    directive: &'static str,
    argument: &'a str,
) -> Result<&'a str> {
    let argument = argument.trim();
    if argument.is_empty() {
        Err(Error::MissingArgument(line, directive))
    } else {
        Ok(argument)
    }
}

fn parse_number(line: usize, text: &str) -> Result<i32> {
    text.parse()
        .map_err(|_| Error::BadNumber(line, text.to_owned()))
}

/// `at FILE LINE [METHOD]`
fn parse_position(line: usize, argument: &str) -> Result<Position> {
    let mut words = required(line, "at", argument)?.split_whitespace();

    let file = words.next().ok_or(Error::MissingArgument(line, "at"))?;
    let number = match words.next() {
        Some(n) => n.parse().map_err(|_| Error::BadNumber(line, n.to_owned()))?,
        None => 0,
    };

    let position = Position::new(file, number);

    Ok(match words.next() {
        Some(callee) => position.callee(callee),
        None => position,
    })
}

/// `kind KIND [ARG]`
fn parse_category(line: usize, argument: &str) -> Result<Category> {
    let mut words = required(line, "kind", argument)?.split_whitespace();
    let kind = words.next().unwrap_or_default();
    let arg = words.next();

    let number = |name: &'static str| match arg {
        Some(n) => parse_number(line, n),
        None => Err(Error::MissingArgument(line, name)),
    };

    let category = match kind {
        "generic" => Category::Generic,
        "stack-overflow" => Category::StackOverflow,
        "other" => Category::Other,
        "exit" => Category::Exit {
            status: number("kind exit")?,
        },
        "signal" => Category::Signal {
            signo: number("kind signal")?,
        },
        "syscall" => Category::SystemCall {
            signo: arg.map(|n| parse_number(line, n)).transpose()?,
        },
        other => return Err(Error::UnknownKind(line, other.to_owned())),
    };

    Ok(category)
}

/// Decode the escapes in a message line.
fn unescape(line: usize, text: &str) -> Result<String> {
    let bad = || Error::BadEscape(line, text.to_owned());
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next().ok_or_else(bad)? {
            'e' => out.push('\x1b'),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            '\\' => out.push('\\'),
            'x' => {
                let hex: String = chars.by_ref().take(2).collect();
                let byte = u8::from_str_radix(&hex, 16).map_err(|_| bad())?;
                if hex.len() != 2 || !byte.is_ascii() {
                    return Err(bad());
                }
                out.push(char::from(byte));
            }
            _ => return Err(bad()),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;

    const DUMP: &str = "\
# a chain of two
at main.rb 12 <main>

exception top
class ConfigError
message could not load
message see \\e[1mthe docs\\e[0m
from config.rb:8:in 'load'
from main.rb:12:in '<main>'
cause missing

exception missing
class Errno::ENOENT
kind syscall
message No such file or directory
";

    #[test]
    fn parse_and_load() {
        let dump = Dump::parse(DUMP).unwrap();
        let at = Position::new("main.rb", 12).callee("<main>");
        assert_eq!(dump.position(), Some(&at));

        let mut exceptions = Exceptions::new();
        let top = dump.load(&mut exceptions).unwrap().unwrap();
        assert_eq!(exceptions.len(), 2);

        let exception = exceptions.get(top).unwrap();
        assert_eq!(exception.get_class().name(), "ConfigError");
        assert_eq!(
            exception.get_message(),
            Ok(Some("could not load\nsee \x1b[1mthe docs\x1b[0m"))
        );
        let frames = exception.get_backtrace().unwrap();
        assert_eq!(frames.map(<[Value]>::len), Some(2));

        let cause = exception.get_cause().as_exception().unwrap();
        let cause = exceptions.get(cause).unwrap();
        assert_eq!(cause.get_category(), Category::SystemCall { signo: None });
        assert_eq!(cause.get_backtrace(), Ok(None));
    }

    #[test]
    fn empty() {
        let dump = Dump::parse("# nothing\n\n").unwrap();
        let mut exceptions = Exceptions::new();
        assert_eq!(dump.load(&mut exceptions), Ok(None));
    }

    #[test]
    fn kinds() {
        let kind = |s| parse_category(1, s);
        assert_eq!(kind("exit 7"), Ok(Category::Exit { status: 7 }));
        assert_eq!(kind("signal 15"), Ok(Category::Signal { signo: 15 }));
        assert_eq!(
            kind("syscall 13"),
            Ok(Category::SystemCall { signo: Some(13) })
        );
        assert_eq!(kind("stack-overflow"), Ok(Category::StackOverflow));
        assert_eq!(kind("exit"), Err(Error::MissingArgument(1, "kind exit")));
        assert_eq!(kind("exit x"), Err(Error::BadNumber(1, "x".into())));
        assert_eq!(kind("weird"), Err(Error::UnknownKind(1, "weird".into())));
    }

    #[test]
    fn escapes() {
        assert_eq!(unescape(1, r"a\tb\\c\x07"), Ok("a\tb\\c\x07".into()));
        for bad in [r"\q", r"\x4", r"\xff", r"\xzz"] {
            assert_eq!(unescape(1, bad), Err(Error::BadEscape(1, bad.into())));
        }
        assert!(unescape(1, "trailing\\").is_err());
    }

    #[test]
    fn errors() {
        assert_eq!(
            Dump::parse("class Foo").unwrap_err(),
            Error::NoException(1, "class")
        );
        assert_eq!(
            Dump::parse("exception a\nbogus 1").unwrap_err(),
            Error::UnknownDirective(2, "bogus".into())
        );
        assert_eq!(
            Dump::parse("exception a\nexception a").unwrap_err(),
            Error::Duplicate(2, "a".into())
        );
        assert_eq!(
            Dump::parse("exception a\nfrom").unwrap_err(),
            Error::MissingArgument(2, "from")
        );

        let dump = Dump::parse("exception a\ncause b").unwrap();
        let mut exceptions = Exceptions::new();
        assert_eq!(
            dump.load(&mut exceptions),
            Err(Error::UnknownCause(2, "b".into()))
        );
    }

    #[test]
    fn bare_record_is_generic() {
        let dump = Dump::parse("exception a\nfrom main.rb:1").unwrap();
        let mut exceptions = Exceptions::new();
        let id = dump.load(&mut exceptions).unwrap().unwrap();

        let exception = exceptions.get(id).unwrap();
        assert_eq!(exception.get_class().name(), "RuntimeError");
        assert_eq!(exception.get_category(), Category::Generic);

        let dump = Dump::parse("exception a\nclass RuntimeError").unwrap();
        let id = dump.load(&mut exceptions).unwrap().unwrap();
        let exception = exceptions.get(id).unwrap();
        assert_eq!(exception.get_category(), Category::Other);
    }

    #[test]
    fn raising_message() {
        let dump = Dump::parse("exception a\nmessage hi\nno-message").unwrap();
        let mut exceptions = Exceptions::new();
        let id = dump.load(&mut exceptions).unwrap().unwrap();
        assert!(exceptions.get(id).unwrap().get_message().is_err());
    }
}
