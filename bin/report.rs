//! Report on a dump the way the runtime would when exiting.

use std::path::PathBuf;

use runtime::{ExecutionContext, Tag};
use termcolor::{ColorChoice, StandardStream};

use crate::Args;

/// Print the first exception in a dump as an uncaught error, and exit with
/// the status the runtime would.
#[derive(clap::Parser)]
pub struct Report {
    /// The dump to read, standard input if missing
    filename: Option<PathBuf>,
}

impl Report {
    pub(crate) fn run(&self, args: &Args) {
        let dump = crate::read_dump(self.filename.as_deref());

        let stderr = StandardStream::stderr(ColorChoice::Never);
        let mut ec = ExecutionContext::new(args.config(), stderr)
            .terminal(runtime::stderr_is_terminal());

        let errinfo = match dump.load(ec.exceptions_mut()) {
            Ok(errinfo) => errinfo,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };

        ec.set_position(dump.position().cloned());

        let tag = match errinfo {
            Some(_) => Tag::Raise,
            None => Tag::None,
        };

        ec.set_errinfo(errinfo);
        let status = ec.error_handle(tag as i32);
        std::process::exit(status);
    }
}
