//! Print the full message of an exception.

use std::path::PathBuf;

use diagnostic::Reporter;
use exception::Exceptions;

use crate::Args;

/// Print the report on the first exception in a dump to standard out,
/// without escaping anything.
#[derive(clap::Parser)]
pub struct FullMessage {
    /// The dump to read, standard input if missing
    filename: Option<PathBuf>,
}

impl FullMessage {
    pub(crate) fn run(&self, args: &Args) {
        let dump = crate::read_dump(self.filename.as_deref());
        let mut exceptions = Exceptions::new();

        let id = match dump.load(&mut exceptions) {
            Ok(Some(id)) => id,
            Ok(None) => return,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };

        // Highlighting follows standard error, as it would for a report.
        let options = args.config().options(runtime::stderr_is_terminal());
        let message = Reporter::new(&exceptions, options)
            .position(dump.position())
            .full_message(id);

        print!("{message}");
    }
}
