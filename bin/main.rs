//! Unwind - print what a program would print if it died with an exception.
//!
//! Exceptions are read from a dump file describing each one, see [`dump`] for
//! the format.

use std::{fs::File, io::Read, path::Path};

use clap::Parser;
use diagnostic::{BacktraceLimit, Order};
use runtime::{ColorChoice, Config};

mod dump;
mod logger;
mod message;
mod report;

#[derive(clap::Parser)]
#[clap(version, author, about)]
pub struct Args {
    /// Print causes first and frames outermost first, as a traceback
    #[clap(short, long, global = true)]
    reverse: bool,

    /// When to highlight reports
    #[clap(long, arg_enum, default_value = "auto", global = true)]
    color: Color,

    /// Print at most N frames of each backtrace, -1 for all of them
    #[clap(
        long,
        value_name = "N",
        default_value = "-1",
        allow_hyphen_values = true,
        global = true
    )]
    backtrace_limit: BacktraceLimit,

    /// Log to standard error at this level
    #[clap(long, default_value = "off", global = true)]
    log_level: log::LevelFilter,

    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Report(report::Report),
    Message(message::FullMessage),
}

#[derive(Clone, Copy, clap::ArgEnum)]
enum Color {
    Auto,
    Always,
    Never,
}

impl From<Color> for ColorChoice {
    fn from(color: Color) -> ColorChoice {
        match color {
            Color::Auto => ColorChoice::Auto,
            Color::Always => ColorChoice::Always,
            Color::Never => ColorChoice::Never,
        }
    }
}

impl Args {
    /// The report settings from the command line.
    pub(crate) fn config(&self) -> Config {
        let order = if self.reverse {
            Order::Reverse
        } else {
            Order::Forward
        };

        Config::default()
            .color(self.color.into())
            .order(order)
            .backtrace_limit(self.backtrace_limit)
    }
}

fn main() {
    let args = Args::parse();

    logger::init(args.log_level);

    match &args.command {
        Command::Report(report) => report.run(&args),
        Command::Message(message) => message.run(&args),
    }
}

/// Read and parse a dump, from standard input if there's no file name.
///
/// This exits the process if the dump can't be read.
pub(crate) fn read_dump(filename: Option<&Path>) -> dump::Dump {
    let mut input = String::new();

    let result = match filename {
        Some(path) => File::open(path)
            .and_then(|mut file| file.read_to_string(&mut input)),
        None => std::io::stdin().read_to_string(&mut input),
    };

    if let Err(e) = result {
        let name = filename
            .map_or("<stdin>".into(), |path| path.display().to_string());
        eprintln!("Error: cannot read '{}': {}", name, e);
        std::process::exit(1);
    }

    match dump::Dump::parse(&input) {
        Ok(dump) => dump,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
