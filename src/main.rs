use std::{io, process::ExitCode};

use clap::Parser;
use sandcalc::{
    Limits,
    format::FloatStyle,
    limits::{DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING, MIN_MAX_DEPTH},
    repl::{self, ReplOptions},
};
use tracing::{Level, error};

/// sandcalc evaluates arithmetic expressions built from numbers, `+`, `-`,
/// `*`, `/` and parentheses, and rejects everything else.
///
/// With no expression, starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maximum nesting depth of an expression.
    #[arg(long,
          default_value_t = DEFAULT_MAX_DEPTH,
          value_parser = clap::builder::RangedU64ValueParser::<usize>::new()
              .range(MIN_MAX_DEPTH as u64..=MAX_DEPTH_CEILING as u64))]
    max_depth: usize,

    /// Print float results exactly, e.g. `5.0` instead of `5`.
    #[arg(long)]
    exact: bool,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Multiple words are joined with spaces.
    #[arg(allow_hyphen_values = true)]
    expression: Vec<String>,
}

impl Args {
    const fn options(&self) -> ReplOptions {
        ReplOptions { limits:      Limits { max_depth: self.max_depth },
                      float_style: if self.exact {
                          FloatStyle::Exact
                      } else {
                          FloatStyle::TrimIntegral
                      }, }
    }

    const fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt().with_max_level(args.log_level())
                             .with_writer(io::stderr)
                             .init();

    let options = args.options();

    if args.expression.is_empty() {
        if let Err(e) = repl::run(io::stdin().lock(), io::stdout().lock(), &options) {
            error!(error = %e, "interactive session failed");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let source = args.expression.join(" ");
    match repl::evaluate_line(&source, &options) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        },
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        },
    }
}
