//! `backtrack`: enumerate password-shaped strings.
//!
//! Solutions go to stdout, one per line; progress and the summary go to
//! stderr through the console layer.

mod args;
mod run;

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;

use crate::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    if !args.quiet {
        if args.verbose {
            backtrack_console::init_with("backtrack_solver=trace");
        } else {
            backtrack_console::init();
        }
    }

    let mut out = BufWriter::new(io::stdout().lock());
    match run::search(&args, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
