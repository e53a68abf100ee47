//! The Listparse Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::process;

use clap::Parser;

use crate::cli::args::{Command, ListparseArgs};
use crate::errors::{print_error, Error};
use crate::grammar::{compile, BUILTINS};
use crate::input::Input;
use crate::run::on_deep_stack;

pub mod args;
pub mod output;

use output::Outcome;

/// The main entry point for the CLI.
pub fn run() {
    let args = ListparseArgs::parse();

    let result = match args.command {
        Command::Parse {
            grammar,
            input,
            complete,
            json,
            limit,
            stack_mib,
        } => handle_parse(grammar, input, complete, json, limit, stack_mib),
        Command::List => output::print_builtins(BUILTINS),
    };

    if let Err(e) = result {
        print_error(e);
        process::exit(1);
    }
}

/// Handles the `parse` subcommand.
///
/// Compiling and parsing run on a worker thread with a large stack, since the
/// recursive parsers nest deeper with every character they match.
fn handle_parse(
    grammar: String,
    input: String,
    complete: bool,
    json: bool,
    limit: Option<usize>,
    stack_mib: usize,
) -> Result<(), Error> {
    let stack_bytes = stack_mib.saturating_mul(1024 * 1024);
    let outcomes = on_deep_stack(stack_bytes, move || -> Result<Vec<Outcome>, Error> {
        let parser = compile(&grammar)?;
        Ok(parser
            .apply(&Input::from(input))
            .into_iter()
            .filter(|(_, rest)| !complete || rest.is_empty())
            .take(limit.unwrap_or(usize::MAX))
            .map(|(value, remainder)| Outcome { value, remainder })
            .collect())
    })??;

    if json {
        println!("{}", output::render_json(&outcomes)?);
        Ok(())
    } else {
        output::print_table(&outcomes)
    }
}
