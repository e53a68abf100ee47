//! Defines the command-line arguments and subcommands for the Listparse CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "listparse",
    version,
    about = "Run list-of-successes parsers and show every way they succeed."
)]
pub struct ListparseArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply a grammar expression to an input and print all successes in order.
    Parse {
        /// Grammar expression, e.g. `word` or `many("foo")`.
        #[arg(required = true)]
        grammar: String,
        /// The text to parse.
        #[arg(required = true)]
        input: String,
        /// Only show successes that consumed the whole input.
        #[arg(long)]
        complete: bool,
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
        /// Show at most this many successes.
        #[arg(long)]
        limit: Option<usize>,
        /// Stack size in MiB for the parsing thread; deep inputs need more.
        #[arg(long, default_value_t = 512)]
        stack_mib: usize,
    },
    /// List the built-in parsers usable in grammar expressions.
    List,
}
