//! Handles all user-facing output for the CLI.
//!
//! This module is responsible for colorizing the success table, listing the
//! built-in parsers, and generating JSON. Writers are generic over
//! `WriteColor` so the same code renders to a terminal or into a buffer.

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use unicode_width::UnicodeWidthStr;

use crate::errors::Error;
use crate::grammar::{Builtin, Value};
use crate::input::Input;

/// One success, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub value: Value,
    pub remainder: Input,
}

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

/// Writes successes as an aligned table: index, value, remaining input.
pub fn write_table<W: WriteColor>(out: &mut W, outcomes: &[Outcome]) -> Result<(), Error> {
    if outcomes.is_empty() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        writeln!(out, "no parse")?;
        out.reset()?;
        return Ok(());
    }

    let values: Vec<String> = outcomes.iter().map(|o| o.value.to_string()).collect();
    let width = values.iter().map(|v| v.width()).max().unwrap_or(0);

    for (i, (outcome, value)) in outcomes.iter().zip(&values).enumerate() {
        write!(out, "{i:>3}  ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(out, "{value}")?;
        out.reset()?;
        let pad = width - value.width();
        write!(out, "{:pad$}  rest ", "")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        writeln!(out, "{:?}", outcome.remainder.as_str())?;
        out.reset()?;
    }
    Ok(())
}

/// Writes the built-in parser table.
pub fn write_builtins<W: WriteColor>(out: &mut W, builtins: &[Builtin]) -> Result<(), Error> {
    let width = builtins.iter().map(|b| signature(b).width()).max().unwrap_or(0);
    for builtin in builtins {
        let sig = signature(builtin);
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        write!(out, "{sig}")?;
        out.reset()?;
        let pad = width - sig.width();
        writeln!(out, "{:pad$}  {}", "", builtin.summary)?;
    }
    writeln!(
        out,
        "\nnote: repeating a grammar that can match nothing (e.g. many(word)) never ends; such grammars are rejected"
    )?;
    Ok(())
}

pub fn render_json(outcomes: &[Outcome]) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(outcomes)?)
}

pub fn print_table(outcomes: &[Outcome]) -> Result<(), Error> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    write_table(&mut stdout, outcomes)
}

pub fn print_builtins(builtins: &[Builtin]) -> Result<(), Error> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    write_builtins(&mut stdout, builtins)
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn signature(builtin: &Builtin) -> String {
    match builtin.arity {
        0 => builtin.name.to_string(),
        1 => format!("{}(G)", builtin.name),
        n => format!("{}({})", builtin.name, vec!["G"; n].join(", ")),
    }
}
