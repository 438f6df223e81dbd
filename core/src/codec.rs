//! Text codec for puzzle definition documents.
//!
//! The format is a constrained subset of a declarative array-literal
//! syntax: three scalar bindings (rows, columns, step budget) plus one
//! bracketed row-major integer literal. Binding names differ between
//! puzzle variants, so both directions take a [`Dialect`].

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Write;
use log::debug;

use crate::error::{FormatError, Result, ValidationError};
use crate::types::{Coord, StepCount, Wire};
use crate::Grid;

/// Field-name mapping for the puzzle text format.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dialect {
    pub rows: &'static str,
    pub columns: &'static str,
    pub steps: &'static str,
    pub board: &'static str,
}

impl Dialect {
    /// Binding names used by the ROGO solver model.
    pub const ROGO: Dialect = Dialect {
        rows: "rows",
        columns: "cols",
        steps: "max_steps",
        board: "problem",
    };
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect {
            rows: "rows",
            columns: "columns",
            steps: "steps",
            board: "board",
        }
    }
}

/// A parsed puzzle document: the grid plus its step budget.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedPuzzle {
    pub grid: Grid,
    pub max_steps: StepCount,
}

/// Parses a puzzle definition document.
pub fn parse(text: &str, dialect: &Dialect) -> Result<ParsedPuzzle> {
    let rows = dimension(text, dialect.rows)?;
    let columns = dimension(text, dialect.columns)?;
    let max_steps = scalar_field(text, dialect.steps)?;
    let max_steps: StepCount = max_steps
        .try_into()
        .map_err(|_| ValidationError::ValueOutOfRange(max_steps))?;

    let values = board_values(text)?;
    if values.len() % columns != 0 {
        return Err(FormatError::RowCountMismatch {
            values: values.len(),
            columns,
        }
        .into());
    }

    let wire_rows: Vec<Vec<Wire>> = values.chunks(columns).map(<[Wire]>::to_vec).collect();
    if wire_rows.len() != rows {
        return Err(ValidationError::SizeMismatch {
            declared: rows,
            actual: wire_rows.len(),
        }
        .into());
    }

    debug!("parsed {rows}x{columns} board, step budget {max_steps}");
    Ok(ParsedPuzzle {
        grid: Grid::from_wire_rows(&wire_rows)?,
        max_steps,
    })
}

/// Serializes a grid and its step budget back to document text.
///
/// The exact shape is the round-trip contract: one board row per
/// line, `,` separators with a trailing comma per row, and the three
/// scalar bindings ahead of the array literal.
pub fn serialize(grid: &Grid, max_steps: StepCount, dialect: &Dialect) -> String {
    let (rows, columns) = grid.size();
    let mut out = String::new();

    let _ = writeln!(out, "{} = {rows};", dialect.rows);
    let _ = writeln!(out, "{} = {columns};", dialect.columns);
    let _ = writeln!(out, "{} = {max_steps};", dialect.steps);
    let _ = writeln!(out, "{} = array2d(1..{rows}, 1..{columns},", dialect.board);
    out.push_str("[\n");

    for r in 0..rows {
        for c in 0..columns {
            let _ = write!(out, "{},", grid[(r, c)].to_wire());
        }
        out.push('\n');
    }

    out.push_str("]);\n");
    out
}

/// Extracts the flat integer sequence from the (greedy) bracketed
/// block: first `[` to last `]`, tokens split on whitespace and
/// commas.
fn board_values(text: &str) -> Result<Vec<Wire>> {
    let open = text.find('[').ok_or(FormatError::MissingBoard)?;
    let close = text
        .rfind(']')
        .filter(|&close| close > open)
        .ok_or(FormatError::MissingBoard)?;

    text[open + 1..close]
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<Wire>()
                .map_err(|_| FormatError::BadToken(token.to_string()).into())
        })
        .collect()
}

fn dimension(text: &str, name: &str) -> Result<usize> {
    let value = scalar_field(text, name)?;
    if (1..=Coord::MAX as i64).contains(&value) {
        Ok(value as usize)
    } else {
        Err(ValidationError::ValueOutOfRange(value).into())
    }
}

/// Locates `name = <int>` in the document. The name must stand alone
/// as an identifier, not as part of a longer one.
fn scalar_field(text: &str, name: &str) -> Result<i64> {
    for (start, _) in text.match_indices(name) {
        if let Some(before) = text[..start].chars().next_back() {
            if before.is_alphanumeric() || before == '_' {
                continue;
            }
        }

        let rest = text[start + name.len()..].trim_start();
        let Some(rest) = rest.strip_prefix('=') else {
            continue;
        };
        let rest = rest.trim_start();

        let end = rest
            .find(|c: char| c != '-' && !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let token = &rest[..end];
        return token
            .parse::<i64>()
            .map_err(|_| FormatError::BadToken(token.to_string()).into());
    }
    Err(FormatError::MissingField(name.to_string()).into())
}
