//! Wire codec: permissive command parsing and fixed reply templates.
//!
//! Parsing never fails. A line yields its first character as the command
//! plus every run of decimal digits in the remainder as one integer each;
//! stray separators and letters are skipped. Argument count and range
//! checks belong to the session layer, not here.

use std::fmt;

/// A parsed client line: command letter plus best-effort integer list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub letter: char,
    pub args: Vec<u32>,
}

/// Parse a raw line. Returns `None` only for a blank line, which carries
/// no command letter at all.
pub fn parse_line(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let mut chars = trimmed.chars();
    let letter = chars.next()?;
    let rest = chars.as_str();

    let mut args = Vec::new();
    let mut current: Option<u32> = None;
    for ch in rest.chars() {
        match ch.to_digit(10) {
            Some(d) => {
                current = Some(current.unwrap_or(0).wrapping_mul(10).wrapping_add(d));
            }
            None => {
                if let Some(n) = current.take() {
                    args.push(n);
                }
            }
        }
    }
    if let Some(n) = current {
        args.push(n);
    }
    Some(Command { letter, args })
}

/// Whether a resolved shot struck a ship cell or open water.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotMark {
    Hit,
    Miss,
}

impl ShotMark {
    fn token(self) -> char {
        match self {
            ShotMark::Hit => 'H',
            ShotMark::Miss => 'M',
        }
    }
}

/// Every response the server sends, one variant per wire template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// `A`
    Ack,
    /// `E <code>`
    Error(u16),
    /// `R <remaining> <H|M>`
    ShotResult { remaining: u32, mark: ShotMark },
    /// `G <remaining> (<H|M> <col> <row>)*`, coordinates in plain decimal.
    QueryResult {
        remaining: u32,
        cells: Vec<(ShotMark, u32, u32)>,
    },
    /// `H <0|1>`: loss or win notice.
    GameOver { won: bool },
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ack => write!(f, "A"),
            Reply::Error(code) => write!(f, "E {}", code),
            Reply::ShotResult { remaining, mark } => {
                write!(f, "R {} {}", remaining, mark.token())
            }
            Reply::QueryResult { remaining, cells } => {
                write!(f, "G {}", remaining)?;
                for (mark, col, row) in cells {
                    write!(f, " {} {} {}", mark.token(), col, row)?;
                }
                Ok(())
            }
            Reply::GameOver { won } => write!(f, "H {}", if *won { 1 } else { 0 }),
        }
    }
}
