use common::tictactoe::{CELL_COUNT, Position};
use std::fmt;
use std::io::BufRead;

#[derive(Debug, PartialEq, Eq)]
pub enum InputError {
    NotANumber(String),
    OutOfRange(i64),
    Closed,
    Read(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotANumber(text) => write!(f, "'{}' is not a cell number", text),
            InputError::OutOfRange(value) => {
                write!(f, "{} is out of range, pick 0 to {}", value, CELL_COUNT - 1)
            }
            InputError::Closed => write!(f, "input closed"),
            InputError::Read(err) => write!(f, "failed to read input: {}", err),
        }
    }
}

impl std::error::Error for InputError {}

/// Parses one line holding a flat cell index (`row * 3 + col`).
pub fn parse_move(line: &str) -> Result<Position, InputError> {
    let text = line.trim();
    let value: i64 = text
        .parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))?;

    usize::try_from(value)
        .ok()
        .and_then(Position::from_index)
        .ok_or(InputError::OutOfRange(value))
}

pub fn read_move<R: BufRead>(reader: &mut R) -> Result<Position, InputError> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| InputError::Read(e.to_string()))?;
    if read == 0 {
        return Err(InputError::Closed);
    }
    parse_move(&line)
}
