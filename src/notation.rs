//! Wire notation for moves: the 32 playable squares are numbered 1-32
//! scanning rows top to bottom (row 7 first), left to right. A normal move is
//! two ids joined by `-`, a capture chain is two or more ids joined by `x`,
//! e.g. `9-14` or `22x15x8`.

use crate::board::{Coord, Move, MoveKind};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("malformed move string {0:?}")]
    MalformedMoveString(String),
}

pub fn square_to_id(square: Coord) -> u8 {
    ((7 - square.y) * 4 + square.x / 2 + 1) as u8
}

pub fn id_to_square(id: u8) -> Coord {
    let y = 7 - (id as i8 - 1) / 4;
    let x = (id as i8 - 1) % 4 * 2 + y % 2;
    Coord::new(x, y)
}

fn is_valid_id(token: &str) -> bool {
    // [1-9] | [12]\d | 3[0-2], so no leading zeros and no signs
    if token.is_empty() || token.starts_with('0') || !token.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    matches!(token.parse::<u8>(), Ok(1..=32))
}

/// Grammar check for untrusted text, `^(ID-ID|(IDx)+ID)$` with `ID` in 1-32.
/// Boundary code validates with this before calling `Move::from_str`.
pub fn is_valid_move_string(text: &str) -> bool {
    if let Some((from, to)) = text.split_once('-') {
        return !from.contains('x')
            && !to.contains(|c| c == '-' || c == 'x')
            && is_valid_id(from)
            && is_valid_id(to);
    }
    let ids: Vec<&str> = text.split('x').collect();
    ids.len() >= 2 && ids.iter().all(|id| is_valid_id(id))
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = match self.kind {
            MoveKind::Normal => '-',
            MoveKind::Capture => 'x',
        };
        for (i, &square) in self.squares.iter().enumerate() {
            if i > 0 {
                write!(f, "{separator}")?;
            }
            write!(f, "{}", square_to_id(square))?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if !is_valid_move_string(text) {
            return Err(NotationError::MalformedMoveString(text.to_string()));
        }
        let (kind, separator) = if text.contains('-') { (MoveKind::Normal, '-') } else { (MoveKind::Capture, 'x') };
        let mut squares = Vec::new();
        for id in text.split(separator) {
            let id: u8 = id
                .parse()
                .map_err(|_| NotationError::MalformedMoveString(text.to_string()))?;
            squares.push(id_to_square(id));
        }
        Ok(Move { kind, squares })
    }
}
