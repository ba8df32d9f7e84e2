//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// A completed line on the board: the winning player and the triple
/// of positions that form the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    player: Player,
    line: [Position; 3],
}

impl WinningLine {
    /// The player who completed the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The three positions forming the line.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// Whether the given position is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// The 8 possible winning triples: 3 rows, 3 columns, 2 diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks the board for a completed line.
///
/// Returns the winning player and the triple of positions, or `None`
/// if no line is complete. When two triples of the same player are
/// both complete, the first in enumeration order (rows, columns,
/// diagonals) is returned.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some(WinningLine { player, line });
            }
        }
    }

    None
}
