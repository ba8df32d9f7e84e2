//! History-backed game state machine.
//!
//! The game stores one [`Snapshot`] per move, starting with the empty
//! board, and a `step` pointer into that history. Rewinding moves the
//! pointer; playing from a rewound position truncates the abandoned
//! future before appending. Turn and status are derived from
//! `(history, step)` on every query, never stored.

use crate::position::Position;
use crate::rules::win::{WinningLine, winning_line};
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One immutable board state in the history, paired with the cell that
/// was played to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    played: Option<Position>,
}

impl Snapshot {
    /// The initial snapshot: empty board, nothing played.
    fn initial() -> Self {
        Self {
            board: Board::new(),
            played: None,
        }
    }

    /// The board at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cell played to reach this step, `None` only for step 0.
    pub fn played(&self) -> Option<Position> {
        self.played
    }
}

/// Display order of the move-history list. Presentation only; has no
/// effect on game state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
pub enum MoveOrder {
    /// Oldest move first.
    #[display("Ascending")]
    Ascending,
    /// Newest move first.
    #[display("Descending")]
    Descending,
}

impl MoveOrder {
    /// Returns the opposite order.
    pub fn flipped(self) -> Self {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }
}

/// Current status of the game at the current step, derived on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Game is ongoing.
    InProgress {
        /// The player who moves next.
        next: Player,
    },
    /// Game ended with a completed line.
    Won(WinningLine),
    /// All cells filled with no completed line.
    Draw,
}

/// Tic-tac-toe game with full move history and time travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    history: Vec<Snapshot>,
    step: usize,
    selected: Option<usize>,
    order: MoveOrder,
}

impl Game {
    /// Creates a new game: one empty snapshot, step 0, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::initial()],
            step: 0,
            selected: None,
            order: MoveOrder::Ascending,
        }
    }

    /// The board at the current step.
    pub fn current(&self) -> &Board {
        &self.history[self.step].board
    }

    /// The player to move, derived from step parity: X on even steps.
    pub fn to_move(&self) -> Player {
        if self.step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// The game status at the current step.
    ///
    /// The winner check runs before the draw check: a full board with a
    /// completed line is a win, not a draw.
    pub fn status(&self) -> Status {
        if let Some(win) = winning_line(self.current()) {
            Status::Won(win)
        } else if self.step == Board::CELL_COUNT {
            Status::Draw
        } else {
            Status::InProgress {
                next: self.to_move(),
            }
        }
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// Silently ignored when `pos` is occupied or the current snapshot
    /// already has a winner - the legal-move gate, not a fault. On
    /// success, any snapshots beyond the current step are discarded
    /// before the new one is appended; a rewound-away future is
    /// unrecoverable.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn play(&mut self, pos: Position) {
        let board = self.current();
        if winning_line(board).is_some() || !board.is_empty(pos) {
            return;
        }

        let mut next = board.clone();
        next.set(pos, Square::Occupied(self.to_move()));

        self.history.truncate(self.step + 1);
        self.history.push(Snapshot {
            board: next,
            played: Some(pos),
        });
        self.step = self.history.len() - 1;
    }

    /// Rewinds (or fast-forwards) to the given step.
    ///
    /// Silently ignored when `step` is not a valid history index. Never
    /// truncates: entries past `step` stay jumpable until a new move is
    /// played. The step is also recorded for history-list emphasis.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        if step >= self.history.len() {
            return;
        }
        self.step = step;
        self.selected = Some(step);
    }

    /// Flips the display order of the move-history list.
    pub fn toggle_order(&mut self) {
        self.order = self.order.flipped();
    }

    /// The current step: an index into history, also the move number.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The history entry last jumped to, for list emphasis.
    ///
    /// An entry is emphasized only while the current step still equals
    /// it; playing a move advances the step and the emphasis lapses.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The display order of the move-history list.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// All snapshots from game start through the latest move.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.history
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
