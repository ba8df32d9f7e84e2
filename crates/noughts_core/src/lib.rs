//! Pure tic-tac-toe game logic with snapshot history.
//!
//! The crate keeps every board state since the start of the game and lets
//! callers rewind to any prior snapshot, so a frontend can offer
//! time travel through the move list. All derived facts (whose turn it is,
//! whether the game is won or drawn) are recomputed from the history and
//! the current step on every query rather than stored.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Game, Position, Status};
//!
//! let mut game = Game::new();
//! game.play(Position::Center);
//! game.play(Position::TopLeft);
//! assert_eq!(game.step(), 2);
//!
//! // Rewind to after the first move; the later move stays jumpable.
//! game.jump_to(1);
//! assert!(matches!(game.status(), Status::InProgress { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
pub mod rules;
mod types;

pub use game::{Game, MoveOrder, Snapshot, Status};
pub use position::Position;
pub use rules::win::WinningLine;
pub use types::{Board, Player, Square};
