//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board against the rules. Kept separate
//! from board storage and from the history state machine so the same
//! evaluation runs for move gating and for status display.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinningLine, winning_line};
