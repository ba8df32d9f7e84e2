//! Application state and key handling.

use crossterm::event::KeyCode;
use noughts_core::{Game, Position, Status};
use tracing::debug;

use crate::input;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor; Enter plays there.
    Board,
    /// Arrow keys move the move-list cursor; Enter jumps there.
    History,
}

impl Focus {
    fn flipped(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Outcome of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Tear down the terminal and exit.
    Quit,
}

/// Main application state: the game plus UI-only cursors.
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    list_cursor: usize,
}

impl App {
    /// Creates a new application.
    pub fn new(descending: bool) -> Self {
        let mut game = Game::new();
        if descending {
            game.toggle_order();
        }
        Self {
            game,
            cursor: Position::Center,
            focus: Focus::Board,
            list_cursor: 0,
        }
    }

    /// The game state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// The move-list cursor (a history step, not a display row).
    pub fn list_cursor(&self) -> usize {
        self.list_cursor
    }

    /// The status line: next player, winner, or draw.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            Status::InProgress { next } => format!("Next Player: {next}"),
            Status::Won(win) => format!("Winner: {}", win.player()),
            Status::Draw => "Draw".to_string(),
        }
    }

    /// Applies one key press to the application state.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        debug!(?key, "Handling key");

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('o') => self.game.toggle_order(),
            KeyCode::Tab => self.focus = self.focus.flipped(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Keys 1-9 play directly at that square.
                if let Some(digit) = c.to_digit(10) {
                    if let Some(pos) = (digit as usize)
                        .checked_sub(1)
                        .and_then(Position::from_index)
                    {
                        self.game.play(pos);
                    }
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cursor = input::move_cursor(self.cursor, key),
                Focus::History => self.move_list_cursor(key),
            },
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.game.play(self.cursor),
                Focus::History => self.game.jump_to(self.list_cursor),
            },
            _ => {}
        }

        // Playing from a rewound state can shrink the history.
        self.list_cursor = self.list_cursor.min(self.game.snapshots().len() - 1);

        Control::Continue
    }

    fn move_list_cursor(&mut self, key: KeyCode) {
        let last = self.game.snapshots().len() - 1;
        match key {
            KeyCode::Up => self.list_cursor = self.list_cursor.saturating_sub(1),
            KeyCode::Down => self.list_cursor = (self.list_cursor + 1).min(last),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::MoveOrder;

    #[test]
    fn test_digit_key_plays_square() {
        let mut app = App::new(false);
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().step(), 1);
        assert_eq!(app.game().snapshots()[1].played(), Some(Position::Center));
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = App::new(false);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.game().snapshots()[1].played(),
            Some(Position::TopCenter)
        );
    }

    #[test]
    fn test_repeated_digit_is_ignored() {
        let mut app = App::new(false);
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().step(), 1);
    }

    #[test]
    fn test_toggle_key_flips_order() {
        let mut app = App::new(false);
        assert_eq!(app.game().order(), MoveOrder::Ascending);
        app.handle_key(KeyCode::Char('o'));
        assert_eq!(app.game().order(), MoveOrder::Descending);
    }

    #[test]
    fn test_descending_flag_starts_reversed() {
        let app = App::new(true);
        assert_eq!(app.game().order(), MoveOrder::Descending);
    }

    #[test]
    fn test_tab_switches_focus_and_enter_jumps() {
        let mut app = App::new(false);
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('2'));

        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);

        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().step(), 1);
        assert_eq!(app.game().selected(), Some(1));
    }

    #[test]
    fn test_list_cursor_clamped_after_truncation() {
        let mut app = App::new(false);
        for key in ['1', '2', '3', '4'] {
            app.handle_key(KeyCode::Char(key));
        }

        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter); // jump to step 1
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Char('9')); // truncates the future

        assert!(app.list_cursor() < app.game().snapshots().len());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(false);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Control::Quit);
        assert_eq!(app.handle_key(KeyCode::Char('x')), Control::Continue);
    }
}
