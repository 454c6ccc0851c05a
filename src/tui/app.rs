//! Application state for the terminal front end.
//!
//! The app holds no game rules: it forwards key presses to the engine
//! and keeps only what the screen needs (focus and selections).

use super::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use timeline_tictactoe::GameEngine;
use tracing::{debug, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move over the board.
    Board,
    /// Arrow keys move over the move list.
    History,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    focus: Focus,
    selected_cell: usize,
    selected_step: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application around an engine.
    pub fn new(engine: GameEngine) -> Self {
        let selected_cell = engine.current_board().cells() / 2;
        Self {
            engine,
            focus: Focus::Board,
            selected_cell,
            selected_step: 0,
            should_quit: false,
        }
    }

    /// The engine being played.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Pane with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted board cell.
    pub fn selected_cell(&self) -> usize {
        self.selected_cell
    }

    /// Highlighted move-list entry.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => {
                self.engine.restart();
                self.sync_step();
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.sync_step();
            }
            code => {
                if let Some(cell) = digit_cell(code) {
                    self.play(cell);
                    return;
                }
                match self.focus {
                    Focus::Board => self.handle_board_key(code),
                    Focus::History => self.handle_history_key(code),
                }
            }
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.selected_cell),
            code => {
                self.selected_cell = move_cursor(self.selected_cell, self.engine.side(), code);
            }
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let last = self.engine.history().len() - 1;
        match key {
            KeyCode::Up => self.selected_step = self.selected_step.saturating_sub(1),
            KeyCode::Down => self.selected_step = (self.selected_step + 1).min(last),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.engine.jump_to(self.selected_step);
                debug!(step = self.selected_step, "Jump requested");
            }
            _ => {}
        }
    }

    fn play(&mut self, cell: usize) {
        debug!(cell, "Move requested");
        self.engine.apply_move(cell);
        self.sync_step();
    }

    fn sync_step(&mut self) {
        self.selected_step = self.engine.cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timeline_tictactoe::{Player, Square};

    #[test]
    fn test_enter_plays_selected_cell() {
        let mut app = App::new(GameEngine::default());
        assert_eq!(app.selected_cell(), 4);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.engine().current_board().get(4),
            Ok(Square::Occupied(Player::X))
        );
    }

    #[test]
    fn test_digit_plays_cell() {
        let mut app = App::new(GameEngine::default());
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('9'));
        assert_eq!(app.engine().cursor(), 2);
        assert_eq!(app.selected_step(), 2);
    }

    #[test]
    fn test_history_navigation_jumps() {
        let mut app = App::new(GameEngine::default());
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('2'));
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.engine().cursor(), 0);
        assert_eq!(app.engine().history().len(), 3);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new(GameEngine::default());
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('n'));
        assert_eq!(app.engine().history().len(), 1);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
