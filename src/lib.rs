//! Timeline tic-tac-toe library.
//!
//! A tic-tac-toe engine whose history of board snapshots can be
//! navigated: jump back to any earlier position, and play on from
//! there (discarding the positions that followed it).
//!
//! # Architecture
//!
//! - **Board**: N×N grid of squares, copied on every placement
//! - **Rules**: pure win/draw detection over the board's lines
//! - **Engine**: linear history, cursor, and derived status/move list
//! - **Front end**: the `tictactoe` binary renders the engine in a terminal
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::GameEngine;
//!
//! let mut engine = GameEngine::default();
//! engine.apply_move(4);
//! engine.apply_move(0);
//! engine.jump_to(1);
//! assert_eq!(engine.status().to_string(), "Next player: O");
//! assert_eq!(engine.move_list()[1].label(), "Go to move (2, 1)");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod games;

pub use config::{ConfigError, GameConfig};

pub use games::tictactoe::{
    Board, EngineError, ErrorKind, GameEngine, History, HistoryEntry, MAX_SIDE, Mark,
    MoveListEntry, Outcome, Phase, Player, SnapshotError, Square, Status, detect_outcome,
};
