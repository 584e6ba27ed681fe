//! Minesweeper with lives, hidden life pickups and scoring.
//!
//! The engine is snapshot based: every action on a [`Game`] returns a new
//! `Game` and leaves the old one untouched.
//!
//! ```
//! use lifesweeper::{Game, GameState, Position};
//!
//! let game = Game::create(2, 2, 0, 3, 0).unwrap();
//! let game = game.reveal_at(Position::new(0, 0));
//! assert_eq!(game.state(), GameState::Won);
//! ```

pub mod board;
pub mod cell;
pub mod config;
pub mod error;
pub mod game;
pub mod lives;
pub mod position;
pub mod score;
pub mod view;

pub use board::Board;
pub use cell::Cell;
pub use config::{GameConfig, Level, DEFAULT_LIVES};
pub use error::GameError;
pub use game::{Action, Game, GameState};
pub use lives::Lives;
pub use position::Position;
pub use score::{Score, ScoringRules};
pub use view::{CellView, TileView};
