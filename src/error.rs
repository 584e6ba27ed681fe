use crate::Position;
use thiserror::Error;

/// Errors raised while building a game.
///
/// Gameplay itself never fails: reveals and flags on bad coordinates, on
/// revealed cells or after the game has ended leave the snapshot unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one row and one column, got {rows}x{cols}")]
    EmptyBoard { rows: u32, cols: u32 },
    #[error("Board size {rows}x{cols} exceeds the coordinate range")]
    BoardTooLarge { rows: u32, cols: u32 },
    #[error("Too many mines ({mines}) for board size {rows}x{cols}")]
    TooManyMines { rows: u32, cols: u32, mines: u32 },
    #[error("Position {0:?} is out of bounds")]
    OutOfBounds(Position),
    #[error("Cell at {0:?} cannot hold both a mine and a life")]
    LifeOnMine(Position),
}

pub type Result<T> = std::result::Result<T, GameError>;
