use crate::error::Result;
use crate::board::MAX_DIMENSION;
use crate::{GameError, ScoringRules};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIVES: u32 = 3;

/// Everything needed to build a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: u32,
    pub cols: u32,
    pub mines: u32,
    pub lives: u32,
    pub hidden_lives: u32,
    pub scoring: ScoringRules,
}

impl GameConfig {
    pub fn new(rows: u32, cols: u32, mines: u32, lives: u32, hidden_lives: u32) -> Self {
        Self {
            rows,
            cols,
            mines,
            lives,
            hidden_lives,
            scoring: ScoringRules::default(),
        }
    }

    /// Custom dimensions, clamped so the result always validates: at least
    /// one row and column, and at least one safe cell.
    pub fn custom(rows: u32, cols: u32, mines: u32) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let mines = mines.min(rows.saturating_mul(cols) - 1);
        Self::new(rows, cols, mines, DEFAULT_LIVES, 0)
    }

    pub fn with_scoring(mut self, scoring: ScoringRules) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_lives(mut self, lives: u32, hidden_lives: u32) -> Self {
        self.lives = lives;
        self.hidden_lives = hidden_lives;
        self
    }

    pub fn total_cells(&self) -> u32 {
        self.rows.saturating_mul(self.cols)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::EmptyBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(GameError::BoardTooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.mines > self.total_cells() {
            return Err(GameError::TooManyMines {
                rows: self.rows,
                cols: self.cols,
                mines: self.mines,
            });
        }
        Ok(())
    }
}

/// Preset difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Expert,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Expert];

    pub fn config(self) -> GameConfig {
        match self {
            Level::Beginner => GameConfig::new(9, 9, 10, DEFAULT_LIVES, 1),
            Level::Intermediate => GameConfig::new(16, 16, 40, DEFAULT_LIVES, 2),
            Level::Expert => GameConfig::new(16, 30, 99, DEFAULT_LIVES, 3),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner (9x9, 10 mines)",
            Level::Intermediate => "Intermediate (16x16, 40 mines)",
            Level::Expert => "Expert (30x16, 99 mines)",
        }
    }
}
