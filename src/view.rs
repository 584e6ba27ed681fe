//! Read-only projections of a [`Game`] for rendering layers.

use crate::{Cell, Game};
use serde::{Deserialize, Serialize};

/// Full state of one cell, mines and pickups included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    pub x: i32,
    pub y: i32,
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub neighbor_mines: u8,
    pub is_life: bool,
}

impl From<&Cell> for CellView {
    fn from(cell: &Cell) -> Self {
        Self {
            x: cell.x(),
            y: cell.y(),
            is_mine: cell.is_mine(),
            is_revealed: cell.is_revealed(),
            is_flagged: cell.is_flagged(),
            neighbor_mines: cell.neighbor_mines(),
            is_life: cell.is_life(),
        }
    }
}

/// What a player is allowed to see of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TileView {
    Hidden,
    Flagged,
    Revealed { neighbor_mines: u8, life: bool },
    Mine,
}

impl From<&Cell> for TileView {
    fn from(cell: &Cell) -> Self {
        match (cell.is_revealed(), cell.is_flagged(), cell.is_mine()) {
            (true, _, true) => TileView::Mine,
            (true, _, false) => TileView::Revealed {
                neighbor_mines: cell.neighbor_mines(),
                life: cell.is_life(),
            },
            (false, true, _) => TileView::Flagged,
            (false, false, _) => TileView::Hidden,
        }
    }
}

impl Game {
    /// Every cell with its complete state, one `Vec` per row.
    pub fn snapshot(&self) -> Vec<Vec<CellView>> {
        self.board()
            .rows_iter()
            .map(|row| row.iter().map(CellView::from).collect())
            .collect()
    }

    /// The board as a player sees it. Hidden mines and pickups stay hidden.
    pub fn player_view(&self) -> Vec<Vec<TileView>> {
        self.board()
            .rows_iter()
            .map(|row| row.iter().map(TileView::from).collect())
            .collect()
    }
}
