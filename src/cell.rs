use crate::Position;

/// State of a single grid position.
///
/// Mines and life pickups are assigned once while the board is generated;
/// afterwards only the reveal and flag state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    is_mine: bool,
    is_revealed: bool,
    is_flagged: bool,
    neighbor_mines: u8,
    is_life: bool,
    flag_scored: bool,
}

impl Cell {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            is_mine: false,
            is_revealed: false,
            is_flagged: false,
            neighbor_mines: 0,
            is_life: false,
            flag_scored: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    /// Mines in the 8-neighborhood. Always zero for mine cells.
    pub fn neighbor_mines(&self) -> u8 {
        self.neighbor_mines
    }

    pub fn is_life(&self) -> bool {
        self.is_life
    }

    /// Whether the first-correct-flag bonus has already been paid for this cell.
    pub fn flag_scored(&self) -> bool {
        self.flag_scored
    }

    pub fn reveal(&mut self) {
        self.is_revealed = true;
    }

    /// Flips the flag. Revealed cells cannot be flagged.
    pub fn toggle_flag(&mut self) {
        if !self.is_revealed {
            self.is_flagged = !self.is_flagged;
        }
    }

    pub(crate) fn set_mine(&mut self) {
        self.is_mine = true;
        self.neighbor_mines = 0;
    }

    pub(crate) fn set_life(&mut self) {
        self.is_life = true;
    }

    pub(crate) fn set_neighbor_count(&mut self, count: u8) {
        self.neighbor_mines = count;
    }

    pub(crate) fn mark_flag_scored(&mut self) {
        self.flag_scored = true;
    }
}
