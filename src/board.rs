use crate::error::Result;
use crate::{Cell, GameError, Position};
use ndarray::{Array2, ArrayView1, Zip};
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Largest row or column count; every cell must be addressable by a [`Position`].
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// The `rows x cols` grid of cells, stored row-major and indexed `[y, x]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
    mines_count: u32,
}

impl Board {
    /// Allocates a board of blank cells, each at its own coordinates.
    pub fn new(rows: u32, cols: u32) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::EmptyBoard { rows, cols });
        }
        if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(GameError::BoardTooLarge { rows, cols });
        }

        let cells = Array2::from_shape_fn((rows as usize, cols as usize), |(y, x)| {
            Cell::new(Position::new(x as i32, y as i32))
        });

        Ok(Board {
            cells,
            mines_count: 0,
        })
    }

    pub fn rows(&self) -> u32 {
        self.cells.nrows() as u32
    }

    pub fn cols(&self) -> u32 {
        self.cells.ncols() as u32
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (u32, u32) {
        (self.rows(), self.cols())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn mines_count(&self) -> u32 {
        self.mines_count
    }

    pub fn is_within_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.cols() as i32 && pos.y >= 0 && pos.y < self.rows() as i32
    }

    fn index_of(&self, pos: Position) -> Option<(usize, usize)> {
        self.is_within_bounds(pos)
            .then(|| (pos.y as usize, pos.x as usize))
    }

    fn position_of(&self, flat: usize) -> Position {
        let cols = self.cells.ncols();
        Position::new((flat % cols) as i32, (flat / cols) as i32)
    }

    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.index_of(pos).map(|idx| &self.cells[idx])
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        let idx = self.index_of(pos)?;
        Some(&mut self.cells[idx])
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = ArrayView1<'_, Cell>> {
        self.cells.outer_iter()
    }

    /// Mines `count` distinct cells chosen uniformly at random.
    ///
    /// Sampling is a partial Fisher-Yates over the flat index range, so a
    /// dense or completely full board terminates like any other.
    pub fn place_mines<R: Rng + ?Sized>(&mut self, rng: &mut R, count: u32) -> Result<()> {
        if count as usize > self.len() {
            return Err(GameError::TooManyMines {
                rows: self.rows(),
                cols: self.cols(),
                mines: count,
            });
        }

        for flat in index::sample(rng, self.len(), count as usize) {
            let pos = self.position_of(flat);
            self.set_mine_at(pos)?;
        }
        Ok(())
    }

    /// Marks up to `requested` random non-mine cells as hidden lives.
    ///
    /// Returns how many were actually placed, which is less than requested
    /// when there are not enough free safe cells.
    pub fn place_lives<R: Rng + ?Sized>(&mut self, rng: &mut R, requested: u32) -> u32 {
        let mut candidates: Vec<Position> = self
            .iter()
            .filter(|cell| !cell.is_mine() && !cell.is_life())
            .map(Cell::position)
            .collect();

        let actual = (requested as usize).min(candidates.len());
        if actual < requested as usize {
            log::warn!(
                "Requested {} hidden lives but only {} safe cells are free",
                requested,
                actual
            );
        }

        let (chosen, _) = candidates.partial_shuffle(rng, actual);
        for &pos in chosen.iter() {
            if let Some(cell) = self.get_mut(pos) {
                cell.set_life();
            }
        }
        actual as u32
    }

    pub fn set_mine_at(&mut self, pos: Position) -> Result<()> {
        let cell = self.get_mut(pos).ok_or(GameError::OutOfBounds(pos))?;
        if !cell.is_mine() {
            cell.set_mine();
            self.mines_count += 1;
        }
        Ok(())
    }

    pub fn set_life_at(&mut self, pos: Position) -> Result<()> {
        let cell = self.get_mut(pos).ok_or(GameError::OutOfBounds(pos))?;
        if cell.is_mine() {
            return Err(GameError::LifeOnMine(pos));
        }
        cell.set_life();
        Ok(())
    }

    /// Mines among the in-bounds 8-neighborhood of `pos`.
    pub fn count_adjacent_mines(&self, pos: Position) -> u8 {
        pos.neighbors()
            .filter_map(|p| self.get(p))
            .filter(|cell| cell.is_mine())
            .count() as u8
    }

    /// Stores the adjacent mine count on every non-mine cell.
    pub fn compute_neighbor_counts(&mut self) {
        let counts = Array2::from_shape_fn(self.cells.dim(), |(y, x)| {
            self.count_adjacent_mines(Position::new(x as i32, y as i32))
        });

        Zip::from(&mut self.cells)
            .and(&counts)
            .for_each(|cell, &count| {
                if !cell.is_mine() {
                    cell.set_neighbor_count(count);
                }
            });
    }

    pub fn reveal_all_mines(&mut self) {
        self.cells
            .iter_mut()
            .filter(|cell| cell.is_mine())
            .for_each(Cell::reveal);
    }

    /// True once every non-mine cell is revealed. Mines are ignored.
    pub fn all_safe_revealed(&self) -> bool {
        self.iter().all(|cell| cell.is_mine() || cell.is_revealed())
    }

    pub fn flagged_count(&self) -> u32 {
        self.iter().filter(|cell| cell.is_flagged()).count() as u32
    }

    pub fn revealed_count(&self) -> u32 {
        self.iter().filter(|cell| cell.is_revealed()).count() as u32
    }

    pub fn hidden_safe_count(&self) -> u32 {
        self.iter()
            .filter(|cell| !cell.is_mine() && !cell.is_revealed())
            .count() as u32
    }
}
