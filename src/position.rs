use itertools::iproduct;
use serde::{Deserialize, Serialize};

/// A grid coordinate. `x` is the column and `y` the row.
///
/// Coordinates are signed so that any pointer-derived value can be passed to
/// the engine; positions outside the board are simply ignored there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The 8 surrounding positions, without any bounds check.
    pub fn neighbors(&self) -> impl Iterator<Item = Position> + '_ {
        iproduct!(-1..=1, -1..=1)
            .filter(|&(dy, dx)| dx != 0 || dy != 0)
            .map(move |(dy, dx)| Position::new(self.x + dx, self.y + dy))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(5, 10);
        assert_eq!(pos.x, 5);
        assert_eq!(pos.y, 10);
        assert_eq!(Position::from((5, 10)), pos);
    }

    #[test]
    fn test_neighbors() {
        let pos = Position::new(1, 1);
        let neighbors: Vec<Position> = pos.neighbors().collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&pos));
        assert!(neighbors.contains(&Position::new(0, 0))); // Top-left
        assert!(neighbors.contains(&Position::new(1, 0))); // Top
        assert!(neighbors.contains(&Position::new(2, 0))); // Top-right
        assert!(neighbors.contains(&Position::new(0, 1))); // Left
        assert!(neighbors.contains(&Position::new(2, 1))); // Right
        assert!(neighbors.contains(&Position::new(0, 2))); // Bottom-left
        assert!(neighbors.contains(&Position::new(1, 2))); // Bottom
        assert!(neighbors.contains(&Position::new(2, 2))); // Bottom-right
    }

    #[test]
    fn test_neighbors_of_origin_go_negative() {
        let neighbors: Vec<Position> = Position::new(0, 0).neighbors().collect();
        assert!(neighbors.contains(&Position::new(-1, -1)));
        assert_eq!(neighbors.iter().filter(|p| p.x >= 0 && p.y >= 0).count(), 3);
    }
}
