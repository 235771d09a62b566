//! Grid coordinates and direction resolution.
//!
//! The board is a 5×5 grid indexed `(row, col)` with `(0, 0)` at the Study
//! corner. Orthogonal moves stay in bounds; the secret passage links the
//! two pairs of opposite corner rooms.

use serde::{Deserialize, Serialize};

/// Width and height of the grid.
pub const GRID_SIZE: u8 = 5;

const LAST: u8 = GRID_SIZE - 1;

/// A grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: u8,
    pub col: u8,
}

impl Coordinate {
    /// Create a coordinate. Bounds are not checked; see [`Coordinate::in_bounds`].
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check if the coordinate lies on the grid.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Row-major index into a flat grid.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * GRID_SIZE as usize + self.col as usize
    }

    /// Iterate over every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Coordinate::new(row, col)))
    }

    /// Check if this is one of the four corner rooms.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        (self.row == 0 || self.row == LAST) && (self.col == 0 || self.col == LAST)
    }

    /// Resolve the cell reached by moving in `direction`.
    ///
    /// Returns `None` when the direction leaves the grid, or when a secret
    /// passage is requested from anywhere but a corner.
    ///
    /// ```
    /// use clueless_engine::board::{Coordinate, Direction};
    ///
    /// let study = Coordinate::new(0, 0);
    /// assert_eq!(study.step(Direction::SecretPassageway), Some(Coordinate::new(4, 4)));
    /// assert_eq!(study.step(Direction::Up), None);
    /// ```
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Coordinate> {
        let Coordinate { row, col } = self;
        match direction {
            Direction::Up if row > 0 => Some(Coordinate::new(row - 1, col)),
            Direction::Down if row < LAST => Some(Coordinate::new(row + 1, col)),
            Direction::Left if col > 0 => Some(Coordinate::new(row, col - 1)),
            Direction::Right if col < LAST => Some(Coordinate::new(row, col + 1)),
            Direction::SecretPassageway => match (row, col) {
                // Diagonal swap between Study and Kitchen
                (0, 0) | (LAST, LAST) => Some(Coordinate::new(LAST - row, LAST - col)),
                // Cross swap between Lounge and Conservatory
                (0, LAST) | (LAST, 0) => Some(Coordinate::new(col, row)),
                _ => None,
            },
            _ => None,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    SecretPassageway,
}

impl Direction {
    /// All directions, in the order movement options are reported.
    pub const ALL: [Direction; 5] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::SecretPassageway,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthogonal_steps() {
        let center = Coordinate::new(2, 2);

        assert_eq!(center.step(Direction::Up), Some(Coordinate::new(1, 2)));
        assert_eq!(center.step(Direction::Down), Some(Coordinate::new(3, 2)));
        assert_eq!(center.step(Direction::Left), Some(Coordinate::new(2, 1)));
        assert_eq!(center.step(Direction::Right), Some(Coordinate::new(2, 3)));
        assert_eq!(center.step(Direction::SecretPassageway), None);
    }

    #[test]
    fn test_edges_block_steps() {
        assert_eq!(Coordinate::new(0, 2).step(Direction::Up), None);
        assert_eq!(Coordinate::new(4, 2).step(Direction::Down), None);
        assert_eq!(Coordinate::new(2, 0).step(Direction::Left), None);
        assert_eq!(Coordinate::new(2, 4).step(Direction::Right), None);
    }

    #[test]
    fn test_secret_passage_diagonal() {
        let study = Coordinate::new(0, 0);
        let kitchen = Coordinate::new(4, 4);

        assert_eq!(study.step(Direction::SecretPassageway), Some(kitchen));
        assert_eq!(kitchen.step(Direction::SecretPassageway), Some(study));
    }

    #[test]
    fn test_secret_passage_cross() {
        let lounge = Coordinate::new(0, 4);
        let conservatory = Coordinate::new(4, 0);

        assert_eq!(lounge.step(Direction::SecretPassageway), Some(conservatory));
        assert_eq!(conservatory.step(Direction::SecretPassageway), Some(lounge));
    }

    #[test]
    fn test_corners() {
        let corners: Vec<_> = Coordinate::all().filter(|c| c.is_corner()).collect();
        assert_eq!(
            corners,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 4),
                Coordinate::new(4, 0),
                Coordinate::new(4, 4),
            ]
        );
    }

    #[test]
    fn test_index_row_major() {
        assert_eq!(Coordinate::new(0, 0).index(), 0);
        assert_eq!(Coordinate::new(1, 0).index(), 5);
        assert_eq!(Coordinate::new(4, 4).index(), 24);
        assert!(!Coordinate::new(5, 0).in_bounds());
    }
}
