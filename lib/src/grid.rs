use crate::rle;
use rlelife_rules::Rule;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Offsets of the 8 cells in the Moore neighborhood, as `(row, col)`.
const MOORE_NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A bounded two-dimensional grid of dead or living cells.
///
/// Cells are addressed by `(row, col)`, with `(0, 0)` at the top left corner.
/// The size of a grid never changes after it is created. There is no
/// wraparound: cells outside the grid do not exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    /// Number of columns.
    width: usize,

    /// Number of rows.
    height: usize,

    /// The cells in row-major order. `true` means alive.
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid where every cell is dead.
    ///
    /// # Panics
    ///
    /// Panics if the width or the height is zero, or if the number of cells
    /// overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid size must be positive");
        let Some(len) = width.checked_mul(height) else {
            panic!("grid size {width}x{height} is too large");
        };

        Self {
            width,
            height,
            cells: vec![false; len],
        }
    }

    /// Number of columns.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[inline]
    const fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    /// Get the state of a cell.
    ///
    /// Returns [`None`] if the cell is outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Whether the cell is inside the grid and alive.
    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    /// Set the state of a cell.
    ///
    /// Returns `false` and does nothing if the cell is outside the grid.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = alive;
                true
            }
            None => false,
        }
    }

    /// Count the living cells among the 8 neighbors of a cell.
    ///
    /// Neighbors outside the grid are not counted.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for (dr, dc) in MOORE_NEIGHBORHOOD {
            if let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) {
                if self.is_alive(r, c) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Whether every cell is dead.
    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Iterate over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    /// Iterate over the coordinates `(row, col)` of the living cells,
    /// in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| (i / self.width, i % self.width))
    }

    /// Encode the grid in RLE format with the given rule in the header.
    pub fn to_rle(&self, rule: &Rule) -> String {
        rle::encode(self, rule, &[])
    }
}

/// Draws `o` for living cells and `.` for dead cells, one row per line.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &alive in row {
                f.write_str(if alive { "o" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut grid = Grid::new(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert!(grid.is_empty());

        assert!(grid.set(2, 3, true));
        assert_eq!(grid.get(2, 3), Some(true));
        assert_eq!(grid.get(3, 2), None);
        assert_eq!(grid.get(0, 4), None);
        assert!(!grid.set(3, 0, true));
        assert!(!grid.set(0, 4, true));
        assert_eq!(grid.population(), 1);
        assert!(!grid.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_zero_size() {
        Grid::new(0, 3);
    }

    #[test]
    #[should_panic]
    fn test_size_overflow() {
        Grid::new(usize::MAX, 2);
    }

    #[test]
    fn test_count_neighbors() {
        let mut grid = Grid::new(3, 3);
        for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)] {
            grid.set(row, col, true);
        }
        assert_eq!(grid.count_neighbors(1, 1), 8);
        // The cell itself is not counted.
        grid.set(1, 1, true);
        assert_eq!(grid.count_neighbors(1, 1), 8);

        // Corners only see the cells inside the grid.
        assert_eq!(grid.count_neighbors(0, 0), 3);
        assert_eq!(grid.count_neighbors(2, 2), 3);
        assert_eq!(grid.count_neighbors(0, 1), 5);
    }

    #[test]
    fn test_count_neighbors_no_wraparound() {
        let mut grid = Grid::new(5, 5);
        grid.set(0, 0, true);
        assert_eq!(grid.count_neighbors(4, 4), 0);
        assert_eq!(grid.count_neighbors(0, 4), 0);
        assert_eq!(grid.count_neighbors(4, 0), 0);
        assert_eq!(grid.count_neighbors(1, 1), 1);
    }

    #[test]
    fn test_alive_cells() {
        let mut grid = Grid::new(3, 2);
        grid.set(1, 0, true);
        grid.set(0, 2, true);
        assert_eq!(grid.alive_cells().collect::<Vec<_>>(), vec![(0, 2), (1, 0)]);
        assert_eq!(grid.to_string(), "..o\no..\n");
    }
}
