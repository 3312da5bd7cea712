#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cell whose state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvolvedCell {
    /// Row of the cell.
    pub row: usize,
    /// Column of the cell.
    pub col: usize,
    /// The new state of the cell.
    pub alive: bool,
}

impl EvolvedCell {
    /// Create a changed cell.
    #[inline]
    pub const fn new(row: usize, col: usize, alive: bool) -> Self {
        Self { row, col, alive }
    }
}

/// The cells that changed state in one step of a simulation.
///
/// Cells are kept in the order they were found, which is row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Evolution {
    cells: Vec<EvolvedCell>,
}

impl Evolution {
    /// Create an empty evolution.
    #[inline]
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Record that a cell changed to the given state.
    #[inline]
    pub fn evolve_cell(&mut self, row: usize, col: usize, alive: bool) {
        self.cells.push(EvolvedCell::new(row, col, alive));
    }

    /// Whether any cell changed.
    #[inline]
    pub fn has_changed(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Whether no cell changed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of changed cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// The changed cells.
    #[inline]
    pub fn cells(&self) -> &[EvolvedCell] {
        &self.cells
    }

    /// Iterate over the changed cells.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, EvolvedCell> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a Evolution {
    type Item = &'a EvolvedCell;
    type IntoIter = std::slice::Iter<'a, EvolvedCell>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Evolution {
    type Item = EvolvedCell;
    type IntoIter = std::vec::IntoIter<EvolvedCell>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl FromIterator<EvolvedCell> for Evolution {
    fn from_iter<T: IntoIterator<Item = EvolvedCell>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
