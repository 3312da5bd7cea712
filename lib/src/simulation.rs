use crate::{
    config::Config, error::ConfigError, evolution::Evolution, grid::Grid, pattern::Pattern,
};
use rlelife_rules::Rule;

/// Status of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The initial pattern has not been placed on the board yet.
    NotStarted,
    /// The last step changed some cells.
    Evolving,
    /// The last step changed nothing, and some cells are alive.
    StillLife,
    /// The last step changed nothing, and all cells are dead.
    Extinct,
}

/// A board on which a pattern evolves, one generation at a time.
///
/// Each step returns an [`Evolution`] listing the cells that changed, so that
/// a renderer only needs to redraw those cells.
///
/// # Example
///
/// ```
/// use rlelife_lib::{Pattern, Simulation, Status};
///
/// let blinker = Pattern::builtin("blinker").unwrap();
/// let mut simulation = Simulation::new(5, 5, blinker);
///
/// // Place the pattern at the center of the board.
/// let evolution = simulation.initial_evolution();
/// assert_eq!(evolution.len(), 3);
///
/// // A blinker turns 2 cells off and 2 cells on in each generation.
/// let evolution = simulation.advance();
/// assert_eq!(evolution.len(), 4);
/// assert_eq!(simulation.generation(), 1);
/// assert_eq!(simulation.status(), Status::Evolving);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    /// The board. Its size never changes.
    grid: Grid,

    /// The initial pattern, which also gives the rule.
    pattern: Pattern,

    /// Number of generations since the initial pattern.
    generation: u64,

    /// Status after the last step.
    status: Status,
}

impl Simulation {
    /// Create a simulation on an empty board of the given size.
    ///
    /// The pattern is not placed on the board until
    /// [`initial_evolution`](Simulation::initial_evolution) is called.
    ///
    /// The pattern should fit on the board, and its rule should be supported.
    /// Use [`try_new`](Simulation::try_new) to check this.
    ///
    /// # Panics
    ///
    /// Panics if the width or the height is zero.
    pub fn new(width: usize, height: usize, pattern: Pattern) -> Self {
        Self {
            grid: Grid::new(width, height),
            pattern,
            generation: 0,
            status: Status::NotStarted,
        }
    }

    /// Create a simulation from a configuration, after checking that the
    /// pattern fits on the board and that its rule is supported.
    pub fn try_new(config: &Config, pattern: Pattern) -> Result<Self, ConfigError> {
        let config = config.clone().check()?;
        config.check_pattern(&pattern)?;
        Ok(Self::new(config.width, config.height, pattern))
    }

    /// Width of the board.
    #[inline]
    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    /// Height of the board.
    #[inline]
    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    /// The board.
    #[inline]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The initial pattern.
    #[inline]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The rule of the simulation.
    #[inline]
    pub const fn rule(&self) -> &Rule {
        self.pattern.rule()
    }

    /// Number of generations since the initial pattern.
    #[inline]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Status after the last step.
    #[inline]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Whether any cell on the board is alive.
    #[inline]
    pub fn has_life(&self) -> bool {
        !self.grid.is_empty()
    }

    /// Number of living cells on the board.
    #[inline]
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Place the initial pattern at the center of the board.
    ///
    /// Returns the cells that became alive. This should be called once,
    /// before the first [`advance`](Simulation::advance).
    ///
    /// If the pattern is larger than the board, the cells that fall outside
    /// the board are dropped.
    pub fn initial_evolution(&mut self) -> Evolution {
        let mut evolution = Evolution::new();

        let row_offset = (self.height() as isize - self.pattern.height() as isize).div_euclid(2);
        let col_offset = (self.width() as isize - self.pattern.width() as isize).div_euclid(2);

        let mut dropped = 0;
        for (row, col) in self.pattern.grid().alive_cells() {
            let target = (
                usize::try_from(row as isize + row_offset),
                usize::try_from(col as isize + col_offset),
            );
            match target {
                (Ok(row), Ok(col)) if self.grid.set(row, col, true) => {
                    evolution.evolve_cell(row, col, true);
                }
                _ => dropped += 1,
            }
        }

        if dropped > 0 {
            log::warn!(
                "The pattern ({}x{}) does not fit on the board ({}x{}), {} cells were dropped.",
                self.pattern.width(),
                self.pattern.height(),
                self.width(),
                self.height(),
                dropped
            );
        }

        self.status = Status::Evolving;

        evolution
    }

    /// Advance the board by one generation.
    ///
    /// Returns the cells that changed. The next state of every cell is
    /// computed from the current board before any cell is updated.
    ///
    /// # Panics
    ///
    /// Panics if the rule is [`Unsupported`](Rule::Unsupported).
    pub fn advance(&mut self) -> Evolution {
        let rule = self.pattern.rule();
        let mut evolution = Evolution::new();

        for row in 0..self.grid.height() {
            for col in 0..self.grid.width() {
                let previously_alive = self.grid.is_alive(row, col);
                let neighbors = self.grid.count_neighbors(row, col);
                let alive = rule.transition(previously_alive, neighbors);
                if alive != previously_alive {
                    evolution.evolve_cell(row, col, alive);
                }
            }
        }

        for cell in &evolution {
            self.grid.set(cell.row, cell.col, cell.alive);
        }

        self.generation += 1;
        self.status = if evolution.has_changed() {
            Status::Evolving
        } else if self.has_life() {
            Status::StillLife
        } else {
            Status::Extinct
        };

        log::debug!(
            "Generation {}: {} cells changed, status {:?}",
            self.generation,
            evolution.len(),
            self.status
        );

        evolution
    }

    /// Encode the current board in RLE format.
    pub fn to_rle(&self) -> String {
        let name = format!("#N {} (generation {})", self.pattern.name(), self.generation);
        crate::rle::encode(&self.grid, self.rule(), &[name])
    }
}
