use crate::render::RenderSink;
use color_eyre::Result;
use rlelife_lib::{Simulation, Status};
use std::fmt::{self, Display, Formatter};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed, and some cells are alive.
    StillLife,
    /// Nothing changed, and all cells are dead.
    Extinct,
    /// The maximum number of generations was reached.
    GenerationCap,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::StillLife => "The pattern became still.",
            Self::Extinct => "All cells died.",
            Self::GenerationCap => "The maximum number of generations was reached.",
        };
        f.write_str(s)
    }
}

/// Runs a simulation and sends each generation to a render sink.
#[derive(Debug)]
pub struct Driver<S> {
    simulation: Simulation,
    sink: S,
    /// Generations `0..max_generations` are shown.
    max_generations: u64,
    outcome: Option<Outcome>,
}

impl<S: RenderSink> Driver<S> {
    /// Create a new [`Driver`].
    pub const fn new(simulation: Simulation, sink: S, max_generations: u64) -> Self {
        Self {
            simulation,
            sink,
            max_generations,
            outcome: None,
        }
    }

    /// The simulation.
    pub const fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// The render sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Why the run stopped, if it did.
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Whether the run stopped.
    pub const fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// The title of the current generation.
    fn title(&self) -> String {
        let name = match self.simulation.pattern().name() {
            "" => "Untitled",
            name => name,
        };
        format!("{name} - generation {}", self.simulation.generation())
    }

    /// Place the initial pattern and show it as generation 0.
    pub fn start(&mut self) -> Result<()> {
        log::info!(
            "Starting a {}x{} board with rule {} ({}).",
            self.simulation.width(),
            self.simulation.height(),
            self.simulation.rule(),
            self.simulation.rule().name()
        );

        self.sink
            .initialize_canvas(self.simulation.width(), self.simulation.height())?;
        let evolution = self.simulation.initial_evolution();
        self.sink.render_title(&self.title())?;
        self.sink.render_evolution(&evolution)?;

        if self.max_generations <= 1 {
            self.finish(Outcome::GenerationCap);
        }

        Ok(())
    }

    /// Advance by one generation and show it.
    ///
    /// Returns the outcome once the run stops. Does nothing if it already stopped.
    pub fn step(&mut self) -> Result<Option<Outcome>> {
        if self.outcome.is_some() {
            return Ok(self.outcome);
        }

        let evolution = self.simulation.advance();

        if evolution.is_empty() {
            let outcome = match self.simulation.status() {
                Status::Extinct => Outcome::Extinct,
                _ => Outcome::StillLife,
            };
            self.finish(outcome);
            return Ok(self.outcome);
        }

        self.sink.render_title(&self.title())?;
        self.sink.render_evolution(&evolution)?;

        if self.simulation.generation() + 1 >= self.max_generations {
            self.finish(Outcome::GenerationCap);
        }

        Ok(self.outcome)
    }

    fn finish(&mut self, outcome: Outcome) {
        log::info!(
            "Stopped at generation {} with {} living cells: {outcome}",
            self.simulation.generation(),
            self.simulation.population()
        );
        self.outcome = Some(outcome);
    }
}
