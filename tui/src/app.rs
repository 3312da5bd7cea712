use crate::{
    driver::{Driver, Outcome},
    event::TermEvent,
    render::Canvas,
};
use color_eyre::Result;
use crossterm::event::KeyCode;
use rlelife_lib::Simulation;

/// Application modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Generations are shown one after another.
    Running,
    /// The run is paused by the user, or finished.
    #[default]
    Paused,
    /// Ask the user to confirm the quit.
    Quit,
    /// Display the usage.
    Usage,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Runs the simulation and keeps the board to draw.
    pub driver: Driver<Canvas>,
    /// Current mode of the application.
    pub mode: Mode,
    /// Whether the application should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new [`App`], and show the initial pattern.
    ///
    /// The run starts right away.
    pub fn new(simulation: Simulation, max_generations: u64) -> Result<Self> {
        let mut driver = Driver::new(simulation, Canvas::new(), max_generations);
        driver.start()?;
        let mode = if driver.is_finished() {
            Mode::Paused
        } else {
            Mode::Running
        };

        Ok(Self {
            driver,
            mode,
            should_quit: false,
        })
    }

    /// Why the run stopped, if it did.
    pub const fn outcome(&self) -> Option<Outcome> {
        self.driver.outcome()
    }

    /// Resume the run, unless it is finished.
    fn start(&mut self) {
        if self.mode == Mode::Paused && !self.driver.is_finished() {
            self.mode = Mode::Running;
        }
    }

    /// Pause the run.
    fn pause(&mut self) {
        if self.mode == Mode::Running {
            self.mode = Mode::Paused;
        }
    }

    /// Show the next generation.
    ///
    /// The run is paused when it stops.
    pub fn step(&mut self) -> Result<()> {
        if self.driver.step()?.is_some() {
            self.pause();
        }
        Ok(())
    }

    /// Print the last generation in RLE format.
    ///
    /// This function is called when exiting the application.
    pub fn print_board(&self) {
        if let Some(outcome) = self.outcome() {
            println!("#C {outcome}");
        }
        print!("{}", self.driver.simulation().to_rle());
    }

    /// Update the application state according to the given event.
    pub fn update(&mut self, event: TermEvent) -> Result<()> {
        let TermEvent::KeyPress(key) = event else {
            return Ok(());
        };

        match self.mode {
            Mode::Running => match key {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                    self.pause();
                    self.mode = Mode::Quit;
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.pause();
                }
                KeyCode::Char('h' | 'H') => {
                    self.pause();
                    self.mode = Mode::Usage;
                }
                _ => {}
            },
            Mode::Paused => match key {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                    self.mode = Mode::Quit;
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.start();
                }
                KeyCode::Char('n' | 'N') => {
                    self.step()?;
                }
                KeyCode::Char('h' | 'H') => {
                    self.mode = Mode::Usage;
                }
                _ => {}
            },
            Mode::Quit => match key {
                KeyCode::Char('y' | 'Y') => {
                    self.should_quit = true;
                }
                KeyCode::Char('n' | 'N') => {
                    self.mode = Mode::Paused;
                }
                _ => {}
            },
            Mode::Usage => match key {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                    self.mode = Mode::Quit;
                }
                KeyCode::Char('h' | 'H' | ' ') | KeyCode::Enter => {
                    self.mode = Mode::Paused;
                }
                _ => {}
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlelife_lib::Pattern;

    fn app(max_generations: u64) -> App {
        let blinker = Pattern::builtin("blinker").unwrap();
        App::new(Simulation::new(5, 5, blinker), max_generations).unwrap()
    }

    fn press(app: &mut App, key: KeyCode) {
        app.update(TermEvent::KeyPress(key)).unwrap();
    }

    #[test]
    fn test_pause_and_step() {
        let mut app = app(10);
        assert_eq!(app.mode, Mode::Running);
        assert_eq!(app.driver.sink().board().unwrap().population(), 3);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.mode, Mode::Paused);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.driver.simulation().generation(), 1);
        assert_eq!(
            app.driver.sink().board().unwrap(),
            app.driver.simulation().grid()
        );

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Running);
    }

    #[test]
    fn test_quit() {
        let mut app = app(10);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Quit);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.mode, Mode::Paused);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_usage() {
        let mut app = app(10);
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.mode, Mode::Usage);
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.mode, Mode::Paused);
    }

    #[test]
    fn test_finished_run_stays_paused() {
        let mut app = app(2);
        app.step().unwrap();
        assert_eq!(app.outcome(), Some(Outcome::GenerationCap));
        assert_eq!(app.mode, Mode::Paused);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.mode, Mode::Paused);
    }
}
