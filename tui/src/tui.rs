use crate::{
    app::{App, Mode},
    event::EventHandler,
    pacing::Pacer,
};
use color_eyre::Result;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, terminal::Terminal};
use rlelife_lib::Simulation;
use std::{
    io::{stdout, Stdout},
    time::Duration,
};

/// The text-based user interface.
#[derive(Debug)]
pub struct Tui {
    /// The terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// The application state.
    app: App,
    /// The event handler.
    event_handler: EventHandler,
    /// Keeps the interval between generations.
    pacer: Pacer,
}

impl Tui {
    /// Create a new [`Tui`] for a simulation.
    pub fn new(simulation: Simulation, max_generations: u64, interval: Duration) -> Result<Self> {
        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        let app = App::new(simulation, max_generations)?;
        let event_handler = EventHandler::new();
        let mut pacer = Pacer::new(interval);
        pacer.mark();

        let mut tui = Self {
            terminal,
            app,
            event_handler,
            pacer,
        };

        tui.init()?;

        Ok(tui)
    }

    /// Initialize the terminal.
    fn init(&mut self) -> Result<()> {
        enable_raw_mode()?;
        crossterm::execute!(self.terminal.backend_mut(), EnterAlternateScreen)?;
        self.terminal.clear()?;
        self.terminal.hide_cursor()?;

        self.draw()?;
        Ok(())
    }

    /// Cleanup the terminal.
    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        crossterm::execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Draw the text-based user interface.
    fn draw(&mut self) -> Result<()> {
        self.terminal.draw(|f| self.app.render(f))?;
        Ok(())
    }

    /// Exit the text-based user interface.
    fn exit(&mut self) -> Result<()> {
        self.cleanup()?;
        self.app.print_board();
        Ok(())
    }

    /// The main loop.
    pub fn run(&mut self) -> Result<()> {
        while !self.app.should_quit {
            // While running, wait for a key press only until the next generation is due.
            if self.app.mode == Mode::Running {
                if let Some(event) = self.event_handler.recv_timeout(self.pacer.remaining())? {
                    self.app.update(event)?;
                }
                if self.app.mode == Mode::Running && self.pacer.is_due() {
                    self.app.step()?;
                    self.pacer.mark();
                }
            } else {
                let event = self.event_handler.recv()?;
                self.app.update(event)?;
                self.pacer.mark();
            };

            self.draw()?;
        }

        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        self.exit().ok();
    }
}
