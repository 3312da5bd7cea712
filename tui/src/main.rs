mod app;
mod args;
mod driver;
mod event;
mod pacing;
mod render;
mod source;
mod tui;
mod ui;

use crate::{args::Args, driver::Driver, pacing::Pacer, render::JsonSink, tui::Tui};
use color_eyre::Result;
use crossterm::tty::IsTty;
use rlelife_lib::Simulation;
use std::{io::stdout, time::Duration};

/// Run the program without the TUI interface.
///
/// Each generation is printed to stdout as a line of JSON.
fn run_no_tui(simulation: Simulation, max_generations: u64, interval: Duration) -> Result<()> {
    let sink = JsonSink::new(stdout().lock());
    let mut driver = Driver::new(simulation, sink, max_generations);
    let mut pacer = Pacer::new(interval);

    driver.start()?;
    pacer.mark();

    while !driver.is_finished() {
        pacer.wait();
        driver.step()?;
    }

    if let Some(outcome) = driver.outcome() {
        eprintln!("{outcome}");
    }

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse_and_validate();
    let pattern = source::load_pattern(&args)?;
    let simulation = Simulation::try_new(&args.config, pattern)?;
    let max_generations = args.config.max_generations;
    let interval = Duration::from_millis(args.interval);

    let stdout = stdout();

    if args.no_tui || !stdout.is_tty() {
        run_no_tui(simulation, max_generations, interval)?;
    } else {
        let mut tui = Tui::new(simulation, max_generations, interval)?;
        tui.run()?;
    }

    Ok(())
}
