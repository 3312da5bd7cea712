use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::{
    sync::mpsc::{self, Receiver, RecvTimeoutError, Sender},
    thread,
    time::Duration,
};

/// What the terminal can tell the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermEvent {
    /// A key was pressed. Releases and repeats are not reported.
    KeyPress(KeyCode),
    /// The terminal changed size, so the board should be redrawn.
    Resize,
}

/// Read terminal events until the receiving side goes away.
fn forward_events(tx: Sender<TermEvent>) -> Result<()> {
    loop {
        let event = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => TermEvent::KeyPress(key.code),
            Event::Resize(_, _) => TermEvent::Resize,
            _ => continue,
        };
        tx.send(event)?;
    }
}

/// Delivers terminal events to the main loop.
///
/// Reading the terminal blocks, so it happens on a separate thread, and the
/// main loop can wait for a key press and for the next generation at once.
#[derive(Debug)]
pub struct EventHandler {
    rx: Receiver<TermEvent>,
}

impl EventHandler {
    /// Start reading terminal events.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || forward_events(tx));
        Self::with_receiver(rx)
    }

    const fn with_receiver(rx: Receiver<TermEvent>) -> Self {
        Self { rx }
    }

    /// Wait for the next event.
    pub fn recv(&self) -> Result<TermEvent> {
        Ok(self.rx.recv()?)
    }

    /// Wait for the next event until the timeout.
    ///
    /// Returns [`None`] when the timeout elapses first.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<TermEvent>> {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
