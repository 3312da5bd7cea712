use color_eyre::Result;
use rlelife_lib::{Evolution, Grid};
use serde::Serialize;
use std::io::Write;

/// Something that shows the board as it evolves.
///
/// The sink never sees the board itself, only the cells that changed.
pub trait RenderSink {
    /// Prepare an empty board of the given size.
    fn initialize_canvas(&mut self, width: usize, height: usize) -> Result<()>;

    /// Apply the changed cells of one generation.
    fn render_evolution(&mut self, evolution: &Evolution) -> Result<()>;

    /// Show a title, usually the name of the pattern and the generation.
    ///
    /// The title applies to the next call to
    /// [`render_evolution`](RenderSink::render_evolution).
    fn render_title(&mut self, _title: &str) -> Result<()> {
        Ok(())
    }
}

/// One line of output of a [`JsonSink`].
#[derive(Debug, Serialize)]
struct JsonFrame<'a> {
    generation: u64,
    title: &'a str,
    cells: &'a Evolution,
}

/// Writes each generation as a line of JSON.
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    writer: W,
    /// Number of evolutions written so far.
    generation: u64,
    title: String,
}

impl<W: Write> JsonSink<W> {
    /// Create a new [`JsonSink`] writing to the given writer.
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            generation: 0,
            title: String::new(),
        }
    }

    /// Get back the writer.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderSink for JsonSink<W> {
    fn initialize_canvas(&mut self, width: usize, height: usize) -> Result<()> {
        log::debug!("Writing a {width}x{height} board as JSON.");
        self.generation = 0;
        Ok(())
    }

    fn render_evolution(&mut self, evolution: &Evolution) -> Result<()> {
        let frame = JsonFrame {
            generation: self.generation,
            title: &self.title,
            cells: evolution,
        };
        serde_json::to_writer(&mut self.writer, &frame)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        self.generation += 1;
        Ok(())
    }

    fn render_title(&mut self, title: &str) -> Result<()> {
        self.title = title.to_string();
        Ok(())
    }
}

/// The board as shown in the terminal.
///
/// This is a copy of the board that is only updated through evolutions.
/// It is drawn by [`BoardView`](crate::ui::BoardView).
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    board: Option<Grid>,
    title: String,
}

impl Canvas {
    /// Create an empty canvas. It has no board until it is initialized.
    pub const fn new() -> Self {
        Self {
            board: None,
            title: String::new(),
        }
    }

    /// The board, if the canvas was initialized.
    pub const fn board(&self) -> Option<&Grid> {
        self.board.as_ref()
    }

    /// The last title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl RenderSink for Canvas {
    fn initialize_canvas(&mut self, width: usize, height: usize) -> Result<()> {
        self.board = Some(Grid::new(width, height));
        Ok(())
    }

    fn render_evolution(&mut self, evolution: &Evolution) -> Result<()> {
        if let Some(board) = &mut self.board {
            for cell in evolution {
                board.set(cell.row, cell.col, cell.alive);
            }
        }
        Ok(())
    }

    fn render_title(&mut self, title: &str) -> Result<()> {
        self.title = title.to_string();
        Ok(())
    }
}
