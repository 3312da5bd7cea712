use crate::{
    app::{App, Mode},
    driver::Outcome,
    render::Canvas,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    terminal::Frame,
    text::{Line, Span, Text},
    widgets::{
        block::{Block, Title},
        Borders, Clear, Paragraph, Widget,
    },
};
use rlelife_lib::Rule;

impl App {
    /// Render the TUI interface.
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ],
        )
        .split(frame.size());

        self.render_top_bar(frame, chunks[0]);
        self.render_main(frame, chunks[1]);
        self.render_bottom_bar(frame, chunks[2]);

        // Show the popup window if needed.
        match self.mode {
            Mode::Usage => self.render_help(frame, chunks[1]),
            Mode::Quit => self.render_quit(frame, chunks[1]),
            _ => {}
        }
    }

    /// Render the top bar.
    ///
    /// This includes the title of the current generation, and the population.
    fn render_top_bar(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::new(
            Direction::Horizontal,
            Constraint::from_percentages([50, 50]),
        )
        .split(area);

        let style = Style::new().black().on_light_blue();

        let title = Paragraph::new(self.driver.sink().title().to_string()).style(style);
        frame.render_widget(title, chunks[0]);

        let population = Paragraph::new(format!(
            "Population: {}",
            self.driver.simulation().population()
        ))
        .style(style);
        frame.render_widget(population, chunks[1]);
    }

    /// Render the bottom bar.
    ///
    /// This includes the current status, and a short help message.
    fn render_bottom_bar(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::new(
            Direction::Horizontal,
            Constraint::from_percentages([50, 50]),
        )
        .split(area);

        let style = Style::new().black().on_light_blue();

        let status_str = match self.outcome() {
            Some(Outcome::StillLife) => "Still life.",
            Some(Outcome::Extinct) => "Extinct.",
            Some(Outcome::GenerationCap) => "Generation limit reached.",
            None if self.mode == Mode::Running => "Running...",
            None => "Paused. Press [n] to step.",
        };

        let status = Paragraph::new(status_str).style(style);
        frame.render_widget(status, chunks[0]);

        let help = Paragraph::new("Press [h] for help.").style(style);
        frame.render_widget(help, chunks[1]);
    }

    /// Render the main area.
    fn render_main(&self, frame: &mut Frame, area: Rect) {
        let board = BoardView::new(self);
        frame.render_widget(board, area);
    }

    /// Render a popup window with some text.
    fn render_popup<'a>(
        &self,
        frame: &mut Frame,
        area: Rect,
        text: impl Into<Text<'a>>,
        title: impl Into<Title<'a>>,
        style: Style,
    ) {
        let text = text.into();

        let center_x = area.x + area.width / 2;
        let center_y = area.y + area.height / 2;

        let width = area.width.min(text.width() as u16 + 2);
        let height = area.height.min(text.height() as u16 + 2);

        let rect = Rect::new(center_x - width / 2, center_y - height / 2, width, height);

        frame.render_widget(Clear, rect);

        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(style);

        frame.render_widget(paragraph, rect);
    }

    /// Render the popup window to show the help message.
    fn render_help(&self, frame: &mut Frame, area: Rect) {
        self.render_popup(
            frame,
            area,
            "[q]/[Esc]       Quit\n\
             [h]             Show or hide this help message\n\
             [Space]/[Enter] Pause or resume\n\
             [n]             Show the next generation while paused",
            "Help",
            Style::new().green(),
        );
    }

    /// Render the popup window to ask the user to confirm quitting.
    fn render_quit(&self, frame: &mut Frame, area: Rect) {
        self.render_popup(
            frame,
            area,
            "Are you sure you want to quit? ([y]/[n])",
            "Quit",
            Style::new().yellow(),
        );
    }
}

/// A widget to show the board, with an RLE-style header line.
///
/// Cells that do not fit in the terminal are not shown.
#[derive(Debug)]
pub struct BoardView<'a> {
    /// The board as seen through evolutions.
    canvas: &'a Canvas,
    /// The rule of the simulation.
    rule: &'a Rule,
}

impl<'a> BoardView<'a> {
    /// Create a new board widget from the app.
    fn new(app: &'a App) -> Self {
        Self {
            canvas: app.driver.sink(),
            rule: app.driver.simulation().rule(),
        }
    }
}

impl<'a> Widget for BoardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(board) = self.canvas.board() else {
            return;
        };

        let header = Line::from(vec![
            Span::styled("x", Style::new().magenta()),
            Span::raw(" = "),
            Span::styled(board.width().to_string(), Style::new().cyan()),
            Span::raw(", "),
            Span::styled("y", Style::new().magenta()),
            Span::raw(" = "),
            Span::styled(board.height().to_string(), Style::new().cyan()),
            Span::raw(", "),
            Span::styled("rule", Style::new().magenta()),
            Span::raw(" = "),
            Span::styled(self.rule.identifier(), Style::new().cyan()),
            Span::raw(" ("),
            Span::raw(self.rule.name()),
            Span::raw(")"),
        ]);

        buf.set_line(area.x, area.y, &header, area.width);

        if area.height <= 1 {
            return;
        }

        for (y, row) in board.rows().take(area.height as usize - 1).enumerate() {
            let buf_y = area.y + y as u16 + 1;
            for (x, &alive) in row.iter().take(area.width as usize).enumerate() {
                let buf_x = area.x + x as u16;
                let cell = buf.get_mut(buf_x, buf_y);
                if alive {
                    cell.set_char('o').set_style(Style::new().green());
                } else {
                    cell.set_char('.').set_style(Style::new().dark_gray());
                }
            }
        }
    }
}
