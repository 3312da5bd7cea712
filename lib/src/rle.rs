//! Reading and writing the [RLE](https://conwaylife.com/wiki/Run_Length_Encoded) format.

use crate::{error::MalformedPatternError, grid::Grid};
use rlelife_rules::Rule;
use std::{ops::RangeInclusive, str};

/// Lines of the encoded cells are wrapped at this length.
const MAX_LINE_LENGTH: usize = 70;

/// Largest number of cells a pattern header may declare.
pub(crate) const MAX_PATTERN_CELLS: usize = 1 << 24;

/// A pattern for matching a single character represented as a byte.
trait CharPattern {
    /// Returns `true` if the given character matches this pattern.
    fn matches(&self, c: u8) -> bool;
}

impl CharPattern for u8 {
    fn matches(&self, c: u8) -> bool {
        *self == c
    }
}

impl<const N: usize> CharPattern for &[u8; N] {
    fn matches(&self, c: u8) -> bool {
        self.contains(&c)
    }
}

impl<F> CharPattern for F
where
    F: Fn(&u8) -> bool,
{
    fn matches(&self, c: u8) -> bool {
        self(&c)
    }
}

impl CharPattern for RangeInclusive<u8> {
    fn matches(&self, c: u8) -> bool {
        self.contains(&c)
    }
}

/// The header line of an RLE file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Header<'a> {
    /// Width of the pattern.
    pub(crate) width: usize,
    /// Height of the pattern.
    pub(crate) height: usize,
    /// The rule string, if the header has one.
    pub(crate) rule: Option<&'a str>,
}

/// A helper struct for parsing RLE files.
///
/// Inspired by the parser for [`IpAddr`](std::net::IpAddr) in Rust's standard
/// library.
struct Parser<'a> {
    input: &'a [u8],
}

impl<'a> Parser<'a> {
    /// Create a new parser from a string.
    const fn new(str: &'a str) -> Self {
        Self {
            input: str.as_bytes(),
        }
    }

    /// Whether the whole input has been consumed.
    const fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<u8> {
        self.input.first().copied()
    }

    /// Read the next character and consume it.
    fn read(&mut self) -> Option<u8> {
        let c = self.peek()?;
        self.input = &self.input[1..];
        Some(c)
    }

    /// Try to read the next character and consume it if it matches the given
    /// pattern.
    fn read_matches(&mut self, pattern: impl CharPattern) -> Option<u8> {
        let c = self.peek()?;
        if pattern.matches(c) {
            self.input = &self.input[1..];
            Some(c)
        } else {
            None
        }
    }

    /// Try to read zero or more characters that match the given pattern.
    fn read_matches_many(&mut self, pattern: impl CharPattern) -> &'a [u8] {
        let input = self.input;
        let mut len = 0;
        while let Some(c) = self.peek() {
            if !pattern.matches(c) {
                break;
            }
            self.input = &self.input[1..];
            len += 1;
        }
        &input[..len]
    }

    /// Skip zero or more whitespace characters.
    fn skip_whitespace(&mut self) {
        self.read_matches_many(|c: &u8| c.is_ascii_whitespace());
    }

    /// Read a character, possibly surrounded by whitespace.
    fn read_token(&mut self, token: u8) -> Option<()> {
        self.skip_whitespace();
        self.read_matches(token)?;
        self.skip_whitespace();
        Some(())
    }

    /// Parse a decimal number as a `usize`.
    ///
    /// Returns `None` if there is no digit, or if the number overflows.
    fn parse_number(&mut self) -> Option<usize> {
        let digits = self.read_matches_many(b'0'..=b'9');
        if digits.is_empty() {
            return None;
        }
        digits.iter().try_fold(0usize, |n, &d| {
            n.checked_mul(10)?.checked_add((d - b'0') as usize)
        })
    }

    /// Parse the run count before a tag. A missing count means 1.
    fn parse_count(&mut self) -> Result<usize, MalformedPatternError> {
        if self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.parse_number().ok_or(MalformedPatternError::InvalidBody)
        } else {
            Ok(1)
        }
    }

    /// Parse an assignment `<key> = <number>`.
    fn parse_assignment(&mut self, key: impl CharPattern) -> Option<usize> {
        self.read_matches(key)?;
        self.read_token(b'=')?;
        self.parse_number()
    }

    /// Parse a header line `x = <width>, y = <height>, rule = <rule>`.
    ///
    /// The rule part is optional. Returns `None` if the line is not a valid
    /// header, if the width or the height is zero, or if the pattern would
    /// have more than [`MAX_PATTERN_CELLS`] cells.
    fn parse_header(&mut self) -> Option<Header<'a>> {
        self.skip_whitespace();
        let width = self.parse_assignment(b"xX")?;
        self.read_token(b',')?;
        let height = self.parse_assignment(b"yY")?;
        self.skip_whitespace();

        let rule = if self.read_matches(b',').is_some() {
            self.skip_whitespace();
            let key = self.read_matches_many(|c: &u8| c.is_ascii_alphabetic());
            if !key.eq_ignore_ascii_case(b"rule") {
                return None;
            }
            self.read_token(b'=')?;
            let rule = str::from_utf8(self.input).ok()?.trim();
            self.input = &[];
            Some(rule)
        } else if self.is_empty() {
            None
        } else {
            return None;
        };

        if width == 0 || height == 0 {
            return None;
        }
        width
            .checked_mul(height)
            .filter(|&cells| cells <= MAX_PATTERN_CELLS)?;

        Some(Header {
            width,
            height,
            rule,
        })
    }
}

/// Parse the header line of an RLE file.
pub(crate) fn parse_header(line: &str) -> Result<Header<'_>, MalformedPatternError> {
    Parser::new(line)
        .parse_header()
        .ok_or(MalformedPatternError::InvalidHeader)
}

/// Decode the cells of an RLE file into a grid of the given size.
///
/// Everything after the terminator `!` is ignored.
pub(crate) fn decode_body(
    body: &str,
    width: usize,
    height: usize,
) -> Result<Grid, MalformedPatternError> {
    let body = body.split_once('!').map_or(body, |(cells, _)| cells);
    let mut parser = Parser::new(body);
    let mut grid = Grid::new(width, height);

    let (mut row, mut col) = (0usize, 0usize);
    // Whether the last run was a row break.
    let mut row_closed = false;

    loop {
        parser.skip_whitespace();
        if parser.is_empty() {
            break;
        }

        let count = parser.parse_count()?;

        match parser.read() {
            Some(tag @ (b'b' | b'o')) => {
                if row >= height {
                    return Err(MalformedPatternError::RowOutOfBounds { row });
                }
                let end = col
                    .checked_add(count)
                    .filter(|&end| end <= width)
                    .ok_or(MalformedPatternError::ColumnOutOfBounds { row })?;
                if tag == b'o' {
                    for c in col..end {
                        grid.set(row, c, true);
                    }
                }
                col = end;
                row_closed = false;
            }
            Some(b'$') => {
                let next = row.saturating_add(count);
                if next > height {
                    return Err(MalformedPatternError::RowOutOfBounds { row: next });
                }
                row = next;
                col = 0;
                row_closed = true;
            }
            _ => return Err(MalformedPatternError::InvalidBody),
        }
    }

    // A trailing row break may close the last row instead of starting a new one.
    let found = if row_closed && row == height {
        height
    } else {
        row + 1
    };

    if found != height {
        return Err(MalformedPatternError::RowCountMismatch {
            expected: height,
            found,
        });
    }

    Ok(grid)
}

/// A run of cells or row breaks, written as `<count><tag>`.
fn run(count: usize, tag: char) -> String {
    if count == 1 {
        tag.to_string()
    } else {
        format!("{count}{tag}")
    }
}

/// Split a row into runs of cells with the same state.
///
/// A trailing run of dead cells is dropped.
fn row_runs(row: &[bool]) -> Vec<(usize, bool)> {
    let mut runs: Vec<(usize, bool)> = Vec::new();
    for &alive in row {
        match runs.last_mut() {
            Some((count, state)) if *state == alive => *count += 1,
            _ => runs.push((1, alive)),
        }
    }
    if runs.last().is_some_and(|&(_, alive)| !alive) {
        runs.pop();
    }
    runs
}

/// Encode a grid in RLE format.
///
/// `comments` are written verbatim before the header, one per line.
pub(crate) fn encode(grid: &Grid, rule: &Rule, comments: &[String]) -> String {
    let mut s = String::new();

    for comment in comments {
        s.push_str(comment);
        s.push('\n');
    }

    s.push_str(&format!(
        "x = {}, y = {}, rule = {}\n",
        grid.width(),
        grid.height(),
        rule.identifier()
    ));

    let mut runs = Vec::new();
    let mut row_breaks = 0;
    for (i, row) in grid.rows().enumerate() {
        if i > 0 {
            row_breaks += 1;
        }
        let cells = row_runs(row);
        if cells.is_empty() {
            continue;
        }
        if row_breaks > 0 {
            runs.push(run(row_breaks, '$'));
            row_breaks = 0;
        }
        for (count, alive) in cells {
            runs.push(run(count, if alive { 'o' } else { 'b' }));
        }
    }
    // Blank rows at the bottom still count towards the height.
    if row_breaks > 0 {
        runs.push(run(row_breaks, '$'));
    }
    runs.push("!".to_string());

    let mut line = String::new();
    for run in runs {
        if line.len() + run.len() > MAX_LINE_LENGTH {
            s.push_str(&line);
            s.push('\n');
            line.clear();
        }
        line.push_str(&run);
    }
    s.push_str(&line);
    s.push('\n');

    s
}
