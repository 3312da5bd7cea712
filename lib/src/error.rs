use rlelife_rules::UnsupportedRuleError;
use thiserror::Error;

/// An error that can occur when decoding a pattern in RLE format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MalformedPatternError {
    /// There is no header line starting with `x`.
    #[error("The pattern has no header line")]
    MissingHeader,

    /// The header line is not of the form `x = <width>, y = <height>, rule = <rule>`,
    /// or the width or height is zero.
    #[error("The header line is invalid")]
    InvalidHeader,

    /// The body contains something other than runs of `b`, `o` and `$`.
    #[error("The encoded cells are invalid")]
    InvalidBody,

    /// A run of cells goes below the last row.
    #[error("Row {row} is outside the pattern")]
    RowOutOfBounds {
        /// The index of the row.
        row: usize,
    },

    /// A run of cells goes past the last column.
    #[error("Row {row} is longer than the width of the pattern")]
    ColumnOutOfBounds {
        /// The index of the row.
        row: usize,
    },

    /// The body does not describe as many rows as the header says.
    #[error("Expected {expected} rows, found {found}")]
    RowCountMismatch {
        /// The height given in the header.
        expected: usize,
        /// The number of rows in the body.
        found: usize,
    },
}

/// An error that can occur when checking a configuration against a pattern.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The width, height, or maximum number of generations is zero, or the
    /// board has more cells than fit in memory.
    #[error("The board size or the maximum number of generations is invalid")]
    InvalidSize,

    /// The pattern does not fit on the board.
    #[error(
        "The pattern ({pattern_width}x{pattern_height}) is larger than the board ({board_width}x{board_height})"
    )]
    OversizedPattern {
        /// Width of the pattern.
        pattern_width: usize,
        /// Height of the pattern.
        pattern_height: usize,
        /// Width of the board.
        board_width: usize,
        /// Height of the board.
        board_height: usize,
    },

    /// The rule of the pattern has no transition function.
    #[error(transparent)]
    UnsupportedRule(#[from] UnsupportedRuleError),
}
