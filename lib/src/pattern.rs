use crate::{error::MalformedPatternError, grid::Grid, rle};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rlelife_rules::{BuiltinRule, Rule};
use std::str::FromStr;

/// Some well-known patterns of Conway's Game of Life, in RLE format.
const BUILTIN_PATTERNS: [(&str, &str); 7] = [
    (
        "glider",
        "#N Glider\n\
         x = 3, y = 3, rule = B3/S23\n\
         bo$2bo$3o!\n",
    ),
    (
        "blinker",
        "#N Blinker\n\
         x = 3, y = 1, rule = B3/S23\n\
         3o!\n",
    ),
    (
        "toad",
        "#N Toad\n\
         x = 4, y = 2, rule = B3/S23\n\
         b3o$3o!\n",
    ),
    (
        "beacon",
        "#N Beacon\n\
         x = 4, y = 4, rule = B3/S23\n\
         2o$2o$2b2o$2b2o!\n",
    ),
    (
        "pulsar",
        "#N Pulsar\n\
         x = 13, y = 13, rule = B3/S23\n\
         2b3o3b3o2$o4bobo4bo$o4bobo4bo$o4bobo4bo$2b3o3b3o2$2b3o3b3o$o4bobo4bo$\n\
         o4bobo4bo$o4bobo4bo2$2b3o3b3o!\n",
    ),
    (
        "r-pentomino",
        "#N R-pentomino\n\
         x = 3, y = 3, rule = B3/S23\n\
         b2o$2o$bo!\n",
    ),
    (
        "gosper-glider-gun",
        "#N Gosper glider gun\n\
         #O Bill Gosper\n\
         x = 36, y = 9, rule = B3/S23\n\
         24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o$2o8bo3bob2o4b\n\
         obo$10bo5bo7bo$11bo3bo$12b2o!\n",
    ),
];

/// The seed of a simulation: a grid of cells, with a name and a rule.
///
/// A pattern is usually decoded from a file in
/// [RLE format](https://conwaylife.com/wiki/Run_Length_Encoded).
/// It cannot be modified after it is created.
///
/// # Example
///
/// ```
/// use rlelife_lib::Pattern;
///
/// let pattern = Pattern::decode("#N Glider\nx = 3, y = 3, rule = B3/S23\nbo$2bo$3o!").unwrap();
/// assert_eq!(pattern.name(), "Glider");
/// assert_eq!(pattern.width(), 3);
/// assert_eq!(pattern.grid().population(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// The name of the pattern, from the `#N` line. May be empty.
    name: String,

    /// The author of the pattern, from the `#O` line. May be empty.
    author: String,

    /// Comments from the `#C` lines.
    comments: Vec<String>,

    /// The rule of the pattern.
    ///
    /// This may be [`Rule::Unsupported`].
    rule: Rule,

    /// The cells.
    grid: Grid,
}

impl FromStr for Pattern {
    type Err = MalformedPatternError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Pattern {
    /// Create a pattern from a grid and a rule, with no name.
    pub fn new(grid: Grid, rule: Rule) -> Self {
        Self {
            name: String::new(),
            author: String::new(),
            comments: Vec::new(),
            rule,
            grid,
        }
    }

    /// Set the name of the pattern.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Decode a pattern in RLE format.
    ///
    /// - A line starting with `#N ` gives the name of the pattern.
    /// - A line starting with `#O ` gives the author.
    /// - Lines starting with `#C` are comments. Other lines starting with `#` are ignored.
    /// - The line starting with `x` is the header `x = <width>, y = <height>, rule = <rule>`.
    ///   If the rule is omitted, it is `B3/S23`.
    /// - All other lines are the encoded cells, up to the terminator `!`.
    ///   Everything after the terminator is ignored.
    ///
    /// An unknown rule is not an error here. It gives [`Rule::Unsupported`].
    pub fn decode(text: &str) -> Result<Self, MalformedPatternError> {
        let mut name = String::new();
        let mut author = String::new();
        let mut comments = Vec::new();
        let mut header = None;
        let mut body = String::new();

        for line in text.lines() {
            if let Some(rest) = line.strip_prefix('#') {
                let mut chars = rest.chars();
                let tag = chars.next();
                let text = chars.as_str();
                match tag {
                    Some('N' | 'n') if text.starts_with(' ') => name = text.trim().to_string(),
                    Some('O') => author = text.trim().to_string(),
                    Some('C' | 'c') => comments.push(text.trim().to_string()),
                    _ => {}
                }
            } else if line.starts_with('x') {
                header = Some(rle::parse_header(line)?);
            } else {
                body.push_str(line.trim());
                // Lines after the terminator are not part of the pattern.
                if line.contains('!') {
                    break;
                }
            }
        }

        let header = header.ok_or(MalformedPatternError::MissingHeader)?;
        let rule = header
            .rule
            .map_or(Rule::Builtin(BuiltinRule::Life), Rule::lookup);
        let grid = rle::decode_body(&body, header.width, header.height)?;

        Ok(Self {
            name,
            author,
            comments,
            rule,
            grid,
        })
    }

    /// Names of the built-in patterns.
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN_PATTERNS.iter().map(|&(name, _)| name)
    }

    /// The RLE text of a built-in pattern. The name is case-insensitive.
    pub fn builtin_rle(name: &str) -> Option<&'static str> {
        BUILTIN_PATTERNS
            .iter()
            .find(|(builtin, _)| builtin.eq_ignore_ascii_case(name.trim()))
            .map(|&(_, rle)| rle)
    }

    /// A built-in pattern. The name is case-insensitive.
    ///
    /// See [`builtin_names`](Pattern::builtin_names) for the list of names.
    pub fn builtin(name: &str) -> Option<Self> {
        Self::builtin_rle(name).and_then(|rle| Self::decode(rle).ok())
    }

    /// A random soup for Conway's Game of Life.
    ///
    /// Each cell is alive with probability `density`, which is clamped to `[0, 1]`.
    ///
    /// If `seed` is [`None`], the seed is randomly generated.
    ///
    /// # Panics
    ///
    /// Panics if the width or the height is zero.
    pub fn random(width: usize, height: usize, density: f64, seed: Option<u64>) -> Self {
        let mut rng = seed.map_or_else(
            Xoshiro256PlusPlus::from_entropy,
            Xoshiro256PlusPlus::seed_from_u64,
        );
        let density = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };

        let mut grid = Grid::new(width, height);
        for row in 0..height {
            for col in 0..width {
                if rng.gen_bool(density) {
                    grid.set(row, col, true);
                }
            }
        }

        Self::new(grid, Rule::default()).with_name("Random soup")
    }

    /// The name of the pattern. May be empty.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The author of the pattern. May be empty.
    #[inline]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Comments in the pattern file.
    #[inline]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// The rule of the pattern.
    #[inline]
    pub const fn rule(&self) -> &Rule {
        &self.rule
    }

    /// The cells of the pattern.
    #[inline]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Width of the pattern.
    #[inline]
    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    /// Height of the pattern.
    #[inline]
    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    /// Encode the pattern in RLE format, including its name, author and comments.
    pub fn to_rle(&self) -> String {
        let mut lines = Vec::new();
        if !self.name.is_empty() {
            lines.push(format!("#N {}", self.name));
        }
        if !self.author.is_empty() {
            lines.push(format!("#O {}", self.author));
        }
        for comment in &self.comments {
            lines.push(format!("#C {comment}"));
        }
        rle::encode(&self.grid, &self.rule, &lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        let pattern = Pattern::decode("x = 3, y = 2, rule = B3/S23\n3o$2bo!").unwrap();
        assert_eq!(pattern.width(), 3);
        assert_eq!(pattern.height(), 2);
        assert_eq!(pattern.name(), "");
        assert_eq!(pattern.rule(), &Rule::Builtin(BuiltinRule::Life));
        assert_eq!(
            pattern.grid().alive_cells().collect::<Vec<_>>(),
            vec![(0, 0), (0, 1), (0, 2), (1, 2)]
        );

        let pattern: Pattern = "x = 2, y = 2, rule = B3/S23\nbo$ob!".parse().unwrap();
        assert_eq!(
            pattern.grid().alive_cells().collect::<Vec<_>>(),
            vec![(0, 1), (1, 0)]
        );
    }

    #[test]
    fn test_decode_comments() {
        let text = "#N Lightweight spaceship\r\n\
                    #O John Conway\r\n\
                    #C A c/2 orthogonal spaceship.\r\n\
                    #r 23/3\r\n\
                    x = 5, y = 4, rule = 23/36\r\n\
                    bo2bo$o4b$o3bo$\r\n\
                    4o!\r\n";
        let pattern = Pattern::decode(text).unwrap();
        assert_eq!(pattern.name(), "Lightweight spaceship");
        assert_eq!(pattern.author(), "John Conway");
        assert_eq!(pattern.comments(), ["A c/2 orthogonal spaceship."]);
        assert_eq!(pattern.rule(), &Rule::Builtin(BuiltinRule::HighLife));
        assert_eq!(pattern.grid().population(), 9);
    }

    #[test]
    fn test_decode_name_case_insensitive() {
        let pattern = Pattern::decode("#n blinker\nx = 3, y = 1\n3o!").unwrap();
        assert_eq!(pattern.name(), "blinker");
        assert_eq!(pattern.rule(), &Rule::default());
    }

    #[test]
    fn test_decode_unsupported_rule() {
        let pattern = Pattern::decode("x = 1, y = 1, rule = foo/bar\no!").unwrap();
        assert_eq!(pattern.rule(), &Rule::Unsupported("foo/bar".to_string()));
        assert_eq!(pattern.rule().name(), "Unsupported");
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(
            Pattern::decode("#N Nothing\n3o!"),
            Err(MalformedPatternError::MissingHeader)
        );
        assert_eq!(
            Pattern::decode("x = three, y = 1\n3o!"),
            Err(MalformedPatternError::InvalidHeader)
        );
        assert_eq!(
            Pattern::decode("x = 3, y = 2\n3o!"),
            Err(MalformedPatternError::RowCountMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_decode_ignores_lines_after_terminator() {
        let text = "#N Dot\n\
                    x = 1, y = 1\n\
                    o!\n\
                    xylophone notes after the terminator\n\
                    #N Not the name\n";
        let pattern = Pattern::decode(text).unwrap();
        assert_eq!(pattern.name(), "Dot");
        assert_eq!(pattern.grid().population(), 1);

        let pattern = Pattern::decode("x = 2, y = 1\n2o! $$$\nx = 9, y = 9\n").unwrap();
        assert_eq!(pattern.width(), 2);
        assert_eq!(pattern.grid().population(), 2);
    }

    #[test]
    fn test_decode_huge_header() {
        assert_eq!(
            Pattern::decode("x = 4294967296, y = 4294967296\no!"),
            Err(MalformedPatternError::InvalidHeader)
        );
        assert_eq!(
            Pattern::decode("x = 1000000, y = 1000000\no!"),
            Err(MalformedPatternError::InvalidHeader)
        );
    }

    #[test]
    fn test_builtin() {
        for name in Pattern::builtin_names() {
            let pattern = Pattern::builtin(name).unwrap();
            assert!(!pattern.name().is_empty());
            assert!(pattern.rule().is_supported());
            assert!(!pattern.grid().is_empty());
        }

        assert_eq!(Pattern::builtin("Glider").unwrap().grid().population(), 5);
        assert_eq!(Pattern::builtin("pulsar").unwrap().grid().population(), 48);
        assert_eq!(
            Pattern::builtin("gosper-glider-gun")
                .unwrap()
                .grid()
                .population(),
            36
        );
        assert!(Pattern::builtin("nothing").is_none());
    }

    #[test]
    fn test_to_rle() {
        for name in Pattern::builtin_names() {
            let pattern = Pattern::builtin(name).unwrap();
            assert_eq!(Pattern::decode(&pattern.to_rle()).unwrap(), pattern);
        }

        let pattern = Pattern::new(Grid::new(3, 3), Rule::lookup("12345/3"));
        assert_eq!(pattern.to_rle(), "x = 3, y = 3, rule = 12345/3\n2$!\n");
        assert_eq!(Pattern::decode(&pattern.to_rle()).unwrap(), pattern);
    }

    #[test]
    fn test_random() {
        let a = Pattern::random(20, 10, 0.5, Some(42));
        let b = Pattern::random(20, 10, 0.5, Some(42));
        assert_eq!(a, b);
        assert_eq!(a.width(), 20);
        assert_eq!(a.height(), 10);
        assert_eq!(a.rule(), &Rule::default());

        assert!(Pattern::random(8, 8, 0.0, None).grid().is_empty());
        assert_eq!(Pattern::random(8, 8, 2.0, None).grid().population(), 64);
    }
}
