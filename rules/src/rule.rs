use crate::UnsupportedRuleError;
use std::{
    convert::Infallible,
    fmt::{self, Formatter},
    str::FromStr,
};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// The rules with a built-in transition function.
///
/// All of them are outer-totalistic rules on the Moore neighborhood of
/// radius 1: the next state of a cell only depends on its current state and
/// on the number of living cells among its 8 neighbors.
///
/// The rule strings are written either in B/S notation (`B3/S23`) or in S/B
/// notation (`23/36`), following the notation of the pattern files that use
/// them. Parsing is case-insensitive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum BuiltinRule {
    /// [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life).
    #[strum(to_string = "B3/S23")]
    Life,

    /// [HighLife](https://conwaylife.com/wiki/OCA:HighLife).
    #[strum(to_string = "23/36")]
    HighLife,

    /// [Move](https://conwaylife.com/wiki/OCA:Move), also known as Morley.
    #[strum(to_string = "245/368")]
    Move,

    /// [2x2](https://conwaylife.com/wiki/OCA:2x2).
    #[strum(to_string = "125/36")]
    TwoByTwo,

    /// [Maze](https://conwaylife.com/wiki/OCA:Maze).
    #[strum(to_string = "12345/3")]
    Maze,

    /// [Life without death](https://conwaylife.com/wiki/OCA:Life_without_death).
    ///
    /// A living cell never dies.
    #[strum(to_string = "b3/s012345678")]
    LifeWithoutDeath,

    /// The rule `238/3578`.
    #[strum(to_string = "238/3578")]
    S238B3578,
}

impl BuiltinRule {
    /// Iterate over all the built-in rules.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }

    /// The canonical rule string.
    #[inline]
    pub fn identifier(self) -> &'static str {
        self.into()
    }

    /// A human readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "Conway's Life",
            Self::HighLife => "HighLife",
            Self::Move => "Move",
            Self::TwoByTwo => "2x2",
            Self::Maze => "Maze",
            Self::LifeWithoutDeath => "Life without death",
            Self::S238B3578 => "238/3578",
        }
    }

    /// Numbers of living neighbors that cause a dead cell to become alive.
    pub const fn birth(self) -> &'static [u8] {
        match self {
            Self::Life | Self::Maze | Self::LifeWithoutDeath => &[3],
            Self::HighLife | Self::TwoByTwo => &[3, 6],
            Self::Move => &[3, 6, 8],
            Self::S238B3578 => &[3, 5, 7, 8],
        }
    }

    /// Numbers of living neighbors that cause a living cell to stay alive.
    pub const fn survival(self) -> &'static [u8] {
        match self {
            Self::Life | Self::HighLife => &[2, 3],
            Self::Move => &[2, 4, 5],
            Self::TwoByTwo => &[1, 2, 5],
            Self::Maze => &[1, 2, 3, 4, 5],
            Self::LifeWithoutDeath => &[0, 1, 2, 3, 4, 5, 6, 7, 8],
            Self::S238B3578 => &[2, 3, 8],
        }
    }

    /// The next state of a cell, given its current state and the number of
    /// its living neighbors.
    ///
    /// `neighbors` should be at most 8. Larger values never cause a birth or
    /// a survival.
    pub const fn transition(self, previously_alive: bool, neighbors: u8) -> bool {
        if previously_alive {
            match self {
                Self::Life | Self::HighLife => matches!(neighbors, 2 | 3),
                Self::Move => matches!(neighbors, 2 | 4 | 5),
                Self::TwoByTwo => matches!(neighbors, 1 | 2 | 5),
                Self::Maze => matches!(neighbors, 1..=5),
                Self::LifeWithoutDeath => true,
                Self::S238B3578 => matches!(neighbors, 2 | 3 | 8),
            }
        } else {
            match self {
                Self::Life | Self::Maze | Self::LifeWithoutDeath => neighbors == 3,
                Self::HighLife | Self::TwoByTwo => matches!(neighbors, 3 | 6),
                Self::Move => matches!(neighbors, 3 | 6 | 8),
                Self::S238B3578 => matches!(neighbors, 3 | 5 | 7 | 8),
            }
        }
    }
}

/// A cellular automaton rule, as named in the header of a pattern.
///
/// A rule is either one of the [built-in rules](BuiltinRule), or the
/// [`Unsupported`](Rule::Unsupported) marker, which keeps the rule string that
/// could not be recognized.
///
/// # Examples
///
/// ```rust
/// # use rlelife_rules::{BuiltinRule, Rule};
/// let rule = Rule::lookup("b3/s23");
/// assert_eq!(rule, Rule::Builtin(BuiltinRule::Life));
/// assert!(rule.transition(false, 3));
///
/// let rule = Rule::lookup("foo/bar");
/// assert_eq!(rule.name(), "Unsupported");
/// assert_eq!(rule.identifier(), "foo/bar");
/// assert!(rule.check().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Rule {
    /// A rule with a built-in transition function.
    Builtin(BuiltinRule),

    /// A rule string that does not match any built-in rule.
    ///
    /// Evaluating the transition function of this rule panics.
    Unsupported(String),
}

impl Default for Rule {
    #[inline]
    fn default() -> Self {
        Self::Builtin(BuiltinRule::Life)
    }
}

impl From<BuiltinRule> for Rule {
    #[inline]
    fn from(rule: BuiltinRule) -> Self {
        Self::Builtin(rule)
    }
}

impl From<&str> for Rule {
    #[inline]
    fn from(identifier: &str) -> Self {
        Self::lookup(identifier)
    }
}

/// Parsing never fails. Unknown rule strings become [`Rule::Unsupported`].
impl FromStr for Rule {
    type Err = Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::lookup(s))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl Rule {
    /// Find the built-in rule with the given rule string.
    ///
    /// The comparison ignores ASCII case and surrounding whitespace.
    /// If no built-in rule matches, returns [`Rule::Unsupported`] with the
    /// trimmed rule string.
    pub fn lookup(identifier: &str) -> Self {
        let identifier = identifier.trim();
        identifier
            .parse::<BuiltinRule>()
            .map_or_else(|_| Self::Unsupported(identifier.to_string()), Self::Builtin)
    }

    /// The rule string.
    ///
    /// For an unsupported rule, this is the string it was looked up with.
    pub fn identifier(&self) -> &str {
        match self {
            Self::Builtin(rule) => rule.identifier(),
            Self::Unsupported(identifier) => identifier,
        }
    }

    /// A human readable name, `"Unsupported"` for an unsupported rule.
    pub const fn name(&self) -> &str {
        match self {
            Self::Builtin(rule) => rule.name(),
            Self::Unsupported(_) => "Unsupported",
        }
    }

    /// Whether the rule has a transition function.
    #[inline]
    pub const fn is_supported(&self) -> bool {
        matches!(self, Self::Builtin(_))
    }

    /// Check that the rule has a transition function.
    ///
    /// This should be called before simulating a pattern with this rule.
    pub fn check(&self) -> Result<(), UnsupportedRuleError> {
        match self {
            Self::Builtin(_) => Ok(()),
            Self::Unsupported(identifier) => Err(UnsupportedRuleError {
                identifier: identifier.clone(),
            }),
        }
    }

    /// The next state of a cell, given its current state and the number of
    /// its living neighbors.
    ///
    /// # Panics
    ///
    /// Panics if the rule is [`Unsupported`](Rule::Unsupported).
    /// Use [`check`](Rule::check) first.
    #[inline]
    pub fn transition(&self, previously_alive: bool, neighbors: u8) -> bool {
        match self {
            Self::Builtin(rule) => rule.transition(previously_alive, neighbors),
            Self::Unsupported(identifier) => {
                panic!("the rule {identifier:?} has no transition function")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(Rule::lookup("B3/S23"), Rule::Builtin(BuiltinRule::Life));
        assert_eq!(Rule::lookup("b3/s23"), Rule::Builtin(BuiltinRule::Life));
        assert_eq!(Rule::lookup(" B3/S23\r"), Rule::Builtin(BuiltinRule::Life));
        assert_eq!(Rule::lookup("23/36"), Rule::Builtin(BuiltinRule::HighLife));
        assert_eq!(Rule::lookup("245/368"), Rule::Builtin(BuiltinRule::Move));
        assert_eq!(Rule::lookup("125/36"), Rule::Builtin(BuiltinRule::TwoByTwo));
        assert_eq!(Rule::lookup("12345/3"), Rule::Builtin(BuiltinRule::Maze));
        assert_eq!(
            Rule::lookup("B3/S012345678"),
            Rule::Builtin(BuiltinRule::LifeWithoutDeath)
        );
        assert_eq!(
            Rule::lookup("238/3578"),
            Rule::Builtin(BuiltinRule::S238B3578)
        );

        for rule in BuiltinRule::iter() {
            assert_eq!(Rule::lookup(rule.identifier()), Rule::Builtin(rule));
            assert_eq!(
                Rule::lookup(&rule.identifier().to_ascii_uppercase()),
                Rule::Builtin(rule)
            );
        }
    }

    #[test]
    fn test_unsupported() {
        let rule = Rule::lookup("foo/bar");
        assert_eq!(rule, Rule::Unsupported("foo/bar".to_string()));
        assert_eq!(rule.name(), "Unsupported");
        assert_eq!(rule.identifier(), "foo/bar");
        assert!(!rule.is_supported());
        assert_eq!(
            rule.check(),
            Err(UnsupportedRuleError {
                identifier: "foo/bar".to_string()
            })
        );

        // Not in the table, even though it is a valid rule string elsewhere.
        assert!(!Rule::lookup("B36/S23").is_supported());
        assert!(!Rule::lookup("").is_supported());
    }

    #[test]
    #[should_panic]
    fn test_unsupported_transition() {
        Rule::lookup("foo/bar").transition(true, 2);
    }

    #[test]
    fn test_transition_matches_conditions() {
        for rule in BuiltinRule::iter() {
            for n in 0..=8 {
                assert_eq!(rule.transition(false, n), rule.birth().contains(&n));
                assert_eq!(rule.transition(true, n), rule.survival().contains(&n));
                // Deterministic.
                assert_eq!(rule.transition(true, n), rule.transition(true, n));
                assert_eq!(rule.transition(false, n), rule.transition(false, n));
            }
        }
    }

    #[test]
    fn test_life() {
        let life = Rule::default();
        assert!(!life.transition(true, 1));
        assert!(life.transition(true, 2));
        assert!(life.transition(true, 3));
        assert!(!life.transition(true, 4));
        assert!(!life.transition(false, 2));
        assert!(life.transition(false, 3));
        assert!(!life.transition(false, 6));
    }

    #[test]
    fn test_isolated_cell_dies() {
        for rule in BuiltinRule::iter() {
            let survives = rule.transition(true, 0);
            assert_eq!(survives, rule == BuiltinRule::LifeWithoutDeath);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Rule::default().to_string(), "B3/S23");
        assert_eq!(BuiltinRule::HighLife.to_string(), "23/36");
        assert_eq!(Rule::lookup("foo/bar").to_string(), "foo/bar");
        assert_eq!(BuiltinRule::iter().count(), 7);
    }
}
