use thiserror::Error;

/// An error returned when a rule has no known transition function.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Unsupported rule: {identifier}")]
pub struct UnsupportedRuleError {
    /// The rule string that was not recognized.
    pub identifier: String,
}
