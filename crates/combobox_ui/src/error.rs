use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised when parsing a display token from its string form.
pub enum ParseTokenError {
    /// The value is not a known icon sprite name.
    #[error("unknown icon sprite `{0}`")]
    UnknownSprite(String),
    /// The value is not a known input icon position.
    #[error("unknown input icon position `{0}`; expected left, right, both or none")]
    UnknownIconPosition(String),
}
