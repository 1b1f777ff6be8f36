use crate::position::Position;
use thiserror::Error;

/// A syntax error in markup found by the reader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{file}:{position}: {message}")]
pub struct ParseError {
    pub file: String,
    pub message: String,
    /// Byte offset of the offending character
    pub offset: u32,
    pub position: Position,
}
