use thiserror::Error;

/// Programmer errors raised by the engine. Both abort the current call
/// with no partial result; the board passed in is left unmodified.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("maximum depth must be greater than 0")]
    InvalidDepth,
    #[error("player must be X or O")]
    InvalidPlayer,
}
