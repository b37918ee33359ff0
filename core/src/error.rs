use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell coordinates out of range")]
    OutOfRange,
    #[error("Target word needs at least one letter")]
    EmptyWord,
    #[error("Target word is longer than a grid row can hold")]
    WordTooLong,
    #[error("Grid shape does not match the target word")]
    ShapeMismatch,
    #[error("Cell must hold a single letter or be empty")]
    InvalidCell,
}

pub type Result<T> = core::result::Result<T, GameError>;
