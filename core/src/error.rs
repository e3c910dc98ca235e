use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board has zero rows or columns")]
    EmptyBoard,
    #[error("Light chance must lie in [0, 1]")]
    ChanceOutOfRange,
    #[error("Light chance cannot produce a lit cell")]
    DegenerateChance,
    #[error("Press plan shape does not match the board")]
    ShapeMismatch,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
