use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: Coord, height: Coord },
}

pub type Result<T> = core::result::Result<T, GameError>;
