use thiserror::Error;

/// Construction failures. Nothing fails once a board exists.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("board dimensions must be positive and finite, got {width}x{height}")]
    InvalidBoardSize { width: f64, height: f64 },

    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("board {width}x{height} cannot fit a ball of radius {radius}")]
    BoardTooSmall { width: f64, height: f64, radius: f64 },

    #[error("ball at ({x}, {y}) with radius {radius} does not fit inside the board")]
    OutsideBoard { x: f64, y: f64, radius: f64 },

    #[error("invalid scenario: {0}")]
    InvalidScenario(&'static str),
}
