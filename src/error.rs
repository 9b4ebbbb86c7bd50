use crate::square::Square;
use failure::Fail;

/// Sometimes, bad stuff happens.
#[derive(Debug, Fail, PartialEq, Eq, Clone)]
pub enum Error {
    /// The position string is invalid
    #[fail(display = "Invalid position string: {}", position)]
    InvalidPosition { position: String },

    /// An attempt was made to convert a string that does not name a square into a `Square`
    #[fail(display = "The string specified does not contain a valid square")]
    InvalidSquare,

    /// The position specified from BoardBuilder puts a piece on a light square
    #[fail(display = "There is a piece on the light square {}", square)]
    PieceOnLightSquare { square: Square },

    /// The move is not legal for the side to move
    #[fail(display = "Illegal move from {} to {}", source, dest)]
    IllegalMove { source: Square, dest: Square },

    /// The game has already been decided
    #[fail(display = "The game is over")]
    GameOver,
}
