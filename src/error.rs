use crate::color::Color;
use crate::position::Position;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoordParseError {
    #[error("invalid string length")]
    BadLength,
    #[error("unexpected file char {0:?}")]
    UnexpectedFileChar(char),
    #[error("unexpected rank char {0:?}")]
    UnexpectedRankChar(char),
}

/// Reasons a candidate move is turned away. None of these end a game; the
/// turn loop asks for another move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("{0} is off the board")]
    OffBoard(Position),
    #[error("no piece on {0}")]
    EmptySquare(Position),
    #[error("the piece on {0} belongs to the opponent")]
    OpponentPiece(Position),
    #[error("the piece on {from} cannot reach {to}")]
    Unreachable { from: Position, to: Position },
    #[error("{from}-{to} leaves the king in check")]
    ExposesKing { from: Position, to: Position },
    #[error("the game is over")]
    GameOver,
    #[error("malformed move {0:?}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("no {0} king on the board")]
    MissingKing(Color),
    #[error("illegal move: {0}")]
    IllegalMove(#[from] MoveError),
    #[error("invalid piece placement: {0}")]
    Placement(String),
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Whether the turn loop may carry on by asking for another move.
    pub fn is_rejection(&self) -> bool {
        matches!(self, GameError::IllegalMove(_))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown flag {0:?}")]
    UnknownFlag(String),
}
