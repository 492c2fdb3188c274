use crate::color::Color;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Derives the status of the side to move from whether its king is
    /// attacked and whether it has any legal move.
    pub fn from_position(in_check: bool, has_legal_move: bool) -> Self {
        match (in_check, has_legal_move) {
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (false, true) => GameStatus::Ongoing,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }

    /// The winner, given the side that is to move in this status.
    pub fn winner(&self, to_move: Color) -> Option<Color> {
        match self {
            GameStatus::Checkmate => Some(to_move.opposite()),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Ongoing => "Ongoing",
            GameStatus::Check => "Check",
            GameStatus::Checkmate => "Checkmate",
            GameStatus::Stalemate => "Stalemate",
        };
        write!(f, "{}", s)
    }
}
