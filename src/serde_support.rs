use crate::board::Board;
use crate::position::Position;
use crate::r#move::Move;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialize Board as its piece-placement string
impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_placement())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let placement = String::deserialize(deserializer)?;
        Board::from_placement(&placement).map_err(serde::de::Error::custom)
    }
}

/// Serialize Position as a square name, e.g. "e4"
impl Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.is_valid() {
            return Err(serde::ser::Error::custom(format!(
                "{} is off the board",
                self
            )));
        }
        serializer.serialize_str(&self.to_algebraic())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let square = String::deserialize(deserializer)?;
        Position::from_algebraic(&square).map_err(serde::de::Error::custom)
    }
}

/// Serialize Move as "from-to" text. Flags are board context and are not kept.
impl Serialize for Move {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_notation())
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let lan = String::deserialize(deserializer)?;
        Move::from_lan(&lan).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#move::MoveFlags;

    #[test]
    fn test_board_serde() {
        let board = Board::from_placement("4k3/8/8/3p4/4Q3/8/8/4K3")
            .expect("Failed to parse placement");

        let json = serde_json::to_string(&board).expect("Failed to serialize board");
        assert_eq!(json, "\"4k3/8/8/3p4/4Q3/8/8/4K3\"");

        let board2: Board = serde_json::from_str(&json).expect("Failed to deserialize board");
        assert_eq!(board, board2);
    }

    #[test]
    fn test_bad_board_rejected() {
        let result: Result<Board, _> = serde_json::from_str("\"rnbqkbnr/ppp\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_position_serde() {
        let json = serde_json::to_string(&Position::new(4, 4)).expect("Failed to serialize");
        assert_eq!(json, "\"e4\"");

        let pos: Position = serde_json::from_str("\"a8\"").expect("Failed to deserialize");
        assert_eq!(pos, Position::new(0, 0));

        assert!(serde_json::to_string(&Position::new(8, 0)).is_err());
        assert!(serde_json::from_str::<Position>("\"i1\"").is_err());
    }

    #[test]
    fn test_move_serde() {
        let move_ = Move::from_position(
            Position::new(4, 6),
            Position::new(4, 4),
            MoveFlags::DOUBLE_PUSH,
        );

        let json = serde_json::to_string(&move_).expect("Failed to serialize move");
        assert_eq!(json, "\"e2-e4\"");

        let move2: Move = serde_json::from_str(&json).expect("Failed to deserialize move");
        assert_eq!(move_.src, move2.src);
        assert_eq!(move_.dst, move2.dst);
        assert!(move2.flags.is_empty());
    }
}
