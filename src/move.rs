use crate::error::MoveError;
use crate::position::Position;
use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MoveFlags: u8 {
        const CAPTURE = 0b00000001;
        const DOUBLE_PUSH = 0b00000010;
        const CHECK = 0b00000100;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub src: Position,
    pub dst: Position,
    pub flags: MoveFlags,
}

impl Move {
    pub fn from_position(src: Position, dst: Position, flags: MoveFlags) -> Self {
        Move { src, dst, flags }
    }

    pub fn is_capture(&self) -> bool {
        self.flags.contains(MoveFlags::CAPTURE)
    }

    /// Parses "e2e4" or "e2-e4". The result carries no flags; those need
    /// board context.
    pub fn from_lan(lan: &str) -> Result<Self, MoveError> {
        let compact: String = lan.trim().chars().filter(|c| *c != '-').collect();
        if compact.len() != 4 || !compact.is_ascii() {
            return Err(MoveError::Malformed(lan.to_string()));
        }

        let src = Position::from_algebraic(&compact[0..2])
            .map_err(|_| MoveError::Malformed(lan.to_string()))?;
        let dst = Position::from_algebraic(&compact[2..4])
            .map_err(|_| MoveError::Malformed(lan.to_string()))?;

        Ok(Move::from_position(src, dst, MoveFlags::empty()))
    }

    /// The "from-to" text kept as the last move, e.g. `e2-e4`.
    pub fn to_notation(&self) -> String {
        format!("{}-{}", self.src.to_algebraic(), self.dst.to_algebraic())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_notation())?;
        if self.flags.contains(MoveFlags::CHECK) {
            write!(f, "+")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lan() {
        let mv = Move::from_lan("e2e4").expect("Failed to parse e2e4");
        assert_eq!(mv.src, Position::new(4, 6));
        assert_eq!(mv.dst, Position::new(4, 4));
        assert!(mv.flags.is_empty());

        assert_eq!(Move::from_lan("e2-e4"), Ok(mv));
        assert_eq!(Move::from_lan(" e2e4\n"), Ok(mv));
    }

    #[test]
    fn test_from_lan_rejects_garbage() {
        for input in ["", "e2", "e2e", "e2e9", "z2e4", "e2e4e5", "é2e4"] {
            assert_eq!(
                Move::from_lan(input),
                Err(MoveError::Malformed(input.to_string())),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_notation_and_display() {
        let mut mv = Move::from_position(
            Position::new(3, 0),
            Position::new(7, 4),
            MoveFlags::CAPTURE,
        );
        assert_eq!(mv.to_notation(), "d8-h4");
        assert!(mv.is_capture());
        assert_eq!(mv.to_string(), "d8-h4");

        mv.flags |= MoveFlags::CHECK;
        assert_eq!(mv.to_string(), "d8-h4+");
    }
}
