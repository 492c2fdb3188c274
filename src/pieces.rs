use crate::board::Board;
use crate::color::Color;
use crate::movegen::{self, MoveList};
use crate::position::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    /// `has_moved` gates the double step. It only ever goes from false to true.
    Pawn { has_moved: bool },
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub fn is_pawn(&self) -> bool {
        matches!(self, PieceType::Pawn { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
    /// Cached square. The board keeps this equal to the cell holding the piece.
    pub position: Position,
}

impl Piece {
    pub fn new(piece_type: PieceType, color: Color, position: Position) -> Self {
        Piece {
            piece_type,
            color,
            position,
        }
    }

    /// A pawn that counts as moved unless it stands on its home row.
    pub fn pawn(color: Color, position: Position) -> Self {
        let has_moved = position.row != color.pawn_row();
        Piece::new(PieceType::Pawn { has_moved }, color, position)
    }

    pub fn has_moved(&self) -> bool {
        match self.piece_type {
            PieceType::Pawn { has_moved } => has_moved,
            _ => false,
        }
    }

    /// Records that the piece made a real move. Only the turn commit calls
    /// this; simulations never do.
    pub fn mark_moved(&mut self) {
        if let PieceType::Pawn { has_moved } = &mut self.piece_type {
            *has_moved = true;
        }
    }

    pub fn to_char(&self) -> char {
        let c = match self.piece_type {
            PieceType::Pawn { .. } => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };

        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(c: char, position: Position) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        let piece_type = match c.to_ascii_lowercase() {
            'p' => return Some(Piece::pawn(color, position)),
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };

        Some(Piece::new(piece_type, color, position))
    }

    /// Pseudo-legal destinations: the piece's movement pattern against the
    /// current occupancy, without asking whether the own king ends up attacked.
    #[hotpath::measure]
    pub fn valid_moves(&self, board: &Board) -> MoveList {
        let mut moves = MoveList::new();
        match self.piece_type {
            PieceType::Pawn { has_moved } => {
                movegen::pawn_moves(board, self, has_moved, &mut moves)
            }
            PieceType::Knight => {
                movegen::step_moves(board, self, &movegen::KNIGHT_OFFSETS, &mut moves)
            }
            PieceType::Bishop => {
                movegen::sliding_moves(board, self, &movegen::BISHOP_DIRECTIONS, &mut moves)
            }
            PieceType::Rook => {
                movegen::sliding_moves(board, self, &movegen::ROOK_DIRECTIONS, &mut moves)
            }
            PieceType::Queen => {
                movegen::sliding_moves(board, self, &movegen::ROOK_DIRECTIONS, &mut moves);
                movegen::sliding_moves(board, self, &movegen::BISHOP_DIRECTIONS, &mut moves);
            }
            PieceType::King => {
                movegen::step_moves(board, self, &movegen::KING_OFFSETS, &mut moves)
            }
        }
        moves
    }

    /// Squares this piece attacks. Unlike [`Piece::valid_moves`], pawn pushes
    /// are left out, pawn diagonals count when empty, and squares held by the
    /// same side count as defended.
    pub fn attacks(&self, board: &Board) -> MoveList {
        let mut attacks = MoveList::new();
        match self.piece_type {
            PieceType::Pawn { .. } => movegen::pawn_attacks(board, self, &mut attacks),
            PieceType::Knight => {
                movegen::step_attacks(board, self, &movegen::KNIGHT_OFFSETS, &mut attacks)
            }
            PieceType::Bishop => {
                movegen::sliding_attacks(board, self, &movegen::BISHOP_DIRECTIONS, &mut attacks)
            }
            PieceType::Rook => {
                movegen::sliding_attacks(board, self, &movegen::ROOK_DIRECTIONS, &mut attacks)
            }
            PieceType::Queen => {
                movegen::sliding_attacks(board, self, &movegen::ROOK_DIRECTIONS, &mut attacks);
                movegen::sliding_attacks(board, self, &movegen::BISHOP_DIRECTIONS, &mut attacks);
            }
            PieceType::King => {
                movegen::step_attacks(board, self, &movegen::KING_OFFSETS, &mut attacks)
            }
        }
        attacks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> Position {
        Position::from_algebraic(s).expect("Failed to parse square")
    }

    #[test]
    fn test_piece_creation() {
        let piece = Piece::new(PieceType::King, Color::White, at("e1"));
        assert_eq!(piece.piece_type, PieceType::King);
        assert_eq!(piece.color, Color::White);
        assert_eq!(piece.position, at("e1"));
    }

    #[test]
    fn test_piece_to_char() {
        let pos = at("a1");
        assert_eq!(Piece::new(PieceType::King, Color::White, pos).to_char(), 'K');
        assert_eq!(Piece::new(PieceType::King, Color::Black, pos).to_char(), 'k');
        assert_eq!(Piece::new(PieceType::Queen, Color::White, pos).to_char(), 'Q');
        assert_eq!(Piece::new(PieceType::Queen, Color::Black, pos).to_char(), 'q');
        assert_eq!(Piece::new(PieceType::Rook, Color::White, pos).to_char(), 'R');
        assert_eq!(Piece::new(PieceType::Rook, Color::Black, pos).to_char(), 'r');
        assert_eq!(Piece::new(PieceType::Bishop, Color::White, pos).to_char(), 'B');
        assert_eq!(Piece::new(PieceType::Bishop, Color::Black, pos).to_char(), 'b');
        assert_eq!(Piece::new(PieceType::Knight, Color::White, pos).to_char(), 'N');
        assert_eq!(Piece::new(PieceType::Knight, Color::Black, pos).to_char(), 'n');
        assert_eq!(Piece::pawn(Color::White, pos).to_char(), 'P');
        assert_eq!(Piece::pawn(Color::Black, pos).to_char(), 'p');
    }

    #[test]
    fn test_piece_from_char() {
        let pos = at("d4");
        for c in ['K', 'k', 'Q', 'q', 'R', 'r', 'B', 'b', 'N', 'n', 'P', 'p'] {
            let piece = Piece::from_char(c, pos).expect("Failed to parse piece char");
            assert_eq!(piece.to_char(), c);
            assert_eq!(piece.position, pos);
        }
        assert_eq!(Piece::from_char('x', pos), None);
    }

    #[test]
    fn test_pawn_home_row_sets_flag() {
        assert!(!Piece::pawn(Color::White, at("e2")).has_moved());
        assert!(Piece::pawn(Color::White, at("e3")).has_moved());
        assert!(!Piece::pawn(Color::Black, at("e7")).has_moved());
        assert!(Piece::pawn(Color::Black, at("e2")).has_moved());
    }

    #[test]
    fn test_mark_moved_is_one_way() {
        let mut pawn = Piece::pawn(Color::White, at("c2"));
        pawn.mark_moved();
        assert!(pawn.has_moved());
        pawn.mark_moved();
        assert!(pawn.has_moved());

        let mut rook = Piece::new(PieceType::Rook, Color::White, at("a1"));
        rook.mark_moved();
        assert_eq!(rook.piece_type, PieceType::Rook);
    }
}
