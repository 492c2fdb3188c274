use crate::color::Color;
use crate::error::{GameError, MoveError};
use crate::pieces::{Piece, PieceType};
use crate::position::{BOARD_SIZE, Position};
use crate::r#move::{Move, MoveFlags};
use crate::simulate::Simulation;
use crate::state::GameState;
use crate::status::GameStatus;
use std::fmt;

const SQUARES: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

pub const STANDARD_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// The 8x8 grid. All piece placement goes through this type so that every
/// piece's cached position always names the cell that holds it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; SQUARES],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; SQUARES],
        }
    }

    pub fn standard() -> Self {
        let mut board = Self::empty();
        board.initialize();
        board
    }

    /// Resets to the starting position.
    pub fn initialize(&mut self) {
        self.clear();

        for color in [Color::White, Color::Black] {
            for (col, piece_type) in BACK_RANK.iter().enumerate() {
                let pos = Position::new(col as i8, color.back_row());
                self.set_piece(&pos, Some(Piece::new(*piece_type, color, pos)));

                let pos = Position::new(col as i8, color.pawn_row());
                self.set_piece(&pos, Some(Piece::pawn(color, pos)));
            }
        }
    }

    /// Builds a board from FEN piece-placement text, rank 8 first.
    pub fn from_placement(placement: &str) -> Result<Self, GameError> {
        let mut board = Self::empty();

        let rows: Vec<&str> = placement.trim().split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(GameError::Placement(format!(
                "expected {} rows, got {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0i8;

            for c in row_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col = col.saturating_add(skip as i8);
                } else {
                    let pos = Position::new(col, row as i8);
                    if !pos.is_valid() {
                        return Err(GameError::Placement(format!(
                            "row {} runs past the board edge",
                            row + 1
                        )));
                    }
                    let piece = Piece::from_char(c, pos).ok_or_else(|| {
                        GameError::Placement(format!("unexpected piece char {:?}", c))
                    })?;
                    board.set_piece(&pos, Some(piece));
                    col += 1;
                }
            }

            if col != BOARD_SIZE {
                return Err(GameError::Placement(format!(
                    "row {} has {} squares",
                    row + 1,
                    col
                )));
            }
        }

        Ok(board)
    }

    pub fn to_placement(&self) -> String {
        let mut placement = String::new();

        for row in 0..BOARD_SIZE {
            let mut empty_count = 0;

            for col in 0..BOARD_SIZE {
                if let Some(piece) = self.piece_at(&Position::new(col, row)) {
                    if empty_count > 0 {
                        placement.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    placement.push(piece.to_char());
                } else {
                    empty_count += 1;
                }
            }

            if empty_count > 0 {
                placement.push_str(&empty_count.to_string());
            }

            if row < BOARD_SIZE - 1 {
                placement.push('/');
            }
        }

        placement
    }

    pub fn is_valid(&self, pos: &Position) -> bool {
        pos.is_valid()
    }

    pub fn piece_at(&self, pos: &Position) -> Option<Piece> {
        pos.index().and_then(|index| self.squares[index])
    }

    /// Writes a cell, stamping the piece with its new position.
    pub fn set_piece(&mut self, pos: &Position, piece: Option<Piece>) {
        if let Some(index) = pos.index() {
            self.squares[index] = piece.map(|mut piece| {
                piece.position = *pos;
                piece
            });
        }
    }

    pub fn clear(&mut self) {
        self.squares = [None; SQUARES];
    }

    /// Raw apply with no legality checking, shared by real moves and
    /// simulations. Whatever stood on `to` is recorded as captured in `state`
    /// and returned. Does nothing when `from` is empty or equals `to`.
    pub fn move_piece(
        &mut self,
        from: &Position,
        to: &Position,
        state: &mut GameState,
    ) -> Option<Piece> {
        let piece = self.piece_at(from)?;
        if !to.is_valid() || from == to {
            return None;
        }

        let captured = self.piece_at(to);
        if let Some(captured) = captured {
            state.record_capture(captured);
        }

        self.set_piece(to, Some(piece));
        self.set_piece(from, None);
        state.set_last_move(format!("{}-{}", from.to_algebraic(), to.to_algebraic()));

        captured
    }

    /// Reverses [`Board::move_piece`] for a simulated move. Not meant for
    /// taking back committed moves.
    pub fn undo_move(
        &mut self,
        from: &Position,
        to: &Position,
        previously_captured: Option<Piece>,
    ) {
        if from == to {
            return;
        }
        let Some(piece) = self.piece_at(to) else {
            return;
        };

        self.set_piece(from, Some(piece));
        self.set_piece(to, previously_captured);
    }

    /// Flags the piece on `pos` as having made a real move.
    pub(crate) fn mark_moved(&mut self, pos: &Position) {
        if let Some(index) = pos.index() {
            if let Some(piece) = self.squares[index].as_mut() {
                piece.mark_moved();
            }
        }
    }

    pub fn pieces(&self, color: Color) -> Vec<Piece> {
        self.squares
            .iter()
            .flatten()
            .filter(|piece| piece.color == color)
            .copied()
            .collect()
    }

    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.squares
            .iter()
            .flatten()
            .find(|piece| piece.piece_type == PieceType::King && piece.color == color)
            .map(|piece| piece.position)
    }

    /// Whether any `by_color` piece attacks `square`, empty or not.
    pub fn is_square_attacked(&self, square: &Position, by_color: Color) -> bool {
        self.squares
            .iter()
            .flatten()
            .filter(|piece| piece.color == by_color)
            .any(|piece| piece.attacks(self).contains(square))
    }

    #[hotpath::measure]
    pub fn is_in_check(&self, color: Color) -> Result<bool, GameError> {
        let king_pos = self.find_king(color).ok_or(GameError::MissingKing(color))?;
        Ok(self.is_square_attacked(&king_pos, color.opposite()))
    }

    /// Plays `from`-`to` on a throwaway basis and reports whether the mover's
    /// king is safe afterwards.
    fn keeps_king_safe(
        &mut self,
        from: &Position,
        to: &Position,
        color: Color,
    ) -> Result<bool, GameError> {
        match Simulation::apply(self, *from, *to) {
            Some(sim) => Ok(!sim.is_in_check(color)?),
            None => Ok(false),
        }
    }

    /// Full legality check for the piece on `from`: it must reach `to` by its
    /// movement pattern and must not leave its own king attacked.
    pub fn check_move(&mut self, from: &Position, to: &Position) -> Result<Piece, GameError> {
        if !from.is_valid() {
            return Err(MoveError::OffBoard(*from).into());
        }
        if !to.is_valid() {
            return Err(MoveError::OffBoard(*to).into());
        }

        let piece = self.piece_at(from).ok_or(MoveError::EmptySquare(*from))?;

        if !piece.valid_moves(self).contains(to) {
            return Err(MoveError::Unreachable {
                from: *from,
                to: *to,
            }
            .into());
        }

        if !self.keeps_king_safe(from, to, piece.color)? {
            return Err(MoveError::ExposesKing {
                from: *from,
                to: *to,
            }
            .into());
        }

        Ok(piece)
    }

    pub fn is_legal_move(&mut self, from: &Position, to: &Position) -> Result<bool, GameError> {
        match self.check_move(from, to) {
            Ok(_) => Ok(true),
            Err(GameError::IllegalMove(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Describes a move on the current board, before it is played.
    pub fn describe_move(&self, from: &Position, to: &Position) -> Move {
        let mut flags = MoveFlags::empty();

        if self.piece_at(to).is_some() {
            flags |= MoveFlags::CAPTURE;
        }

        if let Some(piece) = self.piece_at(from) {
            if piece.piece_type.is_pawn() && (to.row - from.row).abs() == 2 {
                flags |= MoveFlags::DOUBLE_PUSH;
            }
        }

        Move::from_position(*from, *to, flags)
    }

    pub fn legal_moves(&mut self, color: Color) -> Result<Vec<Move>, GameError> {
        let mut moves = Vec::new();

        for piece in self.pieces(color) {
            for dst in piece.valid_moves(self) {
                if self.keeps_king_safe(&piece.position, &dst, color)? {
                    moves.push(self.describe_move(&piece.position, &dst));
                }
            }
        }

        Ok(moves)
    }

    /// Stops at the first move that keeps the king safe.
    #[hotpath::measure]
    pub fn has_legal_move(&mut self, color: Color) -> Result<bool, GameError> {
        for piece in self.pieces(color) {
            for dst in piece.valid_moves(self) {
                if self.keeps_king_safe(&piece.position, &dst, color)? {
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }

    pub fn is_checkmate(&mut self, color: Color) -> Result<bool, GameError> {
        Ok(self.is_in_check(color)? && !self.has_legal_move(color)?)
    }

    pub fn is_stalemate(&mut self, color: Color) -> Result<bool, GameError> {
        Ok(!self.is_in_check(color)? && !self.has_legal_move(color)?)
    }

    /// Status of the game with `color` to move.
    pub fn status_for(&mut self, color: Color) -> Result<GameStatus, GameError> {
        let in_check = self.is_in_check(color)?;
        let has_legal_move = self.has_legal_move(color)?;
        Ok(GameStatus::from_position(in_check, has_legal_move))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                if let Some(piece) = self.piece_at(&Position::new(col, row)) {
                    write!(f, "{} ", piece.to_char())?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }

        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{} ", (b'a' + col as u8) as char)?;
        }
        Ok(())
    }
}
