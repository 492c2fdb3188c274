//! Per-kind pseudo-legal destination generators.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::pieces::Piece;
use crate::position::Position;

/// A queen in the middle of an empty board reaches 27 squares, the most any
/// single piece can.
pub const MAX_PIECE_MOVES: usize = 27;

pub type MoveList = ArrayVec<Position, MAX_PIECE_MOVES>;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Walks each direction until the edge or the first occupied square, which is
/// kept only when it holds an enemy piece.
pub fn sliding_moves(board: &Board, piece: &Piece, directions: &[(i8, i8)], moves: &mut MoveList) {
    for &(col_dir, row_dir) in directions {
        let mut dst = piece.position.offset(col_dir, row_dir);

        while board.is_valid(&dst) {
            if let Some(target) = board.piece_at(&dst) {
                if target.color != piece.color {
                    moves.push(dst);
                }
                break;
            }

            moves.push(dst);
            dst = dst.offset(col_dir, row_dir);
        }
    }
}

/// Single jumps (knight, king): each offset stands alone.
pub fn step_moves(board: &Board, piece: &Piece, offsets: &[(i8, i8)], moves: &mut MoveList) {
    for &(col_offset, row_offset) in offsets {
        let dst = piece.position.offset(col_offset, row_offset);
        if !board.is_valid(&dst) {
            continue;
        }

        match board.piece_at(&dst) {
            Some(target) if target.color == piece.color => {}
            _ => moves.push(dst),
        }
    }
}

pub fn pawn_moves(board: &Board, piece: &Piece, has_moved: bool, moves: &mut MoveList) {
    let direction = piece.color.forward();
    let src = piece.position;

    // Single push, then the double push through the same empty square
    let one_step = src.offset(0, direction);
    if board.is_valid(&one_step) && board.piece_at(&one_step).is_none() {
        moves.push(one_step);

        if !has_moved {
            let two_steps = src.offset(0, 2 * direction);
            if board.is_valid(&two_steps) && board.piece_at(&two_steps).is_none() {
                moves.push(two_steps);
            }
        }
    }

    // Captures
    for col_offset in [-1, 1] {
        let dst = src.offset(col_offset, direction);
        if !board.is_valid(&dst) {
            continue;
        }

        if let Some(target) = board.piece_at(&dst) {
            if target.color != piece.color {
                moves.push(dst);
            }
        }
    }
}

/// Squares a slider bears on: each ray up to and including the first
/// occupied square, whoever holds it.
pub fn sliding_attacks(
    board: &Board,
    piece: &Piece,
    directions: &[(i8, i8)],
    attacks: &mut MoveList,
) {
    for &(col_dir, row_dir) in directions {
        let mut dst = piece.position.offset(col_dir, row_dir);

        while board.is_valid(&dst) {
            attacks.push(dst);
            if board.piece_at(&dst).is_some() {
                break;
            }
            dst = dst.offset(col_dir, row_dir);
        }
    }
}

pub fn step_attacks(board: &Board, piece: &Piece, offsets: &[(i8, i8)], attacks: &mut MoveList) {
    attacks.extend(
        offsets
            .iter()
            .map(|&(col_offset, row_offset)| piece.position.offset(col_offset, row_offset))
            .filter(|dst| board.is_valid(dst)),
    );
}

/// Pawns strike diagonally forward whether or not anything stands there.
pub fn pawn_attacks(board: &Board, piece: &Piece, attacks: &mut MoveList) {
    step_attacks(
        board,
        piece,
        &[(-1, piece.color.forward()), (1, piece.color.forward())],
        attacks,
    );
}
