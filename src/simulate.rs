//! Speculative single-ply moves that undo themselves.

use std::ops::Deref;

use crate::board::Board;
use crate::pieces::Piece;
use crate::position::Position;
use crate::state::GameState;

/// A move applied to a board for inspection. The board is read through this
/// handle while it lives, and dropping it restores the exact prior grid, on
/// early returns and unwinding alike.
///
/// Bookkeeping from the raw apply (captured lists, last-move text) goes to a
/// scratch [`GameState`] that is discarded immediately.
pub struct Simulation<'a> {
    board: &'a mut Board,
    from: Position,
    to: Position,
    captured: Option<Piece>,
}

impl<'a> Simulation<'a> {
    /// Returns `None` when `from` is empty, since there is nothing to move.
    pub fn apply(board: &'a mut Board, from: Position, to: Position) -> Option<Self> {
        board.piece_at(&from)?;

        let mut scratch = GameState::new();
        let captured = board.move_piece(&from, &to, &mut scratch);

        Some(Simulation {
            board,
            from,
            to,
            captured,
        })
    }

    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }
}

impl Deref for Simulation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        self.board.undo_move(&self.from, &self.to, self.captured.take());
    }
}
