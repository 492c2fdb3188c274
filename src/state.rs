use crate::color::Color;
use crate::pieces::Piece;
use crate::status::GameStatus;

/// Turn bookkeeping that lives beside the board for the length of a game.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct GameState {
    current_player: Color,
    status: GameStatus,
    last_move: Option<String>,
    captured_by_white: Vec<Piece>,
    captured_by_black: Vec<Piece>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<&str> {
        self.last_move.as_deref()
    }

    /// Pieces `color` has taken from the opponent, in capture order.
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.captured_by_white,
            Color::Black => &self.captured_by_black,
        }
    }

    pub fn captured_symbols(&self, color: Color) -> String {
        self.captured_by(color)
            .iter()
            .map(|piece| piece.to_char().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn set_current_player(&mut self, color: Color) {
        self.current_player = color;
    }

    pub(crate) fn switch_player(&mut self) {
        self.current_player = self.current_player.opposite();
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    pub(crate) fn set_last_move(&mut self, notation: String) {
        self.last_move = Some(notation);
    }

    pub(crate) fn record_capture(&mut self, piece: Piece) {
        match piece.color {
            Color::Black => self.captured_by_white.push(piece),
            Color::White => self.captured_by_black.push(piece),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::PieceType;
    use crate::position::Position;

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.current_player(), Color::White);
        assert_eq!(state.status(), GameStatus::Ongoing);
        assert_eq!(state.last_move(), None);
        assert!(state.captured_by(Color::White).is_empty());
        assert!(state.captured_by(Color::Black).is_empty());
    }

    #[test]
    fn test_switch_player() {
        let mut state = GameState::new();
        state.switch_player();
        assert_eq!(state.current_player(), Color::Black);
        state.switch_player();
        assert_eq!(state.current_player(), Color::White);
    }

    #[test]
    fn test_captures_go_to_the_capturing_side() {
        let mut state = GameState::new();
        let pos = Position::new(0, 0);
        state.record_capture(Piece::new(PieceType::Queen, Color::Black, pos));
        state.record_capture(Piece::pawn(Color::Black, pos));
        state.record_capture(Piece::new(PieceType::Knight, Color::White, pos));

        assert_eq!(state.captured_by(Color::White).len(), 2);
        assert_eq!(state.captured_by(Color::Black).len(), 1);
        assert_eq!(state.captured_symbols(Color::White), "q p");
        assert_eq!(state.captured_symbols(Color::Black), "N");
    }
}
