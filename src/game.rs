use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::board::Board;
use crate::color::Color;
use crate::error::{GameError, MoveError};
use crate::input::MoveInput;
use crate::position::Position;
use crate::r#move::{Move, MoveFlags};
use crate::render::Render;
use crate::state::GameState;
use crate::status::GameStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    AwaitingMove,
    MoveCommitted,
    GameOver,
}

/// Everything a turn touches. Kept together so a commit is seen whole.
struct Table {
    board: Board,
    state: GameState,
    phase: TurnPhase,
}

impl Table {
    fn validate_from(&self, from: &Position) -> Result<(), GameError> {
        if self.phase == TurnPhase::GameOver {
            return Err(MoveError::GameOver.into());
        }
        if !from.is_valid() {
            return Err(MoveError::OffBoard(*from).into());
        }

        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySquare(*from))?;
        if piece.color != self.state.current_player() {
            return Err(MoveError::OpponentPiece(*from).into());
        }

        Ok(())
    }

    fn validate(&mut self, from: &Position, to: &Position) -> Result<(), GameError> {
        self.validate_from(from)?;
        self.board.check_move(from, to)?;
        Ok(())
    }

    /// Builds the next position on copies and swaps it in only once the new
    /// status is known, so a failed recompute leaves the table as it was.
    fn commit(&mut self, from: &Position, to: &Position) -> Result<Move, GameError> {
        let mut mv = self.board.describe_move(from, to);
        let mut board = self.board.clone();
        let mut state = self.state.clone();

        board.move_piece(from, to, &mut state);
        board.mark_moved(to);
        state.switch_player();

        let status = board.status_for(state.current_player())?;
        state.set_status(status);
        if matches!(status, GameStatus::Check | GameStatus::Checkmate) {
            mv.flags |= MoveFlags::CHECK;
        }

        self.board = board;
        self.state = state;
        self.phase = TurnPhase::MoveCommitted;
        Ok(mv)
    }

    fn settle(&mut self) {
        self.phase = if self.state.status().is_over() {
            TurnPhase::GameOver
        } else {
            TurnPhase::AwaitingMove
        };
    }
}

/// A two-player game on one board. Every method takes `&self`; the board and
/// turn state sit behind a single lock, so readers on other threads observe
/// either the position before a move or the one after it.
pub struct Game {
    table: Mutex<Table>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard opening position, White to move.
    pub fn new() -> Self {
        Game {
            table: Mutex::new(Table {
                board: Board::standard(),
                state: GameState::new(),
                phase: TurnPhase::AwaitingMove,
            }),
        }
    }

    /// Starts from an arbitrary position. Both kings must be present and the
    /// side that is not to move must not be in check.
    pub fn from_board(mut board: Board, to_move: Color) -> Result<Self, GameError> {
        if board.is_in_check(to_move.opposite())? {
            return Err(GameError::Placement(format!(
                "{} is in check but it is {}'s turn",
                to_move.opposite(),
                to_move
            )));
        }

        let status = board.status_for(to_move)?;
        let mut state = GameState::new();
        state.set_current_player(to_move);
        state.set_status(status);

        let mut table = Table {
            board,
            state,
            phase: TurnPhase::AwaitingMove,
        };
        table.settle();

        Ok(Game {
            table: Mutex::new(table),
        })
    }

    fn table(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn phase(&self) -> TurnPhase {
        self.table().phase
    }

    pub fn current_player(&self) -> Color {
        self.table().state.current_player()
    }

    pub fn status(&self) -> GameStatus {
        self.table().state.status()
    }

    pub fn last_move(&self) -> Option<String> {
        self.table().state.last_move().map(str::to_string)
    }

    pub fn is_over(&self) -> bool {
        self.phase() == TurnPhase::GameOver
    }

    /// Runs `f` against a consistent view of the board and state.
    pub fn view<T>(&self, f: impl FnOnce(&Board, &GameState) -> T) -> T {
        let table = self.table();
        f(&table.board, &table.state)
    }

    pub fn snapshot(&self) -> (Board, GameState) {
        self.view(|board, state| (board.clone(), state.clone()))
    }

    /// Legal moves for the side to move. Empty once the game is over.
    pub fn legal_moves(&self) -> Result<Vec<Move>, GameError> {
        let mut table = self.table();
        if table.phase == TurnPhase::GameOver {
            return Ok(Vec::new());
        }
        let color = table.state.current_player();
        table.board.legal_moves(color)
    }

    /// Validates and plays one move for the side to move. Rejections come
    /// back as [`GameError::IllegalMove`] and leave the game untouched.
    #[hotpath::measure]
    pub fn submit(&self, from: Position, to: Position) -> Result<Move, GameError> {
        let mut table = self.table();
        table.validate(&from, &to)?;
        let mv = table.commit(&from, &to)?;
        table.settle();
        Ok(mv)
    }

    /// `submit` for "e2e4" or "e2-e4" text.
    pub fn submit_lan(&self, lan: &str) -> Result<Move, GameError> {
        let mv = Move::from_lan(lan)?;
        self.submit(mv.src, mv.dst)
    }

    fn read_move(
        &self,
        input: &mut impl MoveInput,
        render: &mut impl Render,
    ) -> Result<Move, GameError> {
        loop {
            let player = self.current_player();

            let Some(from) = input.read_coordinate(&format!("{} to move, from: ", player))? else {
                render.rejected()?;
                continue;
            };

            let checked = self.table().validate_from(&from);
            match checked {
                Ok(()) => {}
                Err(e) if e.is_rejection() => {
                    render.rejected()?;
                    continue;
                }
                Err(e) => return Err(e),
            }

            let Some(to) = input.read_coordinate(&format!("{} to move, to: ", player))? else {
                render.rejected()?;
                continue;
            };

            match self.submit(from, to) {
                Ok(mv) => return Ok(mv),
                Err(e) if e.is_rejection() => render.rejected()?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Drives the game to the end, asking `input` for coordinates and showing
    /// every position through `render`. Returns the final status.
    ///
    /// A closed input ends the loop with [`GameError::Io`].
    pub fn play(
        &self,
        input: &mut impl MoveInput,
        render: &mut impl Render,
    ) -> Result<GameStatus, GameError> {
        loop {
            match self.phase() {
                TurnPhase::AwaitingMove => {
                    self.view(|board, state| render.render(board, state))?;
                    self.read_move(input, render)?;
                }
                TurnPhase::MoveCommitted => self.table().settle(),
                TurnPhase::GameOver => {
                    self.view(|board, state| render.game_over(board, state))?;
                    return Ok(self.status());
                }
            }
        }
    }
}
