use std::io::{self, Write};

use crate::board::Board;
use crate::color::Color;
use crate::config::Config;
use crate::perf::{PerfSampler, ProcessSampler};
use crate::position::{BOARD_SIZE, Position};
use crate::state::GameState;
use crate::status::GameStatus;

const RESET: &str = "\x1b[0m";
const LIGHT_SQUARE: &str = "\x1b[100m";
const DARK_SQUARE: &str = "\x1b[40m";
const WHITE_PIECE: &str = "\x1b[97m";
const BLACK_PIECE: &str = "\x1b[33m";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const FILES: &str = "    a b c d e f g h";
const BORDER: &str = "  +-----------------+";
const RULE: &str = "------------------------------------------";

/// Read-only consumer of the board and game state.
pub trait Render {
    /// Called before each move is requested.
    fn render(&mut self, board: &Board, state: &GameState) -> io::Result<()>;

    /// Called when a move was turned away.
    fn rejected(&mut self) -> io::Result<()>;

    /// Called once when the game ends.
    fn game_over(&mut self, board: &Board, state: &GameState) -> io::Result<()>;
}

pub fn summary(state: &GameState) -> String {
    match state.status() {
        GameStatus::Checkmate => match state.status().winner(state.current_player()) {
            Some(winner) => format!("Checkmate! {} wins.", winner),
            None => "Checkmate!".to_string(),
        },
        GameStatus::Stalemate => "Stalemate! The game is a draw.".to_string(),
        status => format!("Game stopped ({}).", status),
    }
}

pub struct ConsoleRenderer<W, S = ProcessSampler> {
    out: W,
    config: Config,
    sampler: S,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, config: Config) -> Self {
        Self::with_sampler(out, config, ProcessSampler)
    }
}

impl<W: Write, S: PerfSampler> ConsoleRenderer<W, S> {
    pub fn with_sampler(out: W, config: Config, sampler: S) -> Self {
        ConsoleRenderer {
            out,
            config,
            sampler,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw_board(&mut self, board: &Board) -> io::Result<()> {
        writeln!(self.out, "{}", FILES)?;
        writeln!(self.out, "{}", BORDER)?;

        for row in 0..BOARD_SIZE {
            let rank = BOARD_SIZE - row;
            write!(self.out, "{} |", rank)?;

            for col in 0..BOARD_SIZE {
                let piece = board.piece_at(&Position::new(col, row));
                let symbol = piece.map_or(' ', |p| p.to_char());

                if self.config.color {
                    let background = if (row + col) % 2 == 0 {
                        LIGHT_SQUARE
                    } else {
                        DARK_SQUARE
                    };
                    let foreground = match piece.map(|p| p.color) {
                        Some(Color::Black) => BLACK_PIECE,
                        _ => WHITE_PIECE,
                    };
                    write!(self.out, "{}{}{}{}|", background, foreground, symbol, RESET)?;
                } else {
                    write!(self.out, "{}|", symbol)?;
                }
            }

            writeln!(self.out, " {}", rank)?;
        }

        writeln!(self.out, "{}", BORDER)?;
        writeln!(self.out, "{}", FILES)
    }

    fn draw_info_panel(&mut self, state: &GameState) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Turn: {} | Status: {}",
            state.current_player(),
            state.status()
        )?;
        writeln!(self.out, "Last move: {}", state.last_move().unwrap_or("N/A"))?;
        writeln!(
            self.out,
            "Captured by White: {}",
            state.captured_symbols(Color::White)
        )?;
        writeln!(
            self.out,
            "Captured by Black: {}",
            state.captured_symbols(Color::Black)
        )?;
        writeln!(self.out, "{}", RULE)
    }

    fn draw_perf_panel(&mut self) -> io::Result<()> {
        match self.sampler.sample() {
            Some(sample) => writeln!(self.out, "{}", sample),
            None => writeln!(self.out, "Perf: unavailable"),
        }
    }
}

impl<W: Write, S: PerfSampler> Render for ConsoleRenderer<W, S> {
    fn render(&mut self, board: &Board, state: &GameState) -> io::Result<()> {
        if self.config.clear_screen {
            write!(self.out, "{}", CLEAR_SCREEN)?;
        }
        self.draw_board(board)?;
        self.draw_info_panel(state)?;
        self.draw_perf_panel()?;
        self.out.flush()
    }

    fn rejected(&mut self) -> io::Result<()> {
        writeln!(self.out, "Invalid move, try again.")?;
        self.out.flush()
    }

    fn game_over(&mut self, board: &Board, state: &GameState) -> io::Result<()> {
        self.render(board, state)?;
        writeln!(self.out, "GAME OVER")?;
        writeln!(self.out, "{}", summary(state))?;
        self.out.flush()
    }
}
