pub mod board;
pub mod color;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod r#move;
pub mod movegen;
pub mod perf;
pub mod pieces;
pub mod position;
pub mod render;
pub mod simulate;
pub mod state;
pub mod status;

#[cfg(feature = "serde")]
pub mod serde_support;

pub use board::Board;
pub use color::Color;
pub use error::{ConfigError, CoordParseError, GameError, MoveError};
pub use game::{Game, TurnPhase};
pub use position::Position;
pub use r#move::{Move, MoveFlags};
pub use state::GameState;
pub use status::GameStatus;
