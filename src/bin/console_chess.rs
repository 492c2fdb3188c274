use std::io::{self, ErrorKind};
use std::process::ExitCode;

use console_chess::config::{Config, USAGE};
use console_chess::game::Game;
use console_chess::input::LineInput;
use console_chess::render::ConsoleRenderer;
use console_chess::GameError;

#[hotpath::main]
fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    if config.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    let stdin = io::stdin();
    let mut input = LineInput::new(stdin.lock(), io::stdout());
    let mut renderer = ConsoleRenderer::new(io::stdout(), config);

    let game = Game::new();
    match game.play(&mut input, &mut renderer) {
        Ok(_) => ExitCode::SUCCESS,
        Err(GameError::Io(e)) if e.kind() == ErrorKind::UnexpectedEof => {
            println!();
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
