//! Plays seeded random games through the full turn controller. Build with
//! `--features rand,hotpath` to get a timing report on exit.

use std::collections::HashMap;

use console_chess::game::Game;
use console_chess::{GameError, GameStatus};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

const GAMES: u64 = 50;
const MAX_PLIES: usize = 200;

fn playout(seed: u64) -> Result<(GameStatus, usize), GameError> {
    let game = Game::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut plies = 0;

    while !game.is_over() && plies < MAX_PLIES {
        let moves = game.legal_moves()?;
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        game.submit(mv.src, mv.dst)?;
        plies += 1;
    }

    Ok((game.status(), plies))
}

#[hotpath::main]
fn main() -> Result<(), GameError> {
    let mut results: HashMap<GameStatus, usize> = HashMap::new();
    let mut total_plies = 0;

    for seed in 0..GAMES {
        let (status, plies) = playout(seed)?;
        *results.entry(status).or_default() += 1;
        total_plies += plies;
    }

    println!("{} games, {} plies", GAMES, total_plies);
    for status in [
        GameStatus::Checkmate,
        GameStatus::Stalemate,
        GameStatus::Check,
        GameStatus::Ongoing,
    ] {
        println!("{:>10}: {}", status.to_string(), results.get(&status).copied().unwrap_or(0));
    }

    Ok(())
}
