//! Headless demo driver
//!
//! Stands in for the game-engine runtime: generates a short campaign, then
//! replays collision and ball-loss events against the core until the game
//! ends, dumping a JSON snapshot of the final state.

use breakout_core::{Game, GamePhase};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    log::info!("breakout demo starting with seed {seed}");

    let mut game = Game::default();
    let first = game
        .new_level("level 1", 30, 0.5, 0.34, seed)
        .expect("demo composition is valid");
    game.set_current_level(first);
    for (index, (bricks, glass, metal)) in [(24usize, 0.4, 0.25), (18, 0.2, 0.4)]
        .into_iter()
        .enumerate()
    {
        let level = game
            .new_level(
                format!("level {}", index + 2),
                bricks,
                glass,
                metal,
                seed + index as u64 + 1,
            )
            .expect("demo composition is valid");
        game.queue_level(level);
    }

    let mut volleys = 0u32;
    while !game.is_game_over() {
        // One volley: the ball sweeps the wall, striking each brick once
        for index in 0..game.brick_count() {
            game.hit_brick(index);
        }
        volleys += 1;

        // Every eighth volley the ball slips past the paddle
        if volleys % 8 == 0 {
            game.ball_lost();
        }

        if game.is_level_cleared() && !game.is_game_over() {
            match game.go_to_next_level() {
                Ok(level) => log::info!("cleared, moving on to '{}'", level.name()),
                Err(_) => break,
            }
        }
    }

    match game.phase() {
        GamePhase::GameOver => log::info!("out of balls after {volleys} volleys"),
        _ => log::info!("campaign cleared in {volleys} volleys"),
    }
    log::info!(
        "final score {} with {} balls remaining, {} levels played",
        game.score(),
        game.balls_remaining(),
        game.played_levels().len(),
    );

    let snapshot = serde_json::to_string_pretty(&game).expect("game state serializes");
    println!("{snapshot}");
}
