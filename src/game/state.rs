//! Game controller
//!
//! Owns ball count, score, and the current level, and applies the
//! archetype-specific consequence of every brick destruction. The driving
//! runtime calls [`Game::hit_brick`] per collision and [`Game::ball_lost`]
//! per ball leaving the play area; everything else is reads.

use serde::{Deserialize, Serialize};

use super::brick::{Brick, BrickKind};
use super::error::GameError;
use super::generate::generate_level;
use super::level::Level;
use crate::consts::STARTING_BALLS;

/// Lifecycle phase of a playthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No playable level installed yet
    NotStarted,
    /// Active playthrough
    Playing,
    /// No balls left; terminal
    GameOver,
}

/// One playthrough: balls, score, current level, played-level history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    balls_remaining: u32,
    score: u64,
    /// Set on the first playable level install, never cleared
    started: bool,
    /// Exclusively owned; defaults to the terminal sentinel
    current: Level,
    /// Append-only history of superseded levels
    played: Vec<Level>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(STARTING_BALLS)
    }
}

impl Game {
    /// New playthrough with the given ball count and no level installed
    pub fn new(balls: u32) -> Self {
        Self {
            balls_remaining: balls,
            score: 0,
            started: false,
            current: Level::sentinel(),
            played: Vec::new(),
        }
    }

    // === Level lifecycle ===

    /// Generate a level without installing it; the caller decides between
    /// [`set_current_level`](Self::set_current_level) and
    /// [`queue_level`](Self::queue_level).
    ///
    /// Destruction notifications need no per-brick registration: they flow
    /// back through [`hit_brick`](Self::hit_brick) once the level is current.
    pub fn new_level(
        &self,
        name: impl Into<String>,
        brick_count: usize,
        glass_probability: f64,
        metal_probability: f64,
        seed: u64,
    ) -> Result<Level, GameError> {
        let level = generate_level(name, brick_count, glass_probability, metal_probability, seed)?;
        Ok(level)
    }

    /// [`new_level`](Self::new_level) with no metal bricks
    pub fn new_level_no_metal(
        &self,
        name: impl Into<String>,
        brick_count: usize,
        glass_probability: f64,
        seed: u64,
    ) -> Result<Level, GameError> {
        self.new_level(name, brick_count, glass_probability, 0.0, seed)
    }

    /// Replace the current level unconditionally. Playability is not
    /// validated; check [`has_next_level`](Self::has_next_level) or
    /// [`Level::is_playable`] first where that matters. The superseded level
    /// joins the played history. No-op once the game is over.
    pub fn set_current_level(&mut self, level: Level) {
        if self.is_game_over() {
            log::warn!("set_current_level ignored: game is over");
            return;
        }
        let previous = std::mem::replace(&mut self.current, level);
        if !previous.is_terminal() {
            self.played.push(previous);
        }
        if self.current.is_playable() {
            self.started = true;
        }
    }

    /// Append a level at the end of the current level's successor chain.
    ///
    /// Returns false without queueing when the current level is the terminal
    /// sentinel (it admits no successor; install with `set_current_level`
    /// instead) or the game is over.
    pub fn queue_level(&mut self, level: Level) -> bool {
        if self.is_game_over() {
            log::warn!("queue_level ignored: game is over");
            return false;
        }
        if self.current.is_terminal() {
            log::warn!("queue_level ignored: no current level to queue behind");
            return false;
        }
        self.current.append_successor(level);
        true
    }

    /// Advance to the current level's successor.
    ///
    /// Fails with [`GameError::NoNextLevel`] when the successor is the
    /// terminal sentinel, and once the game is over (no further transitions
    /// are accepted). The superseded level joins the played history.
    pub fn go_to_next_level(&mut self) -> Result<&Level, GameError> {
        if self.is_game_over() {
            return Err(GameError::NoNextLevel);
        }
        let next = self.current.take_next().ok_or(GameError::NoNextLevel)?;
        let previous = std::mem::replace(&mut self.current, *next);
        self.played.push(previous);
        log::info!("advanced to level '{}'", self.current.name());
        Ok(&self.current)
    }

    // === Collision-driven mutation ===

    /// Register one collision on the brick at `index` in the current level.
    ///
    /// Routes the brick's destruction event to
    /// [`record_brick_destroyed`](Self::record_brick_destroyed). Returns
    /// whether this hit destroyed the brick, so the runtime knows to despawn
    /// its entity. Hits on destroyed bricks, unknown indices, or after game
    /// over are defined no-ops.
    pub fn hit_brick(&mut self, index: usize) -> bool {
        if self.is_game_over() {
            return false;
        }
        let Some(brick) = self.current.brick_mut(index) else {
            log::warn!("hit_brick ignored: no brick at index {index}");
            return false;
        };
        match brick.hit() {
            Some(destroyed) => {
                self.record_brick_destroyed(destroyed.kind, destroyed.score_value);
                true
            }
            None => false,
        }
    }

    /// Apply the consequence of a brick destruction: add its score, and for
    /// metal grant one bonus ball. Never fails; no-op once the game is over.
    pub fn record_brick_destroyed(&mut self, kind: BrickKind, score_value: u32) {
        if self.is_game_over() {
            return;
        }
        self.score += u64::from(score_value);
        if kind.grants_bonus_ball() {
            self.balls_remaining += 1;
            log::info!(
                "{} brick destroyed: +{} points, bonus ball ({} left)",
                kind.as_str(),
                score_value,
                self.balls_remaining,
            );
        } else {
            log::debug!("{} brick destroyed: +{} points", kind.as_str(), score_value);
        }
    }

    /// A ball left the play area. Floored at zero; reaching zero ends the
    /// playthrough.
    pub fn ball_lost(&mut self) {
        if self.balls_remaining == 0 {
            return;
        }
        self.balls_remaining -= 1;
        if self.balls_remaining == 0 {
            log::info!("game over with {} points", self.score);
        }
    }

    // === Read-only surface ===

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn balls_remaining(&self) -> u32 {
        self.balls_remaining
    }

    pub fn is_game_over(&self) -> bool {
        self.balls_remaining == 0
    }

    pub fn phase(&self) -> GamePhase {
        if self.is_game_over() {
            GamePhase::GameOver
        } else if self.started {
            GamePhase::Playing
        } else {
            GamePhase::NotStarted
        }
    }

    pub fn current_level(&self) -> &Level {
        &self.current
    }

    /// Whether a playable level is installed
    pub fn has_current_level(&self) -> bool {
        self.current.is_playable()
    }

    pub fn has_next_level(&self) -> bool {
        self.current.has_next()
    }

    /// Whether every brick in the current level is destroyed; the runtime
    /// checks this after each destruction to drive level advancement.
    pub fn is_level_cleared(&self) -> bool {
        self.current.is_cleared()
    }

    /// Bricks of the current level, in generation order
    pub fn bricks(&self) -> &[Brick] {
        self.current.bricks()
    }

    pub fn brick_count(&self) -> usize {
        self.current.brick_count()
    }

    /// Superseded levels, oldest first
    pub fn played_levels(&self) -> &[Level] {
        &self.played
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn single_brick_level(glass_probability: f64, metal_probability: f64) -> Level {
        generate_level("one", 1, glass_probability, metal_probability, 0).unwrap()
    }

    fn destroy_all_bricks(game: &mut Game) {
        for index in 0..game.brick_count() {
            while !game.bricks()[index].is_destroyed() {
                game.hit_brick(index);
            }
        }
    }

    #[test]
    fn test_fresh_game_state() {
        let game = Game::default();
        assert_eq!(game.balls_remaining(), STARTING_BALLS);
        assert_eq!(game.score(), 0);
        assert_eq!(game.phase(), GamePhase::NotStarted);
        assert!(game.current_level().is_terminal());
        assert!(!game.has_current_level());
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_set_current_level_starts_playing() {
        let mut game = Game::default();
        let level = game.new_level("first", 5, 0.5, 0.0, 1).unwrap();
        game.set_current_level(level);

        assert_eq!(game.phase(), GamePhase::Playing);
        assert!(game.has_current_level());
        assert_eq!(game.brick_count(), 5);
        // The sentinel it replaced is not part of history
        assert!(game.played_levels().is_empty());
    }

    #[test]
    fn test_single_scoring_per_brick() {
        let mut game = Game::default();
        game.set_current_level(single_brick_level(1.0, 0.0)); // one glass brick

        assert!(game.hit_brick(0));
        assert_eq!(game.score(), u64::from(GLASS_SCORE));

        // Late hits on the destroyed brick change nothing
        assert!(!game.hit_brick(0));
        assert_eq!(game.score(), u64::from(GLASS_SCORE));
    }

    #[test]
    fn test_wooden_scores_only_on_destroying_hit() {
        let mut game = Game::default();
        game.set_current_level(single_brick_level(0.0, 0.0)); // one wooden brick

        for _ in 0..WOODEN_DURABILITY - 1 {
            game.hit_brick(0);
            assert_eq!(game.score(), 0);
        }
        assert!(game.hit_brick(0));
        assert_eq!(game.score(), u64::from(WOODEN_SCORE));
    }

    #[test]
    fn test_metal_destruction_grants_bonus_ball_once() {
        let mut game = Game::default();
        game.set_current_level(single_brick_level(0.0, 1.0)); // one metal brick

        destroy_all_bricks(&mut game);
        assert_eq!(game.score(), u64::from(METAL_SCORE));
        assert_eq!(game.balls_remaining(), STARTING_BALLS + 1);

        game.hit_brick(0);
        assert_eq!(game.balls_remaining(), STARTING_BALLS + 1);
    }

    #[test]
    fn test_ball_lost_boundary() {
        let mut game = Game::new(1);
        assert!(!game.is_game_over());

        game.ball_lost();
        assert_eq!(game.balls_remaining(), 0);
        assert!(game.is_game_over());
        assert_eq!(game.phase(), GamePhase::GameOver);

        // Never goes negative
        game.ball_lost();
        assert_eq!(game.balls_remaining(), 0);
    }

    #[test]
    fn test_game_over_guards_mutation() {
        let mut game = Game::new(1);
        game.set_current_level(single_brick_level(1.0, 0.0));
        game.ball_lost();
        assert!(game.is_game_over());

        assert!(!game.hit_brick(0));
        assert_eq!(game.score(), 0);

        game.record_brick_destroyed(BrickKind::Metal, METAL_SCORE);
        assert_eq!(game.score(), 0);
        assert_eq!(game.balls_remaining(), 0);

        let replacement = game.new_level("late", 3, 0.5, 0.0, 9).unwrap();
        game.set_current_level(replacement.clone());
        assert_eq!(game.brick_count(), 1);
        assert!(!game.queue_level(replacement));
        assert_eq!(game.go_to_next_level(), Err(GameError::NoNextLevel));
    }

    #[test]
    fn test_progression_terminal() {
        let mut game = Game::default();
        game.set_current_level(single_brick_level(1.0, 0.0));

        assert!(!game.has_next_level());
        assert_eq!(game.go_to_next_level(), Err(GameError::NoNextLevel));
        // The failed advance left the current level in place
        assert!(game.has_current_level());
    }

    #[test]
    fn test_queue_and_advance() {
        let mut game = Game::default();
        let first = game.new_level("first", 2, 1.0, 0.0, 1).unwrap();
        let second = game.new_level("second", 3, 1.0, 0.0, 2).unwrap();
        let third = game.new_level("third", 4, 1.0, 0.0, 3).unwrap();

        game.set_current_level(first);
        assert!(game.queue_level(second));
        assert!(game.queue_level(third));
        assert!(game.has_next_level());

        assert_eq!(game.go_to_next_level().unwrap().name(), "second");
        assert_eq!(game.go_to_next_level().unwrap().name(), "third");
        assert_eq!(game.go_to_next_level(), Err(GameError::NoNextLevel));

        let played: Vec<&str> = game.played_levels().iter().map(|l| l.name()).collect();
        assert_eq!(played, vec!["first", "second"]);
    }

    #[test]
    fn test_queue_onto_terminal_is_rejected() {
        let mut game = Game::default();
        let level = game.new_level("orphan", 2, 1.0, 0.0, 1).unwrap();
        assert!(!game.queue_level(level));
        assert!(!game.has_next_level());
    }

    #[test]
    fn test_invalid_configuration_leaves_state_unchanged() {
        let mut game = Game::default();
        let err = game.new_level("bad", 5, 0.8, 0.4, 1).unwrap_err();
        assert!(matches!(err, GameError::InvalidLevelConfiguration(_)));
        assert_eq!(game.phase(), GamePhase::NotStarted);
        assert!(game.current_level().is_terminal());

        // The no-metal convenience shares the same validation
        assert!(game.new_level_no_metal("bad", 5, 1.5, 1).is_err());
    }

    #[test]
    fn test_full_level_scenario() {
        let mut game = Game::default();
        let level = game.new_level("L1", 10, 0.3, 0.2, 42).unwrap();
        let expected_score: u64 = level.bricks().iter().map(|b| u64::from(b.score_value())).sum();
        let metal_count = level
            .bricks()
            .iter()
            .filter(|b| b.kind() == BrickKind::Metal)
            .count() as u32;

        game.set_current_level(level);
        destroy_all_bricks(&mut game);

        assert!(game.is_level_cleared());
        assert_eq!(game.score(), expected_score);
        assert_eq!(game.balls_remaining(), STARTING_BALLS + metal_count);
    }
}
