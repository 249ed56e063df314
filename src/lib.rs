//! Breakout Core - progression logic for a brick-breaking game
//!
//! This crate is the non-visual half of a breakout game: it tracks balls and
//! score, generates level compositions from a seed, and resolves what happens
//! when a ball strikes a brick. Rendering, physics, collision geometry, input
//! and audio live in the driving runtime, which talks to this core through
//! [`Game`] and the bricks of its current [`Level`].
//!
//! Core modules:
//! - `game`: Deterministic progression logic (bricks, levels, generation,
//!   the `Game` controller)

pub mod game;

pub use game::{
    Brick, BrickDestroyed, BrickKind, Game, GameError, GamePhase, Level, LevelConfigError,
    RandomSource, generate_level, generate_level_with,
};

/// Gameplay constants
pub mod consts {
    /// Balls a fresh game starts with
    pub const STARTING_BALLS: u32 = 3;

    /// Hits to destroy a glass brick
    pub const GLASS_DURABILITY: u32 = 1;
    /// Hits to destroy a wooden brick
    pub const WOODEN_DURABILITY: u32 = 3;
    /// Hits to destroy a metal brick
    pub const METAL_DURABILITY: u32 = 10;

    /// Points for destroying a glass brick
    pub const GLASS_SCORE: u32 = 50;
    /// Points for destroying a wooden brick
    pub const WOODEN_SCORE: u32 = 200;
    /// Points for destroying a metal brick
    pub const METAL_SCORE: u32 = 500;
}
