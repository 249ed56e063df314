//! Deterministic progression module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (level composition is a pure function of its seed)
//! - Stable brick order (generation order, never reshuffled by the core)
//! - No rendering, physics, or platform dependencies
//!
//! The driving runtime calls in per discrete event (one `hit_brick` per
//! collision, one `ball_lost` per ball leaving the play area) and reads the
//! resulting score/ball/phase state back out.

pub mod brick;
pub mod error;
pub mod generate;
pub mod level;
pub mod state;

pub use brick::{Brick, BrickDestroyed, BrickKind};
pub use error::{GameError, LevelConfigError};
pub use generate::{RandomSource, generate_level, generate_level_with};
pub use level::Level;
pub use state::{Game, GamePhase};
