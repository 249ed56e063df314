//! Error types for level generation and progression

/// A level composition request that cannot produce a valid level.
///
/// Probabilities are never clamped into range; clamping would silently
/// change game balance, so a malformed composition blocks level start.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LevelConfigError {
    #[error("glass probability {0} outside [0, 1]")]
    GlassProbabilityOutOfRange(f64),

    #[error("metal probability {0} outside [0, 1]")]
    MetalProbabilityOutOfRange(f64),

    #[error("glass + metal probability sums to {0}, leaving no mass in [0, 1] for wooden")]
    ProbabilitySumExceedsOne(f64),
}

/// Errors surfaced by the [`Game`](crate::Game) controller.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GameError {
    /// The generator rejected the requested composition; no level was
    /// installed and the controller state is unchanged.
    #[error("invalid level configuration: {0}")]
    InvalidLevelConfiguration(#[from] LevelConfigError),

    /// The current level's successor is the terminal sentinel.
    /// Recoverable: generate and install a fresh level instead.
    #[error("current level has no next level")]
    NoNextLevel,
}
