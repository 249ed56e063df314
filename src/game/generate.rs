//! Seeded level generation
//!
//! Composition is a pure function of `(brick_count, glass_probability,
//! metal_probability, seed)`: the same inputs always produce the same
//! archetype sequence, so replays and tests can reproduce a level exactly.
//! Each slot draws one uniform real in [0, 1); the draw lands in the glass,
//! metal, or wooden band of the unit interval, in that order.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::brick::{Brick, BrickKind};
use super::error::LevelConfigError;
use super::level::Level;

/// Source of uniform draws in [0, 1).
///
/// Level generation only needs this one stream, so the seeded generator is
/// swappable for a scripted fixture in tests.
pub trait RandomSource {
    /// Next uniform draw in [0, 1)
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random()
    }
}

/// Reject compositions that cannot partition the unit interval.
/// Never clamps: a clamped probability would silently change game balance.
fn validate_composition(
    glass_probability: f64,
    metal_probability: f64,
) -> Result<(), LevelConfigError> {
    if !(0.0..=1.0).contains(&glass_probability) {
        return Err(LevelConfigError::GlassProbabilityOutOfRange(glass_probability));
    }
    if !(0.0..=1.0).contains(&metal_probability) {
        return Err(LevelConfigError::MetalProbabilityOutOfRange(metal_probability));
    }
    let sum = glass_probability + metal_probability;
    if sum > 1.0 {
        return Err(LevelConfigError::ProbabilitySumExceedsOne(sum));
    }
    Ok(())
}

/// Generate a level from a fresh Pcg32 stream seeded with `seed`.
pub fn generate_level(
    name: impl Into<String>,
    brick_count: usize,
    glass_probability: f64,
    metal_probability: f64,
    seed: u64,
) -> Result<Level, LevelConfigError> {
    let mut rng = Pcg32::seed_from_u64(seed);
    generate_level_with(
        &mut rng,
        name,
        brick_count,
        glass_probability,
        metal_probability,
        seed,
    )
}

/// Generate a level from the given draw source.
///
/// `seed` is recorded on the level for provenance; determinism is the
/// source's responsibility here.
pub fn generate_level_with(
    source: &mut impl RandomSource,
    name: impl Into<String>,
    brick_count: usize,
    glass_probability: f64,
    metal_probability: f64,
    seed: u64,
) -> Result<Level, LevelConfigError> {
    validate_composition(glass_probability, metal_probability)?;

    let name = name.into();
    let mut bricks = Vec::with_capacity(brick_count);
    let mut counts = [0usize; 3];
    for _ in 0..brick_count {
        let r = source.next_unit();
        let kind = if r < glass_probability {
            BrickKind::Glass
        } else if r < glass_probability + metal_probability {
            BrickKind::Metal
        } else {
            BrickKind::Wooden
        };
        counts[match kind {
            BrickKind::Glass => 0,
            BrickKind::Wooden => 1,
            BrickKind::Metal => 2,
        }] += 1;
        bricks.push(Brick::new(kind));
    }

    log::info!(
        "generated level '{}' (seed {}): {} glass, {} wooden, {} metal",
        name,
        seed,
        counts[0],
        counts[1],
        counts[2],
    );

    Ok(Level::new(
        name,
        bricks,
        glass_probability,
        metal_probability,
        seed,
    ))
}
