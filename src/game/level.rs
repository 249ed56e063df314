//! Levels and the terminal sentinel
//!
//! A level's brick composition is fixed at generation time; bricks are only
//! ever mutated through hits, never added or removed. Levels chain through
//! `next` into a successor list that ends at the terminal sentinel, a single
//! process-wide non-playable value standing in for "no further level" so
//! progression never needs a null-check special case.

use serde::{Deserialize, Serialize};

use super::brick::Brick;

/// Shared "no further level" value. Non-playable, brick-less, successor-less.
static TERMINAL: Level = Level::sentinel();

/// One playable arrangement of bricks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    name: String,
    /// Generation order; the driving runtime uses it for layout assignment
    bricks: Vec<Brick>,
    requested_brick_count: usize,
    glass_probability: f64,
    metal_probability: f64,
    seed: u64,
    /// Successor chain; `None` resolves to the terminal sentinel
    next: Option<Box<Level>>,
    playable: bool,
}

impl Level {
    /// A generated level; composition is fixed from here on.
    pub(crate) fn new(
        name: String,
        bricks: Vec<Brick>,
        glass_probability: f64,
        metal_probability: f64,
        seed: u64,
    ) -> Self {
        Self {
            name,
            requested_brick_count: bricks.len(),
            bricks,
            glass_probability,
            metal_probability,
            seed,
            next: None,
            playable: true,
        }
    }

    /// The sentinel value; only [`TERMINAL`] and fresh controller state
    /// should ever hold it.
    pub(crate) const fn sentinel() -> Self {
        Self {
            name: String::new(),
            bricks: Vec::new(),
            requested_brick_count: 0,
            glass_probability: 0.0,
            metal_probability: 0.0,
            seed: 0,
            next: None,
            playable: false,
        }
    }

    /// The process-wide terminal sentinel
    pub fn terminal() -> &'static Level {
        &TERMINAL
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bricks in generation order
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn brick_count(&self) -> usize {
        self.bricks.len()
    }

    pub(crate) fn brick_mut(&mut self, index: usize) -> Option<&mut Brick> {
        self.bricks.get_mut(index)
    }

    pub fn requested_brick_count(&self) -> usize {
        self.requested_brick_count
    }

    pub fn glass_probability(&self) -> f64 {
        self.glass_probability
    }

    pub fn metal_probability(&self) -> f64 {
        self.metal_probability
    }

    /// Seed the composition was drawn from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_playable(&self) -> bool {
        self.playable
    }

    /// True only for the terminal sentinel; every generated level is playable.
    pub fn is_terminal(&self) -> bool {
        !self.playable
    }

    /// True once every brick is destroyed (trivially true for an empty level)
    pub fn is_cleared(&self) -> bool {
        self.bricks.iter().all(Brick::is_destroyed)
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// The successor, or the terminal sentinel when there is none
    pub fn next_level(&self) -> &Level {
        self.next.as_deref().unwrap_or(&TERMINAL)
    }

    pub(crate) fn take_next(&mut self) -> Option<Box<Level>> {
        self.next.take()
    }

    /// Append a level at the end of this level's successor chain.
    pub fn append_successor(&mut self, level: Level) {
        match &mut self.next {
            Some(next) => next.append_successor(level),
            None => self.next = Some(Box::new(level)),
        }
    }
}
