//! Brick archetypes and hit resolution
//!
//! A brick is destroyed when its hit points reach zero. The destroying hit
//! produces a single [`BrickDestroyed`] event; the controller consumes it to
//! apply archetype-specific scoring. Hits past destruction are defined
//! no-ops so a late collision event from the runtime never double-scores.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Brick archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickKind {
    Glass,
    Wooden,
    Metal,
}

impl BrickKind {
    /// Hits required to destroy a fresh brick of this kind
    pub fn durability(self) -> u32 {
        match self {
            BrickKind::Glass => GLASS_DURABILITY,
            BrickKind::Wooden => WOODEN_DURABILITY,
            BrickKind::Metal => METAL_DURABILITY,
        }
    }

    /// Points awarded when a brick of this kind is destroyed
    pub fn score_value(self) -> u32 {
        match self {
            BrickKind::Glass => GLASS_SCORE,
            BrickKind::Wooden => WOODEN_SCORE,
            BrickKind::Metal => METAL_SCORE,
        }
    }

    /// Whether destroying this kind grants the player an extra ball
    pub fn grants_bonus_ball(self) -> bool {
        matches!(self, BrickKind::Metal)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BrickKind::Glass => "glass",
            BrickKind::Wooden => "wooden",
            BrickKind::Metal => "metal",
        }
    }
}

/// Emitted exactly once, on the hit that destroys a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickDestroyed {
    pub kind: BrickKind,
    pub score_value: u32,
}

/// A destructible obstacle in a level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    kind: BrickKind,
    /// Remaining hits; 0 means destroyed
    hp: u32,
    /// Fixed at creation per archetype
    score_value: u32,
}

impl Brick {
    /// Create a fresh brick with its archetype's durability and score
    pub fn new(kind: BrickKind) -> Self {
        Self {
            kind,
            hp: kind.durability(),
            score_value: kind.score_value(),
        }
    }

    pub fn kind(&self) -> BrickKind {
        self.kind
    }

    pub fn remaining_hits(&self) -> u32 {
        self.hp
    }

    pub fn score_value(&self) -> u32 {
        self.score_value
    }

    pub fn is_destroyed(&self) -> bool {
        self.hp == 0
    }

    /// Register one collision on this brick.
    ///
    /// Decrements hit points and returns the destruction event if this hit
    /// was the one that destroyed the brick. Already-destroyed bricks ignore
    /// the call and never re-emit the event.
    pub fn hit(&mut self) -> Option<BrickDestroyed> {
        if self.hp == 0 {
            return None;
        }
        self.hp -= 1;
        if self.hp == 0 {
            Some(BrickDestroyed {
                kind: self.kind,
                score_value: self.score_value,
            })
        } else {
            None
        }
    }
}
