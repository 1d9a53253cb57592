//! Arrow-limited marksmen.

use rand::Rng;

use super::{Character, Combatant, ResourcePool};
use crate::error::{RulesError, RulesResult};
use crate::mechanics::CRITICAL_HIT_CHANCE;

/// A character that shoots arrows from a quiver with no hard cap.
#[derive(Debug, Clone)]
pub struct Marksman {
    character: Character,
    arrows: ResourcePool,
}

impl Marksman {
    /// Create a marksman at full health carrying `arrows` (negative counts
    /// become zero).
    pub fn new(
        name: impl Into<String>,
        max_health: i32,
        level: i32,
        arrows: i32,
    ) -> RulesResult<Self> {
        let arrows = arrows.max(0);
        Ok(Self {
            character: Character::new(name, max_health, level)?,
            arrows: ResourcePool::with_current(arrows, arrows),
        })
    }

    /// The quiver.
    pub fn arrows(&self) -> &ResourcePool {
        &self.arrows
    }

    /// Loose one arrow. Returns `false` if the quiver is empty.
    pub fn shoot_arrow(&mut self) -> bool {
        if self.arrows.is_exhausted() {
            return false;
        }
        self.arrows.decrease(1).is_ok()
    }

    /// Pick up arrows. The quiver grows past its starting size if needed.
    pub fn collect_arrows(&mut self, amount: i32) -> RulesResult<()> {
        let amount = RulesError::check_non_negative("arrows", amount)?;
        self.arrows.grow(amount)
    }

    /// Roll for a critical hit using the caller's random source.
    pub fn critical_hit<R: Rng>(&self, rng: &mut R) -> bool {
        rng.gen_bool(CRITICAL_HIT_CHANCE)
    }
}

impl Combatant for Marksman {
    fn character(&self) -> &Character {
        &self.character
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    fn describe(&self) -> String {
        format!(
            "{} | Arrows: {}",
            self.character.summary(),
            self.arrows.current()
        )
    }
}

impl PartialEq for Marksman {
    fn eq(&self, other: &Self) -> bool {
        self.character == other.character
    }
}

impl Eq for Marksman {}

impl std::fmt::Display for Marksman {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
