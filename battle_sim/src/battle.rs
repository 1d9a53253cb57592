//! The battle driver - one deterministic pass over an ordered list of entities.
//!
//! For each entity, in order:
//! 1. **Describe**: record its summary before it is hit
//! 2. **Damage**: apply the configured damage through its own `take_damage`
//! 3. **Act**: perform exactly one archetype action, chosen by `match`

use combat_rules::{Archetype, Combatant, Entity, RulesError};

use crate::config::BattleConfig;
use crate::error::BattleResult;
use crate::events::{BattleEvent, BattleLog, NullLog};

/// Runs battle passes with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Battle {
    config: BattleConfig,
}

impl Battle {
    /// Create a battle with the given tuning.
    pub fn new(config: BattleConfig) -> Self {
        Self { config }
    }

    /// Create a battle with the standard damage and spell cost.
    pub fn with_defaults() -> Self {
        Self::new(BattleConfig::default())
    }

    /// Run one pass over `entities`, reporting each step to `log`.
    ///
    /// Entities are processed strictly in slice order and each is visited
    /// once. Dead entities are still visited; damage simply floors at zero.
    /// A negative configured damage is rejected before anything is recorded.
    pub fn run<L: BattleLog>(&self, entities: &mut [Entity], log: &mut L) -> BattleResult<()> {
        if self.config.damage < 0 {
            return Err(RulesError::NegativeAmount {
                what: "damage",
                value: self.config.damage,
            }
            .into());
        }

        let span = tracing::info_span!("battle", entities = entities.len());
        let _guard = span.enter();

        for entity in entities.iter_mut() {
            emit(
                log,
                BattleEvent::Described {
                    name: entity.name().to_string(),
                    summary: entity.describe(),
                },
            );

            let before = entity.health().current();
            entity.take_damage(self.config.damage)?;
            emit(
                log,
                BattleEvent::Damaged {
                    name: entity.name().to_string(),
                    amount: self.config.damage,
                    lost: before - entity.health().current(),
                    health: entity.health().current(),
                    max_health: entity.health().maximum(),
                },
            );

            let action = self.act(entity);
            emit(log, action);
        }

        let standing = entities.iter().filter(|e| e.is_alive()).count();
        tracing::info!(standing, fallen = entities.len() - standing, "battle pass complete");
        Ok(())
    }

    /// The single follow-up action for `entity`'s archetype.
    fn act(&self, entity: &mut Entity) -> BattleEvent {
        match entity {
            Entity::Fighter(fighter) => BattleEvent::PowerAttack {
                name: fighter.name().to_string(),
                message: fighter.power_attack(),
            },
            Entity::Caster(caster) => {
                let success = caster.cast_spell(self.config.spell_cost);
                BattleEvent::SpellCast {
                    name: caster.name().to_string(),
                    cost: self.config.spell_cost,
                    success,
                    mana: caster.mana().current(),
                    max_mana: caster.mana().maximum(),
                }
            }
            Entity::Marksman(marksman) => {
                let success = marksman.shoot_arrow();
                BattleEvent::ArrowShot {
                    name: marksman.name().to_string(),
                    success,
                    arrows: marksman.arrows().current(),
                }
            }
            Entity::Base(character) => BattleEvent::NoAction {
                name: character.name().to_string(),
                archetype: Archetype::Base,
            },
            Entity::InventoryHolder(holder) => BattleEvent::NoAction {
                name: holder.name().to_string(),
                archetype: Archetype::InventoryHolder,
            },
        }
    }
}

fn emit<L: BattleLog>(log: &mut L, event: BattleEvent) {
    tracing::debug!(entity = %event.name(), "{}", event);
    log.record(event);
}

/// Run one pass with the standard configuration, discarding the event log.
pub fn run_battle(entities: &mut [Entity]) -> BattleResult<()> {
    Battle::with_defaults().run(entities, &mut NullLog)
}
