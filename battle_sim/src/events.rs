//! Battle events - what a pass reports back to its caller.

use combat_rules::Archetype;

/// Something that happened to one entity during a battle pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    /// The entity's description, taken before it is hit.
    Described { name: String, summary: String },

    /// The pass's damage event landed. `amount` is the damage dealt before
    /// any archetype reduction, `lost` is the health actually removed.
    Damaged {
        name: String,
        amount: i32,
        lost: i32,
        health: i32,
        max_health: i32,
    },

    PowerAttack { name: String, message: String },

    SpellCast {
        name: String,
        cost: i32,
        success: bool,
        mana: i32,
        max_mana: i32,
    },

    ArrowShot {
        name: String,
        success: bool,
        arrows: i32,
    },

    /// The archetype has no follow-up action.
    NoAction { name: String, archetype: Archetype },
}

impl BattleEvent {
    /// Name of the entity the event concerns.
    pub fn name(&self) -> &str {
        match self {
            BattleEvent::Described { name, .. }
            | BattleEvent::Damaged { name, .. }
            | BattleEvent::PowerAttack { name, .. }
            | BattleEvent::SpellCast { name, .. }
            | BattleEvent::ArrowShot { name, .. }
            | BattleEvent::NoAction { name, .. } => name,
        }
    }
}

impl std::fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattleEvent::Described { summary, .. } => f.write_str(summary),
            BattleEvent::Damaged {
                name,
                amount,
                lost,
                health,
                max_health,
            } => write!(
                f,
                "{} is hit for {} and loses {} HP -> HP: {}/{}",
                name, amount, lost, health, max_health
            ),
            BattleEvent::PowerAttack { message, .. } => f.write_str(message),
            BattleEvent::SpellCast {
                name,
                cost,
                success: true,
                mana,
                max_mana,
            } => write!(
                f,
                "{} casts a spell for {} mana -> Mana: {}/{}",
                name, cost, mana, max_mana
            ),
            BattleEvent::SpellCast { name, .. } => {
                write!(f, "{} does not have enough mana to cast the spell", name)
            }
            BattleEvent::ArrowShot {
                name,
                success: true,
                arrows,
            } => write!(f, "{} shoots an arrow -> Arrows: {}", name, arrows),
            BattleEvent::ArrowShot { name, .. } => write!(f, "{} has no arrows left", name),
            BattleEvent::NoAction { name, archetype } => {
                write!(f, "{} ({}) has no special action", name, archetype)
            }
        }
    }
}

/// Receives events as a battle pass produces them.
pub trait BattleLog {
    fn record(&mut self, event: BattleEvent);
}

impl BattleLog for Vec<BattleEvent> {
    fn record(&mut self, event: BattleEvent) {
        self.push(event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl BattleLog for NullLog {
    fn record(&mut self, _event: BattleEvent) {}
}
