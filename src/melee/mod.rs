//! Melee attack evaluation
//!
//! Each attack kind validates in a fixed gate order and, only when every gate
//! passes, computes its full outcome. Invalid attacks are a normal result
//! (`is_valid == false`), used by the host to grey out the action.

pub mod charge;
pub mod condition;
pub mod dfa;
pub mod kick;
pub mod outcome;
pub mod punch;

pub use condition::AttackerCondition;
pub use outcome::{AttackKind, AttackModifier, AttackOutcome, DamageTable, MeleeAnimation};

use ahash::AHashSet;

use crate::core::CombatConfig;
use crate::unit::Combatant;

/// Evaluate one melee attack of the given kind
///
/// `valid_animations` is the host's set of animations permitted for this
/// attacker against this target.
pub fn evaluate_attack(
    kind: AttackKind,
    attacker: &Combatant,
    target: &Combatant,
    valid_animations: &AHashSet<MeleeAnimation>,
    config: &CombatConfig,
) -> AttackOutcome {
    match kind {
        AttackKind::Kick => kick::evaluate_kick(attacker, target, valid_animations, config),
        AttackKind::Punch => punch::evaluate_punch(attacker, target, valid_animations, config),
        AttackKind::Charge => charge::evaluate_charge(attacker, target, valid_animations, config),
        AttackKind::DeathFromAbove => dfa::evaluate_dfa(attacker, target, valid_animations, config),
    }
}
