//! Punch attack evaluation
//!
//! One point of damage per ten tons of attacker, resolved on the punch table.
//! The punch resolves with the least-damaged arm that still has a working
//! shoulder.

use ahash::AHashSet;
use tracing::debug;

use crate::core::stats;
use crate::core::CombatConfig;
use crate::melee::condition::AttackerCondition;
use crate::melee::outcome::{
    clusters_with_extra_attacks, AttackKind, AttackModifier, AttackOutcome, DamageTable,
    MeleeAnimation,
};
use crate::unit::Combatant;

pub fn evaluate_punch(
    attacker: &Combatant,
    target: &Combatant,
    valid_animations: &AHashSet<MeleeAnimation>,
    config: &CombatConfig,
) -> AttackOutcome {
    let condition = AttackerCondition::from_combatant(attacker);

    // Gate 1: punch animation permitted
    if !valid_animations.contains(&MeleeAnimation::Punch) {
        debug!("punch animation not permitted");
        return AttackOutcome::invalid(AttackKind::Punch);
    }

    // Gate 2: at least one arm with a working shoulder
    if condition.punching_arm().is_none() {
        debug!("no functional shoulder, cannot punch");
        return AttackOutcome::invalid(AttackKind::Punch);
    }

    // Gate 3: target within a walking step
    let distance = attacker.position.distance(&target.position);
    if distance > attacker.walk_speed {
        debug!(distance, walk_speed = attacker.walk_speed, "target out of reach, cannot punch");
        return AttackOutcome::invalid(AttackKind::Punch);
    }

    let punch = &config.melee.punch;

    let base_damage = (attacker.tonnage / punch.damage_divisor).ceil();
    let damage = base_damage * condition.punch_damage_multiplier();
    let target_damage_clusters =
        clusters_with_extra_attacks(attacker, damage, stats::PUNCH_EXTRA_HITS);

    let target_instability = (attacker.tonnage / punch.instability_divisor).ceil()
        * condition.punch_damage_multiplier();

    let mut modifiers = vec![AttackModifier::new("Punch", punch.base_attack_bonus)];
    if target.is_prone {
        modifiers.push(AttackModifier::new(
            "Target Prone",
            config.melee.prone_target_attack_modifier,
        ));
    }
    let actuator_malus = condition.punch_actuator_malus(punch);
    if actuator_malus != 0 {
        modifiers.push(AttackModifier::new("Actuator Damage", actuator_malus));
    }
    if let Some(value) = attacker.stat(stats::PUNCH_ATTACK_MOD) {
        if value != 0 {
            modifiers.push(AttackModifier::new("Punch Attack Modifier", value));
        }
    }

    AttackOutcome {
        kind: AttackKind::Punch,
        is_valid: true,
        target_damage_clusters,
        attacker_damage_clusters: Vec::new(),
        target_instability,
        attacker_instability: 0.0,
        modifiers,
        attacker_table: DamageTable::None,
        target_table: DamageTable::Punch,
        unsteady_attacker_on_hit: punch.unsteady_attacker_on_hit,
        unsteady_attacker_on_miss: punch.unsteady_attacker_on_miss,
        unsteady_target_on_hit: punch.unsteady_target_on_hit,
        animation: Some(MeleeAnimation::Punch),
        description_notes: vec![punch.description.clone()],
    }
}
