//! Kick attack evaluation
//!
//! One point of damage per five tons of attacker, resolved on the kick table.
//! Damaged leg actuators scale damage down and make the attack harder to land.

use ahash::AHashSet;
use tracing::debug;

use crate::core::stats;
use crate::core::CombatConfig;
use crate::melee::condition::AttackerCondition;
use crate::melee::outcome::{
    clusters_with_extra_attacks, AttackKind, AttackModifier, AttackOutcome, DamageTable,
    MeleeAnimation,
};
use crate::unit::{Combatant, UnitKind};

pub fn evaluate_kick(
    attacker: &Combatant,
    target: &Combatant,
    valid_animations: &AHashSet<MeleeAnimation>,
    config: &CombatConfig,
) -> AttackOutcome {
    let condition = AttackerCondition::from_combatant(attacker);

    // Gate 1: the matching animation must be permitted. Vehicles are stomped.
    let animation = if target.kind == UnitKind::Vehicle {
        MeleeAnimation::Stomp
    } else {
        MeleeAnimation::Kick
    };
    if !valid_animations.contains(&animation) {
        debug!(?animation, "animation not permitted, cannot kick");
        return AttackOutcome::invalid(AttackKind::Kick);
    }

    // Gate 2: both hips must work
    if !condition.left_hip_functional || !condition.right_hip_functional {
        debug!("hip actuator damaged, cannot kick");
        return AttackOutcome::invalid(AttackKind::Kick);
    }

    // Gate 3: target within a walking step
    let distance = attacker.position.distance(&target.position);
    if distance > attacker.walk_speed {
        debug!(distance, walk_speed = attacker.walk_speed, "target out of reach, cannot kick");
        return AttackOutcome::invalid(AttackKind::Kick);
    }

    let kick = &config.melee.kick;

    let base_damage = (attacker.tonnage / kick.damage_divisor).ceil();
    let damage = base_damage * condition.kick_damage_multiplier();
    let target_damage_clusters =
        clusters_with_extra_attacks(attacker, damage, stats::KICK_EXTRA_HITS);

    let target_instability = (attacker.tonnage / kick.instability_divisor).ceil()
        * condition.kick_damage_multiplier();

    let mut modifiers = vec![AttackModifier::new("Kick", kick.base_attack_bonus)];
    if target.is_prone {
        modifiers.push(AttackModifier::new(
            "Target Prone",
            config.melee.prone_target_attack_modifier,
        ));
    }
    let actuator_malus = condition.kick_actuator_malus(kick);
    if actuator_malus != 0 {
        modifiers.push(AttackModifier::new("Actuator Damage", actuator_malus));
    }
    if let Some(value) = attacker.stat(stats::KICK_ATTACK_MOD) {
        if value != 0 {
            modifiers.push(AttackModifier::new("Kick Attack Modifier", value));
        }
    }

    AttackOutcome {
        kind: AttackKind::Kick,
        is_valid: true,
        target_damage_clusters,
        attacker_damage_clusters: Vec::new(),
        target_instability,
        attacker_instability: 0.0,
        modifiers,
        attacker_table: DamageTable::None,
        target_table: DamageTable::Kick,
        unsteady_attacker_on_hit: kick.unsteady_attacker_on_hit,
        unsteady_attacker_on_miss: kick.unsteady_attacker_on_miss,
        unsteady_target_on_hit: kick.unsteady_target_on_hit,
        animation: Some(animation),
        description_notes: vec![kick.description.clone()],
    }
}
