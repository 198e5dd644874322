//! Charge attack evaluation
//!
//! A full-speed collision: damage to the target scales with attacker tonnage
//! and the distance covered, and the attacker eats recoil damage from the
//! target's mass. Both sides are knocked about.

use ahash::AHashSet;
use tracing::debug;

use crate::core::stats;
use crate::core::CombatConfig;
use crate::melee::outcome::{
    AttackKind, AttackModifier, AttackOutcome, DamageTable, MeleeAnimation,
};
use crate::unit::{Combatant, UnitKind};

pub fn evaluate_charge(
    attacker: &Combatant,
    target: &Combatant,
    valid_animations: &AHashSet<MeleeAnimation>,
    config: &CombatConfig,
) -> AttackOutcome {
    // Gate 1: the matching animation must be permitted. Vehicles are tackled.
    let animation = if target.kind == UnitKind::Vehicle {
        MeleeAnimation::Tackle
    } else {
        MeleeAnimation::Charge
    };
    if !valid_animations.contains(&animation) {
        debug!(?animation, "animation not permitted, cannot charge");
        return AttackOutcome::invalid(AttackKind::Charge);
    }

    // Gate 2: a charge needs momentum; there must be a committed move
    if attacker.path.is_empty() {
        debug!("no movement path, cannot charge");
        return AttackOutcome::invalid(AttackKind::Charge);
    }

    // Gate 3: target within a running move
    let distance = attacker.position.distance(&target.position);
    if distance > attacker.run_speed {
        debug!(distance, run_speed = attacker.run_speed, "target out of reach, cannot charge");
        return AttackOutcome::invalid(AttackKind::Charge);
    }

    let charge = &config.melee.charge;
    let tiles_moved = attacker.path.len() as f32;

    let target_damage =
        (attacker.tonnage / charge.target_damage_divisor).ceil() * tiles_moved;
    let attacker_damage = (target.tonnage / charge.attacker_damage_divisor).ceil();

    let target_instability =
        (attacker.tonnage / charge.target_instability_divisor).ceil() * tiles_moved;
    let attacker_instability = (target.tonnage / charge.attacker_instability_divisor).ceil();

    let mut modifiers = vec![AttackModifier::new("Charge", charge.base_attack_bonus)];
    if target.is_prone {
        modifiers.push(AttackModifier::new(
            "Target Prone",
            config.melee.prone_target_attack_modifier,
        ));
    }
    if let Some(value) = attacker.stat(stats::CHARGE_ATTACK_MOD) {
        if value != 0 {
            modifiers.push(AttackModifier::new("Charge Attack Modifier", value));
        }
    }

    AttackOutcome {
        kind: AttackKind::Charge,
        is_valid: true,
        target_damage_clusters: vec![target_damage],
        attacker_damage_clusters: vec![attacker_damage],
        target_instability,
        attacker_instability,
        modifiers,
        attacker_table: DamageTable::Standard,
        target_table: DamageTable::Standard,
        unsteady_attacker_on_hit: charge.unsteady_attacker_on_hit,
        unsteady_attacker_on_miss: charge.unsteady_attacker_on_miss,
        unsteady_target_on_hit: charge.unsteady_target_on_hit,
        animation: Some(animation),
        description_notes: vec![charge.description.clone()],
    }
}
