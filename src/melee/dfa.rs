//! Death-from-above evaluation
//!
//! Jump onto the target: heavy damage on the DFA table, while the attacker
//! lands hard on its own legs and is always left unsteady.

use ahash::AHashSet;
use tracing::debug;

use crate::core::stats;
use crate::core::CombatConfig;
use crate::melee::outcome::{
    clusters_with_extra_attacks, AttackKind, AttackModifier, AttackOutcome, DamageTable,
    MeleeAnimation,
};
use crate::unit::Combatant;

pub fn evaluate_dfa(
    attacker: &Combatant,
    target: &Combatant,
    valid_animations: &AHashSet<MeleeAnimation>,
    config: &CombatConfig,
) -> AttackOutcome {
    // Gate 1: DFA animation permitted
    if !valid_animations.contains(&MeleeAnimation::DeathFromAbove) {
        debug!("death from above animation not permitted");
        return AttackOutcome::invalid(AttackKind::DeathFromAbove);
    }

    // Gate 2: the attacker must be jump-capable
    if attacker.jump_distance <= 0.0 {
        debug!("no jump capability, cannot death from above");
        return AttackOutcome::invalid(AttackKind::DeathFromAbove);
    }

    // Gate 3: target within jump range
    let distance = attacker.position.distance(&target.position);
    if distance > attacker.jump_distance {
        debug!(distance, jump_distance = attacker.jump_distance, "target beyond jump range");
        return AttackOutcome::invalid(AttackKind::DeathFromAbove);
    }

    let dfa = &config.melee.dfa;

    let target_damage = (attacker.tonnage / dfa.target_damage_divisor).ceil()
        * dfa.target_damage_multiplier;
    let target_damage_clusters =
        clusters_with_extra_attacks(attacker, target_damage, stats::DFA_EXTRA_HITS);

    // Landing damage splits evenly across both legs
    let landing_damage = (attacker.tonnage / dfa.attacker_damage_divisor).ceil();
    let attacker_damage_clusters = vec![landing_damage / 2.0, landing_damage / 2.0];

    let target_instability = (attacker.tonnage / dfa.target_instability_divisor).ceil();
    let attacker_instability = (attacker.tonnage / dfa.attacker_instability_divisor).ceil();

    let mut modifiers =
        vec![AttackModifier::new("Death From Above", dfa.base_attack_bonus)];
    if target.is_prone {
        modifiers.push(AttackModifier::new(
            "Target Prone",
            config.melee.prone_target_attack_modifier,
        ));
    }
    if let Some(value) = attacker.stat(stats::DFA_ATTACK_MOD) {
        if value != 0 {
            modifiers.push(AttackModifier::new("Death From Above Attack Modifier", value));
        }
    }

    AttackOutcome {
        kind: AttackKind::DeathFromAbove,
        is_valid: true,
        target_damage_clusters,
        attacker_damage_clusters,
        target_instability,
        attacker_instability,
        modifiers,
        attacker_table: DamageTable::Kick,
        target_table: DamageTable::DeathFromAbove,
        unsteady_attacker_on_hit: dfa.unsteady_attacker_on_hit,
        unsteady_attacker_on_miss: dfa.unsteady_attacker_on_miss,
        unsteady_target_on_hit: dfa.unsteady_target_on_hit,
        animation: Some(MeleeAnimation::DeathFromAbove),
        description_notes: vec![dfa.description.clone()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vec2;

    fn dfa_animations() -> AHashSet<MeleeAnimation> {
        [MeleeAnimation::DeathFromAbove].into_iter().collect()
    }

    fn jumper(tonnage: f32) -> Combatant {
        let mut mech = Combatant::test_mech(1, tonnage);
        mech.jump_distance = 120.0;
        mech
    }

    #[test]
    fn test_valid_dfa() {
        let attacker = jumper(90.0);
        let mut target = Combatant::test_mech(2, 50.0);
        target.position = Vec2::new(100.0, 0.0);

        let outcome =
            evaluate_dfa(&attacker, &target, &dfa_animations(), &CombatConfig::default());
        assert!(outcome.is_valid);
        // ceil(90 / 10) * 3
        assert_eq!(outcome.target_damage_clusters, vec![27.0]);
        // ceil(90 / 5) = 18, split across both legs
        assert_eq!(outcome.attacker_damage_clusters, vec![9.0, 9.0]);
        assert_eq!(outcome.attacker_table, DamageTable::Kick);
        assert_eq!(outcome.target_table, DamageTable::DeathFromAbove);
        assert!(outcome.unsteady_attacker_on_hit && outcome.unsteady_attacker_on_miss);
    }

    #[test]
    fn test_no_jump_capability_invalid() {
        let attacker = Combatant::test_mech(1, 90.0);
        let target = Combatant::test_mech(2, 50.0);

        let outcome =
            evaluate_dfa(&attacker, &target, &dfa_animations(), &CombatConfig::default());
        assert!(!outcome.is_valid);
    }

    #[test]
    fn test_beyond_jump_range_invalid() {
        let attacker = jumper(90.0);
        let mut target = Combatant::test_mech(2, 50.0);
        target.position = Vec2::new(130.0, 0.0);

        let outcome =
            evaluate_dfa(&attacker, &target, &dfa_animations(), &CombatConfig::default());
        assert!(!outcome.is_valid);
    }
}
