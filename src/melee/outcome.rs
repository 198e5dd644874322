//! Attack outcome schema shared by all melee kinds

use serde::{Deserialize, Serialize};

use crate::unit::Combatant;

/// The four melee attack kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackKind {
    Kick,
    Punch,
    Charge,
    DeathFromAbove,
}

/// Host animation variants a melee attack can resolve with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeleeAnimation {
    Kick,
    /// Kick variant used against vehicles
    Stomp,
    Punch,
    Charge,
    /// Charge variant used against vehicles
    Tackle,
    DeathFromAbove,
}

/// Hit-location table the host should roll on for an attack's damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DamageTable {
    #[default]
    None,
    Standard,
    Kick,
    Punch,
    DeathFromAbove,
}

/// One named to-hit modifier; the host sums all of them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackModifier {
    pub label: String,
    pub value: i32,
}

impl AttackModifier {
    pub fn new(label: &str, value: i32) -> Self {
        Self { label: label.to_string(), value }
    }
}

/// Immutable result of evaluating one melee attack
///
/// When `is_valid` is false, every computed field keeps its default; nothing
/// partial is ever exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub kind: AttackKind,
    pub is_valid: bool,
    /// Ordered per-cluster damage against the target
    pub target_damage_clusters: Vec<f32>,
    /// Self-damage clusters the attacker takes (charge recoil, DFA landing)
    pub attacker_damage_clusters: Vec<f32>,
    pub target_instability: f32,
    pub attacker_instability: f32,
    /// Ordered named to-hit modifiers
    pub modifiers: Vec<AttackModifier>,
    pub attacker_table: DamageTable,
    pub target_table: DamageTable,
    pub unsteady_attacker_on_hit: bool,
    pub unsteady_attacker_on_miss: bool,
    pub unsteady_target_on_hit: bool,
    pub animation: Option<MeleeAnimation>,
    pub description_notes: Vec<String>,
}

impl AttackOutcome {
    /// An invalid attack; all computation skipped
    pub fn invalid(kind: AttackKind) -> Self {
        Self {
            kind,
            is_valid: false,
            target_damage_clusters: Vec::new(),
            attacker_damage_clusters: Vec::new(),
            target_instability: 0.0,
            attacker_instability: 0.0,
            modifiers: Vec::new(),
            attacker_table: DamageTable::None,
            target_table: DamageTable::None,
            unsteady_attacker_on_hit: false,
            unsteady_attacker_on_miss: false,
            unsteady_target_on_hit: false,
            animation: None,
            description_notes: Vec::new(),
        }
    }

    /// Sum of all named modifiers, as the host applies them
    pub fn total_modifier(&self) -> i32 {
        self.modifiers.iter().map(|m| m.value).sum()
    }
}

/// Expand a damage figure into clusters, honoring an extra-hits statistic
///
/// Each extra hit granted by the statistic adds one more cluster of the same
/// magnitude.
pub(crate) fn clusters_with_extra_attacks(
    attacker: &Combatant,
    damage: f32,
    extra_hits_stat: &str,
) -> Vec<f32> {
    let extra = attacker.stat(extra_hits_stat).unwrap_or(0).max(0) as usize;
    vec![damage; 1 + extra]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stats;

    #[test]
    fn test_total_modifier_sums() {
        let mut outcome = AttackOutcome::invalid(AttackKind::Kick);
        outcome.modifiers.push(AttackModifier::new("Kick", -2));
        outcome.modifiers.push(AttackModifier::new("Actuator Damage", 3));
        assert_eq!(outcome.total_modifier(), 1);
    }

    #[test]
    fn test_clusters_without_stat() {
        let mech = Combatant::test_mech(1, 60.0);
        let clusters = clusters_with_extra_attacks(&mech, 12.0, stats::KICK_EXTRA_HITS);
        assert_eq!(clusters, vec![12.0]);
    }

    #[test]
    fn test_clusters_with_extra_hits() {
        let mut mech = Combatant::test_mech(1, 60.0);
        mech.stats.insert(stats::KICK_EXTRA_HITS.to_string(), 2);
        let clusters = clusters_with_extra_attacks(&mech, 12.0, stats::KICK_EXTRA_HITS);
        assert_eq!(clusters, vec![12.0, 12.0, 12.0]);
    }
}
