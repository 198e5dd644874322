//! Ammunition risk scoring: which bin hurts the most if it cooks off
//!
//! The scoring model is selected once, from the feature flags, rather than
//! re-checking capability presence per bin.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::Features;
use crate::unit::{AmmoBin, Combatant, Component};

/// How a bin's secondary-explosion damage is estimated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmmoDamageModel {
    /// One point of risk per remaining round
    RoundCount,
    /// Per-round explosive, heat, and stability damage from the bin's
    /// explosion profile; bins without a profile are skipped entirely
    ExplosionProfile,
}

impl AmmoDamageModel {
    pub fn from_features(features: &Features) -> Self {
        if features.extended_ammo_model {
            AmmoDamageModel::ExplosionProfile
        } else {
            AmmoDamageModel::RoundCount
        }
    }

    /// Base score for a bin; `None` means the model does not apply to it
    fn score(&self, bin: &AmmoBin) -> Option<f32> {
        match self {
            AmmoDamageModel::RoundCount => Some(bin.remaining_rounds as f32),
            AmmoDamageModel::ExplosionProfile => bin.explosion_profile.as_ref().map(|p| {
                let rounds = bin.remaining_rounds as f32;
                rounds
                    * (p.explosive_damage_per_round
                        + p.heat_damage_per_round
                        + p.stability_damage_per_round)
            }),
        }
    }
}

/// The riskiest qualifying bin on a unit
#[derive(Debug, Clone, Copy)]
pub struct AmmoRisk<'a> {
    pub component: &'a Component,
    pub bin: &'a AmmoBin,
    pub score: f32,
}

/// Stateless scanner over a unit's ammunition-carrying components
#[derive(Debug, Clone, Copy)]
pub struct AmmoRiskEvaluator {
    model: AmmoDamageModel,
}

impl AmmoRiskEvaluator {
    pub fn new(model: AmmoDamageModel) -> Self {
        Self { model }
    }

    pub fn from_features(features: &Features) -> Self {
        Self::new(AmmoDamageModel::from_features(features))
    }

    /// Find the single highest-risk bin, or `None` when nothing qualifies
    ///
    /// `volatile_only` restricts the scan to bins carrying a volatility trait.
    /// Ties keep the first bin seen.
    pub fn find_most_damaging_bin<'a>(
        &self,
        unit: &'a Combatant,
        volatile_only: bool,
    ) -> Option<AmmoRisk<'a>> {
        let mut best: Option<AmmoRisk<'a>> = None;

        for component in &unit.components {
            let Some(bin) = component.ammo_bin() else { continue };

            if !component.is_functional() {
                debug!(name = %component.name, "ammo bin not functional, skipping");
                continue;
            }
            if bin.remaining_rounds <= 0 {
                debug!(name = %component.name, "ammo bin depleted, skipping");
                continue;
            }
            if volatile_only && bin.volatility_weighting.is_none() {
                debug!(name = %component.name, "ammo bin not volatile, skipping");
                continue;
            }

            let Some(mut score) = self.model.score(bin) else {
                debug!(name = %component.name, "damage model inapplicable, skipping");
                continue;
            };
            if let Some(weighting) = bin.volatility_weighting {
                score *= weighting;
            }

            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(AmmoRisk { component, bin, score });
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{AmmoBin, Component, DamageLevel, ExplosionProfile, Location, MechLocation};

    fn bin(rounds: i32) -> AmmoBin {
        AmmoBin::new(rounds)
    }

    fn mech_with_bins(bins: Vec<Component>) -> Combatant {
        let mut mech = Combatant::test_mech(1, 50.0);
        mech.components.extend(bins);
        mech
    }

    #[test]
    fn test_none_when_no_bins_qualify() {
        let mech = mech_with_bins(vec![
            Component::ammo("empty", Location::Mech(MechLocation::LeftTorso), bin(0)),
            Component::ammo("wrecked", Location::Mech(MechLocation::RightTorso), bin(8))
                .damaged(DamageLevel::NonFunctional),
        ]);

        let evaluator = AmmoRiskEvaluator::new(AmmoDamageModel::RoundCount);
        assert!(evaluator.find_most_damaging_bin(&mech, false).is_none());
    }

    #[test]
    fn test_highest_round_count_wins() {
        let mech = mech_with_bins(vec![
            Component::ammo("small", Location::Mech(MechLocation::LeftTorso), bin(5)),
            Component::ammo("large", Location::Mech(MechLocation::RightTorso), bin(12)),
        ]);

        let evaluator = AmmoRiskEvaluator::new(AmmoDamageModel::RoundCount);
        let risk = evaluator.find_most_damaging_bin(&mech, false).unwrap();
        assert_eq!(risk.component.name, "large");
        assert!((risk.score - 12.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_first_seen_wins_ties() {
        let mech = mech_with_bins(vec![
            Component::ammo("first", Location::Mech(MechLocation::LeftTorso), bin(9)),
            Component::ammo("second", Location::Mech(MechLocation::RightTorso), bin(9)),
        ]);

        let evaluator = AmmoRiskEvaluator::new(AmmoDamageModel::RoundCount);
        let risk = evaluator.find_most_damaging_bin(&mech, false).unwrap();
        assert_eq!(risk.component.name, "first");
    }

    #[test]
    fn test_volatility_weighting_multiplies() {
        let mut volatile = bin(5);
        volatile.volatility_weighting = Some(4.0);

        let mech = mech_with_bins(vec![
            Component::ammo("plain", Location::Mech(MechLocation::LeftTorso), bin(10)),
            Component::ammo("volatile", Location::Mech(MechLocation::RightTorso), volatile),
        ]);

        let evaluator = AmmoRiskEvaluator::new(AmmoDamageModel::RoundCount);
        let risk = evaluator.find_most_damaging_bin(&mech, false).unwrap();
        assert_eq!(risk.component.name, "volatile");
        assert!((risk.score - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_volatile_only_filters() {
        let mut volatile = bin(2);
        volatile.volatility_weighting = Some(1.5);

        let mech = mech_with_bins(vec![
            Component::ammo("plain", Location::Mech(MechLocation::LeftTorso), bin(30)),
            Component::ammo("volatile", Location::Mech(MechLocation::RightTorso), volatile),
        ]);

        let evaluator = AmmoRiskEvaluator::new(AmmoDamageModel::RoundCount);
        let risk = evaluator.find_most_damaging_bin(&mech, true).unwrap();
        assert_eq!(risk.component.name, "volatile");
    }

    #[test]
    fn test_explosion_model_skips_unprofiled_bins() {
        let mut profiled = bin(4);
        profiled.explosion_profile = Some(ExplosionProfile {
            explosive_damage_per_round: 10.0,
            heat_damage_per_round: 2.0,
            stability_damage_per_round: 3.0,
        });

        let mech = mech_with_bins(vec![
            Component::ammo("unprofiled", Location::Mech(MechLocation::LeftTorso), bin(100)),
            Component::ammo("profiled", Location::Mech(MechLocation::RightTorso), profiled),
        ]);

        let evaluator = AmmoRiskEvaluator::new(AmmoDamageModel::ExplosionProfile);
        let risk = evaluator.find_most_damaging_bin(&mech, false).unwrap();
        assert_eq!(risk.component.name, "profiled");
        // 4 * (10 + 2 + 3)
        assert!((risk.score - 60.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_model_selection_from_features() {
        let features = Features { extended_ammo_model: true, ..Features::default() };
        assert_eq!(AmmoDamageModel::from_features(&features), AmmoDamageModel::ExplosionProfile);
    }
}
