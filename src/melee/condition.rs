//! Attacker limb condition, derived once per evaluation from components

use crate::core::config::{KickConfig, PunchConfig};
use crate::unit::{ActuatorKind, Combatant, Location, MechLocation};

/// Which limb of a pair an attack resolves with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Functional state of the actuators that matter to melee attacks
#[derive(Debug, Clone, Copy)]
pub struct AttackerCondition {
    pub left_hip_functional: bool,
    pub right_hip_functional: bool,
    /// Working upper/lower leg actuators per leg, 0 to 2
    pub left_leg_actuator_count: i32,
    pub right_leg_actuator_count: i32,
    pub left_foot_functional: bool,
    pub right_foot_functional: bool,
    pub left_shoulder_functional: bool,
    pub right_shoulder_functional: bool,
    /// Working upper/lower arm actuators per arm, 0 to 2
    pub left_arm_actuator_count: i32,
    pub right_arm_actuator_count: i32,
    pub left_hand_functional: bool,
    pub right_hand_functional: bool,
}

impl AttackerCondition {
    pub fn from_combatant(unit: &Combatant) -> Self {
        use ActuatorKind::*;
        use Location::Mech as At;
        use MechLocation::*;

        Self {
            left_hip_functional: unit.actuator_functional(Hip, At(LeftLeg)),
            right_hip_functional: unit.actuator_functional(Hip, At(RightLeg)),
            left_leg_actuator_count: unit.limb_actuator_count(At(LeftLeg)),
            right_leg_actuator_count: unit.limb_actuator_count(At(RightLeg)),
            left_foot_functional: unit.actuator_functional(Foot, At(LeftLeg)),
            right_foot_functional: unit.actuator_functional(Foot, At(RightLeg)),
            left_shoulder_functional: unit.actuator_functional(Shoulder, At(LeftArm)),
            right_shoulder_functional: unit.actuator_functional(Shoulder, At(RightArm)),
            left_arm_actuator_count: unit.limb_actuator_count(At(LeftArm)),
            right_arm_actuator_count: unit.limb_actuator_count(At(RightArm)),
            left_hand_functional: unit.actuator_functional(Hand, At(LeftArm)),
            right_hand_functional: unit.actuator_functional(Hand, At(RightArm)),
        }
    }

    /// Kick damage halves once per missing upper/lower actuator on the worse leg
    pub fn kick_damage_multiplier(&self) -> f32 {
        let missing = 2 - self.left_leg_actuator_count.min(self.right_leg_actuator_count);
        0.5f32.powi(missing)
    }

    /// To-hit malus from leg damage: each leg scored independently, only the
    /// worse (larger) malus applies
    pub fn kick_actuator_malus(&self, config: &KickConfig) -> i32 {
        let mut left = (2 - self.left_leg_actuator_count) * config.leg_actuator_damage_malus;
        if !self.left_foot_functional {
            left += config.foot_actuator_damage_malus;
        }

        let mut right = (2 - self.right_leg_actuator_count) * config.leg_actuator_damage_malus;
        if !self.right_foot_functional {
            right += config.foot_actuator_damage_malus;
        }

        left.max(right)
    }

    /// The arm a punch resolves with: a functional shoulder is required, and
    /// among qualifying arms the least-damaged one is used (left on ties)
    pub fn punching_arm(&self) -> Option<Side> {
        match (self.left_shoulder_functional, self.right_shoulder_functional) {
            (false, false) => None,
            (true, false) => Some(Side::Left),
            (false, true) => Some(Side::Right),
            (true, true) => {
                if self.right_arm_actuator_count > self.left_arm_actuator_count {
                    Some(Side::Right)
                } else {
                    Some(Side::Left)
                }
            }
        }
    }

    /// Punch damage halves once per missing upper/lower actuator on the
    /// punching arm
    pub fn punch_damage_multiplier(&self) -> f32 {
        let count = match self.punching_arm() {
            Some(Side::Left) => self.left_arm_actuator_count,
            Some(Side::Right) => self.right_arm_actuator_count,
            None => return 0.0,
        };
        0.5f32.powi(2 - count)
    }

    /// To-hit malus from damage on the punching arm
    pub fn punch_actuator_malus(&self, config: &PunchConfig) -> i32 {
        let (count, hand_functional) = match self.punching_arm() {
            Some(Side::Left) => (self.left_arm_actuator_count, self.left_hand_functional),
            Some(Side::Right) => (self.right_arm_actuator_count, self.right_hand_functional),
            None => return 0,
        };
        let mut malus = (2 - count) * config.arm_actuator_damage_malus;
        if !hand_functional {
            malus += config.hand_actuator_damage_malus;
        }
        malus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::DamageLevel;

    fn damage_actuator(unit: &mut Combatant, kind: ActuatorKind, location: Location) {
        for c in &mut unit.components {
            if c.location == location && c.actuator_kind() == Some(kind) {
                c.damage_level = DamageLevel::Destroyed;
            }
        }
    }

    #[test]
    fn test_pristine_condition() {
        let mech = Combatant::test_mech(1, 50.0);
        let condition = AttackerCondition::from_combatant(&mech);

        assert!(condition.left_hip_functional && condition.right_hip_functional);
        assert_eq!(condition.left_leg_actuator_count, 2);
        assert!((condition.kick_damage_multiplier() - 1.0).abs() < f32::EPSILON);
        assert_eq!(condition.kick_actuator_malus(&KickConfig::default()), 0);
    }

    #[test]
    fn test_worse_leg_malus_only() {
        let mut mech = Combatant::test_mech(1, 50.0);
        // Left leg: one actuator and the foot gone. Right leg: one actuator gone.
        damage_actuator(&mut mech, ActuatorKind::UpperLeg, Location::Mech(MechLocation::LeftLeg));
        damage_actuator(&mut mech, ActuatorKind::Foot, Location::Mech(MechLocation::LeftLeg));
        damage_actuator(&mut mech, ActuatorKind::LowerLeg, Location::Mech(MechLocation::RightLeg));

        let condition = AttackerCondition::from_combatant(&mech);
        let config = KickConfig::default();
        // Left: 1*2 + 1 = 3, right: 1*2 = 2; only the worse leg counts
        assert_eq!(condition.kick_actuator_malus(&config), 3);
    }

    #[test]
    fn test_kick_damage_halves_per_missing_actuator() {
        let mut mech = Combatant::test_mech(1, 50.0);
        damage_actuator(&mut mech, ActuatorKind::UpperLeg, Location::Mech(MechLocation::LeftLeg));
        damage_actuator(&mut mech, ActuatorKind::LowerLeg, Location::Mech(MechLocation::LeftLeg));

        let condition = AttackerCondition::from_combatant(&mech);
        assert!((condition.kick_damage_multiplier() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_punching_arm_prefers_less_damaged() {
        let mut mech = Combatant::test_mech(1, 50.0);
        damage_actuator(&mut mech, ActuatorKind::UpperArm, Location::Mech(MechLocation::LeftArm));

        let condition = AttackerCondition::from_combatant(&mech);
        assert_eq!(condition.punching_arm(), Some(Side::Right));
        assert!((condition.punch_damage_multiplier() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_no_punching_arm_without_shoulders() {
        let mut mech = Combatant::test_mech(1, 50.0);
        damage_actuator(&mut mech, ActuatorKind::Shoulder, Location::Mech(MechLocation::LeftArm));
        damage_actuator(&mut mech, ActuatorKind::Shoulder, Location::Mech(MechLocation::RightArm));

        let condition = AttackerCondition::from_combatant(&mech);
        assert_eq!(condition.punching_arm(), None);
    }
}
