//! Combat configuration with documented balance constants
//!
//! Every tunable the calculators consume lives here. Hosts can deserialize a
//! partial TOML file over the defaults; anything not overridden keeps the
//! stock balance values.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{CombatError, Result};

/// Top-level configuration for all combat calculators
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    pub heat: HeatConfig,
    pub melee: MeleeConfig,
    pub breach: BreachConfig,
    pub features: Features,
}

/// Feature flags gating whole components
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    /// When false, the hull breach resolver records nothing and resolves nothing
    pub hull_breaches: bool,
    /// Use the per-round explosion profile when scoring ammunition risk,
    /// instead of the plain round count
    pub extended_ammo_model: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self { hull_breaches: true, extended_ammo_model: false }
    }
}

/// Heat prediction constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatConfig {
    /// Upper clamp for future and threshold heat
    pub max_heat: i32,
    /// Multiplier applied to every unit's sink capacity, after all map factors
    pub global_heat_sink_multiplier: f32,
}

impl Default for HeatConfig {
    fn default() -> Self {
        Self { max_heat: 150, global_heat_sink_multiplier: 1.0 }
    }
}

/// Hull breach constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreachConfig {
    /// Chance that one location with structural damage breaches at sequence end.
    /// The per-hit-count exponent was flattened to 1; more hits in a sequence
    /// do not raise this chance.
    pub check_probability: f32,
}

impl Default for BreachConfig {
    fn default() -> Self {
        Self { check_probability: 0.3 }
    }
}

/// Melee attack constants, one table per attack kind
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MeleeConfig {
    /// To-hit modifier when the target is prone (negative = easier)
    pub prone_target_attack_modifier: i32,
    pub kick: KickConfig,
    pub punch: PunchConfig,
    pub charge: ChargeConfig,
    pub dfa: DfaConfig,
}

impl Default for MeleeConfig {
    fn default() -> Self {
        Self {
            prone_target_attack_modifier: -2,
            kick: KickConfig::default(),
            punch: PunchConfig::default(),
            charge: ChargeConfig::default(),
            dfa: DfaConfig::default(),
        }
    }
}

/// Kick: 1 point of damage per `damage_divisor` tons, resolved on the kick table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KickConfig {
    pub base_attack_bonus: i32,
    /// Malus per missing upper/lower leg actuator, worse leg only
    pub leg_actuator_damage_malus: i32,
    /// Additional malus when the foot actuator on that leg is destroyed
    pub foot_actuator_damage_malus: i32,
    pub damage_divisor: f32,
    pub instability_divisor: f32,
    pub unsteady_attacker_on_hit: bool,
    pub unsteady_attacker_on_miss: bool,
    pub unsteady_target_on_hit: bool,
    /// Flavor note shown with the attack preview
    pub description: String,
}

impl Default for KickConfig {
    fn default() -> Self {
        Self {
            base_attack_bonus: -2,
            leg_actuator_damage_malus: 2,
            foot_actuator_damage_malus: 1,
            damage_divisor: 5.0,
            instability_divisor: 5.0,
            unsteady_attacker_on_hit: false,
            unsteady_attacker_on_miss: true,
            unsteady_target_on_hit: true,
            description: "A powerful kick aimed at the target's legs.".to_string(),
        }
    }
}

/// Punch: 1 point of damage per `damage_divisor` tons, resolved on the punch table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PunchConfig {
    pub base_attack_bonus: i32,
    /// Malus per missing upper/lower arm actuator on the punching arm
    pub arm_actuator_damage_malus: i32,
    /// Additional malus when the hand actuator on that arm is destroyed
    pub hand_actuator_damage_malus: i32,
    pub damage_divisor: f32,
    pub instability_divisor: f32,
    pub unsteady_attacker_on_hit: bool,
    pub unsteady_attacker_on_miss: bool,
    pub unsteady_target_on_hit: bool,
    pub description: String,
}

impl Default for PunchConfig {
    fn default() -> Self {
        Self {
            base_attack_bonus: 0,
            arm_actuator_damage_malus: 2,
            hand_actuator_damage_malus: 1,
            damage_divisor: 10.0,
            instability_divisor: 10.0,
            unsteady_attacker_on_hit: false,
            unsteady_attacker_on_miss: false,
            unsteady_target_on_hit: true,
            description: "A swinging blow with an arm.".to_string(),
        }
    }
}

/// Charge: damage to the target scales with attacker tonnage and tiles moved;
/// the attacker takes recoil damage from the target's tonnage
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeConfig {
    pub base_attack_bonus: i32,
    pub target_damage_divisor: f32,
    pub attacker_damage_divisor: f32,
    pub target_instability_divisor: f32,
    pub attacker_instability_divisor: f32,
    pub unsteady_attacker_on_hit: bool,
    pub unsteady_attacker_on_miss: bool,
    pub unsteady_target_on_hit: bool,
    pub description: String,
}

impl Default for ChargeConfig {
    fn default() -> Self {
        Self {
            base_attack_bonus: 0,
            target_damage_divisor: 10.0,
            attacker_damage_divisor: 10.0,
            target_instability_divisor: 10.0,
            attacker_instability_divisor: 10.0,
            unsteady_attacker_on_hit: true,
            unsteady_attacker_on_miss: true,
            unsteady_target_on_hit: true,
            description: "A full-speed collision with the target.".to_string(),
        }
    }
}

/// Death from above: jump onto the target; the attacker lands on its legs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DfaConfig {
    pub base_attack_bonus: i32,
    pub target_damage_divisor: f32,
    /// Target damage is this many times the per-divisor base
    pub target_damage_multiplier: f32,
    pub attacker_damage_divisor: f32,
    pub target_instability_divisor: f32,
    pub attacker_instability_divisor: f32,
    pub unsteady_attacker_on_hit: bool,
    pub unsteady_attacker_on_miss: bool,
    pub unsteady_target_on_hit: bool,
    pub description: String,
}

impl Default for DfaConfig {
    fn default() -> Self {
        Self {
            base_attack_bonus: 2,
            target_damage_divisor: 10.0,
            target_damage_multiplier: 3.0,
            attacker_damage_divisor: 5.0,
            target_instability_divisor: 10.0,
            attacker_instability_divisor: 10.0,
            unsteady_attacker_on_hit: true,
            unsteady_attacker_on_miss: true,
            unsteady_target_on_hit: true,
            description: "Jump jets carry the attacker down onto the target.".to_string(),
        }
    }
}

impl CombatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file, layered over the defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a config from TOML text, layered over the defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CombatConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.heat.max_heat <= 0 {
            return Err(CombatError::InvalidConfig(format!(
                "heat.max_heat ({}) must be positive",
                self.heat.max_heat
            )));
        }

        if !(0.0..=1.0).contains(&self.breach.check_probability) {
            return Err(CombatError::InvalidConfig(format!(
                "breach.check_probability ({}) must be within [0, 1]",
                self.breach.check_probability
            )));
        }

        let divisors = [
            ("melee.kick.damage_divisor", self.melee.kick.damage_divisor),
            ("melee.kick.instability_divisor", self.melee.kick.instability_divisor),
            ("melee.punch.damage_divisor", self.melee.punch.damage_divisor),
            ("melee.punch.instability_divisor", self.melee.punch.instability_divisor),
            ("melee.charge.target_damage_divisor", self.melee.charge.target_damage_divisor),
            ("melee.charge.attacker_damage_divisor", self.melee.charge.attacker_damage_divisor),
            (
                "melee.charge.target_instability_divisor",
                self.melee.charge.target_instability_divisor,
            ),
            (
                "melee.charge.attacker_instability_divisor",
                self.melee.charge.attacker_instability_divisor,
            ),
            ("melee.dfa.target_damage_divisor", self.melee.dfa.target_damage_divisor),
            ("melee.dfa.attacker_damage_divisor", self.melee.dfa.attacker_damage_divisor),
            ("melee.dfa.target_instability_divisor", self.melee.dfa.target_instability_divisor),
            (
                "melee.dfa.attacker_instability_divisor",
                self.melee.dfa.attacker_instability_divisor,
            ),
        ];
        for (name, value) in divisors {
            if value <= 0.0 {
                return Err(CombatError::InvalidConfig(format!(
                    "{} ({}) must be positive",
                    name, value
                )));
            }
        }

        if self.heat.global_heat_sink_multiplier <= 0.0 {
            return Err(CombatError::InvalidConfig(format!(
                "heat.global_heat_sink_multiplier ({}) must be positive",
                self.heat.global_heat_sink_multiplier
            )));
        }

        Ok(())
    }
}
