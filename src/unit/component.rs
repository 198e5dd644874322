//! Mounted components: equipment, actuators, ammunition bins

use serde::{Deserialize, Serialize};

use crate::core::types::StatBag;
use crate::unit::location::Location;

/// Host-tracked damage state of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DamageLevel {
    #[default]
    Functional,
    NonFunctional,
    Destroyed,
}

impl DamageLevel {
    pub fn is_functional(&self) -> bool {
        matches!(self, DamageLevel::Functional)
    }
}

/// Limb actuators relevant to melee validation and maluses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActuatorKind {
    Shoulder,
    UpperArm,
    LowerArm,
    Hand,
    Hip,
    UpperLeg,
    LowerLeg,
    Foot,
}

impl ActuatorKind {
    /// Upper/lower limb actuators are the ones counted for damage maluses
    pub fn is_upper_or_lower(&self) -> bool {
        matches!(
            self,
            ActuatorKind::UpperArm
                | ActuatorKind::LowerArm
                | ActuatorKind::UpperLeg
                | ActuatorKind::LowerLeg
        )
    }
}

/// Per-round damage figures for ammunition with an explosion profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExplosionProfile {
    pub explosive_damage_per_round: f32,
    pub heat_damage_per_round: f32,
    pub stability_damage_per_round: f32,
}

/// An ammunition bin carried by a component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmmoBin {
    pub remaining_rounds: i32,
    /// Risk multiplier for especially hazardous ammo types; absent means the
    /// bin has no volatility trait at all
    pub volatility_weighting: Option<f32>,
    /// Present only when the host's extended damage model covers this bin
    pub explosion_profile: Option<ExplosionProfile>,
}

impl AmmoBin {
    pub fn new(remaining_rounds: i32) -> Self {
        Self { remaining_rounds, volatility_weighting: None, explosion_profile: None }
    }
}

/// What a component actually is, beyond a damageable slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComponentKind {
    Equipment,
    Actuator(ActuatorKind),
    Ammo(AmmoBin),
}

/// One mounted component on a unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub location: Location,
    pub damage_level: DamageLevel,
    pub stats: StatBag,
    pub kind: ComponentKind,
}

impl Component {
    pub fn equipment(name: &str, location: Location) -> Self {
        Self {
            name: name.to_string(),
            location,
            damage_level: DamageLevel::Functional,
            stats: StatBag::default(),
            kind: ComponentKind::Equipment,
        }
    }

    pub fn actuator(kind: ActuatorKind, location: Location) -> Self {
        Self {
            name: format!("{:?} actuator", kind),
            location,
            damage_level: DamageLevel::Functional,
            stats: StatBag::default(),
            kind: ComponentKind::Actuator(kind),
        }
    }

    pub fn ammo(name: &str, location: Location, bin: AmmoBin) -> Self {
        Self {
            name: name.to_string(),
            location,
            damage_level: DamageLevel::Functional,
            stats: StatBag::default(),
            kind: ComponentKind::Ammo(bin),
        }
    }

    pub fn damaged(mut self, level: DamageLevel) -> Self {
        self.damage_level = level;
        self
    }

    pub fn with_stat(mut self, key: &str, value: i32) -> Self {
        self.stats.insert(key.to_string(), value);
        self
    }

    pub fn is_functional(&self) -> bool {
        self.damage_level.is_functional()
    }

    pub fn has_stat(&self, key: &str) -> bool {
        self.stats.contains_key(key)
    }

    pub fn ammo_bin(&self) -> Option<&AmmoBin> {
        match &self.kind {
            ComponentKind::Ammo(bin) => Some(bin),
            _ => None,
        }
    }

    pub fn actuator_kind(&self) -> Option<ActuatorKind> {
        match &self.kind {
            ComponentKind::Actuator(kind) => Some(*kind),
            _ => None,
        }
    }
}
