//! Mount locations for the three unit chassis schemes

use serde::{Deserialize, Serialize};

/// Locations on a multi-location structural chassis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MechLocation {
    Head,
    CenterTorso,
    LeftTorso,
    RightTorso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl MechLocation {
    /// The location whose loss is expected to kill the unit through ordinary
    /// damage processing
    pub fn is_core(&self) -> bool {
        matches!(self, MechLocation::CenterTorso)
    }
}

/// Locations on a multi-location non-structural chassis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleLocation {
    Front,
    Left,
    Right,
    Rear,
    Turret,
}

/// Single-hull chassis have exactly one location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurretLocation {
    Structure,
}

/// A mount location in any of the three chassis schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Mech(MechLocation),
    Vehicle(VehicleLocation),
    Turret(TurretLocation),
}
