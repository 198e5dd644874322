//! Read-only view of combat units as supplied by the host
//!
//! Nothing here is mutated by the calculators; the host rebuilds or updates
//! these snapshots as its own state changes.

pub mod combatant;
pub mod component;
pub mod location;

pub use combatant::{Combatant, HeatState, MovePath, UnitKind};
pub use component::{
    ActuatorKind, AmmoBin, Component, ComponentKind, DamageLevel, ExplosionProfile,
};
pub use location::{Location, MechLocation, TurretLocation, VehicleLocation};
