//! Outbound commands the host applies after breach resolution
//!
//! This crate never mutates game state; a breach resolves into a list of
//! these values.

use serde::{Deserialize, Serialize};

use crate::core::types::UnitId;
use crate::unit::Location;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostCommand {
    /// Mark one mounted component permanently non-functional
    DisableComponent {
        unit: UnitId,
        location: Location,
        /// Index into the unit's component list
        component_index: usize,
    },
    /// Incapacitate the unit's pilot immediately
    IncapacitatePilot { unit: UnitId },
    /// Flag the unit for death
    FlagForDeath { unit: UnitId },
    /// Run the host's death processing for the unit
    ProcessDeath { unit: UnitId },
    /// Show one flavor/notification reaction for the unit; emitted at most
    /// once per attack sequence regardless of how many locations breached
    FlavorReaction { unit: UnitId },
}
