//! The combatant snapshot consumed by every calculator

use serde::{Deserialize, Serialize};

use crate::core::types::{StatBag, UnitId, Vec2};
use crate::unit::component::{ActuatorKind, Component};
use crate::unit::location::{Location, MechLocation};

/// Chassis scheme of a unit; selects location schemes and breach consequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// Multi-location structural actor
    Mech,
    /// Multi-location non-structural actor
    Vehicle,
    /// Single-hull actor
    Turret,
}

/// Thermal state as tracked by the host
///
/// The host consumes sink capacity piecemeal during a phase and records the
/// consumed part separately; `sink_capacity_consumed` lets predictions undo
/// that and reason about the full turn.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HeatState {
    pub current_heat: i32,
    pub temp_heat: i32,
    pub sink_capacity_remaining: i32,
    pub sink_capacity_consumed: i32,
}

/// An already-computed movement path; this crate never does pathfinding
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovePath {
    /// Tile positions visited, in order
    pub tiles: Vec<Vec2>,
    pub destination: Option<Vec2>,
}

impl MovePath {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(tiles: Vec<Vec2>) -> Self {
        let destination = tiles.last().copied();
        Self { tiles, destination }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Read-only view of one unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub id: UnitId,
    pub kind: UnitKind,
    pub tonnage: f32,
    pub position: Vec2,
    pub walk_speed: f32,
    pub run_speed: f32,
    /// Zero for units without jump capability
    pub jump_distance: f32,
    pub is_prone: bool,
    pub has_pilot: bool,
    pub unaffected_by_fire: bool,
    pub heat: HeatState,
    pub components: Vec<Component>,
    pub stats: StatBag,
    pub path: MovePath,
}

impl Combatant {
    /// Look up a unit statistic; absent keys read as `None`
    pub fn stat(&self, key: &str) -> Option<i32> {
        self.stats.get(key).copied()
    }

    /// All components mounted at a location
    pub fn components_at(&self, location: Location) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(move |c| c.location == location)
    }

    /// Is an actuator of this kind at this location still working?
    ///
    /// A unit that does not list the actuator at all is treated as undamaged;
    /// only an explicitly non-functional component degrades the limb.
    pub fn actuator_functional(&self, kind: ActuatorKind, location: Location) -> bool {
        !self
            .components_at(location)
            .any(|c| c.actuator_kind() == Some(kind) && !c.is_functional())
    }

    /// Count of working upper/lower actuators at a limb location, 0 to 2
    pub fn limb_actuator_count(&self, location: Location) -> i32 {
        let missing = self
            .components_at(location)
            .filter(|c| {
                c.actuator_kind().is_some_and(|k| k.is_upper_or_lower()) && !c.is_functional()
            })
            .count() as i32;
        (2 - missing).max(0)
    }

    /// Test combatant: pristine mech with a full actuator set
    pub fn test_mech(id: u32, tonnage: f32) -> Self {
        use ActuatorKind::*;
        use Location::Mech as At;
        use MechLocation::*;

        let mut components = Vec::new();
        for leg in [LeftLeg, RightLeg] {
            components.push(Component::actuator(Hip, At(leg)));
            components.push(Component::actuator(UpperLeg, At(leg)));
            components.push(Component::actuator(LowerLeg, At(leg)));
            components.push(Component::actuator(Foot, At(leg)));
        }
        for arm in [LeftArm, RightArm] {
            components.push(Component::actuator(Shoulder, At(arm)));
            components.push(Component::actuator(UpperArm, At(arm)));
            components.push(Component::actuator(LowerArm, At(arm)));
            components.push(Component::actuator(Hand, At(arm)));
        }

        Self {
            id: UnitId(id),
            kind: UnitKind::Mech,
            tonnage,
            position: Vec2::default(),
            walk_speed: 120.0,
            run_speed: 180.0,
            jump_distance: 0.0,
            is_prone: false,
            has_pilot: true,
            unaffected_by_fire: false,
            heat: HeatState::default(),
            components,
            stats: StatBag::default(),
            path: MovePath::none(),
        }
    }

    /// Test combatant: wheeled vehicle
    pub fn test_vehicle(id: u32, tonnage: f32) -> Self {
        Self {
            id: UnitId(id),
            kind: UnitKind::Vehicle,
            tonnage,
            position: Vec2::default(),
            walk_speed: 100.0,
            run_speed: 150.0,
            jump_distance: 0.0,
            is_prone: false,
            has_pilot: true,
            unaffected_by_fire: false,
            heat: HeatState::default(),
            components: Vec::new(),
            stats: StatBag::default(),
            path: MovePath::none(),
        }
    }

    /// Test combatant: emplaced turret
    pub fn test_turret(id: u32) -> Self {
        Self {
            id: UnitId(id),
            kind: UnitKind::Turret,
            tonnage: 40.0,
            position: Vec2::default(),
            walk_speed: 0.0,
            run_speed: 0.0,
            jump_distance: 0.0,
            is_prone: false,
            has_pilot: true,
            unaffected_by_fire: false,
            heat: HeatState::default(),
            components: Vec::new(),
            stats: StatBag::default(),
            path: MovePath::none(),
        }
    }
}
