//! Heat prediction: projected heat, sink capacity, and shot/move thresholds
//!
//! The host consumes sink capacity in pieces while a unit acts, so the raw
//! remaining capacity is not what a full-turn preview needs. These functions
//! normalize the state back to a linear scale and fold in every map factor
//! that scales dissipation, so the preview matches what will actually resolve.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::config::HeatConfig;
use crate::map::BattleMap;
use crate::unit::Combatant;

/// One heat prediction, created fresh per call and never mutated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatSnapshot {
    pub current_heat: i32,
    pub temp_heat: i32,
    /// Heat the pending action would add, as passed in by the host
    pub projected_heat_delta: i32,
    /// Heat picked up from burning terrain along the path or underfoot
    pub terrain_heat: i32,
    /// Capacity still sinkable this turn (negative = dissipation)
    pub sinkable_heat: i32,
    /// Full normalized capacity for the turn (negative = dissipation)
    pub overall_sink_capacity: i32,
    /// Heat after the pending action, before sinking
    pub future_heat: i32,
    /// Heat after the pending action and full sinking
    pub threshold_heat: i32,
    pub is_projected: bool,
    pub path_length: usize,
}

/// Total sink capacity for the turn: remaining plus whatever this phase
/// already consumed
pub fn normalized_sink_capacity(unit: &Combatant) -> i32 {
    let total = unit.heat.sink_capacity_remaining + unit.heat.sink_capacity_consumed;
    trace!(
        remaining = unit.heat.sink_capacity_remaining,
        consumed = unit.heat.sink_capacity_consumed,
        total,
        "normalized sink capacity"
    );
    total
}

/// Guard a host-supplied factor; a bad value contributes identity rather than
/// poisoning the whole prediction
fn checked_factor(value: f32, what: &str) -> f32 {
    if value.is_finite() {
        value
    } else {
        warn!(what, value, "non-finite heat factor, treating as 1.0");
        1.0
    }
}

/// Combined design-mask multiplier on sink capacity
///
/// Factor order is part of the contract: occupied/destination tile, then the
/// sticky modifier picked up along the path, then the biome, then the global
/// constant. A missing factor contributes exactly 1.0.
pub fn design_mask_multiplier(
    unit: &Combatant,
    map: &BattleMap,
    config: &HeatConfig,
    is_projected: bool,
) -> f32 {
    let mut multi = 1.0f32;

    // (1) Destination tile when projecting a move, current tile otherwise
    let tile = if is_projected && !unit.path.is_empty() {
        unit.path.destination.and_then(|d| map.tile_at(d))
    } else {
        map.tile_at(unit.position)
    };
    if let Some(m) = tile.and_then(|t| t.heat_sink_multiplier) {
        multi *= checked_factor(m, "tile heat sink multiplier");
    }

    // (2) Sticky modifiers from burning tiles along the path. Only one sticky
    // heat-sink effect is assumed active system-wide; when several tiles carry
    // one, the last tile visited overwrites the rest.
    if is_projected {
        let mut sticky = 1.0f32;
        for pos in &unit.path.tiles {
            if let Some(t) = map.tile_at(*pos) {
                if t.burning_strength > 0.0 {
                    if let Some(s) = t.sticky_heat_sink_modifier {
                        sticky = checked_factor(s, "sticky heat sink modifier");
                    }
                }
            }
        }
        multi *= sticky;
    }

    // (3) Biome
    if let Some(b) = map.biome_heat_sink_multiplier {
        multi *= checked_factor(b, "biome heat sink multiplier");
    }

    // (4) Global constant
    multi *= checked_factor(config.global_heat_sink_multiplier, "global heat sink multiplier");

    trace!(multi, is_projected, "design mask multiplier");
    multi
}

/// Sink capacity adjusted by the design-mask multiplier
///
/// `fractional` reports what is sinkable right now from the raw remaining
/// capacity; otherwise the normalized full-turn total is used.
pub fn adjusted_capacity(
    unit: &Combatant,
    map: &BattleMap,
    config: &HeatConfig,
    is_projected: bool,
    fractional: bool,
) -> i32 {
    let capacity = if fractional {
        unit.heat.sink_capacity_remaining
    } else {
        normalized_sink_capacity(unit)
    };
    let adjusted = capacity as f32 * design_mask_multiplier(unit, map, config, is_projected);
    trace!(capacity, adjusted, fractional, "adjusted sink capacity");
    adjusted as i32
}

/// Heat picked up from burning terrain
///
/// With a path, this is the ceiling of the mean burning strength over the
/// burning tiles only; a short pass through fire should not accumulate
/// unbounded heat. Without a path the current tile applies directly.
pub fn terrain_heat(unit: &Combatant, map: &BattleMap) -> i32 {
    if unit.unaffected_by_fire {
        return 0;
    }

    if !unit.path.is_empty() {
        let mut sum = 0.0f32;
        let mut burning_tiles = 0;
        for pos in &unit.path.tiles {
            if let Some(tile) = map.tile_at(*pos) {
                if tile.burning_strength > 0.0 {
                    sum += tile.burning_strength;
                    burning_tiles += 1;
                }
            }
        }
        if burning_tiles == 0 {
            return 0;
        }
        let heat = (sum / burning_tiles as f32).ceil() as i32;
        trace!(sum, burning_tiles, heat, "terrain heat along path");
        heat
    } else {
        map.tile_at(unit.position)
            .map(|t| t.burning_strength)
            .filter(|b| *b > 0.0)
            .map(|b| b.ceil() as i32)
            .unwrap_or(0)
    }
}

/// Predict a unit's full thermal state before an action commits
///
/// Pure over its inputs: identical state produces an identical snapshot.
pub fn calculate_heat(
    unit: &Combatant,
    map: &BattleMap,
    config: &HeatConfig,
    projected_heat_delta: i32,
) -> HeatSnapshot {
    let terrain = terrain_heat(unit, map);
    let path_length = unit.path.len();
    let is_projected = projected_heat_delta != 0 || path_length != 0;

    let sinkable_heat = -adjusted_capacity(unit, map, config, is_projected, true);
    let overall_sink_capacity = -adjusted_capacity(unit, map, config, is_projected, false);

    let future_heat = (unit.heat.current_heat
        + unit.heat.temp_heat
        + projected_heat_delta
        + terrain)
        .clamp(0, config.max_heat);
    let threshold_heat = (future_heat + sinkable_heat).clamp(0, config.max_heat);

    trace!(
        current = unit.heat.current_heat,
        temp = unit.heat.temp_heat,
        projected_heat_delta,
        terrain,
        sinkable_heat,
        future_heat,
        threshold_heat,
        "calculated heat"
    );

    HeatSnapshot {
        current_heat: unit.heat.current_heat,
        temp_heat: unit.heat.temp_heat,
        projected_heat_delta,
        terrain_heat: terrain,
        sinkable_heat,
        overall_sink_capacity,
        future_heat,
        threshold_heat,
        is_projected,
        path_length,
    }
}
