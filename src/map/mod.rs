//! Read-only map tile metadata consumed by heat prediction
//!
//! The host owns the real map; this is the minimal per-tile view the heat
//! calculations need. Tiles are keyed by the floor of their world position.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::Vec2;

/// Thermal metadata for one map tile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tile {
    /// Per-turn heat contribution from an active fire effect; 0 when not burning
    pub burning_strength: f32,
    /// Design-mask heat sink multiplier for this tile, if any
    pub heat_sink_multiplier: Option<f32>,
    /// Sticky heat-sink modifier applied when moving through this tile while
    /// it burns (e.g. a burning forest mask)
    pub sticky_heat_sink_modifier: Option<f32>,
}

impl Tile {
    pub fn burning(strength: f32) -> Self {
        Self { burning_strength: strength, ..Self::default() }
    }
}

/// Sparse tile map view; anything not present reads as a plain tile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleMap {
    tiles: AHashMap<(i32, i32), Tile>,
    /// Map-wide biome heat sink multiplier, if the biome defines one
    pub biome_heat_sink_multiplier: Option<f32>,
}

impl BattleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_biome_multiplier(multiplier: f32) -> Self {
        Self { tiles: AHashMap::default(), biome_heat_sink_multiplier: Some(multiplier) }
    }

    pub fn set_tile(&mut self, x: i32, y: i32, tile: Tile) {
        self.tiles.insert((x, y), tile);
    }

    pub fn tile_at(&self, pos: Vec2) -> Option<&Tile> {
        self.tiles.get(&(pos.x.floor() as i32, pos.y.floor() as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_lookup_floors_position() {
        let mut map = BattleMap::new();
        map.set_tile(2, 3, Tile::burning(4.0));

        let tile = map.tile_at(Vec2::new(2.9, 3.1)).unwrap();
        assert!((tile.burning_strength - 4.0).abs() < f32::EPSILON);
        assert!(map.tile_at(Vec2::new(3.0, 3.0)).is_none());
    }
}
