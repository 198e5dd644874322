pub mod predictor;

pub use predictor::{
    adjusted_capacity, calculate_heat, design_mask_multiplier, normalized_sink_capacity,
    terrain_heat, HeatSnapshot,
};
