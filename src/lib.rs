//! Steel Resolve - predictive combat-effects calculator for turn-based tactical combat
//!
//! The host engine owns all game state; this crate reads snapshots of it and
//! returns immutable results (heat predictions, melee attack outcomes, hull
//! breach commands) for the host to apply.

pub mod ammo;
pub mod breach;
pub mod core;
pub mod heat;
pub mod map;
pub mod melee;
pub mod unit;
