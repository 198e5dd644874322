pub mod config;
pub mod error;
pub mod stats;
pub mod types;

pub use config::CombatConfig;
pub use error::{CombatError, Result};
