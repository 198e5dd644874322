//! Hull breach resolution
//!
//! Structural damage taken during an attack sequence can breach the hull at
//! the damaged location. Hits are tallied while the sequence runs; when it
//! ends, each damaged location gets one probabilistic check and breaches apply
//! chassis-specific consequences, emitted as commands for the host.

pub mod commands;
pub mod resolver;
pub mod session;

pub use commands::HostCommand;
pub use resolver::HullBreachResolver;
pub use session::BreachSession;
