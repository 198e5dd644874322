//! End-of-sequence breach checks and chassis-specific consequences

use rand::Rng;
use tracing::{debug, info, warn};

use crate::breach::commands::HostCommand;
use crate::breach::session::BreachSession;
use crate::core::stats;
use crate::core::types::SequenceId;
use crate::core::CombatConfig;
use crate::unit::{Combatant, Location, MechLocation, UnitKind};

/// Stateful breach tracker, scoped to one attack sequence at a time
///
/// The host guarantees sequences never overlap; events with a foreign
/// sequence id are still ignored defensively.
#[derive(Debug)]
pub struct HullBreachResolver {
    session: BreachSession,
    check_probability: f32,
    enabled: bool,
}

impl HullBreachResolver {
    pub fn new(config: &CombatConfig) -> Self {
        Self {
            session: BreachSession::new(),
            check_probability: config.breach.check_probability,
            enabled: config.features.hull_breaches,
        }
    }

    pub fn session(&self) -> &BreachSession {
        &self.session
    }

    pub fn on_sequence_begin(&mut self, sequence_id: SequenceId, has_chosen_target: bool) {
        if !self.enabled {
            return;
        }
        self.session.begin(sequence_id, has_chosen_target);
    }

    pub fn on_structure_damage(
        &mut self,
        sequence_id: SequenceId,
        location: Location,
        amount: f32,
    ) {
        if !self.enabled || self.check_probability == 0.0 {
            return;
        }
        self.session.record_structure_damage(sequence_id, location, amount);
    }

    /// Resolve all recorded locations against the chosen target
    ///
    /// Location iteration order is unspecified. Returns the commands the host
    /// must apply; empty when the sequence does not resolve (idle, id
    /// mismatch, or no structure damage dealt).
    pub fn on_sequence_end<R: Rng>(
        &mut self,
        sequence_id: SequenceId,
        target: &Combatant,
        total_structure_damage: f32,
        rng: &mut R,
    ) -> Vec<HostCommand> {
        if !self.enabled {
            return Vec::new();
        }
        let Some(active_id) = self.session.active_sequence() else {
            return Vec::new();
        };
        if sequence_id != active_id {
            warn!(?sequence_id, ?active_id, "sequence id mismatch, skipping breach resolution");
            return Vec::new();
        }
        if total_structure_damage <= 0.0 {
            debug!("attack did no structure damage, skipping breach resolution");
            return Vec::new();
        }

        let mut commands = Vec::new();
        let any_breach = match target.kind {
            UnitKind::Mech => self.resolve_mech(target, rng, &mut commands),
            UnitKind::Vehicle => {
                let locations: Vec<Location> =
                    self.session.vehicle_locations().map(Location::Vehicle).collect();
                self.resolve_fatal(target, &locations, rng, &mut commands)
            }
            UnitKind::Turret => {
                let locations: Vec<Location> =
                    self.session.turret_locations().map(Location::Turret).collect();
                self.resolve_fatal(target, &locations, rng, &mut commands)
            }
        };

        // One reaction per unit, never one per location
        if any_breach {
            commands.push(HostCommand::FlavorReaction { unit: target.id });
        }

        self.session.clear();
        commands
    }

    /// One weighted check per location. The exponent on the pass chance was
    /// deliberately flattened to 1: scaling by hit count made breaches far too
    /// common given how often locations are struck in a sequence.
    fn breach_occurs<R: Rng>(&self, rng: &mut R) -> bool {
        let pass_chance = 1.0 - self.check_probability;
        let threshold = 1.0 - pass_chance.powi(1);
        let roll: f32 = rng.gen();
        roll < threshold
    }

    /// Any still-functional component at the location granting explicit immunity?
    fn location_immune(target: &Combatant, location: Location) -> bool {
        target.components_at(location).any(|c| {
            c.is_functional() && c.has_stat(stats::HULL_BREACH_IMMUNITY)
        })
    }

    /// Multi-location structural actor: breaches disable, with special cases
    /// for the head and core locations
    fn resolve_mech<R: Rng>(
        &self,
        target: &Combatant,
        rng: &mut R,
        commands: &mut Vec<HostCommand>,
    ) -> bool {
        let mut any_breach = false;

        for loc in self.session.mech_locations() {
            let location = Location::Mech(loc);
            if Self::location_immune(target, location) {
                info!(?location, "component grants hull breach immunity, skipping");
                continue;
            }
            if !self.breach_occurs(rng) {
                continue;
            }

            info!(unit = ?target.id, ?location, "hull breach");
            any_breach = true;

            match loc {
                MechLocation::Head => {
                    info!("head breach, incapacitating pilot");
                    commands.push(HostCommand::IncapacitatePilot { unit: target.id });
                }
                MechLocation::CenterTorso => {
                    // Lethality follows from the structure damage itself,
                    // owned by the host
                    info!("core breach, unit should die from damage processing");
                }
                _ => {
                    for (component_index, component) in target.components.iter().enumerate() {
                        if component.location == location && component.is_functional() {
                            debug!(name = %component.name, "component lost to hull breach");
                            commands.push(HostCommand::DisableComponent {
                                unit: target.id,
                                location,
                                component_index,
                            });
                        }
                    }
                }
            }
        }

        any_breach
    }

    /// Single-hull and non-structural actors: any breach is immediately fatal
    /// and ends evaluation for the unit
    fn resolve_fatal<R: Rng>(
        &self,
        target: &Combatant,
        locations: &[Location],
        rng: &mut R,
        commands: &mut Vec<HostCommand>,
    ) -> bool {
        for &location in locations {
            if Self::location_immune(target, location) {
                info!(?location, "component grants hull breach immunity, skipping");
                continue;
            }
            if !self.breach_occurs(rng) {
                continue;
            }

            info!(unit = ?target.id, ?location, "hull breach, unit destroyed");
            if target.has_pilot {
                commands.push(HostCommand::IncapacitatePilot { unit: target.id });
            }
            commands.push(HostCommand::FlagForDeath { unit: target.id });
            commands.push(HostCommand::ProcessDeath { unit: target.id });
            return true;
        }

        false
    }
}
