//! Per-attack-sequence breach bookkeeping
//!
//! At most one sequence is active at a time. Events carrying any other
//! sequence id are host desynchronization and are skipped silently; sequence
//! authority belongs to the host, not this crate.

use ahash::AHashMap;
use tracing::{debug, warn};

use crate::core::types::SequenceId;
use crate::unit::{Location, MechLocation, TurretLocation, VehicleLocation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Idle,
    Active(SequenceId),
}

/// Hit tallies for one attack sequence, one map per chassis scheme
#[derive(Debug)]
pub struct BreachSession {
    state: SessionState,
    mech_hits: AHashMap<MechLocation, u32>,
    vehicle_hits: AHashMap<VehicleLocation, u32>,
    turret_hits: AHashMap<TurretLocation, u32>,
}

impl BreachSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            mech_hits: AHashMap::default(),
            vehicle_hits: AHashMap::default(),
            turret_hits: AHashMap::default(),
        }
    }

    pub fn active_sequence(&self) -> Option<SequenceId> {
        match self.state {
            SessionState::Idle => None,
            SessionState::Active(id) => Some(id),
        }
    }

    /// Begin a sequence. Without a chosen target there is nothing to track and
    /// the session stays idle. Stale tallies from an unfinished sequence are
    /// cleared either way.
    pub fn begin(&mut self, sequence_id: SequenceId, has_chosen_target: bool) {
        self.clear();
        if has_chosen_target {
            debug!(?sequence_id, "recording attack sequence for possible hull breaches");
            self.state = SessionState::Active(sequence_id);
        } else {
            self.state = SessionState::Idle;
        }
    }

    /// Record one structural damage hit. Ignored unless the sequence id
    /// matches the active one and the amount is positive.
    pub fn record_structure_damage(
        &mut self,
        sequence_id: SequenceId,
        location: Location,
        amount: f32,
    ) {
        let SessionState::Active(active_id) = self.state else {
            return;
        };
        if sequence_id != active_id {
            warn!(?sequence_id, ?active_id, "sequence id mismatch, skipping structure damage");
            return;
        }
        if amount <= 0.0 {
            return;
        }

        debug!(?location, amount, "location needs breach check");
        match location {
            Location::Mech(loc) => *self.mech_hits.entry(loc).or_insert(0) += 1,
            Location::Vehicle(loc) => *self.vehicle_hits.entry(loc).or_insert(0) += 1,
            Location::Turret(loc) => *self.turret_hits.entry(loc).or_insert(0) += 1,
        }
    }

    /// Hits recorded for a location in the current sequence
    pub fn recorded_hits(&self, location: Location) -> u32 {
        match location {
            Location::Mech(loc) => self.mech_hits.get(&loc).copied().unwrap_or(0),
            Location::Vehicle(loc) => self.vehicle_hits.get(&loc).copied().unwrap_or(0),
            Location::Turret(loc) => self.turret_hits.get(&loc).copied().unwrap_or(0),
        }
    }

    pub(crate) fn mech_locations(&self) -> impl Iterator<Item = MechLocation> + '_ {
        self.mech_hits.keys().copied()
    }

    pub(crate) fn vehicle_locations(&self) -> impl Iterator<Item = VehicleLocation> + '_ {
        self.vehicle_hits.keys().copied()
    }

    pub(crate) fn turret_locations(&self) -> impl Iterator<Item = TurretLocation> + '_ {
        self.turret_hits.keys().copied()
    }

    /// Drop all tallies and return to idle
    pub fn clear(&mut self) {
        self.state = SessionState::Idle;
        self.mech_hits.clear();
        self.vehicle_hits.clear();
        self.turret_hits.clear();
    }
}

impl Default for BreachSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_without_target_stays_idle() {
        let mut session = BreachSession::new();
        session.begin(SequenceId(1), false);
        assert!(session.active_sequence().is_none());
    }

    #[test]
    fn test_mismatched_sequence_never_counts() {
        let mut session = BreachSession::new();
        session.begin(SequenceId(1), true);

        session.record_structure_damage(
            SequenceId(2),
            Location::Mech(MechLocation::LeftTorso),
            10.0,
        );
        assert_eq!(session.recorded_hits(Location::Mech(MechLocation::LeftTorso)), 0);
    }

    #[test]
    fn test_zero_amount_never_counts() {
        let mut session = BreachSession::new();
        session.begin(SequenceId(1), true);

        session.record_structure_damage(
            SequenceId(1),
            Location::Mech(MechLocation::LeftTorso),
            0.0,
        );
        assert_eq!(session.recorded_hits(Location::Mech(MechLocation::LeftTorso)), 0);
    }

    #[test]
    fn test_hits_accumulate_per_location() {
        let mut session = BreachSession::new();
        session.begin(SequenceId(3), true);

        let loc = Location::Mech(MechLocation::RightLeg);
        session.record_structure_damage(SequenceId(3), loc, 4.0);
        session.record_structure_damage(SequenceId(3), loc, 2.5);
        assert_eq!(session.recorded_hits(loc), 2);
    }

    #[test]
    fn test_begin_clears_stale_tallies() {
        let mut session = BreachSession::new();
        session.begin(SequenceId(1), true);
        session.record_structure_damage(
            SequenceId(1),
            Location::Vehicle(VehicleLocation::Front),
            8.0,
        );

        session.begin(SequenceId(2), true);
        assert_eq!(session.recorded_hits(Location::Vehicle(VehicleLocation::Front)), 0);
        assert_eq!(session.active_sequence(), Some(SequenceId(2)));
    }
}
