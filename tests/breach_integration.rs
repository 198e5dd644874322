//! Hull breach lifecycle integration tests
//!
//! Drives the resolver through full host event sequences: begin, structure
//! damage, end. Probabilities of 1.0 and 0.0 keep outcomes deterministic.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use steel_resolve::breach::{HostCommand, HullBreachResolver};
use steel_resolve::core::types::SequenceId;
use steel_resolve::core::CombatConfig;
use steel_resolve::unit::{Combatant, Location, MechLocation};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn certain_breach_resolver() -> HullBreachResolver {
    let mut config = CombatConfig::default();
    config.breach.check_probability = 1.0;
    HullBreachResolver::new(&config)
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

#[test]
fn test_full_sequence_lifecycle() {
    init_tracing();
    let mut resolver = certain_breach_resolver();
    let target = Combatant::test_mech(7, 65.0);

    resolver.on_sequence_begin(SequenceId(1), true);
    resolver.on_structure_damage(SequenceId(1), Location::Mech(MechLocation::Head), 3.0);
    resolver.on_structure_damage(SequenceId(1), Location::Mech(MechLocation::Head), 2.0);
    let commands = resolver.on_sequence_end(SequenceId(1), &target, 5.0, &mut rng());

    assert!(commands.contains(&HostCommand::IncapacitatePilot { unit: target.id }));
    // Two hits on the head still emit one reaction
    let reactions = commands
        .iter()
        .filter(|c| matches!(c, HostCommand::FlavorReaction { .. }))
        .count();
    assert_eq!(reactions, 1);
    assert!(resolver.session().active_sequence().is_none());
}

#[test]
fn test_feature_disabled_is_fully_inert() {
    init_tracing();
    let mut config = CombatConfig::default();
    config.breach.check_probability = 1.0;
    config.features.hull_breaches = false;
    let mut resolver = HullBreachResolver::new(&config);
    let target = Combatant::test_mech(7, 65.0);

    resolver.on_sequence_begin(SequenceId(1), true);
    resolver.on_structure_damage(SequenceId(1), Location::Mech(MechLocation::Head), 5.0);
    let commands = resolver.on_sequence_end(SequenceId(1), &target, 5.0, &mut rng());

    assert!(commands.is_empty());
    assert!(resolver.session().active_sequence().is_none());
}

#[test]
fn test_events_without_begin_are_ignored() {
    init_tracing();
    let mut resolver = certain_breach_resolver();
    let target = Combatant::test_mech(7, 65.0);

    resolver.on_structure_damage(SequenceId(1), Location::Mech(MechLocation::Head), 5.0);
    let commands = resolver.on_sequence_end(SequenceId(1), &target, 5.0, &mut rng());

    assert!(commands.is_empty());
}

#[test]
fn test_zero_damage_end_leaves_sequence_open_until_next_begin() {
    init_tracing();
    let mut resolver = certain_breach_resolver();
    let target = Combatant::test_mech(7, 65.0);

    resolver.on_sequence_begin(SequenceId(1), true);
    resolver.on_structure_damage(SequenceId(1), Location::Mech(MechLocation::LeftLeg), 4.0);
    let commands = resolver.on_sequence_end(SequenceId(1), &target, 0.0, &mut rng());

    // No structure damage dealt overall, so nothing resolves and the
    // tallies survive until the next begin replaces them
    assert!(commands.is_empty());
    assert_eq!(resolver.session().active_sequence(), Some(SequenceId(1)));

    resolver.on_sequence_begin(SequenceId(2), true);
    assert_eq!(
        resolver.session().recorded_hits(Location::Mech(MechLocation::LeftLeg)),
        0
    );
    assert_eq!(resolver.session().active_sequence(), Some(SequenceId(2)));
}

#[test]
fn test_multiple_breached_locations_emit_one_reaction() {
    init_tracing();
    let mut resolver = certain_breach_resolver();
    let target = Combatant::test_mech(7, 65.0);

    resolver.on_sequence_begin(SequenceId(1), true);
    resolver.on_structure_damage(SequenceId(1), Location::Mech(MechLocation::LeftArm), 4.0);
    resolver.on_structure_damage(SequenceId(1), Location::Mech(MechLocation::RightLeg), 6.0);
    let commands = resolver.on_sequence_end(SequenceId(1), &target, 10.0, &mut rng());

    // Both locations breach at probability 1.0 and disable their components
    let disabled = commands
        .iter()
        .filter(|c| matches!(c, HostCommand::DisableComponent { .. }))
        .count();
    assert_eq!(disabled, 8);

    let reactions = commands
        .iter()
        .filter(|c| matches!(c, HostCommand::FlavorReaction { .. }))
        .count();
    assert_eq!(reactions, 1);
}

#[test]
fn test_back_to_back_sequences() {
    init_tracing();
    let mut resolver = certain_breach_resolver();
    let first = Combatant::test_mech(1, 65.0);
    let second = Combatant::test_mech(2, 45.0);

    resolver.on_sequence_begin(SequenceId(1), true);
    resolver.on_structure_damage(SequenceId(1), Location::Mech(MechLocation::Head), 3.0);
    let first_commands = resolver.on_sequence_end(SequenceId(1), &first, 3.0, &mut rng());

    resolver.on_sequence_begin(SequenceId(2), true);
    resolver.on_structure_damage(
        SequenceId(2),
        Location::Mech(MechLocation::CenterTorso),
        9.0,
    );
    let second_commands = resolver.on_sequence_end(SequenceId(2), &second, 9.0, &mut rng());

    assert!(first_commands.contains(&HostCommand::IncapacitatePilot { unit: first.id }));
    assert_eq!(
        second_commands,
        vec![HostCommand::FlavorReaction { unit: second.id }]
    );
}
