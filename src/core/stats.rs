//! Well-known statistic keys read from host-owned stat bags
//!
//! The host populates these through its own effect system; this crate only
//! ever reads them.

/// Flat to-hit modifier applied to kick attacks when present and nonzero
pub const KICK_ATTACK_MOD: &str = "KickAttackMod";
/// Flat to-hit modifier applied to punch attacks when present and nonzero
pub const PUNCH_ATTACK_MOD: &str = "PunchAttackMod";
/// Flat to-hit modifier applied to charge attacks when present and nonzero
pub const CHARGE_ATTACK_MOD: &str = "ChargeAttackMod";
/// Flat to-hit modifier applied to death-from-above attacks when present and nonzero
pub const DFA_ATTACK_MOD: &str = "DeathFromAboveAttackMod";

/// Extra simultaneous damage clusters granted to kicks
pub const KICK_EXTRA_HITS: &str = "KickExtraHitsCount";
/// Extra simultaneous damage clusters granted to punches
pub const PUNCH_EXTRA_HITS: &str = "PunchExtraHitsCount";
/// Extra simultaneous damage clusters granted to death-from-above attacks
pub const DFA_EXTRA_HITS: &str = "DeathFromAboveExtraHitsCount";

/// Marker stat on a component: its mount location never suffers hull breaches
pub const HULL_BREACH_IMMUNITY: &str = "HullBreachImmunity";
