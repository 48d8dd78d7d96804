//! Pure view-model derivation over record snapshots.
//!
//! # Responsibility
//! - Resolve loosely-linked references between collections.
//! - Aggregate XP by calendar day and compute the journaling streak.
//! - Assemble the immutable dashboard view-model.
//!
//! # Invariants
//! - Every function here is deterministic in its inputs; the evaluation
//!   day is always an explicit parameter, never read from a clock.
//! - Inputs are borrowed immutably and never modified.

pub mod dashboard;
pub mod enrich;
pub mod lookup;
pub mod reward;
pub mod streak;
pub mod xp;
