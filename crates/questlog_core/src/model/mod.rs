//! Domain model for records fetched from the remote store.
//!
//! # Responsibility
//! - Define the record envelope and per-entity field structs.
//! - Provide calendar-day arithmetic for streak and rollup logic.
//! - Define typed payloads for the outgoing command boundary.
//!
//! # Invariants
//! - Every entity field is independently optional; absence means "not set".
//! - Records are read-only snapshots; the core never mutates them in place.

pub mod calendar;
pub mod patch;
pub mod record;
