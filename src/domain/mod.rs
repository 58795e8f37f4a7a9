//! Shared data model layer plus the pure balance-and-split computations.
//!
//! ## Files
//! - `models.rs` — API records, share state machine, local state/config,
//!   report/output structs.
//! - `split.rs` — equal-split share computation for new bills.
//! - `balance.rs` — owed / owed-to-me / net aggregation.
//! - `session.rs` — active-household resolution and routing.
//!
//! ## Rule of thumb
//! Domain code should be data-only and pure: no filesystem/network side
//! effects. Collaborator calls live in `api.rs`, orchestration in
//! `services/*`.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs and the wire schema of
//! the bill service. Keep schema-impacting changes explicit.

pub mod balance;
pub mod models;
pub mod session;
pub mod split;
