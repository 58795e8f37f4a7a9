//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `session.rs` — ordered refresh of groups + household-scoped data.
//! - `expenses.rs` — add-bill and mark-paid mutation flows.
//! - `households.rs` — create/join/switch household mutations.
//! - `storage.rs` — local state/config persistence + audit log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible; the split/balance/resolve math
//!   lives in `domain/*` and is only orchestrated here.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.
//! - Mutations return a report describing exactly what changed; callers
//!   refetch only the affected entities.

pub mod expenses;
pub mod households;
pub mod output;
pub mod session;
pub mod storage;
