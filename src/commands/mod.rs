//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `household.rs` — household list/members/create/join/switch tree.
//! - `runtime.rs` — status/balance/bills commands.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*` and `domain/*`.
//! - Keep behavior and output schema stable.

pub mod household;
pub mod runtime;

pub use household::handle_household_commands;
pub use runtime::handle_runtime_commands;
