// src/stats/mod.rs
//! Season statistics core: merge roster with counters, derive efficiency
//! metrics, classify roles. Everything here is pure and synchronous; the
//! sources, cache and front ends live elsewhere.
//!
//! ```text
//! RosterEntry + StatEntry ─ merge ─▶ MergedRow ─ compute_efficiency ─▶ PlayerRecord ─ classify_role ─▶ RoleLabel
//! ```

pub mod types;
pub mod numeric;
pub mod merge;
pub mod efficiency;
pub mod role;

pub use types::{MergedRow, PlayerRecord, Position, RosterEntry, StatEntry};
pub use merge::{merge, merge_report, MergeError, MergeOutcome, Side, Unmatched};
pub use efficiency::compute_efficiency;
pub use role::{classify_role, RoleLabel, RoleRule, RoleRules};
