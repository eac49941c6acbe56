// src/stats/merge.rs
//
// Inner join of roster entries and stat entries on exact player name.
// Output follows roster order. Names seen on one side only are reported,
// not treated as failures.

use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt;

use super::types::{MergedRow, RosterEntry, StatEntry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Roster,
    Stats,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Roster => f.write_str("roster"),
            Side::Stats => f.write_str("stats"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MergeError {
    /// The same name appears twice in one input; the join key would be ambiguous.
    DuplicateName { name: String, side: Side },
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeError::DuplicateName { name, side } => {
                write!(f, "duplicate player name '{name}' in {side} table")
            }
        }
    }
}

impl Error for MergeError {}

/// A name present on one side only (the `MissingJoinKey` condition).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unmatched {
    pub name: String,
    pub side: Side,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MergeOutcome {
    pub rows: Vec<MergedRow>,
    /// Roster-only names first (roster order), then stats-only names (stats order).
    pub unmatched: Vec<Unmatched>,
}

/// Join `roster` with `stats`. Empty input on either side → empty output.
pub fn merge(roster: &[RosterEntry], stats: &[StatEntry]) -> Result<Vec<MergedRow>, MergeError> {
    merge_report(roster, stats).map(|o| o.rows)
}

/// Same as `merge`, but also returns who was left out.
pub fn merge_report(roster: &[RosterEntry], stats: &[StatEntry]) -> Result<MergeOutcome, MergeError> {
    if roster.is_empty() || stats.is_empty() {
        return Ok(MergeOutcome::default());
    }

    // Blank names can never join; drop them before the duplicate check.
    let roster: Vec<&RosterEntry> = roster.iter().filter(|r| !r.name.trim().is_empty()).collect();

    let mut by_name: HashMap<&str, &StatEntry> = HashMap::with_capacity(stats.len());
    for s in stats.iter().filter(|s| !s.name.trim().is_empty()) {
        if by_name.insert(s.name.as_str(), s).is_some() {
            return Err(MergeError::DuplicateName { name: s.name.clone(), side: Side::Stats });
        }
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(roster.len());
    for r in &roster {
        if !seen.insert(r.name.as_str()) {
            return Err(MergeError::DuplicateName { name: r.name.clone(), side: Side::Roster });
        }
    }

    let mut out = MergeOutcome { rows: Vec::with_capacity(roster.len().min(by_name.len())), unmatched: Vec::new() };

    for r in roster {
        match by_name.get(r.name.as_str()) {
            Some(s) => out.rows.push(MergedRow { roster: r.clone(), stats: (*s).clone() }),
            None => out.unmatched.push(Unmatched { name: r.name.clone(), side: Side::Roster }),
        }
    }
    for s in stats.iter().filter(|s| !s.name.trim().is_empty()) {
        if !seen.contains(s.name.as_str()) {
            out.unmatched.push(Unmatched { name: s.name.clone(), side: Side::Stats });
        }
    }

    Ok(out)
}
