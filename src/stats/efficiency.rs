// src/stats/efficiency.rs
//
// Derived per-player metrics. Total over its input: zero denominators and
// non-finite quotients resolve to 0, bad attribute values are coerced to 0.

use super::numeric::{non_negative, ratio_or_zero, round2};
use super::types::{MergedRow, PlayerRecord};

/// Enrich every merged row with the derived fields. Input is not modified.
pub fn compute_efficiency(rows: &[MergedRow]) -> Vec<PlayerRecord> {
    rows.iter().cloned().map(compute_one).collect()
}

/// Derived fields for a single row.
pub fn compute_one(mut row: MergedRow) -> PlayerRecord {
    sanitize_attributes(&mut row);

    let s = &row.stats;
    let attack_points = s.attack_points as i64;
    let attack_errors = s.attack_errors as i64;

    let attack_success_rate_pct = round2(
        ratio_or_zero((attack_points - attack_errors) as f64, s.attack_attempts as f64) * 100.0,
    );

    let total_points = s.attack_points as u64 + s.block_points as u64 + s.service_points as u64;
    let total_errors = s.attack_errors as u64 + s.service_errors as u64;
    let net_points = total_points as i64 - total_errors as i64;
    let net_points_per_set = round2(ratio_or_zero(net_points as f64, s.sets_played as f64));

    PlayerRecord::new(row, attack_success_rate_pct, total_points, total_errors, net_points, net_points_per_set)
}

fn sanitize_attributes(row: &mut MergedRow) {
    let r = &mut row.roster;
    r.height_cm = r.height_cm.map(non_negative);
    r.weight_kg = r.weight_kg.map(non_negative);
    r.reception_success_pct = r.reception_success_pct.map(non_negative);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::types::{RosterEntry, StatEntry};

    fn row(sets: u32, ap: u32, ae: u32, att: u32) -> MergedRow {
        MergedRow {
            roster: RosterEntry { name: s!("X"), ..Default::default() },
            stats: StatEntry {
                name: s!("X"),
                sets_played: sets,
                attack_points: ap,
                attack_errors: ae,
                attack_attempts: att,
                ..Default::default()
            },
        }
    }

    #[test]
    fn more_errors_than_points_goes_negative() {
        let rec = compute_one(row(4, 2, 10, 8));
        assert_eq!(rec.attack_success_rate_pct, -100.0);
        assert_eq!(rec.net_points, -8);
        assert_eq!(rec.net_points_per_set, -2.0);
    }

    #[test]
    fn nan_attributes_are_zeroed() {
        let mut r = row(1, 0, 0, 0);
        r.roster.height_cm = Some(f64::NAN);
        r.roster.weight_kg = Some(-3.0);
        let rec = compute_one(r);
        assert_eq!(rec.height_cm(), Some(0.0));
        assert_eq!(rec.weight_kg(), Some(0.0));
        assert_eq!(rec.reception_success_pct(), None);
    }
}
