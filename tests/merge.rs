// tests/merge.rs
use vleague_stats::stats::{ merge, merge_report, MergeError, RosterEntry, Side, StatEntry };

fn roster(names: &[&str]) -> Vec<RosterEntry> {
    names.iter().map(|n| RosterEntry { name: n.to_string(), ..Default::default() }).collect()
}

fn stats(names: &[&str]) -> Vec<StatEntry> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| StatEntry { name: n.to_string(), sets_played: i as u32 + 1, ..Default::default() })
        .collect()
}

#[test]
fn inner_join_in_roster_order() {
    let rows = merge(&roster(&["C", "A", "B"]), &stats(&["A", "B", "C"])).unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.name()).collect();
    assert_eq!(names, ["C", "A", "B"]);
    // C is third in the stats table
    assert_eq!(rows[0].stats.sets_played, 3);
}

#[test]
fn drops_one_sided_names() {
    let out = merge_report(&roster(&["A", "OnlyRoster"]), &stats(&["OnlyStats", "A"])).unwrap();
    assert_eq!(out.rows.len(), 1);
    assert_eq!(out.rows[0].name(), "A");
    let left: Vec<(&str, Side)> = out.unmatched.iter().map(|u| (u.name.as_str(), u.side)).collect();
    assert_eq!(left, [("OnlyRoster", Side::Roster), ("OnlyStats", Side::Stats)]);
}

#[test]
fn empty_side_gives_empty_result() {
    assert!(merge(&[], &stats(&["A"])).unwrap().is_empty());
    assert!(merge(&roster(&["A"]), &[]).unwrap().is_empty());
    assert!(merge(&[], &[]).unwrap().is_empty());
}

#[test]
fn names_match_exactly() {
    let rows = merge(&roster(&["李X志", "lee"]), &stats(&["李X志 ", "Lee"])).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn duplicates_are_rejected() {
    let err = merge(&roster(&["A", "A"]), &stats(&["A"])).unwrap_err();
    assert_eq!(err, MergeError::DuplicateName { name: "A".into(), side: Side::Roster });

    let err = merge(&roster(&["A"]), &stats(&["B", "B"])).unwrap_err();
    assert_eq!(err, MergeError::DuplicateName { name: "B".into(), side: Side::Stats });
    assert!(err.to_string().contains("B"));
}

#[test]
fn blank_names_never_join() {
    let rows = merge(&roster(&["", "A", "  "]), &stats(&["", "A", "  "])).unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn permuting_rows_permutes_output() {
    use vleague_stats::stats::compute_efficiency;

    let base = merge(&roster(&["A", "B", "C"]), &stats(&["C", "A", "B"])).unwrap();
    let base = compute_efficiency(&base);

    // Roster order drives output order.
    let perm = [2, 0, 1];
    let permuted = merge(&roster(&["C", "A", "B"]), &stats(&["C", "A", "B"])).unwrap();
    let permuted = compute_efficiency(&permuted);
    for (i, &p) in perm.iter().enumerate() {
        assert_eq!(permuted[i], base[p]);
    }

    // Stats order changes nothing.
    let mut shuffled = stats(&["C", "A", "B"]);
    shuffled.reverse();
    let same = compute_efficiency(&merge(&roster(&["A", "B", "C"]), &shuffled).unwrap());
    assert_eq!(same, base);
}

#[test]
fn roster_only_player_is_excluded() {
    let rows = merge(&roster(&["A", "Ghost"]), &stats(&["A"])).unwrap();
    assert!(rows.iter().all(|r| r.name() != "Ghost"));
    assert_eq!(rows.len(), 1);
}
