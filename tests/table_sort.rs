// tests/table_sort.rs
use vleague_stats::loader::fetch_season;
use vleague_stats::season::Season;
use vleague_stats::source::SampleSource;
use vleague_stats::stats::{ compute_efficiency, MergedRow, RoleRules, RosterEntry, StatEntry };
use vleague_stats::table::{ sorted_indices, Column, SortOrder, TableData, DISPLAY_COLUMNS };

fn names(t: &TableData) -> Vec<&str> {
    t.rows.iter().map(|r| r[0].as_str()).collect()
}

#[test]
fn default_view_ranks_by_net_per_set() {
    let t = fetch_season(&SampleSource, &Season::default(), None).unwrap();
    let rules = RoleRules::canonical();
    let view = TableData::build(&t.records, &rules, &DISPLAY_COLUMNS, Column::NetPointsPerSet, SortOrder::Descending);

    assert_eq!(names(&view), ["陳X杰", "李X志", "高X林"]);
    assert_eq!(view.record_ix, [1, 0, 2]);
    assert_eq!(view.ncols(), DISPLAY_COLUMNS.len());

    let net = DISPLAY_COLUMNS.iter().position(|c| *c == Column::NetPointsPerSet).unwrap();
    let cells: Vec<&str> = view.rows.iter().map(|r| r[net].as_str()).collect();
    assert_eq!(cells, ["5.15", "4.34", "3.37"]);

    let asc = TableData::build(&t.records, &rules, &DISPLAY_COLUMNS, Column::NetPointsPerSet, SortOrder::Ascending);
    assert_eq!(names(&asc), ["高X林", "李X志", "陳X杰"]);
}

#[test]
fn ties_keep_roster_order() {
    let rows: Vec<MergedRow> = ["c", "a", "b"]
        .iter()
        .map(|n| MergedRow {
            roster: RosterEntry { name: n.to_string(), ..Default::default() },
            stats: StatEntry { name: n.to_string(), sets_played: 4, ..Default::default() },
        })
        .collect();
    let recs = compute_efficiency(&rows);
    let rules = RoleRules::canonical();
    assert_eq!(sorted_indices(&recs, &rules, Column::TotalPoints, SortOrder::Descending), [0, 1, 2]);
    assert_eq!(sorted_indices(&recs, &rules, Column::Name, SortOrder::Ascending), [1, 2, 0]);
}

#[test]
fn missing_heights_sort_lowest() {
    let mk = |n: &str, h: Option<f64>| MergedRow {
        roster: RosterEntry { name: n.into(), height_cm: h, ..Default::default() },
        stats: StatEntry { name: n.into(), ..Default::default() },
    };
    let recs = compute_efficiency(&[mk("a", None), mk("b", Some(190.0)), mk("c", Some(180.0))]);
    let ix = sorted_indices(&recs, &RoleRules::canonical(), Column::HeightCm, SortOrder::Ascending);
    assert_eq!(ix, [0, 2, 1]);
}

#[test]
fn column_names_parse() {
    assert_eq!(Column::parse("net_points_per_set"), Some(Column::NetPointsPerSet));
    assert_eq!(Column::parse("攻擊得分"), Some(Column::AttackPoints));
    assert_eq!(Column::parse("shoe size"), None);
    assert_eq!(SortOrder::Descending.flip(), SortOrder::Ascending);
}

#[test]
fn aligned_text_has_header_and_rows() {
    let t = fetch_season(&SampleSource, &Season::default(), None).unwrap();
    let view = TableData::build(&t.records, &RoleRules::canonical(), &DISPLAY_COLUMNS, Column::Name, SortOrder::Ascending);
    let text = view.to_aligned_text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Name"));
}
