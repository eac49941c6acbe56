// tests/export.rs
//
// ExportOptions path/extension logic and the written file.
use std::fs;
use std::path::PathBuf;

use vleague_stats::config::options::{ ExportFormat, ExportOptions };
use vleague_stats::export::{ to_export_text, write_export };
use vleague_stats::loader::fetch_season;
use vleague_stats::season::Season;
use vleague_stats::source::SampleSource;
use vleague_stats::stats::RoleRules;
use vleague_stats::table::{ Column, SortOrder, TableData, ALL_COLUMNS };

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("vleague_export_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample_table() -> TableData {
    let t = fetch_season(&SampleSource, &Season::default(), None).unwrap();
    TableData::build(&t.records, &RoleRules::canonical(), &ALL_COLUMNS, Column::NetPointsPerSet, SortOrder::Descending)
}

#[test]
fn default_path_follows_season_and_format() {
    let season = Season::find("19").unwrap();
    let mut opts = ExportOptions::default();
    opts.set_default_for_season(&season);
    assert_eq!(opts.out_path(), PathBuf::from("out").join("players_19.csv"));
    assert!(opts.is_default_for(&season));
    assert!(!opts.is_default_for(&Season::default()));

    opts.format = ExportFormat::Tsv;
    assert_eq!(opts.out_path(), PathBuf::from("out").join("players_19.tsv"));
}

#[test]
fn typed_extension_survives_format_change() {
    let mut opts = ExportOptions::default();
    opts.set_path("reports/men.txt");
    opts.format = ExportFormat::Tsv;
    assert_eq!(opts.out_path(), PathBuf::from("reports").join("men.txt"));

    // .csv/.tsv follow the toggle instead
    opts.set_path("reports/men.csv");
    assert_eq!(opts.out_path(), PathBuf::from("reports").join("men.tsv"));
}

#[test]
fn writes_ranked_csv_with_field_headers() {
    let dir = tmp_dir("csv");
    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("nested").join("ranking.csv").to_str().unwrap());

    let table = sample_table();
    let path = write_export(&opts, &table).unwrap();
    assert!(path.ends_with("ranking.csv"));

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("name,team,position,"));
    assert!(lines[0].ends_with(",role"));
    assert!(lines[1].starts_with("陳X杰,長力,"));
    assert!(lines[3].starts_with("高X林,"));
    assert!(lines[3].contains("Elite blocking anchor"));
}

#[test]
fn tsv_without_headers() {
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.include_headers = false;

    let text = to_export_text(&opts, &sample_table());
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().all(|l| l.split('\t').count() == ALL_COLUMNS.len()));
}

#[test]
fn exported_headers_read_back_as_columns() {
    let table = sample_table();
    for (name, col) in table.field_names().iter().zip(&table.columns) {
        assert!(col.matches_header(name));
        assert_eq!(col.find_in(&table.field_names()), Some(table.columns.iter().position(|c| c == col).unwrap()));
    }
}
