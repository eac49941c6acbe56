// tests/csv_source.rs
use std::fs;
use std::path::PathBuf;

use vleague_stats::cache::SeasonCache;
use vleague_stats::loader::{ load_season, LoadError };
use vleague_stats::season::Season;
use vleague_stats::source::{ CsvDirSource, SeasonSource };
use vleague_stats::stats::Position;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("vleague_csv_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn write_season(root: &PathBuf, id: &str, roster: &str, stats: &str) {
    let dir = root.join(id);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("roster.csv"), roster).unwrap();
    fs::write(dir.join("stats.tsv"), stats).unwrap();
}

const ROSTER: &str = "\u{feff}姓名,隊伍,位置,身高(cm),體重(kg),接發成功率\n\
李X志,台電,主攻,185,75,60%\n\
王X明,台電,自由球員,175,68,70.5\n\
\"張,X\",長力,副攻,abc,,\n";

const STATS: &str = "姓名\t上場局數\t攻擊得分\t攻擊失誤\t攻擊次數\t攔網得分\t發球得分\t發球失誤\n\
李X志\t35\t150\t10\t400\t15\t5\t8\n\
王X明\t30\t0\t0\t0\t0\t0\t1\n\
\"張,X\"\t20\t--\t2\t40\t25\t1\t3\n";

#[test]
fn reads_league_headers_and_coerces_cells() {
    let root = tmp_dir("headers");
    let season = Season::default();
    write_season(&root, &season.id, ROSTER, STATS);

    let src = CsvDirSource::new(&root);
    let roster = src.roster(&season).unwrap();
    assert_eq!(roster.len(), 3);
    assert_eq!(roster[0].name, "李X志");
    assert_eq!(roster[0].position, Position::OutsideHitter);
    assert_eq!(roster[0].reception_success_pct, Some(60.0));
    assert_eq!(roster[1].position, Position::Libero);
    assert_eq!(roster[2].name, "張,X");
    assert_eq!(roster[2].height_cm, Some(0.0));
    assert_eq!(roster[2].weight_kg, None);

    let stats = src.stats(&season).unwrap();
    assert_eq!(stats[2].attack_points, 0);
    assert_eq!(stats[2].block_points, 25);
}

#[test]
fn loads_through_the_cache_and_sees_file_changes() {
    let root = tmp_dir("reload");
    let season = Season::default();
    write_season(&root, &season.id, ROSTER, STATS);

    let src = CsvDirSource::new(&root);
    let mut cache = SeasonCache::default();
    let t = load_season(&src, &season, &mut cache, None).unwrap();
    assert_eq!(t.records.len(), 3);
    assert_eq!(t.find("李X志").unwrap().net_points_per_set, 4.34);

    let v1 = src.version(&season);
    let dir = root.join(&season.id);
    fs::write(dir.join("stats.tsv"), "姓名\t上場局數\n李X志\t10\n").unwrap();
    assert_ne!(src.version(&season), v1);

    let t = load_season(&src, &season, &mut cache, None).unwrap();
    assert_eq!(t.records.len(), 1);
    assert_eq!(t.unmatched.len(), 2);
}

#[test]
fn missing_files_and_name_column_are_errors() {
    let root = tmp_dir("missing");
    let season = Season::default();
    let src = CsvDirSource::new(&root);
    let mut cache = SeasonCache::default();

    let err = load_season(&src, &season, &mut cache, None).unwrap_err();
    assert!(matches!(err, LoadError::Source { .. }));

    write_season(&root, &season.id, "team\nTaipower\n", STATS);
    assert!(src.roster(&season).is_err());
}

#[test]
fn header_only_stats_is_no_data() {
    let root = tmp_dir("header_only");
    let season = Season::default();
    write_season(&root, &season.id, ROSTER, "姓名\t上場局數\n");

    let mut cache = SeasonCache::default();
    let err = load_season(&CsvDirSource::new(&root), &season, &mut cache, None).unwrap_err();
    assert!(matches!(err, LoadError::NoData { .. }));
}
