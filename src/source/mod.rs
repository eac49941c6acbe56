// src/source/mod.rs
//! Data acquisition collaborators.
//!
//! A `SeasonSource` hands back the raw roster and stat tables for one season.
//! Sources only read and shape rows: cell coercion happens here (unparseable
//! numbers → 0, missing columns → defaults), joining and metrics do not.
//!
//! - `sample`: fixed placeholder rows, same for every season.
//! - `csv_dir`: `<dir>/<season id>/roster.csv` + `stats.csv` (or `.tsv`).

use std::error::Error;

use crate::season::Season;
use crate::stats::{ Position, RosterEntry, StatEntry };
use crate::stats::numeric::{ coerce_count, coerce_optional };
use crate::table::Column;

pub mod sample;
pub mod csv_dir;

pub use sample::SampleSource;
pub use csv_dir::CsvDirSource;

pub trait SeasonSource {
    /// Short name for logs and status lines.
    fn describe(&self) -> String;

    fn roster(&self, season: &Season) -> Result<Vec<RosterEntry>, Box<dyn Error>>;

    fn stats(&self, season: &Season) -> Result<Vec<StatEntry>, Box<dyn Error>>;

    /// Changes whenever the underlying data for `season` changes.
    /// Part of the cache key.
    fn version(&self, season: &Season) -> u64;
}

/// Column lookup over one header row.
struct Cols<'a> {
    headers: &'a [String],
}

impl<'a> Cols<'a> {
    fn new(headers: &'a [String]) -> Self { Self { headers } }

    fn get<'r>(&self, row: &'r [String], col: Column) -> Option<&'r str> {
        col.find_in(self.headers)
            .and_then(|ix| row.get(ix))
            .map(|s| s.as_str())
    }

    fn text(&self, row: &[String], col: Column) -> String {
        self.get(row, col).map(|s| s!(s.trim())).unwrap_or_default()
    }

    fn count(&self, row: &[String], col: Column) -> u32 {
        self.get(row, col).map(coerce_count).unwrap_or(0)
    }

    fn optional(&self, row: &[String], col: Column) -> Option<f64> {
        self.get(row, col).and_then(coerce_optional)
    }
}

/// Shape a roster table. Needs a name column; every other column may be absent.
pub fn roster_from_table(headers: &[String], rows: &[Vec<String>]) -> Result<Vec<RosterEntry>, Box<dyn Error>> {
    if Column::Name.find_in(headers).is_none() {
        return Err("roster table has no name column".into());
    }
    let cols = Cols::new(headers);
    Ok(rows
        .iter()
        .map(|r| RosterEntry {
            name: cols.text(r, Column::Name),
            team: cols.text(r, Column::Team),
            position: Position::parse(&cols.text(r, Column::Position)),
            height_cm: cols.optional(r, Column::HeightCm),
            weight_kg: cols.optional(r, Column::WeightKg),
            reception_success_pct: cols.optional(r, Column::ReceptionSuccessPct),
        })
        .collect())
}

/// Shape a stat table. Needs a name column; missing counters read as 0.
pub fn stats_from_table(headers: &[String], rows: &[Vec<String>]) -> Result<Vec<StatEntry>, Box<dyn Error>> {
    if Column::Name.find_in(headers).is_none() {
        return Err("stats table has no name column".into());
    }
    let cols = Cols::new(headers);
    Ok(rows
        .iter()
        .map(|r| StatEntry {
            name: cols.text(r, Column::Name),
            sets_played: cols.count(r, Column::SetsPlayed),
            attack_points: cols.count(r, Column::AttackPoints),
            attack_errors: cols.count(r, Column::AttackErrors),
            attack_attempts: cols.count(r, Column::AttackAttempts),
            block_points: cols.count(r, Column::BlockPoints),
            service_points: cols.count(r, Column::ServicePoints),
            service_errors: cols.count(r, Column::ServiceErrors),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_headers_and_garbage_cells() {
        let headers = row!["姓名", "上場局數", "攻擊得分", "攻擊失誤", "攻擊次數"];
        let rows = vec![row!["李X志", "35", "150", "--", "400"]];
        let stats = stats_from_table(&headers, &rows).unwrap();
        assert_eq!(stats[0].name, "李X志");
        assert_eq!(stats[0].sets_played, 35);
        assert_eq!(stats[0].attack_errors, 0);
        // absent columns default to zero
        assert_eq!(stats[0].block_points, 0);
    }

    #[test]
    fn short_rows_and_blank_optionals() {
        let headers = row!["name", "team", "position", "height_cm", "weight_kg", "reception_success_pct"];
        let rows = vec![row!["A", "Taipower", "Libero", "178", ""], row!["B"]];
        let roster = roster_from_table(&headers, &rows).unwrap();
        assert_eq!(roster[0].position, Position::Libero);
        assert_eq!(roster[0].height_cm, Some(178.0));
        assert_eq!(roster[0].weight_kg, None);
        assert_eq!(roster[0].reception_success_pct, None);
        assert_eq!(roster[1].team, "");
        assert_eq!(roster[1].position, Position::Unspecified);
    }

    #[test]
    fn name_column_is_required() {
        let headers = row!["team"];
        assert!(roster_from_table(&headers, &[]).is_err());
        assert!(stats_from_table(&headers, &[]).is_err());
    }
}
