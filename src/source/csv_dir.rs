// src/source/csv_dir.rs
//
// Season tables on disk:
//   <root>/<season id>/roster.csv   (or roster.tsv)
//   <root>/<season id>/stats.csv    (or stats.tsv)
// First row is the header row; see `table::Column` for accepted titles.

use std::collections::hash_map::DefaultHasher;
use std::error::Error;
use std::fs;
use std::hash::{ Hash, Hasher };
use std::path::{ Path, PathBuf };
use std::time::SystemTime;

use crate::config::consts::{ ROSTER_STEM, STATS_STEM };
use crate::csv::{ parse_rows, sep_for_path, split_headers };
use crate::season::Season;
use crate::stats::{ RosterEntry, StatEntry };
use super::{ roster_from_table, stats_from_table, SeasonSource };

#[derive(Clone, Debug)]
pub struct CsvDirSource {
    root: PathBuf,
}

impl CsvDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path { &self.root }

    pub fn season_dir(&self, season: &Season) -> PathBuf {
        self.root.join(&season.id)
    }

    /// `<stem>.csv`, else `<stem>.tsv`, else the `.csv` path (so the error names it).
    fn table_path(&self, season: &Season, stem: &str) -> PathBuf {
        let dir = self.season_dir(season);
        let csv = dir.join(join!(stem, ".csv"));
        if csv.exists() { return csv; }
        let tsv = dir.join(join!(stem, ".tsv"));
        if tsv.exists() { tsv } else { csv }
    }

    fn read_table(&self, path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>), Box<dyn Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("{}: {e}", path.display()))?;
        let (headers, rows) = split_headers(parse_rows(&text, sep_for_path(path)));
        let headers = headers.ok_or_else(|| format!("{}: empty file", path.display()))?;
        logd!("CSV: {} → {} rows, {} columns", path.display(), rows.len(), headers.len());
        Ok((headers, rows))
    }
}

fn mtime(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).ok().and_then(|m| m.modified().ok())
}

impl SeasonSource for CsvDirSource {
    fn describe(&self) -> String {
        format!("CSV files in {}", self.root.display())
    }

    fn roster(&self, season: &Season) -> Result<Vec<RosterEntry>, Box<dyn Error>> {
        let path = self.table_path(season, ROSTER_STEM);
        let (headers, rows) = self.read_table(&path)?;
        roster_from_table(&headers, &rows).map_err(|e| format!("{}: {e}", path.display()).into())
    }

    fn stats(&self, season: &Season) -> Result<Vec<StatEntry>, Box<dyn Error>> {
        let path = self.table_path(season, STATS_STEM);
        let (headers, rows) = self.read_table(&path)?;
        stats_from_table(&headers, &rows).map_err(|e| format!("{}: {e}", path.display()).into())
    }

    /// Hash of both files' paths, sizes and modification times.
    fn version(&self, season: &Season) -> u64 {
        let mut h = DefaultHasher::new();
        for stem in [ROSTER_STEM, STATS_STEM] {
            let p = self.table_path(season, stem);
            p.hash(&mut h);
            fs::metadata(&p).map(|m| m.len()).ok().hash(&mut h);
            mtime(&p).hash(&mut h);
        }
        h.finish()
    }
}
