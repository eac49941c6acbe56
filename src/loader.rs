// src/loader.rs
//
// Orchestrates one season load:
//   1/3 roster  →  2/3 stats  →  3/3 merge + efficiency
// and keeps the result in a `SeasonCache`. Empty tables and failed steps are
// reported to the caller and never cached.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::cache::{ CacheKey, SeasonCache };
use crate::progress::Progress;
use crate::season::Season;
use crate::source::SeasonSource;
use crate::stats::{ self, MergeError, PlayerRecord, Side, Unmatched };

/// A computed season, ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct SeasonTable {
    pub season: Season,
    pub records: Vec<PlayerRecord>,
    /// Players that appeared in only one of the two tables.
    pub unmatched: Vec<Unmatched>,
    pub source: String,
}

impl SeasonTable {
    pub fn find(&self, name: &str) -> Option<&PlayerRecord> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name()).collect()
    }
}

#[derive(Debug)]
pub enum LoadError {
    /// A table came back empty; nothing to show for this season.
    NoData { season: String, table: Side },
    /// Source failed while reading a table.
    Source { table: Side, err: Box<dyn Error> },
    Merge(MergeError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NoData { season, table } => write!(f, "no {table} data for season {season}"),
            LoadError::Source { table, err } => write!(f, "could not read {table} table: {err}"),
            LoadError::Merge(e) => write!(f, "{e}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Source { err, .. } => Some(err.as_ref()),
            LoadError::Merge(e) => Some(e),
            LoadError::NoData { .. } => None,
        }
    }
}

impl From<MergeError> for LoadError {
    fn from(e: MergeError) -> Self { LoadError::Merge(e) }
}

const STEPS: usize = 3;

/// Fetch, merge and compute one season. No cache involved.
pub fn fetch_season(
    source: &dyn SeasonSource,
    season: &Season,
    mut progress: Option<&mut dyn Progress>,
) -> Result<SeasonTable, LoadError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(STEPS);
    }
    let result = fetch_steps(source, season, progress.as_deref_mut());
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    match &result {
        Ok(t) => logf!("Load: season {} → {} players ({} unmatched)", season.id, t.records.len(), t.unmatched.len()),
        Err(e) => loge!("Load: season {} failed: {e}", season.id),
    }
    result
}

fn fetch_steps<'p>(
    source: &dyn SeasonSource,
    season: &Season,
    mut progress: Option<&mut (dyn Progress + 'p)>,
) -> Result<SeasonTable, LoadError> {
    let mut say = |msg: String| {
        if let Some(p) = progress.as_deref_mut() { p.log(&msg); }
    };

    say(format!("Step 1/{STEPS}: reading {} roster from {}…", season.label, source.describe()));
    let roster = source
        .roster(season)
        .map_err(|err| LoadError::Source { table: Side::Roster, err })?;

    say(format!("Step 2/{STEPS}: reading {} stats…", season.label));
    let stat_rows = source
        .stats(season)
        .map_err(|err| LoadError::Source { table: Side::Stats, err })?;

    if roster.is_empty() {
        return Err(LoadError::NoData { season: season.id.clone(), table: Side::Roster });
    }
    if stat_rows.is_empty() {
        return Err(LoadError::NoData { season: season.id.clone(), table: Side::Stats });
    }

    say(format!("Step 3/{STEPS}: merging roster and stats…"));
    let outcome = stats::merge_report(&roster, &stat_rows)?;
    for u in &outcome.unmatched {
        logw!("Merge: '{}' only in {} table", u.name, u.side);
    }
    let records = stats::compute_efficiency(&outcome.rows);
    drop(say);

    if let Some(p) = progress.as_deref_mut() {
        p.step_done(STEPS, "merge");
    }

    Ok(SeasonTable {
        season: season.clone(),
        records,
        unmatched: outcome.unmatched,
        source: source.describe(),
    })
}

/// Cached load. A hit skips the source entirely; a miss fetches and, on
/// success, stores the result under (season id, source version).
pub fn load_season(
    source: &dyn SeasonSource,
    season: &Season,
    cache: &mut SeasonCache,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Arc<SeasonTable>, LoadError> {
    let key = CacheKey::new(&season.id, source.version(season));
    if let Some(hit) = cache.get(&key) {
        logd!("Cache: hit season {} (v{:x})", key.season_id, key.version);
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Loaded {} from cache", season.label));
        }
        return Ok(hit);
    }

    let table = Arc::new(fetch_season(source, season, progress)?);
    cache.insert(key, Arc::clone(&table));
    Ok(table)
}
