// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };

use super::consts::*;
use crate::season::Season;
use crate::table::{ Column, SortOrder };

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub load: LoadOptions,
    pub analysis: AnalysisOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// Built-in placeholder rows.
    Sample,
    /// `<dir>/<season id>/roster.csv` + `stats.csv`
    CsvDir(PathBuf),
}

impl SourceKind {
    pub fn describe(&self) -> String {
        match self {
            SourceKind::Sample => s!("sample data"),
            SourceKind::CsvDir(dir) => format!("CSV files in {}", dir.display()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    pub season: Season,
    pub source: SourceKind,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            season: Season::default(),
            source: SourceKind::Sample,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Insert the serving-threat branch into the role rules.
    pub serving_threat: bool,
    pub sort_by: Column,
    pub sort_order: SortOrder,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            serving_threat: false,
            sort_by: Column::NetPointsPerSet,
            sort_order: SortOrder::Descending,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
    pub fn parse(s: &str) -> Option<ExportFormat> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// Final file path. A user-typed extension wins; otherwise the format's.
    pub fn out_path(&self) -> PathBuf {
        let mut name = self.out_path.file_stem.clone();
        match &self.out_path.ext {
            Some(ext) => { name.push("."); name.push(ext); }
            None => { name.push("."); name.push(self.format.ext()); }
        }
        self.out_path.dir.join(name)
    }

    /// Parse text into dir + stem (+ explicit extension, if any).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        self.out_path.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().and_then(|e| {
            let e = e.to_string_lossy();
            // A typed ".csv"/".tsv" follows the format toggle instead of pinning it.
            if ExportFormat::parse(&e).is_some() { None } else { Some(OsString::from(e.as_ref())) }
        });
    }

    /// Default file name for a season export: `out/players_<season id>.<ext>`.
    pub fn set_default_for_season(&mut self, season: &Season) {
        self.out_path = OutputPath {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(join!(DEFAULT_FILE, "_", &season.id)),
            ext: None,
        };
    }

    pub fn is_default_for(&self, season: &Season) -> bool {
        let mut probe = self.clone();
        probe.set_default_for_season(season);
        probe.out_path == self.out_path
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,     // without extension
    ext: Option<OsString>,   // only when the user typed a non-format extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
