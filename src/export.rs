// src/export.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::table::TableData;

/// Text for Copy/Export. Header row uses field names so the file loads
/// back through the same column contract.
pub fn to_export_text(export: &ExportOptions, table: &TableData) -> String {
    to_export_string(
        &table.field_names(),
        &table.rows,
        export.include_headers,
        export.format.delim(),
    )
}

/// Write the table to `export.out_path()`. Returns the path written.
pub fn write_export(
    export: &ExportOptions,
    table: &TableData,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, to_export_text(export, table))?;
    logf!("Export: {} rows → {}", table.nrows(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
