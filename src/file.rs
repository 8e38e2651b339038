// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::write_table;
use crate::error::{Error, Result};
use crate::selection::SelectedCollection;

/// Write `rows` to the path implied by `export` (see [`ExportOptions::out_path`]).
/// Returns the final path written to. Refuses an empty row set.
pub fn export_rows<R: AsRef<[String]>>(
    export: &ExportOptions,
    stem: &str,
    headers: Option<&[String]>,
    rows: &[R],
) -> Result<PathBuf> {
    if rows.is_empty() {
        return Err(Error::NothingToExport);
    }
    let path = export.out_path(stem);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let headers = if export.include_headers { headers } else { None };
    let file = File::create(&path).map_err(|e| Error::file(&path, e))?;
    let mut out = BufWriter::new(file);
    write_table(&mut out, headers, rows, export.format.delim())
        .and_then(|_| out.flush())
        .map_err(|e| Error::file(&path, e))?;

    logf!("Export: {} rows -> {}", rows.len(), path.display());
    Ok(path)
}

/// Export the running selection.
pub fn export_selected(export: &ExportOptions, selected: &SelectedCollection) -> Result<PathBuf> {
    let rows: Vec<&[String]> = selected.rows().collect();
    export_rows(export, "selected", selected.headers(), &rows)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::file(dir, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_directory_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let f = dir.path().join("plain");
        fs::write(&f, "x").unwrap();
        assert!(matches!(ensure_directory(&f), Err(Error::NotADirectory(_))));
        ensure_directory(&dir.path().join("a/b")).unwrap();
        assert!(dir.path().join("a/b").is_dir());
    }

    #[test]
    fn empty_export_is_refused() {
        let rows: Vec<Vec<String>> = Vec::new();
        let err = export_rows(&ExportOptions::default(), "x", None, &rows).unwrap_err();
        assert!(matches!(err, Error::NothingToExport));
    }
}
