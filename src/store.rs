// src/store.rs
//
// Canonical tables searched by the session.
//
// The dashboards query a relational store; here each table is a CSV export
// of that store, loaded whole. `RecordSource` is the seam a database-backed
// source would plug into.

use std::fs;
use std::path::Path;

use crate::csv::{self, parse_rows, split_header};
use crate::data::Row;
use crate::error::{Error, Result};
use crate::search::SearchFilters;

/// Headers + rows, as read from or written to disk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Row>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.as_ref().map_or(0, Vec::len) }
}

/// Anything the session can search.
pub trait RecordSource {
    fn name(&self) -> &str;
    fn headers(&self) -> &[String];
    fn rows(&self) -> &[Row];

    /// Rows matching `filters`, in table order.
    fn search(&self, filters: &SearchFilters) -> Result<Vec<Row>> {
        let compiled = filters.compile(self.name(), self.headers())?;
        Ok(self
            .rows()
            .iter()
            .filter(|r| compiled.matches(r))
            .cloned()
            .collect())
    }

    /// Distinct non-empty values of `column`, sorted.
    fn distinct(&self, column: &str) -> Result<Vec<String>> {
        let ci = self
            .headers()
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| Error::unknown_column(self.name(), column))?;
        let mut values: Vec<String> = self
            .rows()
            .iter()
            .filter_map(|r| r.get(ci))
            .filter(|v| !v.trim().is_empty())
            .cloned()
            .collect();
        values.sort_unstable();
        values.dedup();
        Ok(values)
    }
}

/// An in-memory table with a mandatory header row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    name: String,
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(name: &str, headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { name: s!(name), headers, rows }
    }

    pub fn from_dataset(name: &str, ds: DataSet) -> Result<Self> {
        let headers = ds.headers.ok_or_else(|| Error::MissingHeaders(s!(name)))?;
        Ok(Self::new(name, headers, ds.rows))
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

impl RecordSource for Table {
    fn name(&self) -> &str { &self.name }
    fn headers(&self) -> &[String] { &self.headers }
    fn rows(&self) -> &[Row] { &self.rows }
}

/// Load a delimited file whose first row is the header.
pub fn load_table(path: &Path, name: &str, sep: char) -> Result<Table> {
    let text = fs::read_to_string(path).map_err(|e| Error::file(path, e))?;
    let (headers, rows) = split_header(parse_rows(&text, sep));
    let ds = DataSet { headers, rows };
    logf!(
        "Store: loaded {} from {} (rows={}, headers={})",
        name,
        path.display(),
        ds.row_count(),
        ds.header_count()
    );
    Table::from_dataset(name, ds)
}

/// Write a table (header row first). Parent directories are created.
pub fn save_table(path: &Path, table: &Table, sep: char) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            crate::file::ensure_directory(parent)?;
        }
    }
    let text = csv::to_export_string(Some(table.headers()), table.rows(), true, sep);
    fs::write(path, text).map_err(|e| Error::file(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::new(
            "newtable",
            vec![s!("Agency"), s!("Services Descrption")],
            vec![
                vec![s!("DOT"), s!("Snow removal")],
                vec![s!(""), s!("Unassigned")],
                vec![s!("DOE"), s!("Cloud hosting")],
                vec![s!("DOT"), s!("Road salt")],
            ],
        )
    }

    #[test]
    fn distinct_skips_blanks_and_sorts() {
        assert_eq!(table().distinct("Agency").unwrap(), vec!["DOE", "DOT"]);
    }

    #[test]
    fn distinct_unknown_column() {
        let err = table().distinct("Borough").unwrap_err();
        assert!(matches!(err, Error::UnknownColumn { .. }));
    }

    #[test]
    fn headerless_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("empty.csv");
        fs::write(&p, "").unwrap();
        assert!(matches!(load_table(&p, "empty", ','), Err(Error::MissingHeaders(_))));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("nested/newtable.csv");
        save_table(&p, &table(), ',').unwrap();
        assert_eq!(load_table(&p, "newtable", ',').unwrap(), table());
    }
}
