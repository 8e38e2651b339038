// src/data.rs
//
// Search output types.
//
// - ResultSet: the immutable output of one search, tagged with a session-unique
//              ResultSetId. Replaced wholesale by the next search.
// - Record:    borrowed, named-field view of one ResultSet row.
//
// Canonical table storage (the thing searches run against) lives in store.rs.

use std::fmt;

/// One table row: cells in header order.
pub type Row = Vec<String>;

/// Identifies one search output within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResultSetId(u64);

impl ResultSetId {
    pub const fn new(raw: u64) -> Self { Self(raw) }
    pub const fn get(self) -> u64 { self.0 }

    /// The id allocated after this one.
    pub const fn next(self) -> Self { Self(self.0 + 1) }
}

impl fmt::Display for ResultSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rs#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultSet {
    id: ResultSetId,
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl ResultSet {
    pub fn new(id: ResultSetId, headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { id, headers, rows }
    }

    pub fn empty(id: ResultSetId, headers: Vec<String>) -> Self {
        Self { id, headers, rows: Vec::new() }
    }

    #[inline] pub fn id(&self) -> ResultSetId { self.id }
    #[inline] pub fn headers(&self) -> &[String] { &self.headers }
    #[inline] pub fn rows(&self) -> &[Row] { &self.rows }
    #[inline] pub fn len(&self) -> usize { self.rows.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Row at `position`, if the position exists in this result set.
    pub fn get(&self, position: usize) -> Option<&Row> {
        self.rows.get(position)
    }

    /// Index of a named column.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn field(&self, position: usize, column: &str) -> Option<&str> {
        let ci = self.column(column)?;
        self.rows.get(position)?.get(ci).map(String::as_str)
    }

    pub fn record(&self, position: usize) -> Option<Record<'_>> {
        self.rows.get(position).map(|row| Record { headers: &self.headers, row })
    }
}

/// Named-field view of a single row.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    headers: &'a [String],
    row: &'a [String],
}

impl<'a> Record<'a> {
    pub fn new(headers: &'a [String], row: &'a [String]) -> Self {
        Self { headers, row }
    }

    pub fn get(&self, name: &str) -> Option<&'a str> {
        let ci = self.headers.iter().position(|h| h == name)?;
        self.row.get(ci).map(String::as_str)
    }

    pub fn cells(&self) -> &'a [String] { self.row }

    /// (header, value) pairs in column order. Missing trailing cells read as "".
    pub fn fields(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.as_str(), self.row.get(i).map(String::as_str).unwrap_or("")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultSet {
        ResultSet::new(
            ResultSetId::new(7),
            vec![s!("Agency"), s!("Services Descrption")],
            vec![
                vec![s!("DOT"), s!("Snow removal")],
                vec![s!("DOE"), s!("Cloud hosting")],
            ],
        )
    }

    #[test]
    fn field_lookup_by_name() {
        let rs = sample();
        assert_eq!(rs.field(1, "Agency"), Some("DOE"));
        assert_eq!(rs.field(2, "Agency"), None);
        assert_eq!(rs.field(0, "Nope"), None);
    }

    #[test]
    fn record_fields_pad_short_rows() {
        let rs = ResultSet::new(ResultSetId::new(1), vec![s!("A"), s!("B")], vec![vec![s!("x")]]);
        let rec = rs.record(0).unwrap();
        let fields: Vec<_> = rec.fields().collect();
        assert_eq!(fields, vec![("A", "x"), ("B", "")]);
        assert_eq!(rec.get("B"), None);
    }

    #[test]
    fn ids_advance() {
        let id = ResultSetId::new(3);
        assert_eq!(id.next().get(), 4);
        assert_eq!(id.to_string(), "rs#3");
    }
}
