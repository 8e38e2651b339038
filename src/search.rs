// src/search.rs
//! Search filters for the procurement table.
//!
//! A [`SearchFilters`] value is what the filter panel (or the CLI) produces:
//! an optional keyword matched against the services description, plus
//! exact-match values for a fixed set of columns. It can be evaluated
//! in memory against a header row ([`SearchFilters::compile`]) or rendered as
//! a parameterized SQL statement for an external engine ([`search_query`]).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::consts::*;
use crate::error::{Error, Result};

/// Columns offered as drop-down filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterField {
    Agency,
    ProcurementMethod,
    FiscalQuarter,
    JobTitles,
    HeadCount,
}

impl FilterField {
    pub const ALL: [FilterField; 5] = [
        FilterField::Agency,
        FilterField::ProcurementMethod,
        FilterField::FiscalQuarter,
        FilterField::JobTitles,
        FilterField::HeadCount,
    ];

    /// Column name in the procurement table. Doubles as the UI label.
    pub fn column(self) -> &'static str {
        match self {
            FilterField::Agency => AGENCY_COLUMN,
            FilterField::ProcurementMethod => METHOD_COLUMN,
            FilterField::FiscalQuarter => QUARTER_COLUMN,
            FilterField::JobTitles => JOB_TITLES_COLUMN,
            FilterField::HeadCount => HEADCOUNT_COLUMN,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub keyword: String,
    fields: BTreeMap<FilterField, String>,
}

impl SearchFilters {
    pub fn new() -> Self { Self::default() }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = s!(keyword);
        self
    }

    pub fn with(mut self, field: FilterField, value: &str) -> Self {
        self.set(field, value);
        self
    }

    /// Set a field filter. An empty value clears it (the "" choice).
    pub fn set(&mut self, field: FilterField, value: &str) {
        if value.is_empty() {
            self.fields.remove(&field);
        } else {
            self.fields.insert(field, s!(value));
        }
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.keyword.clear();
        self.fields.clear();
    }

    /// Active field filters in a stable order.
    pub fn active(&self) -> impl Iterator<Item = (FilterField, &str)> + '_ {
        self.fields.iter().map(|(f, v)| (*f, v.as_str()))
    }

    fn keyword_trimmed(&self) -> Option<&str> {
        let kw = self.keyword.trim();
        (!kw.is_empty()).then_some(kw)
    }

    /// No keyword and no field filter. Such a search is refused.
    pub fn is_empty(&self) -> bool {
        self.keyword_trimmed().is_none() && self.fields.is_empty()
    }

    /// Resolve column positions once for repeated row checks.
    pub fn compile(&self, table: &str, headers: &[String]) -> Result<CompiledFilters> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| Error::unknown_column(table, column))
        };

        let keyword = match self.keyword_trimmed() {
            Some(kw) => Some((find(SERVICES_COLUMN)?, kw.to_lowercase())),
            None => None,
        };
        let equals = self
            .active()
            .map(|(field, value)| Ok((find(field.column())?, s!(value))))
            .collect::<Result<Vec<_>>>()?;

        Ok(CompiledFilters { keyword, equals })
    }
}

/// Filters bound to column positions.
#[derive(Clone, Debug)]
pub struct CompiledFilters {
    keyword: Option<(usize, String)>,
    equals: Vec<(usize, String)>,
}

impl CompiledFilters {
    /// Keyword: case-insensitive substring (SQL `LIKE '%kw%'`).
    /// Field filters: exact equality. Missing cells never match.
    pub fn matches(&self, row: &[String]) -> bool {
        if let Some((ci, kw)) = &self.keyword {
            match row.get(*ci) {
                Some(cell) if cell.to_lowercase().contains(kw.as_str()) => {}
                _ => return false,
            }
        }
        self.equals
            .iter()
            .all(|(ci, want)| row.get(*ci).is_some_and(|cell| cell == want))
    }
}

/* ---------------- SQL rendering ---------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    #[default]
    Sqlite,
    MySql,
}

impl SqlDialect {
    pub fn placeholder(self) -> &'static str {
        match self { SqlDialect::Sqlite => "?", SqlDialect::MySql => "%s" }
    }

    /// Quote an identifier, doubling any embedded quote char.
    pub fn quote_ident(self, name: &str) -> String {
        let q = match self { SqlDialect::Sqlite => '"', SqlDialect::MySql => '`' };
        let mut out = String::with_capacity(name.len() + 2);
        out.push(q);
        for ch in name.chars() {
            if ch == q { out.push(q); }
            out.push(ch);
        }
        out.push(q);
        out
    }
}

/// SQL text plus its bound parameters, in placeholder order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SqlQuery {
    pub sql: String,
    pub params: Vec<String>,
}

/// `SELECT * FROM t WHERE 1=1 [AND kw LIKE ?] [AND col = ?]...`
pub fn search_query(table: &str, filters: &SearchFilters, dialect: SqlDialect) -> SqlQuery {
    let ph = dialect.placeholder();
    let mut sql = format!("SELECT * FROM {} WHERE 1=1", dialect.quote_ident(table));
    let mut params = Vec::new();

    if let Some(kw) = filters.keyword_trimmed() {
        sql.push_str(&format!(" AND {} LIKE {ph}", dialect.quote_ident(SERVICES_COLUMN)));
        params.push(format!("%{kw}%"));
    }
    for (field, value) in filters.active() {
        sql.push_str(&format!(" AND {} = {ph}", dialect.quote_ident(field.column())));
        params.push(s!(value));
    }
    SqlQuery { sql, params }
}

/// Distinct, non-empty values of one column, ordered.
pub fn distinct_query(table: &str, column: &str, dialect: SqlDialect) -> SqlQuery {
    let c = dialect.quote_ident(column);
    SqlQuery {
        sql: format!(
            "SELECT DISTINCT {c} FROM {} WHERE {c} IS NOT NULL AND {c} != '' ORDER BY {c}",
            dialect.quote_ident(table)
        ),
        params: Vec::new(),
    }
}
