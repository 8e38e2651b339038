// src/session.rs
//! Per-user session context.
//!
//! Everything that must survive a GUI frame (or a CLI run) lives here:
//! the loaded tables, memoized lookups, the last search and its
//! [`ResultSet`], the id allocator and the selection bookkeeping. There is
//! no ambient cache; callers own a `Session` and pass it around.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::config::consts::{AWARD_TITLE_COLUMN, SERVICES_COLUMN};
use crate::config::options::DataOptions;
use crate::data::{ResultSet, ResultSetId};
use crate::error::{Error, Result};
use crate::matching::{KeywordMatch, LinkOptions, keyword_matches, link_records};
use crate::search::SearchFilters;
use crate::selection::{Reconciliation, SelectedCollection, SelectionSnapshot, SelectionState};
use crate::store::{RecordSource, load_table};

/// A selected description linked to an award title.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkedPair {
    pub description: String,
    pub title: String,
    pub score: f64,
}

pub struct Session {
    source: Box<dyn RecordSource>,
    awards: Option<Box<dyn RecordSource>>,
    distinct: HashMap<String, Vec<String>>,
    last: Option<(SearchFilters, ResultSet)>,
    next_id: ResultSetId,
    selection: SelectionState,
}

impl Session {
    pub fn new(source: Box<dyn RecordSource>) -> Self {
        Self {
            source,
            awards: None,
            distinct: HashMap::new(),
            last: None,
            next_id: ResultSetId::new(1),
            selection: SelectionState::new(),
        }
    }

    pub fn with_awards(mut self, awards: Box<dyn RecordSource>) -> Self {
        self.awards = Some(awards);
        self
    }

    /// Load the tables named in `opts`. A configured awards file that does
    /// not exist is skipped; the procurement file is required.
    pub fn open(opts: &DataOptions) -> Result<Self> {
        let table = load_table(&opts.procurement, &opts.procurement_table, ',')?;
        let mut session = Self::new(Box::new(table));

        match &opts.awards {
            Some(path) if path.exists() => {
                let awards = load_table(path, &opts.awards_table, ',')?;
                session = session.with_awards(Box::new(awards));
            }
            Some(path) => logf!("Session: awards file {} not found, matching disabled", path.display()),
            None => {}
        }
        Ok(session)
    }

    pub fn source(&self) -> &dyn RecordSource { &*self.source }
    pub fn awards(&self) -> Option<&dyn RecordSource> { self.awards.as_deref() }

    /// Run (or reuse) a search.
    ///
    /// Identical filters return the memoized ResultSet, id included, so
    /// checkboxes on screen stay meaningful. New filters allocate a new id.
    pub fn search(&mut self, filters: &SearchFilters) -> Result<&ResultSet> {
        if filters.is_empty() {
            return Err(Error::NoFilters);
        }

        let reuse = matches!(&self.last, Some((f, _)) if f == filters);
        if reuse {
            logd!("Session: search memo hit");
        } else {
            let rows = self.source.search(filters)?;
            let id = self.next_id;
            self.next_id = id.next();
            logf!("Session: search {} -> {} rows", id, rows.len());
            let results = ResultSet::new(id, self.source.headers().to_vec(), rows);
            self.last = Some((filters.clone(), results));
        }

        self.last
            .as_ref()
            .map(|(_, rs)| rs)
            .ok_or(Error::NoFilters)
    }

    /// The current ResultSet, if a search has run since the last invalidate.
    pub fn results(&self) -> Option<&ResultSet> {
        self.last.as_ref().map(|(_, rs)| rs)
    }

    /// Filters that produced [`Session::results`].
    pub fn filters(&self) -> Option<&SearchFilters> {
        self.last.as_ref().map(|(f, _)| f)
    }

    /// Apply a checkbox snapshot taken on the current ResultSet.
    pub fn reconcile(&mut self, snapshot: SelectionSnapshot) -> Reconciliation {
        match &self.last {
            Some((_, results)) => self.selection.apply(snapshot, results),
            None => Reconciliation::default(),
        }
    }

    pub fn selected(&self) -> &SelectedCollection { self.selection.selected() }
    pub fn selection(&self) -> &SelectionState { &self.selection }

    pub fn clear_selection(&mut self) {
        logf!("Session: selection cleared ({} rows)", self.selection.selected().len());
        self.selection.clear();
    }

    /// Distinct non-empty values of a procurement column, memoized.
    pub fn distinct(&mut self, column: &str) -> Result<&[String]> {
        match self.distinct.entry(s!(column)) {
            Entry::Occupied(e) => Ok(e.into_mut().as_slice()),
            Entry::Vacant(e) => {
                let values = self.source.distinct(column)?;
                logd!("Session: {} distinct values for {}", values.len(), column);
                Ok(e.insert(values).as_slice())
            }
        }
    }

    /// Distinct values for a drop-down. A column the source cannot answer
    /// is logged once and memoized as empty.
    pub fn choices(&mut self, column: &str) -> &[String] {
        let source = &self.source;
        self.distinct
            .entry(s!(column))
            .or_insert_with(|| match source.distinct(column) {
                Ok(values) => {
                    logd!("Session: {} distinct values for {}", values.len(), column);
                    values
                }
                Err(e) => {
                    logd!("Session: no values for {}: {}", column, e);
                    Vec::new()
                }
            })
            .as_slice()
    }

    /// Drop memoized searches and distinct lists. Selections are kept.
    pub fn invalidate(&mut self) {
        self.last = None;
        self.distinct.clear();
    }

    /// "Reset Search": invalidate plus forget every selection.
    pub fn reset(&mut self) {
        self.invalidate();
        self.selection.clear();
        logf!("Session: reset");
    }

    pub fn keyword_matches(&self, keyword: &str) -> Vec<KeywordMatch> {
        keyword_matches(keyword, self.selection.selected(), self.awards())
    }

    /// Link selected services descriptions to award titles.
    pub fn link(&self, opts: &LinkOptions) -> Result<Vec<LinkedPair>> {
        let awards = self.awards().ok_or(Error::NoAwards)?;
        let selected = self.selection.selected();
        let Some(headers) = selected.headers() else { return Ok(Vec::new()) };

        let di = headers
            .iter()
            .position(|h| h == SERVICES_COLUMN)
            .ok_or_else(|| Error::unknown_column(self.source.name(), SERVICES_COLUMN))?;
        let ti = awards
            .headers()
            .iter()
            .position(|h| h == AWARD_TITLE_COLUMN)
            .ok_or_else(|| Error::unknown_column(awards.name(), AWARD_TITLE_COLUMN))?;

        let cell = |row: &[String], i: usize| row.get(i).cloned().unwrap_or_default();
        let left: Vec<String> = selected.rows().map(|r| cell(r, di)).collect();
        let right: Vec<String> = awards.rows().iter().map(|r| cell(r.as_slice(), ti)).collect();

        Ok(link_records(&left, &right, opts)
            .into_iter()
            .map(|l| LinkedPair {
                description: left[l.left].clone(),
                title: right[l.right].clone(),
                score: l.score,
            })
            .collect())
    }
}
