// src/selection.rs
//! Selection reconciliation for the interactive results table.
//!
//! The table is re-rendered from scratch every frame. The only thing the
//! widget can tell us is which row positions are checked *right now*
//! (a [`SelectionSnapshot`]). The user's running selection, a
//! [`SelectedCollection`], has to survive those re-renders, survive new
//! searches, and never pick up duplicates.
//!
//! [`reconcile`] applies the net delta between the previous and the current
//! snapshot:
//!
//! ```text
//! added   = current  - previous   -> append rows (unless already present)
//! removed = previous - current    -> drop rows, current ResultSet only
//! ```
//!
//! Entries are keyed by [`RecordKey`] = (ResultSetId, position). Positions are
//! only meaningful inside one ResultSet, so a deselection at position 3 never
//! touches a record that was picked at position 3 of an earlier search.
//!
//! Nothing in here can fail. Keys that don't resolve and repeated insertions
//! are reported as [`Anomaly`] values and logged at debug level.

use std::collections::BTreeSet;
use std::collections::btree_set;
use std::fmt;

use crate::data::{ResultSet, ResultSetId, Row};

/// Originating identity of a selected record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    pub result_set: ResultSetId,
    pub position: usize,
}

impl RecordKey {
    pub const fn new(result_set: ResultSetId, position: usize) -> Self {
        Self { result_set, position }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.result_set, self.position)
    }
}

/// Row positions checked in one render pass. Carries no history.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSnapshot(BTreeSet<usize>);

impl SelectionSnapshot {
    pub fn new() -> Self { Self(BTreeSet::new()) }

    /// Build from a checkbox column: position `i` is selected iff `checks[i]`.
    pub fn from_checks(checks: &[bool]) -> Self {
        checks
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
            .collect()
    }

    pub fn contains(&self, position: usize) -> bool { self.0.contains(&position) }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Positions in `self` but not in `other`, ascending.
    pub fn difference<'a>(&'a self, other: &'a SelectionSnapshot) -> impl Iterator<Item = usize> + 'a {
        self.0.difference(&other.0).copied()
    }
}

impl FromIterator<usize> for SelectionSnapshot {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SelectionSnapshot {
    type Item = &'a usize;
    type IntoIter = btree_set::Iter<'a, usize>;
    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedEntry {
    key: RecordKey,
    row: Row,
}

impl SelectedEntry {
    #[inline] pub fn key(&self) -> RecordKey { self.key }
    #[inline] pub fn row(&self) -> &[String] { &self.row }
}

/// The user's running selection, in insertion order.
///
/// Mutated only by [`reconcile`] and the explicit [`SelectedCollection::clear`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectedCollection {
    headers: Option<Vec<String>>,
    entries: Vec<SelectedEntry>,
}

impl SelectedCollection {
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn len(&self) -> usize { self.entries.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    #[inline] pub fn entries(&self) -> &[SelectedEntry] { &self.entries }

    /// Headers of the first result set that contributed a record.
    pub fn headers(&self) -> Option<&[String]> { self.headers.as_deref() }

    pub fn contains(&self, key: RecordKey) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = RecordKey> + '_ {
        self.entries.iter().map(|e| e.key)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> + '_ {
        self.entries.iter().map(|e| e.row.as_slice())
    }

    /// Owned rows for export/clipboard boundaries.
    pub fn to_rows(&self) -> Vec<Row> {
        self.entries.iter().map(|e| e.row.clone()).collect()
    }

    /// Positions held for one result set, ascending.
    pub fn positions_for(&self, id: ResultSetId) -> SelectionSnapshot {
        self.keys().filter(|k| k.result_set == id).map(|k| k.position).collect()
    }

    /// Drop everything, historical selections included.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.headers = None;
    }

    fn push(&mut self, key: RecordKey, row: Row, headers: &[String]) {
        if self.headers.is_none() {
            self.headers = Some(headers.to_vec());
        }
        self.entries.push(SelectedEntry { key, row });
    }

    fn remove(&mut self, key: RecordKey) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != key);
        self.entries.len() != before
    }
}

/// Non-fatal conditions met while reconciling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anomaly {
    /// A checked position has no row in the result set (the snapshot lags a
    /// data refresh). The key is skipped.
    InconsistentSnapshot { key: RecordKey, len: usize },
    /// A newly checked key is already in the collection. Skipped.
    DuplicateInsertion { key: RecordKey },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::InconsistentSnapshot { key, len } => {
                write!(f, "inconsistent snapshot: {key} not in result set of {len} rows")
            }
            Anomaly::DuplicateInsertion { key } => {
                write!(f, "duplicate insertion: {key} already selected")
            }
        }
    }
}

/// What one reconciliation changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub added: Vec<RecordKey>,
    pub removed: Vec<RecordKey>,
    pub anomalies: Vec<Anomaly>,
}

impl Reconciliation {
    /// True when the collection was left untouched.
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Apply the delta between `previous` and `current` to `selected`.
///
/// Both snapshots are interpreted against `results`. Deterministic in its
/// inputs; calling it with `previous == current` changes nothing.
pub fn reconcile(
    previous: &SelectionSnapshot,
    current: &SelectionSnapshot,
    results: &ResultSet,
    selected: &mut SelectedCollection,
) -> Reconciliation {
    let id = results.id();
    let mut out = Reconciliation::default();

    for position in current.difference(previous) {
        let key = RecordKey::new(id, position);
        let Some(row) = results.get(position) else {
            out.anomalies.push(Anomaly::InconsistentSnapshot { key, len: results.len() });
            continue;
        };
        if selected.contains(key) {
            out.anomalies.push(Anomaly::DuplicateInsertion { key });
            continue;
        }
        selected.push(key, row.clone(), results.headers());
        out.added.push(key);
    }

    // Keys carry the current id, so historical entries are never matched.
    for position in previous.difference(current) {
        let key = RecordKey::new(id, position);
        if selected.remove(key) {
            out.removed.push(key);
        }
    }

    for anomaly in &out.anomalies {
        logd!("Selection: {}", anomaly);
    }
    out
}

/// Session-owned selection bookkeeping: the previous snapshot, the result set
/// it refers to, and the running collection.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    previous: SelectionSnapshot,
    result_set: Option<ResultSetId>,
    selected: SelectedCollection,
}

impl SelectionState {
    pub fn new() -> Self { Self::default() }

    pub fn previous(&self) -> &SelectionSnapshot { &self.previous }
    pub fn selected(&self) -> &SelectedCollection { &self.selected }

    /// Reconcile `current` against `results` and remember it as the previous
    /// snapshot for the next pass.
    ///
    /// A snapshot taken on a different result set than last time says nothing
    /// about the old positions, so the previous snapshot restarts empty.
    pub fn apply(&mut self, current: SelectionSnapshot, results: &ResultSet) -> Reconciliation {
        if self.result_set != Some(results.id()) {
            if self.result_set.is_some() {
                logd!("Selection: result set changed to {}, previous snapshot reset", results.id());
            }
            self.previous = SelectionSnapshot::new();
            self.result_set = Some(results.id());
        }

        let outcome = reconcile(&self.previous, &current, results, &mut self.selected);
        self.previous = current;

        if !outcome.is_noop() {
            logf!(
                "Selection: +{} -{} (total {})",
                outcome.added.len(),
                outcome.removed.len(),
                self.selected.len()
            );
        }
        outcome
    }

    /// Forget every selection, including those from earlier searches.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.previous = SelectionSnapshot::new();
        self.result_set = None;
    }
}
