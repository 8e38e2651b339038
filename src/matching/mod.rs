// src/matching/mod.rs
//! Cross-referencing selected procurement rows against award titles.
//!
//! - [`keyword`]: whole-word keyword extraction and the keyword cross-match.
//! - [`fuzzy`]: 0..=100 similarity scores for free-text comparison.
//! - [`linkage`]: Jaro-Winkler record linkage between two text columns.
//!
//! Nothing here touches the session or the GUI; callers hand in rows and
//! headers and get plain values back.
mod fuzzy;
mod keyword;
mod linkage;

pub use fuzzy::{FuzzyScores, ScoreBand, partial_ratio, ratio, token_set_ratio, token_sort_ratio};
pub use keyword::{KeywordMatch, KeywordProcessor, MatchOrigin, keyword_matches};
pub use linkage::{Link, LinkOptions, jaro, jaro_winkler, link_records};
