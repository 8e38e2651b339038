// src/matching/keyword.rs
use std::fmt;

use crate::config::consts::{AWARD_TITLE_COLUMN, SERVICES_COLUMN};
use crate::data::Row;
use crate::selection::SelectedCollection;
use crate::store::RecordSource;

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Case-insensitive whole-word keyword extractor.
///
/// A keyword (or phrase) only matches when it starts and ends on a word
/// boundary, so `"snow"` finds "Snow removal" but not "snowplow".
/// Overlapping candidates resolve longest-first, left to right.
#[derive(Clone, Debug, Default)]
pub struct KeywordProcessor {
    // (lowercased chars, keyword as added), longest first
    keywords: Vec<(Vec<char>, String)>,
}

impl KeywordProcessor {
    pub fn new() -> Self { Self::default() }

    /// Returns false for blank or already-known keywords.
    pub fn add_keyword(&mut self, keyword: &str) -> bool {
        let kw = keyword.trim();
        if kw.is_empty() { return false; }
        let folded: Vec<char> = kw.chars().flat_map(char::to_lowercase).collect();
        if self.keywords.iter().any(|(k, _)| *k == folded) { return false; }

        self.keywords.push((folded, s!(kw)));
        self.keywords.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        true
    }

    pub fn len(&self) -> usize { self.keywords.len() }
    pub fn is_empty(&self) -> bool { self.keywords.is_empty() }

    /// Keywords found in `text`, in order of appearance.
    pub fn extract_keywords(&self, text: &str) -> Vec<&str> {
        let mut found = Vec::new();
        if self.keywords.is_empty() { return found; }

        let hay: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();
        let mut i = 0;
        while i < hay.len() {
            let at_boundary = i == 0 || !is_word_char(hay[i - 1]);
            let hit = at_boundary
                .then(|| self.keywords.iter().find(|(k, _)| Self::matches_at(&hay, i, k)))
                .flatten();

            match hit {
                Some((k, name)) => {
                    found.push(name.as_str());
                    i += k.len();
                }
                None => i += 1,
            }
        }
        found
    }

    pub fn contains_any(&self, text: &str) -> bool {
        !self.extract_keywords(text).is_empty()
    }

    fn matches_at(hay: &[char], i: usize, kw: &[char]) -> bool {
        let end = i + kw.len();
        end <= hay.len()
            && hay[i..end] == *kw
            && (end == hay.len() || !is_word_char(hay[end]))
    }
}

/// Which table a keyword match came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOrigin {
    Selected,
    Award,
}

impl fmt::Display for MatchOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchOrigin::Selected => "Selected",
            MatchOrigin::Award => "Award",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordMatch {
    pub origin: MatchOrigin,
    /// The cell the keyword was found in.
    pub text: String,
    pub row: Row,
}

/// Selected rows whose services description contains `keyword`, followed
/// by award rows whose title does. Blank keyword, no matches.
pub fn keyword_matches(
    keyword: &str,
    selected: &SelectedCollection,
    awards: Option<&dyn RecordSource>,
) -> Vec<KeywordMatch> {
    let mut kp = KeywordProcessor::new();
    if !kp.add_keyword(keyword) { return Vec::new(); }

    let mut out = Vec::new();

    if let Some(ci) = selected.headers().and_then(|h| column_of(h, SERVICES_COLUMN)) {
        collect(&kp, selected.rows(), ci, MatchOrigin::Selected, &mut out);
    }
    if let Some(table) = awards {
        match column_of(table.headers(), AWARD_TITLE_COLUMN) {
            Some(ci) => collect(&kp, table.rows().iter().map(Vec::as_slice), ci, MatchOrigin::Award, &mut out),
            None => logd!("Matching: {} has no {} column", table.name(), AWARD_TITLE_COLUMN),
        }
    }

    logd!("Matching: keyword {:?} -> {} rows", keyword, out.len());
    out
}

fn column_of(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn collect<'a>(
    kp: &KeywordProcessor,
    rows: impl Iterator<Item = &'a [String]>,
    ci: usize,
    origin: MatchOrigin,
    out: &mut Vec<KeywordMatch>,
) {
    for row in rows {
        let Some(cell) = row.get(ci) else { continue };
        if kp.contains_any(cell) {
            out.push(KeywordMatch { origin, text: cell.clone(), row: row.to_vec() });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_words_only() {
        let mut kp = KeywordProcessor::new();
        kp.add_keyword("snow");
        assert_eq!(kp.extract_keywords("Snow removal, SNOW plowing"), vec!["snow", "snow"]);
        assert!(kp.extract_keywords("snowplow services").is_empty());
        assert!(kp.extract_keywords("de_snow").is_empty());
    }

    #[test]
    fn longest_phrase_wins() {
        let mut kp = KeywordProcessor::new();
        kp.add_keyword("cloud");
        kp.add_keyword("cloud hosting");
        assert_eq!(kp.extract_keywords("Managed cloud hosting and cloud backup"), vec!["cloud hosting", "cloud"]);
    }

    #[test]
    fn blank_and_repeated_keywords_are_ignored() {
        let mut kp = KeywordProcessor::new();
        assert!(!kp.add_keyword("   "));
        assert!(kp.add_keyword("Salt"));
        assert!(!kp.add_keyword("salt"));
        assert_eq!(kp.len(), 1);
        assert_eq!(kp.extract_keywords("road salt"), vec!["Salt"]);
    }
}
