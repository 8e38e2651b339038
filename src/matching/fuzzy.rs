// src/matching/fuzzy.rs
//
// 0..=100 similarity scores over free text.
//
// ratio             2*LCS / (len a + len b), raw strings
// partial_ratio     best ratio of the shorter string against any
//                   same-length window of the longer one
// token_sort_ratio  ratio after normalizing and sorting the tokens
// token_set_ratio   ratio over shared/remaining token sets (order and
//                   repetition insensitive)
//
// Scores round half-to-even. An empty input always scores 0.

use std::collections::BTreeSet;

use crate::core::sanitize::full_process;

/// Length of the longest common subsequence.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() { return 0; }
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            cur[j + 1] = if ca == cb { prev[j] + 1 } else { prev[j + 1].max(cur[j]) };
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

fn similarity(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 { return 0.0; }
    (2 * lcs_len(a, b)) as f64 / total as f64
}

fn to_score(sim: f64) -> u8 {
    (sim * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}

fn chars(s: &str) -> Vec<char> { s.chars().collect() }

pub fn ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() { return 0; }
    to_score(similarity(&chars(a), &chars(b)))
}

pub fn partial_ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() { return 0; }
    let (a, b) = (chars(a), chars(b));
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if short.len() == long.len() {
        return to_score(similarity(&short, &long));
    }

    let mut best = 0.0f64;
    for window in long.windows(short.len()) {
        let sim = similarity(&short, window);
        if sim > best {
            best = sim;
            if best > 0.995 { return 100; }
        }
    }
    to_score(best)
}

fn sorted_tokens(s: &str) -> Vec<String> {
    let mut tokens: Vec<String> = full_process(s).split_whitespace().map(str::to_owned).collect();
    tokens.sort();
    tokens
}

pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    let (ta, tb) = (sorted_tokens(a).join(" "), sorted_tokens(b).join(" "));
    ratio(&ta, &tb)
}

pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    let sa: BTreeSet<String> = full_process(a).split_whitespace().map(str::to_owned).collect();
    let sb: BTreeSet<String> = full_process(b).split_whitespace().map(str::to_owned).collect();
    if sa.is_empty() || sb.is_empty() { return 0; }

    let common = sa.intersection(&sb).cloned().collect::<Vec<_>>().join(" ");
    let only_a = sa.difference(&sb).cloned().collect::<Vec<_>>().join(" ");
    let only_b = sb.difference(&sa).cloned().collect::<Vec<_>>().join(" ");

    let with = |rest: &str| join!(&common, " ", rest).trim().to_string();
    let (t1, t2) = (with(&only_a), with(&only_b));

    ratio(&common, &t1).max(ratio(&common, &t2)).max(ratio(&t1, &t2))
}

/// Quality bucket used to color a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Low,
    Medium,
    High,
}

impl ScoreBand {
    pub fn of(score: u8) -> Self {
        match score {
            0..=33 => ScoreBand::Low,
            34..=66 => ScoreBand::Medium,
            _ => ScoreBand::High,
        }
    }
}

/// All four scores for one pair of texts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FuzzyScores {
    pub ratio: u8,
    pub partial_ratio: u8,
    pub token_sort_ratio: u8,
    pub token_set_ratio: u8,
}

impl FuzzyScores {
    pub fn compare(a: &str, b: &str) -> Self {
        Self {
            ratio: ratio(a, b),
            partial_ratio: partial_ratio(a, b),
            token_sort_ratio: token_sort_ratio(a, b),
            token_set_ratio: token_set_ratio(a, b),
        }
    }

    /// (label, score) pairs in display order.
    pub fn labeled(&self) -> [(&'static str, u8); 4] {
        [
            ("Ratio", self.ratio),
            ("Partial Ratio", self.partial_ratio),
            ("Token Sort Ratio", self.token_sort_ratio),
            ("Token Set Ratio", self.token_set_ratio),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_basics() {
        assert_eq!(ratio("this is a test", "this is a test"), 100);
        // LCS 14 over 29 chars
        assert_eq!(ratio("this is a test", "this is a test!"), 97);
        assert_eq!(ratio("", "abc"), 0);
        assert_eq!(ratio("abc", "xyz"), 0);
    }

    #[test]
    fn partial_finds_substring() {
        assert_eq!(partial_ratio("snow removal", "citywide snow removal services"), 100);
        assert!(partial_ratio("snow removal", "road salt") < 50);
    }

    #[test]
    fn partial_near_matches_round_normally() {
        // One differing char against every window of an all-'a' string.
        let off_by_one = |n: usize| {
            let mut s = "a".repeat(n - 1);
            s.insert(n / 2, 'b');
            (s, "a".repeat(n + 1))
        };

        let (short, long) = off_by_one(100);
        assert_eq!(partial_ratio(&short, &long), 99);

        // 199/200 sits on the cutoff; it is scored, not short-circuited.
        let (short, long) = off_by_one(200);
        assert_eq!(partial_ratio(&short, &long), to_score(199.0 / 200.0));
    }

    #[test]
    fn token_scores_ignore_order_and_case() {
        let a = "Snow Removal, Citywide";
        let b = "citywide snow removal";
        assert_eq!(token_sort_ratio(a, b), 100);
        assert_eq!(token_set_ratio(a, "snow removal citywide citywide"), 100);
        assert!(ratio(a, b) < 100);
    }

    #[test]
    fn token_set_subset_scores_full() {
        assert_eq!(token_set_ratio("cloud hosting", "managed cloud hosting services"), 100);
    }

    #[test]
    fn bands() {
        assert_eq!(ScoreBand::of(0), ScoreBand::Low);
        assert_eq!(ScoreBand::of(33), ScoreBand::Low);
        assert_eq!(ScoreBand::of(34), ScoreBand::Medium);
        assert_eq!(ScoreBand::of(66), ScoreBand::Medium);
        assert_eq!(ScoreBand::of(67), ScoreBand::High);
    }
}
