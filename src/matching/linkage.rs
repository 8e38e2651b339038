// src/matching/linkage.rs
use serde::{Deserialize, Serialize};

use crate::config::consts::LINK_THRESHOLD;

/// Jaro similarity in 0.0..=1.0. Empty input scores 0.
pub fn jaro(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() { return 0.0; }
    strsim::jaro(a, b)
}

/// Jaro-Winkler: boosts pairs sharing a prefix (up to 4 chars, scale 0.1)
/// once the plain Jaro score exceeds 0.7. Empty input scores 0.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() { return 0.0; }
    strsim::jaro_winkler(a, b)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkOptions {
    /// Minimum Jaro-Winkler score for a pair to count as linked.
    pub threshold: f64,
    /// Only compare case-insensitively identical strings.
    pub block_exact: bool,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self { threshold: LINK_THRESHOLD, block_exact: false }
    }
}

/// One linked pair: indices into the left and right inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub left: usize,
    pub right: usize,
    pub score: f64,
}

/// Compare every candidate pair and keep those at or above the threshold.
/// Output is ordered by (left, right).
pub fn link_records<L: AsRef<str>, R: AsRef<str>>(left: &[L], right: &[R], opts: &LinkOptions) -> Vec<Link> {
    let folded: Vec<String> = if opts.block_exact {
        right.iter().map(|r| r.as_ref().to_lowercase()).collect()
    } else {
        Vec::new()
    };

    let mut links = Vec::new();
    let mut candidates = 0usize;
    for (li, l) in left.iter().enumerate() {
        let l = l.as_ref();
        let l_folded = opts.block_exact.then(|| l.to_lowercase());
        for (ri, r) in right.iter().enumerate() {
            if let Some(lf) = &l_folded {
                if *lf != folded[ri] { continue; }
            }
            candidates += 1;
            let score = jaro_winkler(l, r.as_ref());
            if score >= opts.threshold {
                links.push(Link { left: li, right: ri, score });
            }
        }
    }

    logd!(
        "Linkage: {} candidate pairs, {} links (threshold {:.2}, blocked: {})",
        candidates,
        links.len(),
        opts.threshold,
        opts.block_exact
    );
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-3 }

    #[test]
    fn jaro_reference_values() {
        assert!(close(jaro("MARTHA", "MARHTA"), 0.944));
        assert!(close(jaro("DIXON", "DICKSONX"), 0.767));
        assert_eq!(jaro("", "abc"), 0.0);
        assert_eq!(jaro("", ""), 0.0);
        assert_eq!(jaro("same", "same"), 1.0);
    }

    #[test]
    fn winkler_boosts_shared_prefix() {
        assert!(close(jaro_winkler("MARTHA", "MARHTA"), 0.961));
        assert!(close(jaro_winkler("DIXON", "DICKSONX"), 0.813));
        assert_eq!(jaro_winkler("", ""), 0.0);
    }

    #[test]
    fn no_boost_at_or_below_point_seven() {
        // Shared prefix "ab" but plain Jaro stays low.
        let j = jaro("abcdefgh", "abxyzuvw");
        assert!(j <= 0.7);
        assert_eq!(jaro_winkler("abcdefgh", "abxyzuvw"), j);
    }

    #[test]
    fn default_compares_every_pair() {
        let opts = LinkOptions::default();
        assert!(!opts.block_exact);
        assert_eq!(opts.threshold, 0.45);

        // A near-duplicate title links without being string-equal.
        let links = link_records(&["Snow removal"], &["Snow removal services"], &opts);
        assert_eq!(links.len(), 1);
        assert!(links[0].score < 1.0);
    }

    #[test]
    fn threshold_and_blocking() {
        let left = ["Snow removal", "Cloud hosting"];
        let right = ["SNOW REMOVAL", "Snow removal services", "Office chairs"];

        let all = link_records(&left, &right, &LinkOptions::default());
        assert!(all.iter().any(|l| l.left == 0 && l.right == 1));
        assert!(all.windows(2).all(|w| (w[0].left, w[0].right) < (w[1].left, w[1].right)));

        let strict = LinkOptions { threshold: 0.0, block_exact: true };
        let blocked = link_records(&left, &right, &strict);
        assert_eq!(blocked.len(), 1);
        assert_eq!((blocked[0].left, blocked[0].right), (0, 0));
    }
}
