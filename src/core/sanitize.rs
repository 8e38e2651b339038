// src/core/sanitize.rs
//
// Small text normalizers shared by search, matching and export.

/// Collapse runs of whitespace into one space and trim both ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Lowercase, replace every non-alphanumeric char with a space, collapse
/// whitespace. Mirrors the "full process" step of token-based fuzzy scores.
pub fn full_process(s: &str) -> String {
    let mapped: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .flat_map(char::to_lowercase)
        .collect();
    normalize_ws(&mapped)
}

/// Make a string safe for use as a file stem.
/// Falls back to `fallback` when nothing usable remains.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_process_strips_punctuation_and_case() {
        assert_eq!(full_process("  New-York,  YANKEES! "), "new york yankees");
    }

    #[test]
    fn sanitize_filename_falls_back() {
        assert_eq!(sanitize_filename("snow  removal", "results"), "snow_removal");
        assert_eq!(sanitize_filename("%%%", "results"), "results");
    }
}
