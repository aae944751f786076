//! Fuzzy subsequence matching on top of `nucleo-matcher`.
//!
//! Only subsequence matches are accepted. Results come back best score first;
//! equal scores keep their input order, so ranking is deterministic for a
//! fixed query and haystack list.

use std::cmp::Reverse;

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// A haystack that matched the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch {
    /// Index into the haystack slice passed to [`FuzzyMatcher::rank`].
    pub index: usize,
    pub score: u16,
    /// Matched char positions (not bytes), ascending and de-duplicated.
    pub positions: Vec<usize>,
}

/// Reusable matcher. Holds nucleo's scratch memory between queries.
pub struct FuzzyMatcher {
    matcher: Matcher,
    chars: Vec<char>,
    indices: Vec<u32>,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            chars: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Match `query` against every haystack and return the hits, best first.
    /// Case is ignored.
    pub fn rank<S: AsRef<str>>(&mut self, query: &str, haystacks: &[S]) -> Vec<FuzzyMatch> {
        let atom = Atom::new(
            query,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
            false,
        );

        let mut matches = Vec::new();
        for (index, haystack) in haystacks.iter().enumerate() {
            self.indices.clear();
            let haystack = haystack.as_ref();
            // One slot per char, so indices line up with `str::chars()`.
            // `Utf32Str::new` would fold grapheme clusters instead.
            let haystack = if haystack.is_ascii() {
                Utf32Str::Ascii(haystack.as_bytes())
            } else {
                self.chars.clear();
                self.chars.extend(haystack.chars());
                Utf32Str::Unicode(&self.chars)
            };
            let Some(score) = atom.indices(haystack, &mut self.matcher, &mut self.indices) else {
                continue;
            };
            self.indices.sort_unstable();
            self.indices.dedup();
            matches.push(FuzzyMatch {
                index,
                score,
                positions: self.indices.iter().map(|&i| i as usize).collect(),
            });
        }

        // Stable: ties stay in input order.
        matches.sort_by_key(|m| Reverse(m.score));
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_subsequences_match() {
        let mut matcher = FuzzyMatcher::new();
        let hits = matcher.rank("cpy", &["CTRL c CopyTo", "CTRL v Paste"]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].index, 0);
    }

    #[test]
    fn test_positions_point_at_matched_chars() {
        let mut matcher = FuzzyMatcher::new();
        let haystack = "CTRL v Paste";
        let hits = matcher.rank("Paste", &[haystack]);
        assert_eq!(hits.len(), 1);

        let chars: Vec<char> = haystack.chars().collect();
        let matched: String = hits[0].positions.iter().map(|&p| chars[p]).collect();
        assert_eq!(matched, "Paste");
    }

    #[test]
    fn test_positions_survive_combining_marks() {
        let mut matcher = FuzzyMatcher::new();
        let haystack = " e\u{301} Paste";
        let hits = matcher.rank("Paste", &[haystack]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].positions, [4, 5, 6, 7, 8]);

        let chars: Vec<char> = haystack.chars().collect();
        let matched: String = hits[0].positions.iter().map(|&p| chars[p]).collect();
        assert_eq!(matched, "Paste");
    }

    #[test]
    fn test_case_is_ignored() {
        let mut matcher = FuzzyMatcher::new();
        let haystacks = ["CTRL v Paste"];
        for query in ["ctrl", "Ctrl", "CTRL", "PASTE", "paste"] {
            assert_eq!(matcher.rank(query, &haystacks).len(), 1, "query {query:?}");
        }
    }

    #[test]
    fn test_better_match_ranks_first() {
        let mut matcher = FuzzyMatcher::new();
        let hits = matcher.rank("paste", &["P a s t e scattered", "PasteFrom(Clipboard)"]);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].index, 1);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let mut matcher = FuzzyMatcher::new();
        let haystacks = ["CTRL c CopyTo", "CTRL c CopyMode", " q QuitCopy"];
        let first = matcher.rank("copy", &haystacks);
        let second = matcher.rank("copy", &haystacks);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let mut matcher = FuzzyMatcher::new();
        assert!(matcher.rank("zzz", &["CTRL c CopyTo"]).is_empty());
    }
}
