//! Bitap approximate string matching.
//!
//! A pattern is matched against a text allowing up to `pattern_len - 1`
//! errors. Each candidate is scored by
//! `errors / pattern_len + |expected - found| / distance`, so matches with
//! fewer errors close to the expected location win. Patterns longer than
//! [`MAX_BITS`] characters are split into chunks that are matched
//! independently and averaged.

use std::collections::HashMap;

use super::SearchOptions;

/// Widest pattern chunk a single bit mask can track
pub const MAX_BITS: usize = 32;

/// Smallest score a non-identical match can get
const MIN_SCORE: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    pub is_match: bool,
    pub score: f64,
}

impl MatchResult {
    const NONE: MatchResult = MatchResult { is_match: false, score: 1.0 };
}

#[derive(Debug, Clone)]
struct Chunk {
    chars: Vec<char>,
    alphabet: HashMap<char, u64>,
    start: usize,
}

impl Chunk {
    fn new(chars: &[char], start: usize) -> Self {
        let len = chars.len();
        let mut alphabet: HashMap<char, u64> = HashMap::new();
        for (i, c) in chars.iter().enumerate() {
            *alphabet.entry(*c).or_insert(0) |= 1 << (len - i - 1);
        }

        Self {
            chars: chars.to_vec(),
            alphabet,
            start,
        }
    }
}

/// A query prepared for repeated matching
#[derive(Debug, Clone)]
pub struct BitapPattern {
    pattern: String,
    chunks: Vec<Chunk>,
    case_sensitive: bool,
}

impl BitapPattern {
    pub fn new(pattern: &str, case_sensitive: bool) -> Self {
        let pattern = if case_sensitive {
            pattern.to_string()
        } else {
            pattern.to_lowercase()
        };
        let chars: Vec<char> = pattern.chars().collect();
        let len = chars.len();

        let mut chunks = Vec::new();
        if len == 0 {
            // nothing to match
        } else if len <= MAX_BITS {
            chunks.push(Chunk::new(&chars, 0));
        } else {
            let remainder = len % MAX_BITS;
            let end = len - remainder;
            let mut start = 0;
            while start < end {
                chunks.push(Chunk::new(&chars[start..start + MAX_BITS], start));
                start += MAX_BITS;
            }
            if remainder > 0 {
                let start = len - MAX_BITS;
                chunks.push(Chunk::new(&chars[start..], start));
            }
        }

        Self {
            pattern,
            chunks,
            case_sensitive,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Match against a text that has already been case-folded the same way
    /// as the pattern
    pub fn search_in(&self, text: &str, options: &SearchOptions) -> MatchResult {
        if self.chunks.is_empty() {
            return MatchResult::NONE;
        }

        if self.pattern == text {
            return MatchResult { is_match: true, score: 0.0 };
        }

        let text: Vec<char> = text.chars().collect();
        let mut any_match = false;
        let mut total = 0.0;

        for chunk in &self.chunks {
            let result = search_chunk(&text, chunk, options);
            any_match |= result.is_match;
            total += result.score;
        }

        if any_match {
            MatchResult {
                is_match: true,
                score: total / self.chunks.len() as f64,
            }
        } else {
            MatchResult::NONE
        }
    }

    /// Fold a text the way this pattern expects it
    pub fn fold(&self, text: &str) -> String {
        if self.case_sensitive {
            text.to_string()
        } else {
            text.to_lowercase()
        }
    }
}

fn compute_score(pattern_len: usize, errors: usize, current: usize, expected: usize, options: &SearchOptions) -> f64 {
    let accuracy = errors as f64 / pattern_len as f64;
    if options.ignore_location {
        return accuracy;
    }

    let proximity = current.abs_diff(expected);
    if options.distance == 0 {
        return if proximity > 0 { 1.0 } else { accuracy };
    }

    accuracy + proximity as f64 / options.distance as f64
}

fn find_from(text: &[char], pattern: &[char], from: usize) -> Option<usize> {
    if from > text.len() || pattern.len() > text.len() - from {
        return None;
    }
    text[from..]
        .windows(pattern.len())
        .position(|window| window == pattern)
        .map(|offset| offset + from)
}

fn search_chunk(text: &[char], chunk: &Chunk, options: &SearchOptions) -> MatchResult {
    let pattern_len = chunk.chars.len();
    let text_len = text.len();
    let expected = (options.location + chunk.start).min(text_len);

    let mut threshold = options.threshold;

    // Exact occurrences tighten the threshold before the fuzzy passes
    let mut from = expected;
    while let Some(index) = find_from(text, &chunk.chars, from) {
        let score = compute_score(pattern_len, 0, index, expected, options);
        threshold = threshold.min(score);
        from = index + pattern_len;
    }

    let mut best_location: Option<usize> = None;
    let mut best_score = 1.0;
    let mut bin_max = pattern_len + text_len;
    let mask: u64 = 1 << (pattern_len - 1);
    let mut last_bits: Vec<u64> = Vec::new();

    for errors in 0..pattern_len {
        // Widest window around the expected location still able to beat
        // the threshold with this many errors
        let mut bin_min = 0;
        let mut bin_mid = bin_max;
        while bin_min < bin_mid {
            let score = compute_score(pattern_len, errors, expected + bin_mid, expected, options);
            if score <= threshold {
                bin_min = bin_mid;
            } else {
                bin_max = bin_mid;
            }
            bin_mid = (bin_max - bin_min) / 2 + bin_min;
        }
        bin_max = bin_mid;

        let mut start = (expected + 1).saturating_sub(bin_mid).max(1);
        let finish = (expected + bin_mid).min(text_len) + pattern_len;

        let mut bits = vec![0u64; finish + 2];
        bits[finish + 1] = (1u64 << errors) - 1;

        let previous = |k: usize| last_bits.get(k).copied().unwrap_or(0);

        let mut j = finish;
        while j >= start {
            let current = j - 1;
            let char_match = text
                .get(current)
                .and_then(|c| chunk.alphabet.get(c))
                .copied()
                .unwrap_or(0);

            bits[j] = ((bits[j + 1] << 1) | 1) & char_match;
            if errors > 0 {
                bits[j] |= ((previous(j + 1) | previous(j)) << 1) | 1 | previous(j + 1);
            }

            if bits[j] & mask != 0 {
                let score = compute_score(pattern_len, errors, current, expected, options);
                if score <= threshold {
                    threshold = score;
                    best_score = score;
                    best_location = Some(current);
                    if current <= expected {
                        break;
                    }
                    start = (2 * expected).saturating_sub(current).max(1);
                }
            }

            j -= 1;
        }

        let next_errors_score = compute_score(pattern_len, errors + 1, expected, expected, options);
        if next_errors_score > threshold {
            break;
        }
        last_bits = bits;
    }

    match best_location {
        Some(_) => MatchResult {
            is_match: true,
            score: f64::max(best_score, MIN_SCORE),
        },
        None => MatchResult::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> SearchOptions {
        SearchOptions::default()
    }

    fn search(pattern: &str, text: &str) -> MatchResult {
        let pattern = BitapPattern::new(pattern, false);
        let text = pattern.fold(text);
        pattern.search_in(&text, &options())
    }

    #[test]
    fn test_identical_text_scores_zero() {
        let result = search("Nike", "nike");
        assert!(result.is_match);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_prefix_match() {
        let result = search("ald", "alden");
        assert!(result.is_match);
        assert_eq!(result.score, MIN_SCORE);
    }

    #[test]
    fn test_one_typo_matches() {
        let result = search("aldn", "alden");
        assert!(result.is_match);
        assert!(result.score > 0.2 && result.score <= 0.35, "score {}", result.score);
    }

    #[test]
    fn test_distance_penalizes_late_matches() {
        let early = search("boot", "boot with laces");
        let late = search("boot", "a sturdy boot");
        assert!(early.is_match);
        assert!(late.is_match);
        assert!(early.score < late.score);
    }

    #[test]
    fn test_far_match_rejected() {
        let text = format!("{}boot", "x".repeat(60));
        assert!(!search("boot", &text).is_match);
    }

    #[test]
    fn test_unrelated_text_rejected() {
        assert!(!search("loafer", "chelsea boot").is_match);
        assert!(!search("zzz", "alden").is_match);
    }

    #[test]
    fn test_empty_pattern_matches_nothing() {
        let pattern = BitapPattern::new("", false);
        assert!(pattern.is_empty());
        assert!(!pattern.search_in("anything", &options()).is_match);
    }

    #[test]
    fn test_long_pattern_is_chunked() {
        let text = "goodyear welted calfskin derby with a storm welt";
        let result = search(text, &format!("{} ", text));
        assert!(result.is_match);
        assert!(result.score < 0.35);
    }

    #[test]
    fn test_case_sensitive_pattern() {
        let pattern = BitapPattern::new("Nike", true);
        assert_eq!(pattern.fold("NIKE"), "NIKE");
        assert_eq!(pattern.search_in("Nike", &options()).score, 0.0);
        assert!(pattern.search_in("nike", &options()).score > 0.0);
    }

    #[test]
    fn test_ignore_location() {
        let options = SearchOptions {
            ignore_location: true,
            ..SearchOptions::default()
        };
        let pattern = BitapPattern::new("boot", false);
        let text = format!("{}boot", "x".repeat(200));
        let result = pattern.search_in(&text, &options);
        assert!(result.is_match);
        assert_eq!(result.score, MIN_SCORE);
    }
}
