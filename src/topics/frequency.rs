// Frequency-based keyword extraction — the fallback path.
//
// When the term matrix collapses or the quality gates reject too much,
// the pipeline degrades to plain frequency counting over the same
// denylists. Lower quality than the statistical path, but it always
// produces something, and downstream consumers prefer a present-but-plain
// topic set over an empty one.
//
// Ties keep first-encountered order: the counters record tokens in
// insertion order and the rankings use a stable sort.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::text::{is_hangul_or_latin, vocab};
use crate::topics::traits::{Segment, Segmenter, TopicExtractor};

/// POS tag for keywords that never went through a morphological analyzer.
pub const UNKNOWN_POS: &str = "Unknown";

/// Tokens re-checked right before a fallback ranking is returned, beyond
/// what the denylists already removed.
const FINAL_REJECTS: [&str; 7] = ["ai", "rss", "xml", "json", "api", "http", "www"];

/// A ranked keyword with its raw corpus frequency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyword {
    pub keyword: String,
    pub count: u32,
    /// Part-of-speech tag, `"Unknown"` unless an external analyzer
    /// supplied one.
    pub pos: String,
}

/// Frequency-count extractor, usable wherever a `TopicExtractor` is
/// expected.
pub struct FrequencyExtractor;

impl TopicExtractor for FrequencyExtractor {
    fn top_topics(&self, corpus: &[String], k: usize) -> Vec<String> {
        top_keywords(corpus, k)
    }
}

/// Up to `k` tokens ranked by raw frequency across the corpus.
///
/// Never fails: an empty corpus, or one whose every token is filtered,
/// yields an empty list.
pub fn top_keywords(corpus: &[String], k: usize) -> Vec<String> {
    count_tokens(corpus)
        .into_iter()
        .take(k * 2)
        .map(|(token, _)| token)
        .filter(|token| !FINAL_REJECTS.contains(&token.as_str()))
        .take(k)
        .collect()
}

/// Up to `k` ranked keyword records with raw counts and an unknown POS.
pub fn extract_keywords(corpus: &[String], k: usize) -> Vec<Keyword> {
    count_tokens(corpus)
        .into_iter()
        .take(k)
        .map(|(keyword, count)| Keyword {
            keyword,
            count,
            pos: UNKNOWN_POS.to_string(),
        })
        .collect()
}

/// Count pre-tagged segments from an external analyzer into ranked
/// keyword records, carrying each word's tag from its first occurrence.
pub fn keywords_from_segments(segments: &[Segment], k: usize) -> Vec<Keyword> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut ranked: Vec<Keyword> = Vec::new();
    for segment in segments {
        let word = segment.word.to_lowercase();
        if !keep_token(&word) {
            continue;
        }
        match index.get(&word) {
            Some(&i) => ranked[i].count += 1,
            None => {
                index.insert(word.clone(), ranked.len());
                ranked.push(Keyword {
                    keyword: word,
                    count: 1,
                    pos: segment.pos.clone(),
                });
            }
        }
    }
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(k);
    ranked
}

/// Run an external segmenter over a corpus and rank the tagged words.
pub fn extract_keywords_tagged(
    segmenter: &dyn Segmenter,
    corpus: &[String],
    k: usize,
) -> Vec<Keyword> {
    let mut segments = Vec::new();
    for doc in corpus {
        segments.extend(segmenter.segments(doc));
    }
    keywords_from_segments(&segments, k)
}

/// Top topics of a single document by raw frequency over the combined
/// denylist.
pub fn doc_topics(text: &str, n: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, u32)> = Vec::new();
    for token in lowered.split_whitespace() {
        if token.chars().count() <= 1 || vocab::in_denylist(token) {
            continue;
        }
        match index.get(token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(n)
        .map(|(token, _)| token.to_string())
        .collect()
}

/// Tokenize every document (lowercase, whitespace split), filter, and
/// count, preserving first-encountered order for ties.
fn count_tokens(corpus: &[String]) -> Vec<(String, u32)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, u32)> = Vec::new();
    for doc in corpus {
        let lowered = doc.to_lowercase();
        for token in lowered.split_whitespace() {
            if !keep_token(token) {
                continue;
            }
            match index.get(token) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(token.to_string(), counts.len());
                    counts.push((token.to_string(), 1));
                }
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Shared keep rule: length > 1, outside both denylists, no digits,
/// Hangul/Latin letters only.
fn keep_token(token: &str) -> bool {
    token.chars().count() > 1
        && !vocab::in_denylist(token)
        && !token.chars().any(char::is_numeric)
        && is_hangul_or_latin(token)
}
