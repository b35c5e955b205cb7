// Statistical topic extraction.
//
// Ranks unigram/bigram terms by mean TF-IDF weight across the corpus,
// then pushes the candidates through two quality gates before anything is
// returned. RSS and HTML sources leak markup vocabulary into the term
// matrix even after normalization, so the gates re-check candidates
// against the garbage table with two different semantics: substring
// containment over the whole candidate string (gate 1), then exact word
// match after splitting bigrams (gate 2). A candidate set that mostly
// fails the gates is discarded wholesale and the frequency fallback runs
// instead — a small degenerate topic list is worse than a plain one.
//
// Every internal failure is recoverable: the caller of top_topics never
// sees an error, only a (possibly fallback-produced, possibly empty)
// topic list.

use thiserror::Error;
use tracing::{debug, info};

use crate::config::ExtractorConfig;
use crate::text::vocab;
use crate::topics::frequency;
use crate::topics::traits::TopicExtractor;
use crate::topics::vectorizer::{TermMatrix, Vectorizer, VectorizeError};

/// Tokens rejected by exact match only, kept apart from the garbage
/// table: "ai" is a legitimate topic token and must never enter the
/// substring scan.
const EXACT_REJECTS: [&str; 4] = ["ai", "rss", "xml", "json"];

/// Too few candidates survived the quality gates to trust the
/// statistical ranking.
#[derive(Debug, Error)]
#[error("only {kept} of {requested} requested topics survived the quality gates")]
pub struct InsufficientQuality {
    pub kept: usize,
    pub requested: usize,
}

/// TF-IDF based topic extractor — the default strategy.
///
/// Parameters adapt to corpus size per the config; the vectorizer is
/// rebuilt on every call, so one extractor can serve unrelated corpora.
#[derive(Default)]
pub struct TfIdfTopicExtractor {
    pub config: ExtractorConfig,
}

impl TfIdfTopicExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Rank up to `k` topics over a corpus of cleaned document strings.
    ///
    /// Vectorization failure and quality-insufficient results both route
    /// to the frequency fallback; an empty corpus yields an empty list.
    pub fn top_topics(&self, corpus: &[String], k: usize) -> Vec<String> {
        if corpus.is_empty() {
            return Vec::new();
        }

        let candidates = match self.ranked_candidates(corpus, k) {
            Ok(candidates) => candidates,
            Err(e) => {
                debug!(error = %e, "vectorization failed, using frequency fallback");
                return frequency::top_keywords(corpus, k);
            }
        };

        match self.gate_candidates(candidates, k) {
            Ok(topics) => {
                info!(topics = topics.len(), documents = corpus.len(), "extracted topics");
                topics
            }
            Err(e) => {
                debug!(error = %e, "statistical result discarded, using frequency fallback");
                frequency::top_keywords(corpus, k)
            }
        }
    }

    /// Build the term matrix and take the top `candidate_factor * k`
    /// terms by mean score, excluding non-positive means.
    fn ranked_candidates(
        &self,
        corpus: &[String],
        k: usize,
    ) -> Result<Vec<String>, VectorizeError> {
        let vectorizer = Vectorizer {
            min_df: self.config.min_df(corpus.len()),
            max_df: self.config.max_df,
        };
        let matrix = vectorizer.fit(corpus, vocab::combined_denylist())?;
        Ok(rank_by_mean_score(&matrix, k * self.config.candidate_factor))
    }

    /// Apply both quality gates and the quality floor.
    fn gate_candidates(
        &self,
        candidates: Vec<String>,
        k: usize,
    ) -> Result<Vec<String>, InsufficientQuality> {
        let survivors: Vec<String> = candidates
            .into_iter()
            .filter(|candidate| passes_candidate_gate(candidate))
            .take(k)
            .filter(|candidate| !contains_garbage_word(candidate))
            .collect();

        let floor = k / self.config.quality_floor_divisor.max(1);
        if survivors.len() < floor {
            return Err(InsufficientQuality {
                kept: survivors.len(),
                requested: k,
            });
        }
        Ok(survivors)
    }
}

impl TopicExtractor for TfIdfTopicExtractor {
    fn top_topics(&self, corpus: &[String], k: usize) -> Vec<String> {
        TfIdfTopicExtractor::top_topics(self, corpus, k)
    }
}

/// Terms by mean score descending, ties broken by term order, capped at
/// `limit`.
fn rank_by_mean_score(matrix: &TermMatrix, limit: usize) -> Vec<String> {
    let means = matrix.mean_scores();
    let mut ranked: Vec<(usize, f64)> = means
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, score)| score > 0.0)
        .collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| matrix.vocabulary()[a.0].cmp(&matrix.vocabulary()[b.0]))
    });
    ranked
        .into_iter()
        .take(limit)
        .map(|(i, _)| matrix.vocabulary()[i].clone())
        .collect()
}

/// Gate 1 — per-candidate rejection: any garbage substring anywhere in
/// the candidate, short or digit-bearing candidates, and the exact-match
/// reject set.
fn passes_candidate_gate(candidate: &str) -> bool {
    if vocab::has_garbage_substring(candidate) {
        return false;
    }
    candidate.chars().count() > 1
        && !candidate.chars().any(char::is_numeric)
        && !EXACT_REJECTS.contains(&candidate)
}

/// Gate 2 — re-validation after bigram splitting: reject the whole
/// candidate when any of its whitespace-separated words is a garbage
/// token. Exact word match here, so bigrams that merely contain a short
/// garbage substring are not over-rejected by this gate.
fn contains_garbage_word(candidate: &str) -> bool {
    candidate.split_whitespace().any(vocab::is_garbage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_gate_rejects_garbage_substrings() {
        // "in" is in the garbage table, so the substring scan fires
        assert!(!passes_candidate_gate("machine learning"));
        assert!(!passes_candidate_gate("nbsp"));
        assert!(passes_candidate_gate("딥러닝 모델"));
        assert!(passes_candidate_gate("반도체"));
    }

    #[test]
    fn candidate_gate_rejects_exact_set_and_digits() {
        assert!(!passes_candidate_gate("ai"));
        assert!(!passes_candidate_gate("rss"));
        assert!(!passes_candidate_gate("covid19"));
        assert!(!passes_candidate_gate("2024"));
        assert!(!passes_candidate_gate("x"));
    }

    #[test]
    fn garbage_word_check_splits_bigrams() {
        assert!(contains_garbage_word("기술 rss"));
        assert!(contains_garbage_word("feed 분석"));
        assert!(!contains_garbage_word("기술 분석"));
        // whole-word semantics: containing a garbage substring is fine here
        assert!(!contains_garbage_word("mainstream"));
    }

    #[test]
    fn quality_floor_triggers_on_small_survivor_sets() {
        let extractor = TfIdfTopicExtractor::default();
        let candidates = vec!["기술".to_string(), "nbsp".to_string()];
        let err = extractor.gate_candidates(candidates, 10).unwrap_err();
        assert_eq!(err.kept, 1);
        assert_eq!(err.requested, 10);
    }

    #[test]
    fn zero_k_is_not_a_quality_failure() {
        let extractor = TfIdfTopicExtractor::default();
        let topics = extractor.gate_candidates(Vec::new(), 0).unwrap();
        assert!(topics.is_empty());
    }
}
