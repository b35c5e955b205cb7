// Term-importance matrix construction.
//
// Builds the TF-IDF weighted matrix the statistical extractor ranks from:
// unigrams and bigrams over runs of two or more Hangul/Latin letters,
// document-frequency bounds pruning both rare and ubiquitous terms, rows
// L2-normalized per document. Denylisted words are dropped before bigram
// formation, so a bigram never carries a denylisted word — the same
// behavior a stop-word-aware n-gram analyzer has.
//
// A vectorizer is call-scoped: build one, fit it on one corpus, drop it.
// Nothing is cached between corpora.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::text::{is_hangul_or_latin, is_word_char};

/// Recoverable failures while fitting the term matrix. The extractor
/// routes every variant to the frequency fallback.
#[derive(Debug, Error)]
pub enum VectorizeError {
    #[error("max_df {max_df} covers fewer documents than min_df {min_df}")]
    DfBoundsConflict { min_df: usize, max_df: f64 },
    #[error("vocabulary is empty after document-frequency pruning")]
    EmptyVocabulary,
}

/// TF-IDF vectorizer with absolute `min_df` and fractional `max_df`
/// document-frequency bounds.
pub struct Vectorizer {
    pub min_df: usize,
    pub max_df: f64,
}

/// The fitted matrix: a sorted vocabulary and one sparse weight row per
/// document.
#[derive(Debug)]
pub struct TermMatrix {
    vocabulary: Vec<String>,
    rows: Vec<Vec<(usize, f64)>>,
    doc_count: usize,
}

impl Vectorizer {
    /// Fit the matrix over a corpus, excluding `denylist` words from the
    /// candidate vocabulary.
    pub fn fit(
        &self,
        corpus: &[String],
        denylist: &HashSet<String>,
    ) -> Result<TermMatrix, VectorizeError> {
        let n = corpus.len();
        let max_doc_count = self.max_df * n as f64;
        if max_doc_count < self.min_df as f64 {
            return Err(VectorizeError::DfBoundsConflict {
                min_df: self.min_df,
                max_df: self.max_df,
            });
        }

        // Term counts per document, unigrams and bigrams together.
        let doc_terms: Vec<HashMap<String, usize>> = corpus
            .iter()
            .map(|doc| ngram_counts(doc, denylist))
            .collect();

        // Document frequency per term.
        let mut df: HashMap<&str, usize> = HashMap::new();
        for terms in &doc_terms {
            for term in terms.keys() {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        // Prune outside the frequency bounds; sort so term order (and
        // therefore tie-breaking downstream) is deterministic.
        let mut vocabulary: Vec<String> = df
            .iter()
            .filter(|&(_, &d)| d >= self.min_df && d as f64 <= max_doc_count)
            .map(|(term, _)| term.to_string())
            .collect();
        vocabulary.sort();
        if vocabulary.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }

        let index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        // Smoothed inverse document frequency: ln((1 + n) / (1 + df)) + 1.
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|term| {
                let d = df[term.as_str()] as f64;
                ((1.0 + n as f64) / (1.0 + d)).ln() + 1.0
            })
            .collect();

        let rows: Vec<Vec<(usize, f64)>> = doc_terms
            .iter()
            .map(|terms| {
                let mut row: Vec<(usize, f64)> = terms
                    .iter()
                    .filter_map(|(term, &count)| {
                        index
                            .get(term.as_str())
                            .map(|&i| (i, count as f64 * idf[i]))
                    })
                    .collect();
                l2_normalize(&mut row);
                row.sort_by_key(|&(i, _)| i);
                row
            })
            .collect();

        Ok(TermMatrix {
            vocabulary,
            rows,
            doc_count: n,
        })
    }
}

impl TermMatrix {
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Arithmetic mean weight of each vocabulary term across all
    /// documents; documents that lack the term contribute zero.
    pub fn mean_scores(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.vocabulary.len()];
        for row in &self.rows {
            for &(i, weight) in row {
                sums[i] += weight;
            }
        }
        for sum in &mut sums {
            *sum /= self.doc_count as f64;
        }
        sums
    }
}

fn l2_normalize(row: &mut [(usize, f64)]) {
    let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, w) in row.iter_mut() {
            *w /= norm;
        }
    }
}

/// Lowercase the document and keep maximal word-character runs that are
/// wholly two or more Hangul/Latin letters and not denylisted. A letter
/// run glued to a digit or underscore is not a token.
fn tokenize(doc: &str, denylist: &HashSet<String>) -> Vec<String> {
    doc.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|run| run.chars().count() >= 2 && is_hangul_or_latin(run))
        .filter(|run| !denylist.contains(*run))
        .map(str::to_string)
        .collect()
}

fn ngram_counts(doc: &str, denylist: &HashSet<String>) -> HashMap<String, usize> {
    let tokens = tokenize(doc, denylist);
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in &tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    for pair in tokens.windows(2) {
        *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(corpus: &[&str], min_df: usize, max_df: f64) -> Result<TermMatrix, VectorizeError> {
        let corpus: Vec<String> = corpus.iter().map(|s| s.to_string()).collect();
        let denylist = crate::text::vocab::combined_denylist();
        Vectorizer { min_df, max_df }.fit(&corpus, denylist)
    }

    #[test]
    fn tokenize_drops_digit_adjacent_runs() {
        let denylist = HashSet::new();
        assert_eq!(
            tokenize("abc de3fg 한국어", &denylist),
            vec!["abc".to_string(), "한국어".to_string()]
        );
    }

    #[test]
    fn bigrams_bridge_removed_denylist_words() {
        let denylist: HashSet<String> = ["많은".to_string()].into();
        let counts = ngram_counts("데이터 많은 분석", &denylist);
        assert!(counts.contains_key("데이터 분석"));
        assert!(!counts.keys().any(|t| t.contains("많은")));
    }

    #[test]
    fn single_document_conflicts_df_bounds() {
        let err = fit(&["인공지능 기술"], 1, 0.8).unwrap_err();
        assert!(matches!(err, VectorizeError::DfBoundsConflict { .. }));
    }

    #[test]
    fn ubiquitous_terms_are_pruned() {
        // "공통" appears in all five documents: df 5 > 0.8 * 5
        let m = fit(
            &[
                "공통 하나만",
                "공통 둘째로",
                "공통 셋째로",
                "공통 넷째로",
                "공통 다섯째",
            ],
            1,
            0.8,
        )
        .unwrap();
        assert!(!m.vocabulary().iter().any(|t| t == "공통"));
        assert!(m.vocabulary().iter().any(|t| t == "둘째로"));
    }

    #[test]
    fn rare_terms_below_min_df_are_pruned() {
        let m = fit(
            &["반복 단어", "반복 단어", "희귀 토큰", "별개 내용"],
            2,
            0.8,
        )
        .unwrap();
        assert!(m.vocabulary().iter().any(|t| t == "반복"));
        assert!(!m.vocabulary().iter().any(|t| t == "희귀"));
    }

    #[test]
    fn garbage_only_corpus_yields_empty_vocabulary() {
        let err = fit(&["nbsp href www", "rss feed atom"], 1, 0.8).unwrap_err();
        assert!(matches!(err, VectorizeError::EmptyVocabulary));
    }

    #[test]
    fn rows_are_l2_normalized() {
        let m = fit(&["알파 베타", "감마 델타"], 1, 0.8).unwrap();
        assert_eq!(m.doc_count(), 2);
        for row in &m.rows {
            let norm: f64 = row.iter().map(|(_, w)| w * w).sum();
            assert!((norm - 1.0).abs() < 1e-9, "row norm^2 was {norm}");
        }
    }

    #[test]
    fn mean_scores_average_over_all_documents() {
        // Two documents, three terms each (two unigrams + one bigram),
        // every term in exactly one document: mean = 1 / (sqrt(3) * 2).
        let m = fit(&["알파 베타", "감마 델타"], 1, 0.8).unwrap();
        let expected = 1.0 / (3.0_f64.sqrt() * 2.0);
        for score in m.mean_scores() {
            assert!((score - expected).abs() < 1e-9);
        }
    }
}
