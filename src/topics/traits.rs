// Extraction seams — swap points for the orchestrating system.
//
// TopicExtractor lets the orchestrator switch ranking strategies
// (statistical vs. plain frequency) without touching the rest of the
// pipeline. Segmenter is the boundary to an external morphological
// analyzer: when one is available it supplies (word, tag) pairs and the
// keyword counters consume them; nothing in this crate implements the
// analysis itself.

use serde::{Deserialize, Serialize};

/// Strategy for ranking topics over a corpus of cleaned documents.
pub trait TopicExtractor {
    /// Rank up to `k` topic strings. Degradation is internal: an empty or
    /// degenerate corpus yields a short or empty list, never an error.
    fn top_topics(&self, corpus: &[String], k: usize) -> Vec<String>;
}

/// A (word, part-of-speech) pair produced by an external analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub word: String,
    pub pos: String,
}

/// External morphological analysis capability.
pub trait Segmenter {
    /// Split text into tagged segments.
    fn segments(&self, text: &str) -> Vec<Segment>;
}
