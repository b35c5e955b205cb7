// Document boundary types.
//
// Collectors produce either bare strings or keyed records carrying the
// raw text plus an optional pre-cleaned variant. Either shape resolves to
// a plain string here, before anything reaches the extractors — the core
// algorithms only ever see strings.

use serde::{Deserialize, Serialize};

/// A unit of input text (title+body) as produced by a collector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Document {
    /// A bare text string.
    Plain(String),
    /// A keyed record; `text_clean` wins over `text` when present.
    Keyed {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text_clean: Option<String>,
    },
}

impl Document {
    /// The string the pipeline should analyze.
    pub fn clean_text(&self) -> &str {
        match self {
            Document::Plain(text) => text,
            Document::Keyed { text, text_clean } => text_clean.as_deref().unwrap_or(text),
        }
    }
}

/// Resolve a mixed document batch into corpus strings, dropping entries
/// that resolve to empty text.
pub fn resolve_corpus(documents: &[Document]) -> Vec<String> {
    documents
        .iter()
        .map(Document::clean_text)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_resolves_to_itself() {
        let doc = Document::Plain("인공지능 기술".to_string());
        assert_eq!(doc.clean_text(), "인공지능 기술");
    }

    #[test]
    fn keyed_prefers_clean_text() {
        let doc = Document::Keyed {
            text: "<b>raw</b>".to_string(),
            text_clean: Some("정제된 텍스트".to_string()),
        };
        assert_eq!(doc.clean_text(), "정제된 텍스트");

        let doc = Document::Keyed {
            text: "원본 텍스트".to_string(),
            text_clean: None,
        };
        assert_eq!(doc.clean_text(), "원본 텍스트");
    }

    #[test]
    fn resolve_corpus_drops_empty_entries() {
        let docs = vec![
            Document::Plain("기술 동향".to_string()),
            Document::Plain(String::new()),
            Document::Keyed {
                text: "본문".to_string(),
                text_clean: Some(String::new()),
            },
        ];
        assert_eq!(resolve_corpus(&docs), vec!["기술 동향".to_string()]);
    }
}
