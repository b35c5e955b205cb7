// Text normalization for topic analysis.
//
// Collectors hand this module raw title+body text straight out of RSS
// feeds and scraped pages. normalize_for_topics turns that into a
// lowercase, whitespace-joined stream of content tokens fit for the term
// matrix: entities decoded, markup/URLs/emails stripped, then every
// surviving token pushed through the stopword and garbage-token filters.
//
// The function is total — any input, including empty or markup-only text,
// produces a (possibly empty) string, never an error. It is also a fixed
// point: running it over its own output changes nothing.

use std::sync::OnceLock;

use regex_lite::Regex;
use tracing::debug;

use crate::text::vocab;
use crate::text::{is_hangul_or_latin, is_word_char};

fn tag_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").unwrap())
}

fn entity_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"&[a-zA-Z0-9#]+;").unwrap())
}

fn url_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://\S+").unwrap())
}

fn www_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"www\.\S+").unwrap())
}

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap())
}

/// Clean raw text into a whitespace-joined sequence of content tokens.
///
/// The steps run in a fixed order: decode HTML entities, strip tags and
/// residual entities, strip URLs and email addresses, map every
/// non-word character to a space, then lowercase, split, and drop every
/// token that is short, numeric, denylisted, or not purely Hangul/Latin.
pub fn normalize_for_topics(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let original_len = text.chars().count();

    let decoded = html_escape::decode_html_entities(text);
    let stripped = tag_pattern().replace_all(&decoded, "");
    let stripped = entity_pattern().replace_all(&stripped, "");
    let stripped = url_pattern().replace_all(&stripped, "");
    let stripped = www_pattern().replace_all(&stripped, "");
    let stripped = email_pattern().replace_all(&stripped, "");

    // Everything that is not a word character becomes a space; tokens are
    // whatever survives between spaces.
    let spaced: String = stripped
        .chars()
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .collect();
    let lowered = spaced.to_lowercase();

    let tokens: Vec<&str> = lowered.split_whitespace().filter(|t| keep_token(t)).collect();
    let result = tokens.join(" ");

    // Advisory only: long inputs that filter down to almost nothing
    // usually mean a feed served markup instead of prose.
    if original_len > 100 {
        let kept = result.chars().count();
        if (kept as f64) < original_len as f64 * 0.1 {
            debug!(
                original = original_len,
                kept, "normalization removed most of the input"
            );
        }
    }

    result
}

/// Token filter: length > 1, no digits, not denylisted, Hangul/Latin only.
fn keep_token(token: &str) -> bool {
    if token.chars().count() <= 1 {
        return false;
    }
    if token.chars().any(char::is_numeric) {
        return false;
    }
    if vocab::in_denylist(token) {
        return false;
    }
    is_hangul_or_latin(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_input() {
        assert_eq!(normalize_for_topics(""), "");
        assert_eq!(normalize_for_topics("   \t\n  "), "");
    }

    #[test]
    fn strips_markup_and_decodes_entities() {
        let out = normalize_for_topics("<b>인공지능</b> &amp; 머신러닝 기술");
        assert_eq!(out, "인공지능 머신러닝 기술");
    }

    #[test]
    fn strips_urls_and_emails() {
        let out = normalize_for_topics(
            "자세한 내용은 https://example.com/a?b=1 또는 contact@example.com 참고",
        );
        assert!(!out.contains("https"));
        assert!(!out.contains("example"));
        assert!(!out.contains("com"));
        assert!(!out.contains("contact"));
        assert!(out.contains("자세한"));
        assert!(out.contains("참고"));
    }

    #[test]
    fn drops_digit_bearing_tokens() {
        let out = normalize_for_topics("covid19 2024 테스트 g7");
        assert_eq!(out, "테스트");
    }

    #[test]
    fn drops_short_and_denylisted_tokens() {
        let out = normalize_for_topics("a b the nbsp href 그리고 딥러닝");
        assert_eq!(out, "딥러닝");
    }

    #[test]
    fn keeps_ai() {
        let out = normalize_for_topics("ai 기술 발전");
        assert_eq!(out, "ai 기술 발전");
    }

    #[test]
    fn rejects_mixed_script_and_underscore_tokens() {
        let out = normalize_for_topics("снег user_name 한글");
        assert_eq!(out, "한글");
    }

    #[test]
    fn numeric_entity_decodes_to_text() {
        // &#54620;&#44544; is 한글
        let out = normalize_for_topics("&#54620;&#44544; 처리");
        assert_eq!(out, "한글 처리");
    }
}
