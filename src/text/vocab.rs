// Vocabulary tables — the fixed denylists every stage filters against.
//
// STOPWORDS holds functional words: Korean particles, pronouns, numerals
// and light verbs, plus the stock English list from the stop-words crate.
// GARBAGE_TOKENS is the curated markup/web vocabulary that RSS feeds and
// scraped HTML leak into collected text — tag and attribute names, feed
// elements, platform names, UI chrome, calendar words. It is a hand-kept
// denylist, not something derived from data.
//
// Both tables are built once, live for the process lifetime, and are only
// ever compared against lowercased tokens.

use std::collections::HashSet;
use std::sync::OnceLock;

use stop_words::{get, LANGUAGE};

/// Korean functional words. Single-syllable entries are listed even though
/// the length filter would drop them anyway; the table is the one place
/// that states what counts as a non-content word.
const KOREAN_STOPWORDS: &[&str] = &[
    // demonstratives and pronouns
    "그", "이", "저", "그것", "이것", "저것", "여기", "저기", "거기", "이곳", "저곳",
    "나", "너", "우리", "그들", "당신", "자신",
    // bound nouns and counters
    "것", "때", "곳", "일", "번", "가지", "개", "년", "월", "시", "분", "초",
    // native numerals
    "하나", "둘", "셋", "네", "다섯", "여섯", "일곱", "여덟", "아홉", "열",
    // particles
    "는", "은", "가", "을", "를", "에", "의", "로", "와", "과", "도", "만", "부터", "까지",
    // light verbs and adjectives
    "하다", "되다", "있다", "없다", "같다", "다르다", "많다", "적다",
    "크다", "작다", "좋다", "나쁘다", "새로", "오래",
    // connectives
    "또", "그리고", "그러나", "하지만", "그래서", "따라서", "그런데", "그러면",
    // degree adverbs
    "매우", "너무", "정말", "진짜", "아주", "꽤", "상당히", "조금", "약간",
    // frequency adverbs
    "항상", "가끔", "자주", "때때로", "언제나", "절대", "결코",
    // quantifiers
    "모든", "각", "어떤", "전체", "일부", "대부분",
];

/// English function words the stock list is missing.
const ENGLISH_EXTRA_STOPWORDS: &[&str] =
    &["would", "could", "may", "might", "must", "shall", "us"];

/// The canonical garbage-token denylist.
///
/// Exposed as a slice because the extractor's first quality gate scans it
/// for substring containment; short entries ("in", "co", "id") therefore
/// reject any candidate that contains them anywhere, not just as whole
/// words. "ai" is intentionally absent — it is a content token here.
pub const GARBAGE_LIST: &[&str] = &[
    // HTML entities, tags, attributes
    "nbsp", "quot", "amp", "lt", "gt", "font", "href", "br", "span", "div", "class", "id",
    "style", "script", "css", "js", "jquery", "ajax", "json", "xml", "html", "htm", "php",
    "asp", "jsp",
    // URLs and domains
    "http", "https", "www", "com", "net", "org", "co", "kr", "link", "url", "src", "img",
    // search engines and platforms
    "google", "news", "naver", "daum", "yahoo", "bing", "search", "youtube", "facebook",
    "twitter", "instagram", "linkedin", "github", "stackoverflow", "reddit", "quora",
    // web UI chrome
    "click", "view", "more", "read", "see", "show", "hide", "open", "close", "button",
    "menu", "nav", "navigation", "header", "footer", "sidebar", "top", "bottom", "left",
    "right", "center", "middle", "first", "last", "prev", "next", "previous", "back",
    "forward", "up", "down",
    // generic content words
    "page", "site", "web", "blog", "post", "article", "content", "text", "data", "info",
    "ad", "ads", "advertisement", "banner", "popup", "modal", "dialog", "window", "tab",
    // legal boilerplate
    "copyright", "reserved", "rights", "terms", "privacy", "policy", "cookie", "gdpr",
    // account/site navigation
    "home", "about", "contact", "help", "faq", "support", "login", "register", "signup",
    "signin", "logout", "profile", "account", "settings", "preferences", "options",
    // calendar and clock words
    "today", "yesterday", "tomorrow", "week", "month", "year", "time", "date", "day",
    "am", "pm", "morning", "afternoon", "evening", "night", "hour", "minute", "second",
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
    // tech vocabulary
    "api", "sdk", "framework", "library", "module", "package", "version", "update",
    "download", "install", "setup", "config", "configuration", "setting", "option",
    // general web terms
    "online", "offline", "internet", "website", "webpage", "browser", "chrome", "firefox",
    "safari", "edge", "mobile", "desktop", "tablet", "phone", "device",
    // news and media
    "media", "press", "journal", "magazine", "newspaper", "tv", "radio", "podcast",
    "video", "audio", "image", "photo", "picture", "graphic", "chart", "graph",
    // social media
    "social", "share", "like", "comment", "reply", "follow", "unfollow", "subscribe",
    "unsubscribe", "notification", "alert", "message", "chat", "forum", "community",
    // email
    "email", "mail", "send", "receive", "inbox", "outbox", "spam", "trash", "draft",
    // files
    "file", "folder", "directory", "upload", "save", "delete", "copy", "paste", "cut",
    "edit", "create", "new", "old", "recent", "latest", "updated",
    // state words
    "active", "inactive", "enabled", "disabled", "on", "off", "yes", "no", "true",
    "false", "success", "error", "warning", "debug", "test", "demo",
    // size and quantity
    "size", "small", "medium", "large", "big", "tiny", "huge", "massive", "mini",
    "micro", "macro", "full", "empty", "half", "quarter", "double", "triple",
    // colors
    "color", "colour", "red", "green", "blue", "yellow", "orange", "purple", "pink",
    "black", "white", "gray", "grey", "brown", "dark", "light", "bright", "dim",
    // places
    "location", "place", "position", "area", "region", "country", "city", "state",
    "address", "street", "road", "avenue", "boulevard", "lane", "drive", "way",
    // directions
    "north", "south", "east", "west", "northeast", "northwest", "southeast", "southwest",
    "front", "side", "corner",
    // number words
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "hundred", "thousand", "million", "billion", "trillion", "third", "fourth", "fifth",
    "sixth", "seventh", "eighth", "ninth", "tenth", "final",
    // affixes that show up as loose tokens
    "pre", "anti", "pro", "non", "un", "re", "over", "under", "out", "in", "auto",
    "self", "super", "ultra", "mega",
    // function words the feeds leave behind
    "etc", "etcetera", "and", "or", "but", "so", "if", "then", "else", "when", "where",
    "how", "why", "what", "who", "which", "that", "this", "these", "those", "here",
    "there", "everywhere", "nowhere", "somewhere", "anywhere",
    // RSS/Atom feed elements
    "rss", "feed", "atom", "syndication", "channel", "item", "description", "pubdate",
    "guid", "category", "enclosure", "articles", "target", "oc",
    // operating systems
    "ios", "android", "windows", "mac", "linux",
];

static STOPWORDS: OnceLock<HashSet<String>> = OnceLock::new();
static GARBAGE_TOKENS: OnceLock<HashSet<&'static str>> = OnceLock::new();
static DENYLIST: OnceLock<HashSet<String>> = OnceLock::new();

/// Functional/grammatical words, Korean and English, all lowercase.
pub fn stopwords() -> &'static HashSet<String> {
    STOPWORDS.get_or_init(|| {
        let mut words: HashSet<String> = get(LANGUAGE::English).into_iter().collect();
        words.extend(KOREAN_STOPWORDS.iter().map(|w| w.to_string()));
        words.extend(ENGLISH_EXTRA_STOPWORDS.iter().map(|w| w.to_string()));
        words
    })
}

/// Markup/web-artifact vocabulary, for exact-match membership checks.
pub fn garbage_tokens() -> &'static HashSet<&'static str> {
    GARBAGE_TOKENS.get_or_init(|| GARBAGE_LIST.iter().copied().collect())
}

/// STOPWORDS ∪ GARBAGE_TOKENS — what the normalizer, the vectorizer, and
/// the frequency counters all filter against.
pub fn combined_denylist() -> &'static HashSet<String> {
    DENYLIST.get_or_init(|| {
        let mut all = stopwords().clone();
        all.extend(GARBAGE_LIST.iter().map(|w| w.to_string()));
        all
    })
}

pub fn is_stopword(token: &str) -> bool {
    stopwords().contains(token)
}

pub fn is_garbage(token: &str) -> bool {
    garbage_tokens().contains(token)
}

pub fn in_denylist(token: &str) -> bool {
    combined_denylist().contains(token)
}

/// Substring scan for the extractor's first quality gate: does the
/// candidate contain any garbage token anywhere in it?
pub fn has_garbage_substring(candidate: &str) -> bool {
    GARBAGE_LIST.iter().any(|g| candidate.contains(g))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_list_has_no_duplicates() {
        let set: HashSet<&str> = GARBAGE_LIST.iter().copied().collect();
        assert_eq!(
            set.len(),
            GARBAGE_LIST.len(),
            "duplicate entries in GARBAGE_LIST"
        );
    }

    #[test]
    fn tables_are_lowercase() {
        for word in GARBAGE_LIST {
            assert_eq!(*word, word.to_lowercase().as_str());
        }
        for word in stopwords() {
            assert_eq!(*word, word.to_lowercase());
        }
    }

    #[test]
    fn known_members() {
        assert!(is_garbage("nbsp"));
        assert!(is_garbage("href"));
        assert!(is_garbage("rss"));
        assert!(is_garbage("pubdate"));
        assert!(is_stopword("the"));
        assert!(is_stopword("그리고"));
        assert!(is_stopword("있다"));
        assert!(in_denylist("nbsp"));
        assert!(in_denylist("그리고"));
    }

    #[test]
    fn ai_is_not_denylisted() {
        // "ai" is rejected by the extractor's exact-match set only; the
        // normalizer keeps it.
        assert!(!is_garbage("ai"));
        assert!(!is_stopword("ai"));
        assert!(!in_denylist("ai"));
    }

    #[test]
    fn substring_scan_matches_anywhere() {
        assert!(has_garbage_substring("nbsp"));
        assert!(has_garbage_substring("기술 rss"));
        // "in" is a garbage entry, so any candidate containing it matches
        assert!(has_garbage_substring("machine learning"));
        assert!(!has_garbage_substring("딥러닝 모델"));
    }
}
