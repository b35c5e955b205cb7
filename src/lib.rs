// Gleaner: topic and keyword extraction for Korean/English web text.
//
// This is the library root. Collectors hand the pipeline raw document
// strings (news, blog posts, paper abstracts); the pipeline hands back
// cleaned text and ranked topic lists for the chart, wordcloud, and UI
// layers to consume. Everything here is synchronous and free of side
// effects apart from tracing.

pub mod config;
pub mod document;
pub mod text;
pub mod topics;
