// Text processing — normalization and the vocabulary tables behind it.

pub mod normalize;
pub mod vocab;

/// A precomposed Hangul syllable (U+AC00..=U+D7A3).
pub fn is_hangul_syllable(c: char) -> bool {
    ('가'..='힣').contains(&c)
}

/// Characters that survive the punctuation sweep: alphanumerics (any
/// script) and underscore. Everything else becomes a token boundary.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True when the token consists solely of Hangul syllables or Latin
/// letters. Tokens in any other script are rejected wholesale.
pub fn is_hangul_or_latin(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| is_hangul_syllable(c) || c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hangul_syllable_range() {
        assert!(is_hangul_syllable('가'));
        assert!(is_hangul_syllable('힣'));
        assert!(is_hangul_syllable('한'));
        assert!(!is_hangul_syllable('a'));
        // Jamo are not precomposed syllables
        assert!(!is_hangul_syllable('ㄱ'));
    }

    #[test]
    fn hangul_or_latin_rejects_other_scripts() {
        assert!(is_hangul_or_latin("한글"));
        assert!(is_hangul_or_latin("latin"));
        assert!(is_hangul_or_latin("한글mix"));
        assert!(!is_hangul_or_latin("привет"));
        assert!(!is_hangul_or_latin("数字"));
        assert!(!is_hangul_or_latin("ab1"));
        assert!(!is_hangul_or_latin("a_b"));
        assert!(!is_hangul_or_latin(""));
    }
}
