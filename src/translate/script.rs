/// Script detection for routing text to the right pipeline.
///
/// This is a heuristic, not a language model: Devanagari detection is exact,
/// Romanized-Hindi detection is a substring match against a short closed list
/// of function words, and false positives/negatives are acceptable.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptLabel {
    Devanagari,
    RomanizedHindi,
    Other,
}

/// Common Romanized-Hindi function words. Matched as substrings, lowercase.
const ROMAN_HINDI_MARKERS: [&str; 10] = [
    "mera", "kya", "tum", "kaise", "hai", "ho", "hun", "acha", "sab", "kyun",
];

/// Devanagari wins over everything else; the marker-word check only runs on
/// text with no Devanagari at all.
pub fn classify(text: &str) -> ScriptLabel {
    if contains_devanagari(text) {
        return ScriptLabel::Devanagari;
    }
    if is_likely_roman_hindi(text) {
        return ScriptLabel::RomanizedHindi;
    }
    ScriptLabel::Other
}

fn contains_devanagari(text: &str) -> bool {
    text.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c))
}

fn is_likely_roman_hindi(text: &str) -> bool {
    let lower = text.to_lowercase();
    ROMAN_HINDI_MARKERS.iter().any(|w| lower.contains(w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devanagari_text_is_devanagari() {
        assert_eq!(classify("नमस्ते"), ScriptLabel::Devanagari);
        assert_eq!(classify("मेरा नाम क्या है"), ScriptLabel::Devanagari);
    }

    #[test]
    fn single_devanagari_char_wins_over_latin() {
        assert_eq!(classify("hello न world"), ScriptLabel::Devanagari);
    }

    #[test]
    fn devanagari_wins_over_marker_words() {
        // "kya" would match the Romanized list, but the script check runs first
        assert_eq!(classify("kya है"), ScriptLabel::Devanagari);
    }

    #[test]
    fn marker_words_flag_roman_hindi() {
        assert_eq!(classify("mera naam kya hai"), ScriptLabel::RomanizedHindi);
        assert_eq!(classify("tum kaise ho"), ScriptLabel::RomanizedHindi);
    }

    #[test]
    fn marker_match_is_case_insensitive() {
        assert_eq!(classify("KYA baat"), ScriptLabel::RomanizedHindi);
    }

    #[test]
    fn plain_english_is_other() {
        assert_eq!(classify("hello world"), ScriptLabel::Other);
        assert_eq!(classify("good morning everyone"), ScriptLabel::Other);
    }

    #[test]
    fn empty_text_is_other() {
        assert_eq!(classify(""), ScriptLabel::Other);
    }
}
