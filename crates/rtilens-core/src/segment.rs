//! Sentence segmentation tuned for Indian government correspondence.
//!
//! Splits on whitespace after `.`, `!` or `?`, except where the period ends
//! one of a closed list of abbreviations ("Mr.", "i.e.", "Sec.", "No.",
//! "Rs." ...). Each consumer passes its own minimum length: short spans are
//! dropped after trimming.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum sentence length (exclusive, in characters) for classification.
pub const CLASSIFY_MIN_CHARS: usize = 10;

/// Minimum sentence length (exclusive, in characters) for fact-anchor scoring.
pub const ANCHOR_MIN_CHARS: usize = 15;

/// Stand-in for an abbreviation's period while splitting.
const DOT_PLACEHOLDER: char = '\u{E000}';

static ABBREVIATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(Mr|Mrs|Dr|Prof|Sr|Jr|vs|etc|i\.e|e\.g|[Ss]ec|[Nn]o|Rs)\.")
        .expect("abbreviation pattern compiles")
});

static BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("boundary pattern compiles"));

/// Split `text` into trimmed sentences longer than `min_chars` characters.
///
/// Empty or whitespace-only input yields an empty vector.
pub fn split_sentences(text: &str, min_chars: usize) -> Vec<String> {
    let protected = ABBREVIATION.replace_all(text, format!("${{1}}{DOT_PLACEHOLDER}"));

    let mut sentences = Vec::new();
    let mut start = 0;
    for m in BOUNDARY.find_iter(&protected) {
        // Terminators are ASCII, so the span keeps its punctuation.
        push_sentence(&mut sentences, &protected[start..m.start() + 1], min_chars);
        start = m.end();
    }
    push_sentence(&mut sentences, &protected[start..], min_chars);

    sentences
}

fn push_sentence(out: &mut Vec<String>, span: &str, min_chars: usize) {
    let restored = span.replace(DOT_PLACEHOLDER, ".");
    let trimmed = restored.trim();
    if trimmed.chars().count() > min_chars {
        out.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminal_punctuation() {
        let text = "The information is enclosed herewith. Was the fee paid on time? Yes it was paid!";
        let sentences = split_sentences(text, CLASSIFY_MIN_CHARS);
        assert_eq!(
            sentences,
            vec![
                "The information is enclosed herewith.",
                "Was the fee paid on time?",
                "Yes it was paid!",
            ]
        );
    }

    #[test]
    fn protects_abbreviations() {
        let text = "Dr. Sharma replied under Sec. 7 of the Act. Ref No. 45 is closed.";
        let sentences = split_sentences(text, CLASSIFY_MIN_CHARS);
        assert_eq!(
            sentences,
            vec![
                "Dr. Sharma replied under Sec. 7 of the Act.",
                "Ref No. 45 is closed.",
            ]
        );
    }

    #[test]
    fn protects_latin_abbreviations() {
        let text = "Some records, i.e. the file notings, e.g. drafts, etc. are withheld.";
        let sentences = split_sentences(text, CLASSIFY_MIN_CHARS);
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0], text);
    }

    #[test]
    fn protects_rupee_prefix() {
        let text = "A refund of Rs. 45,678 was credited on 25th October, 2024.";
        let sentences = split_sentences(text, ANCHOR_MIN_CHARS);
        assert_eq!(sentences, vec![text]);
    }

    #[test]
    fn word_internal_no_is_not_an_abbreviation() {
        let text = "Please see the attached info. Records are maintained centrally.";
        let sentences = split_sentences(text, CLASSIFY_MIN_CHARS);
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn min_length_is_exclusive() {
        // "Ten chars." is exactly ten characters and is dropped.
        let text = "Ten chars. Elevenchar. Short.";
        let sentences = split_sentences(text, 10);
        assert_eq!(sentences, vec!["Elevenchar."]);
    }

    #[test]
    fn consumers_use_different_thresholds() {
        let text = "Fee is due now. The information sought is enclosed.";
        assert_eq!(split_sentences(text, CLASSIFY_MIN_CHARS).len(), 2);
        assert_eq!(split_sentences(text, ANCHOR_MIN_CHARS).len(), 1);
    }

    #[test]
    fn empty_and_whitespace_input() {
        assert!(split_sentences("", CLASSIFY_MIN_CHARS).is_empty());
        assert!(split_sentences("   \n\t  ", CLASSIFY_MIN_CHARS).is_empty());
    }

    #[test]
    fn newlines_between_sentences_split() {
        let text = "First paragraph ends here.\n\nSecond paragraph begins here.";
        assert_eq!(split_sentences(text, CLASSIFY_MIN_CHARS).len(), 2);
    }
}
