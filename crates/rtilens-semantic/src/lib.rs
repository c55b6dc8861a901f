//! Semantic layer: rule-based sentence classification and fact-anchor extraction.
//!
//! The free functions use the built-in lexicons. Build a
//! [`SentenceClassifier`] or [`FactAnchorScorer`] from an
//! [`AnalysisConfig`](rtilens_core::AnalysisConfig) to substitute your own.

mod aggregate;
pub mod anchors;
pub mod classifier;

use std::sync::LazyLock;

use rtilens_core::StructuredResponse;
use rtilens_core::config::DEFAULT_ANCHOR_COUNT;

pub use anchors::{FactAnchorScore, FactAnchorScorer, FactKind, format_fact_anchors};
pub use classifier::{CategoryScore, SentenceClassifier};

static CLASSIFIER: LazyLock<SentenceClassifier> = LazyLock::new(SentenceClassifier::default);
static SCORER: LazyLock<FactAnchorScorer> = LazyLock::new(FactAnchorScorer::default);

/// Number of anchors requested when the caller has no preference.
pub const DEFAULT_TOP_N: usize = DEFAULT_ANCHOR_COUNT;

/// Classify a cleaned RTI response with the built-in lexicon.
pub fn classify_document(text: &str) -> StructuredResponse {
    CLASSIFIER.classify_document(text)
}

/// Up to `top_n` fact-anchor sentences, best first, with the built-in lexicon.
pub fn extract_fact_anchors(text: &str, top_n: usize) -> Vec<String> {
    SCORER.select(text, top_n)
}

/// The `top_n` best-scoring sentences with their evidence, no threshold applied.
pub fn extract_fact_anchors_with_scores(text: &str, top_n: usize) -> Vec<FactAnchorScore> {
    let mut ranked = SCORER.rank(text);
    ranked.truncate(top_n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFUND_REPLY: &str = "\
Your income tax refund for Assessment Year 2023-24 amounting to Rs. 45,678/- was processed on 25th October, 2024. \
The refund has been credited to the bank account ending with XXXX1234 as per our records. \
The detailed internal notings and file movement records of your case cannot be provided as the disclosure \
would involve unwarranted invasion of privacy of third party officials. \
This exemption is claimed under Section 8(1)(j) of the RTI Act, 2005. \
With regard to your query about the average processing time, we regret to inform that such consolidated \
statistics are not maintained in the format requested by you.";

    #[test]
    fn entry_points_agree_with_default_components() {
        assert_eq!(
            classify_document(REFUND_REPLY),
            SentenceClassifier::default().classify_document(REFUND_REPLY)
        );
        assert_eq!(
            extract_fact_anchors(REFUND_REPLY, DEFAULT_TOP_N),
            FactAnchorScorer::default().select(REFUND_REPLY, DEFAULT_TOP_N)
        );
    }

    #[test]
    fn refund_reply_anchors_lead_with_amount_sentence() {
        let anchors = extract_fact_anchors(REFUND_REPLY, 3);
        assert_eq!(anchors.len(), 3);
        assert!(anchors[0].contains("Rs. 45,678/-"));
    }

    #[test]
    fn scored_anchors_are_bounded_and_sorted() {
        let scored = extract_fact_anchors_with_scores(REFUND_REPLY, 2);
        assert_eq!(scored.len(), 2);
        assert!(scored[0].score >= scored[1].score);
    }

    #[test]
    fn empty_document() {
        assert_eq!(classify_document("").stats().total_sentences, 0);
        assert!(extract_fact_anchors("", DEFAULT_TOP_N).is_empty());
        assert!(extract_fact_anchors_with_scores("", DEFAULT_TOP_N).is_empty());
    }

    #[test]
    fn anchors_are_idempotent() {
        assert_eq!(
            extract_fact_anchors(REFUND_REPLY, 5),
            extract_fact_anchors(REFUND_REPLY, 5)
        );
    }
}
