//! Document-level aggregation: segment, classify, bucket.

use rtilens_core::{CLASSIFY_MIN_CHARS, StructuredResponse, split_sentences};
use tracing::debug;

use crate::classifier::SentenceClassifier;

impl SentenceClassifier {
    /// Classify every sentence of `text` into a [`StructuredResponse`].
    ///
    /// Section references are detected once over the whole document,
    /// independently of the per-sentence detection.
    pub fn classify_document(&self, text: &str) -> StructuredResponse {
        let section_references = self.sections().detect(text);
        let sentences = split_sentences(text, CLASSIFY_MIN_CHARS);
        debug!(
            sentences = sentences.len(),
            sections = section_references.len(),
            "classifying document"
        );

        StructuredResponse::new(
            text,
            section_references,
            sentences.iter().map(|s| self.classify(s)),
        )
    }
}

#[cfg(test)]
mod tests {
    use rtilens_core::{Category, Section};

    use super::*;

    const SAMPLE: &str = "\
The information is enclosed as per records. \
Information cannot be provided as it is exempt under Section 8 of the Act. \
Your application has been transferred to the concerned department for necessary action. \
The records are not maintained and the request is vague. \
Thank you for your letter regarding the matter.";

    #[test]
    fn buckets_every_sentence_once() {
        let clf = SentenceClassifier::default();
        let response = clf.classify_document(SAMPLE);
        let segmented = split_sentences(SAMPLE, CLASSIFY_MIN_CHARS);

        let stats = response.stats();
        assert_eq!(stats.total_sentences, segmented.len());
        for sentence in &segmented {
            let hits = response.iter().filter(|c| &c.text == sentence).count();
            assert_eq!(hits, 1, "{sentence:?} should be in exactly one bucket");
        }
    }

    #[test]
    fn sample_categories() {
        let response = SentenceClassifier::default().classify_document(SAMPLE);
        assert_eq!(response.informative.len(), 1);
        assert_eq!(response.denial.len(), 1);
        assert_eq!(response.procedural.len(), 1);
        assert_eq!(response.evasive.len(), 1);
        assert_eq!(response.neutral.len(), 1);
        assert_eq!(response.original_text, SAMPLE);
    }

    #[test]
    fn document_sections_detected_over_whole_text() {
        let response = SentenceClassifier::default().classify_document(SAMPLE);
        assert!(response.references_section(Section::Exemption));
        // "exempt" and "Section 8" both sit in the denial sentence.
        assert_eq!(response.section_references[&Section::Exemption].len(), 2);
    }

    #[test]
    fn repeated_sentences_are_not_deduplicated() {
        let text = "The information is enclosed herewith. The information is enclosed herewith.";
        let response = SentenceClassifier::default().classify_document(text);
        assert_eq!(response.sentences(Category::Informative).len(), 2);
    }

    #[test]
    fn empty_document() {
        let response = SentenceClassifier::default().classify_document("   ");
        let stats = response.stats();
        assert_eq!(stats.total_sentences, 0);
        assert_eq!(stats.denial_ratio, 0.0);
        assert!(response.section_references.is_empty());
    }

    #[test]
    fn idempotent() {
        let clf = SentenceClassifier::default();
        assert_eq!(clf.classify_document(SAMPLE), clf.classify_document(SAMPLE));
    }
}
