//! Keyword-based sentence classifier with section-aware adjustments.
//!
//! Each scored category gets the fraction of its keyword list found in the
//! sentence, so long and short lists compete on the same `[0, 1]` scale.
//! Section evidence then adds fixed bonuses: an exemption reference pushes
//! towards Denial, a time-limit reference or a transfer towards Procedural.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use rtilens_core::{
    AnalysisConfig, Category, ClassifiedSentence, ConfigError, KeywordLexicon, Section,
    SectionPatterns,
};

/// Added to Denial when the exemption section is referenced.
pub const EXEMPTION_BONUS: f64 = 0.3;

/// Added to Procedural on a time-limit reference or a transfer.
pub const PROCEDURAL_BONUS: f64 = 0.2;

/// Winning scores below this fall back to Neutral.
pub const NEUTRAL_FLOOR: f64 = 0.1;

/// Flat confidence reported for the Neutral fallback.
pub const NEUTRAL_CONFIDENCE: f64 = 0.5;

/// Scored categories in tie-break order: on an exact tie the earlier one wins.
const SCORED: [Category; 4] = [
    Category::Denial,
    Category::Informative,
    Category::Procedural,
    Category::Evasive,
];

static TRANSFER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)transfer|forward").expect("transfer pattern compiles"));

/// One category's raw evidence for a sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    pub category: Category,
    pub score: f64,
    pub keywords: Vec<String>,
}

struct KeywordList {
    category: Category,
    /// (as configured, lowercased)
    keywords: Vec<(String, String)>,
}

/// Classifies single sentences into [`Category`] values.
pub struct SentenceClassifier {
    lists: Vec<KeywordList>,
    sections: SectionPatterns,
}

impl Default for SentenceClassifier {
    fn default() -> Self {
        Self::new(&KeywordLexicon::default(), SectionPatterns::default())
    }
}

impl SentenceClassifier {
    pub fn new(lexicon: &KeywordLexicon, sections: SectionPatterns) -> Self {
        let lists = SCORED
            .iter()
            .map(|&category| KeywordList {
                category,
                keywords: lexicon
                    .keywords(category)
                    .iter()
                    .map(|k| (k.clone(), k.to_lowercase()))
                    .collect(),
            })
            .collect();
        Self { lists, sections }
    }

    pub fn from_config(config: &AnalysisConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(&config.keywords, config.section_patterns()?))
    }

    /// The section table used for per-sentence and document detection.
    pub fn sections(&self) -> &SectionPatterns {
        &self.sections
    }

    /// Adjusted score per scored category, in tie-break order.
    pub fn category_scores(&self, sentence: &str) -> Vec<CategoryScore> {
        let refs = self.sections.detect(sentence);
        self.scores_with_sections(sentence, &refs.keys().copied().collect::<BTreeSet<_>>())
    }

    /// Classify one sentence. Whitespace-only input is Neutral with confidence 0.
    pub fn classify(&self, sentence: &str) -> ClassifiedSentence {
        let text = sentence.trim();
        if text.is_empty() {
            return ClassifiedSentence::neutral(text, 0.0);
        }

        let sections: BTreeSet<Section> = self.sections.detect(text).into_keys().collect();
        let scores = self.scores_with_sections(text, &sections);

        let mut best_category = Category::Neutral;
        let mut best_score = 0.0;
        let mut best_keywords = Vec::new();
        for s in scores {
            if s.score > best_score {
                best_category = s.category;
                best_score = s.score;
                best_keywords = s.keywords;
            }
        }

        // Near-miss keywords are kept as evidence; only the verdict is overridden.
        if best_score < NEUTRAL_FLOOR {
            best_category = Category::Neutral;
            best_score = NEUTRAL_CONFIDENCE;
        }

        ClassifiedSentence {
            text: text.to_string(),
            category: best_category,
            confidence: best_score.min(1.0),
            section_references: sections,
            matched_keywords: best_keywords,
        }
    }

    fn scores_with_sections(
        &self,
        sentence: &str,
        sections: &BTreeSet<Section>,
    ) -> Vec<CategoryScore> {
        let lower = sentence.to_lowercase();
        let transfer = TRANSFER.is_match(sentence);

        self.lists
            .iter()
            .map(|list| {
                let keywords: Vec<String> = list
                    .keywords
                    .iter()
                    .filter(|(_, lowered)| lower.contains(lowered.as_str()))
                    .map(|(original, _)| original.clone())
                    .collect();

                let mut score = if list.keywords.is_empty() {
                    0.0
                } else {
                    keywords.len() as f64 / list.keywords.len() as f64
                };

                match list.category {
                    Category::Denial if sections.contains(&Section::Exemption) => {
                        score += EXEMPTION_BONUS;
                    }
                    Category::Procedural
                        if transfer || sections.contains(&Section::TimeLimit) =>
                    {
                        score += PROCEDURAL_BONUS;
                    }
                    _ => {}
                }

                CategoryScore {
                    category: list.category,
                    score,
                    keywords,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_of(scores: &[CategoryScore], category: Category) -> f64 {
        scores
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.score)
            .unwrap()
    }

    fn flat_lexicon(
        denial: &[&str],
        informative: &[&str],
        procedural: &[&str],
        evasive: &[&str],
    ) -> KeywordLexicon {
        let owned = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        KeywordLexicon {
            denial: owned(denial),
            informative: owned(informative),
            procedural: owned(procedural),
            evasive: owned(evasive),
        }
    }

    fn no_sections() -> SectionPatterns {
        SectionPatterns::new(std::iter::empty::<(Section, &str)>()).unwrap()
    }

    #[test]
    fn exemption_denial() {
        let clf = SentenceClassifier::default();
        let text = "Information cannot be provided as it is exempt under Section 8 of the Act.";
        let result = clf.classify(text);

        assert_eq!(result.category, Category::Denial);
        assert!(result.section_references.contains(&Section::Exemption));
        assert_eq!(
            result.matched_keywords,
            vec!["cannot be provided", "exempt", "section 8"]
        );

        let expected = 3.0 / 14.0 + EXEMPTION_BONUS;
        assert!((result.confidence - expected).abs() < 1e-9);
    }

    #[test]
    fn transfer_is_procedural() {
        let clf = SentenceClassifier::default();
        let text = "Your application has been transferred to the concerned department for necessary action.";
        let scores = clf.category_scores(text);
        let procedural = score_of(&scores, Category::Procedural);
        assert!((procedural - (1.0 / 8.0 + PROCEDURAL_BONUS)).abs() < 1e-9);

        let result = clf.classify(text);
        assert_eq!(result.category, Category::Procedural);
        assert_eq!(result.matched_keywords, vec!["transferred to"]);
    }

    #[test]
    fn time_limit_section_boosts_procedural() {
        let clf = SentenceClassifier::default();
        let scores = clf.category_scores("A reply will be sent within 30 days.");
        assert!((score_of(&scores, Category::Procedural) - PROCEDURAL_BONUS).abs() < 1e-9);
    }

    #[test]
    fn informative_sentence() {
        let clf = SentenceClassifier::default();
        let result = clf.classify("The information is enclosed as per records.");
        assert_eq!(result.category, Category::Informative);
        assert_eq!(
            result.matched_keywords,
            vec!["information is", "as per records", "enclosed"]
        );
        assert!((result.confidence - 3.0 / 8.0).abs() < 1e-9);
    }

    #[test]
    fn evasive_sentence() {
        let clf = SentenceClassifier::default();
        let result =
            clf.classify("The request is vague and the records are voluminous, please resubmit.");
        assert_eq!(result.category, Category::Evasive);
        assert_eq!(result.matched_keywords.len(), 3);
    }

    #[test]
    fn keyword_matching_is_case_insensitive() {
        let clf = SentenceClassifier::default();
        let result = clf.classify("THE CPIO HAS FORWARDED TO THE COMPETENT AUTHORITY.");
        assert_eq!(result.category, Category::Procedural);
        assert!(result.matched_keywords.contains(&"CPIO".to_string()));
    }

    #[test]
    fn weak_signal_falls_back_to_neutral() {
        let clf = SentenceClassifier::default();
        // One denial keyword out of fourteen stays under the floor.
        let result = clf.classify("The matter was treated as sensitive by the branch.");
        assert_eq!(result.category, Category::Neutral);
        assert_eq!(result.confidence, NEUTRAL_CONFIDENCE);
        assert_eq!(result.matched_keywords, vec!["sensitive"]);
    }

    #[test]
    fn no_signal_is_neutral() {
        let clf = SentenceClassifier::default();
        let result = clf.classify("Thank you for your letter regarding the matter.");
        assert_eq!(result.category, Category::Neutral);
        assert_eq!(result.confidence, NEUTRAL_CONFIDENCE);
        assert!(result.matched_keywords.is_empty());
    }

    #[test]
    fn whitespace_only_is_zero_confidence_neutral() {
        let clf = SentenceClassifier::default();
        let result = clf.classify("  \t ");
        assert_eq!(result.category, Category::Neutral);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.text, "");
    }

    #[test]
    fn sections_reported_independently_of_category() {
        let clf = SentenceClassifier::default();
        let result = clf.classify("The information is enclosed and you may appeal if unsatisfied.");
        assert_eq!(result.category, Category::Informative);
        assert!(result.section_references.contains(&Section::Appeal));
    }

    #[test]
    fn confidence_is_capped_at_one() {
        let lexicon = flat_lexicon(&["refused"], &[], &[], &[]);
        let clf = SentenceClassifier::new(&lexicon, SectionPatterns::default());
        let result = clf.classify("Access is refused as the file is exempt.");
        assert_eq!(result.category, Category::Denial);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn exact_tie_goes_to_earlier_category() {
        let lexicon = flat_lexicon(&["alpha"], &["alpha"], &["beta"], &["beta"]);
        let clf = SentenceClassifier::new(&lexicon, no_sections());

        assert_eq!(clf.classify("the alpha sentence").category, Category::Denial);
        assert_eq!(clf.classify("the beta sentence").category, Category::Procedural);
    }

    #[test]
    fn empty_keyword_list_scores_zero() {
        let lexicon = flat_lexicon(&[], &["enclosed"], &[], &[]);
        let clf = SentenceClassifier::new(&lexicon, no_sections());
        let scores = clf.category_scores("Nothing is enclosed here.");
        assert_eq!(score_of(&scores, Category::Denial), 0.0);
        assert_eq!(score_of(&scores, Category::Informative), 1.0);
    }

    #[test]
    fn classification_is_deterministic() {
        let clf = SentenceClassifier::default();
        let text = "The details are attached but the notings are confidential.";
        assert_eq!(clf.classify(text), clf.classify(text));
    }
}
