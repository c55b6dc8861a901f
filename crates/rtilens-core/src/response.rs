//! Document-level classification result and its derived statistics.

use serde::Serialize;

use crate::category::{Category, ClassifiedSentence};
use crate::section::{Section, SectionReferences};

/// An RTI response with every sentence bucketed by category.
///
/// Buckets keep document order. Built once by the aggregator; statistics
/// are derived on demand with [`StructuredResponse::stats`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructuredResponse {
    pub original_text: String,
    pub informative: Vec<ClassifiedSentence>,
    pub denial: Vec<ClassifiedSentence>,
    pub procedural: Vec<ClassifiedSentence>,
    pub evasive: Vec<ClassifiedSentence>,
    pub neutral: Vec<ClassifiedSentence>,
    /// Section mentions across the whole document.
    pub section_references: SectionReferences,
}

/// Counts and ratios over a [`StructuredResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    pub total_sentences: usize,
    pub informative_count: usize,
    pub denial_count: usize,
    pub procedural_count: usize,
    pub evasive_count: usize,
    pub neutral_count: usize,
    /// 0 when there are no sentences.
    pub informative_ratio: f64,
    /// 0 when there are no sentences.
    pub denial_ratio: f64,
}

impl Stats {
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Informative => self.informative_count,
            Category::Denial => self.denial_count,
            Category::Procedural => self.procedural_count,
            Category::Evasive => self.evasive_count,
            Category::Neutral => self.neutral_count,
        }
    }
}

/// JSON view of a response with its statistics attached.
#[derive(Debug, Serialize)]
pub struct ResponseView<'a> {
    #[serde(flatten)]
    pub response: &'a StructuredResponse,
    pub stats: Stats,
}

impl StructuredResponse {
    /// Bucket `sentences` by category, preserving their order.
    pub fn new(
        original_text: impl Into<String>,
        section_references: SectionReferences,
        sentences: impl IntoIterator<Item = ClassifiedSentence>,
    ) -> Self {
        let mut response = Self {
            original_text: original_text.into(),
            section_references,
            ..Self::default()
        };
        for sentence in sentences {
            let bucket = match sentence.category {
                Category::Informative => &mut response.informative,
                Category::Denial => &mut response.denial,
                Category::Procedural => &mut response.procedural,
                Category::Evasive => &mut response.evasive,
                Category::Neutral => &mut response.neutral,
            };
            bucket.push(sentence);
        }
        response
    }

    /// Sentences in one category bucket.
    pub fn sentences(&self, category: Category) -> &[ClassifiedSentence] {
        match category {
            Category::Informative => &self.informative,
            Category::Denial => &self.denial,
            Category::Procedural => &self.procedural,
            Category::Evasive => &self.evasive,
            Category::Neutral => &self.neutral,
        }
    }

    /// Every classified sentence, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = &ClassifiedSentence> {
        Category::ALL
            .into_iter()
            .flat_map(move |c| self.sentences(c).iter())
    }

    pub fn references_section(&self, section: Section) -> bool {
        self.section_references.contains_key(&section)
    }

    pub fn stats(&self) -> Stats {
        let informative_count = self.informative.len();
        let denial_count = self.denial.len();
        let procedural_count = self.procedural.len();
        let evasive_count = self.evasive.len();
        let neutral_count = self.neutral.len();
        let total_sentences =
            informative_count + denial_count + procedural_count + evasive_count + neutral_count;

        let ratio = |n: usize| {
            if total_sentences > 0 {
                n as f64 / total_sentences as f64
            } else {
                0.0
            }
        };

        Stats {
            total_sentences,
            informative_count,
            denial_count,
            procedural_count,
            evasive_count,
            neutral_count,
            informative_ratio: ratio(informative_count),
            denial_ratio: ratio(denial_count),
        }
    }

    pub fn view(&self) -> ResponseView<'_> {
        ResponseView {
            response: self,
            stats: self.stats(),
        }
    }

    /// Grouped plain-text digest handed to the summarizer.
    ///
    /// Neutral sentences are left out; empty groups are omitted.
    pub fn digest(&self) -> String {
        const GROUPS: [(Category, &str); 4] = [
            (Category::Informative, "INFORMATION PROVIDED:"),
            (Category::Denial, "INFORMATION DENIED:"),
            (Category::Procedural, "PROCEDURAL RESPONSES:"),
            (Category::Evasive, "EVASIVE/UNCLEAR RESPONSES:"),
        ];

        let mut blocks: Vec<String> = Vec::new();
        for (category, heading) in GROUPS {
            let sentences = self.sentences(category);
            if sentences.is_empty() {
                continue;
            }
            let mut block = heading.to_string();
            for s in sentences {
                block.push_str("\n  - ");
                block.push_str(&s.text);
            }
            blocks.push(block);
        }

        if !self.section_references.is_empty() {
            let mut block = "RTI ACT SECTIONS REFERENCED:".to_string();
            for section in self.section_references.keys() {
                block.push_str("\n  - ");
                block.push_str(section.title());
            }
            blocks.push(block);
        }

        blocks.join("\n\n")
    }
}
