//! Sentence categories and the per-sentence classification record.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// Semantic role a sentence plays in an RTI response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// The authority supplies the requested information.
    Informative,
    /// The authority refuses or withholds information.
    Denial,
    /// Fees, transfers, extensions and other process steps.
    Procedural,
    /// Vague or non-committal answers.
    Evasive,
    /// No strong signal for any other category.
    Neutral,
}

impl Category {
    /// Every category, in bucket order.
    pub const ALL: [Category; 5] = [
        Self::Informative,
        Self::Denial,
        Self::Procedural,
        Self::Evasive,
        Self::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Informative => "informative",
            Self::Denial => "denial",
            Self::Procedural => "procedural",
            Self::Evasive => "evasive",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sentence with its category, confidence and supporting evidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedSentence {
    pub text: String,
    pub category: Category,
    /// In `[0, 1]`.
    pub confidence: f64,
    /// Sections detected in this sentence, regardless of the winning category.
    pub section_references: BTreeSet<Section>,
    /// Keywords of the best-scoring category, in lexicon order.
    pub matched_keywords: Vec<String>,
}

impl ClassifiedSentence {
    /// A sentence with no signal at all.
    pub fn neutral(text: impl Into<String>, confidence: f64) -> Self {
        Self {
            text: text.into(),
            category: Category::Neutral,
            confidence,
            section_references: BTreeSet::new(),
            matched_keywords: Vec::new(),
        }
    }
}
