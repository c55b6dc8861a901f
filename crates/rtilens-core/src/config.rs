//! Keyword lexicons and analysis configuration.
//!
//! The built-in tables are tuned for replies under India's RTI Act, 2005.
//! All of them can be replaced through [`AnalysisConfig::from_json`]; any
//! field left out of the JSON keeps its built-in value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::Category;
use crate::error::ConfigError;
use crate::section::{Section, SectionPatterns};

/// Default number of fact anchors handed to the summarizer.
pub const DEFAULT_ANCHOR_COUNT: usize = 5;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Closed keyword lists for the four scored sentence categories.
///
/// Keywords are matched as case-insensitive substrings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordLexicon {
    pub denial: Vec<String>,
    pub informative: Vec<String>,
    pub procedural: Vec<String>,
    pub evasive: Vec<String>,
}

impl Default for KeywordLexicon {
    fn default() -> Self {
        Self {
            denial: strings(&[
                "cannot be provided",
                "denied",
                "rejected",
                "exempt",
                "exemption",
                "not available",
                "refused",
                "decline",
                "not possible",
                "section 8",
                "confidential",
                "classified",
                "sensitive",
                "national security",
            ]),
            informative: strings(&[
                "information is",
                "details are",
                "as per records",
                "enclosed",
                "attached",
                "provided herewith",
                "following information",
                "data shows",
            ]),
            procedural: strings(&[
                "transferred to",
                "forwarded to",
                "fee required",
                "please deposit",
                "time extension",
                "additional time",
                "competent authority",
                "CPIO",
            ]),
            evasive: strings(&[
                "no such information",
                "not maintained",
                "not available",
                "beyond scope",
                "voluminous",
                "vague",
                "clarify",
                "resubmit",
            ]),
        }
    }
}

impl KeywordLexicon {
    /// Keywords for `category`. Neutral has none.
    pub fn keywords(&self, category: Category) -> &[String] {
        match category {
            Category::Denial => &self.denial,
            Category::Informative => &self.informative,
            Category::Procedural => &self.procedural,
            Category::Evasive => &self.evasive,
            Category::Neutral => &[],
        }
    }
}

/// Lexicon and selection parameters for fact-anchor scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorLexicon {
    /// Verbs reporting something the authority actually did.
    pub actions: Vec<String>,
    /// Phrases signalling a refusal. Distinct from [`KeywordLexicon::denial`].
    pub denials: Vec<String>,
    /// Offices and officers.
    pub authorities: Vec<String>,
    /// Regexes for monetary amounts, matched case-insensitively.
    pub amount_patterns: Vec<String>,
    /// Regexes for dates, matched case-insensitively.
    pub date_patterns: Vec<String>,
    /// Sentences scoring below this are not anchors.
    pub min_score: f64,
    /// How many top sentences to keep when none reaches `min_score`.
    pub fallback_count: usize,
}

impl Default for AnchorLexicon {
    fn default() -> Self {
        Self {
            actions: strings(&[
                "provided",
                "processed",
                "credited",
                "transferred",
                "completed",
                "approved",
                "sanctioned",
                "issued",
                "granted",
                "received",
                "dispatched",
                "forwarded",
                "deposited",
                "verified",
                "confirmed",
            ]),
            denials: strings(&[
                "denied",
                "rejected",
                "cannot be provided",
                "not available",
                "exemption",
                "section 8",
                "confidential",
                "not maintained",
            ]),
            authorities: strings(&[
                "ministry",
                "department",
                "office",
                "cpio",
                "pio",
                "authority",
                "commissioner",
                "secretary",
                "officer",
            ]),
            amount_patterns: strings(&[
                r"\bRs\.?\s*\d[\d,]*",
                r"₹\s*\d[\d,]*",
                r"\bINR\s*\d[\d,]*",
                r"\d+\s*(?:lakh|crore|thousand)",
                r"amount(?:ing)?\s+(?:of|to)",
            ]),
            date_patterns: strings(&[
                r"\d{1,2}(?:st|nd|rd|th)?\s+(?:January|February|March|April|May|June|July|August|September|October|November|December),?\s+\d{4}",
                r"\d{1,2}[-/]\d{1,2}[-/]\d{2,4}",
                r"(?:dated?|on)\s+\d{1,2}[-/]\d{1,2}[-/]\d{2,4}",
            ]),
            min_score: 1.0,
            fallback_count: 2,
        }
    }
}

fn default_sections() -> BTreeMap<Section, String> {
    Section::ALL
        .iter()
        .map(|s| (*s, s.default_pattern().to_string()))
        .collect()
}

fn default_anchor_count() -> usize {
    DEFAULT_ANCHOR_COUNT
}

/// Everything the analysis pipeline can be configured with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub keywords: KeywordLexicon,
    /// Pattern per section. Sections missing from a supplied map are not detected.
    #[serde(default = "default_sections")]
    pub sections: BTreeMap<Section, String>,
    #[serde(default)]
    pub anchors: AnchorLexicon,
    #[serde(default = "default_anchor_count")]
    pub anchor_count: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            keywords: KeywordLexicon::default(),
            sections: default_sections(),
            anchors: AnchorLexicon::default(),
            anchor_count: DEFAULT_ANCHOR_COUNT,
        }
    }
}

impl AnalysisConfig {
    /// Parse a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        debug!(
            sections = config.sections.len(),
            anchor_count = config.anchor_count,
            "analysis config parsed"
        );
        Ok(config)
    }

    /// Compile the section pattern table.
    pub fn section_patterns(&self) -> Result<SectionPatterns, ConfigError> {
        SectionPatterns::new(self.sections.iter().map(|(s, p)| (*s, p.as_str())))
    }
}
