//! Statutory section detection for RTI responses.
//!
//! Five provisions of the RTI Act, 2005 matter when reading a reply:
//! exemptions (s.8), rejection (s.9), third-party notice (s.11), appeals
//! (s.19) and the response time limit (s.7). Each is matched either by its
//! explicit "Section N" / "Sec. N" form or by domain synonyms, and every
//! match contributes one context excerpt of up to 50 characters either side.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Characters of context kept on each side of a section match.
const CONTEXT_CHARS: usize = 50;

/// Sparse map of section → context excerpts, one per match occurrence.
///
/// A section is present only if it matched at least once.
pub type SectionReferences = BTreeMap<Section, Vec<String>>;

/// The closed vocabulary of statutory sections the detector knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Section {
    /// Section 8: exemption from disclosure.
    #[serde(rename = "section_8")]
    Exemption,
    /// Section 9: grounds for rejection.
    #[serde(rename = "section_9")]
    Rejection,
    /// Section 11: third-party information.
    #[serde(rename = "section_11")]
    ThirdParty,
    /// Section 19: appeals.
    #[serde(rename = "section_19")]
    Appeal,
    /// Section 7: disposal of requests and time limits.
    #[serde(rename = "section_7")]
    TimeLimit,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Self::Exemption,
        Self::Rejection,
        Self::ThirdParty,
        Self::Appeal,
        Self::TimeLimit,
    ];

    /// Stable identifier, e.g. `section_8`.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Exemption => "section_8",
            Self::Rejection => "section_9",
            Self::ThirdParty => "section_11",
            Self::Appeal => "section_19",
            Self::TimeLimit => "section_7",
        }
    }

    /// Human-readable title, e.g. `Section 8`.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Exemption => "Section 8",
            Self::Rejection => "Section 9",
            Self::ThirdParty => "Section 11",
            Self::Appeal => "Section 19",
            Self::TimeLimit => "Section 7",
        }
    }

    /// Built-in case-insensitive pattern for this section.
    pub fn default_pattern(&self) -> &'static str {
        match self {
            Self::Exemption => r"section\s*8|sec\.\s*8|exemption|exempt",
            Self::Rejection => r"section\s*9|sec\.\s*9|reject|rejection",
            Self::ThirdParty => r"section\s*11|sec\.\s*11|third\s*party",
            Self::Appeal => r"section\s*19|sec\.\s*19|appeal",
            Self::TimeLimit => r"section\s*7|sec\.\s*7|time\s*limit|30\s*days",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

static DEFAULT_PATTERNS: LazyLock<SectionPatterns> = LazyLock::new(|| {
    SectionPatterns::new(Section::ALL.iter().map(|s| (*s, s.default_pattern())))
        .expect("built-in section patterns compile")
});

/// Compiled pattern table, one regex per section.
#[derive(Debug, Clone)]
pub struct SectionPatterns {
    patterns: Vec<(Section, Regex)>,
}

impl Default for SectionPatterns {
    fn default() -> Self {
        DEFAULT_PATTERNS.clone()
    }
}

impl SectionPatterns {
    /// Compile a pattern table. Patterns are matched case-insensitively.
    ///
    /// Sections left out of `patterns` are never detected.
    pub fn new<'a>(
        patterns: impl IntoIterator<Item = (Section, &'a str)>,
    ) -> Result<Self, ConfigError> {
        let mut compiled: Vec<(Section, Regex)> = Vec::new();
        for (section, pattern) in patterns {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| ConfigError::Pattern {
                    name: section.id().to_string(),
                    source,
                })?;
            compiled.retain(|(s, _)| *s != section);
            compiled.push((section, regex));
        }
        compiled.sort_by_key(|(s, _)| *s);
        Ok(Self { patterns: compiled })
    }

    /// Sections this table can detect.
    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.patterns.iter().map(|(s, _)| *s)
    }

    /// Find every section mention in `text`, with surrounding context.
    pub fn detect(&self, text: &str) -> SectionReferences {
        let mut refs = SectionReferences::new();
        for (section, regex) in &self.patterns {
            let excerpts: Vec<String> = regex
                .find_iter(text)
                .map(|m| context_excerpt(text, m.start(), m.end()))
                .collect();
            if !excerpts.is_empty() {
                refs.insert(*section, excerpts);
            }
        }
        refs
    }

    /// Whether `text` mentions `section` at all.
    pub fn mentions(&self, text: &str, section: Section) -> bool {
        self.patterns
            .iter()
            .any(|(s, regex)| *s == section && regex.is_match(text))
    }
}

/// Slice `CONTEXT_CHARS` characters either side of a match, trimmed.
fn context_excerpt(text: &str, start: usize, end: usize) -> String {
    let from = text[..start]
        .char_indices()
        .rev()
        .nth(CONTEXT_CHARS - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let to = text[end..]
        .char_indices()
        .nth(CONTEXT_CHARS)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());
    text[from..to].trim().to_string()
}
