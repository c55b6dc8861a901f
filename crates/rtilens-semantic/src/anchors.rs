//! Fact-anchor extraction: the most information-dense sentences of a reply.
//!
//! Anchors ground downstream summarization in concrete facts (amounts,
//! dates, actions taken, refusals, named offices). Scoring is additive and
//! independent of sentence classification.
//!
//! # Weights
//!
//! | Evidence | Weight |
//! |---|---|
//! | action verb (distinct) | 2.0 |
//! | denial phrase (distinct) | 2.5 |
//! | monetary amount (every match) | 3.0 |
//! | date (every match) | 2.5 |
//! | authority word (distinct) | 1.0 |
//! | 15–50 words | +1.0 |
//! | over 50 words | +0.5 |
//! | under 5 words | total halved |

use std::collections::{BTreeMap, HashSet};

use regex::{Regex, RegexBuilder};
use rtilens_core::{ANCHOR_MIN_CHARS, AnalysisConfig, AnchorLexicon, ConfigError, split_sentences};
use serde::Serialize;
use tracing::debug;

const ACTION_WEIGHT: f64 = 2.0;
const DENIAL_WEIGHT: f64 = 2.5;
const AMOUNT_WEIGHT: f64 = 3.0;
const DATE_WEIGHT: f64 = 2.5;
const AUTHORITY_WEIGHT: f64 = 1.0;

const MID_LENGTH_BONUS: f64 = 1.0;
const LONG_LENGTH_BONUS: f64 = 0.5;
const SHORT_SENTENCE_FACTOR: f64 = 0.5;

/// Kind of evidence found in a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FactKind {
    Actions,
    Denials,
    Amounts,
    Dates,
    Authorities,
}

impl FactKind {
    pub const ALL: [FactKind; 5] = [
        Self::Actions,
        Self::Denials,
        Self::Amounts,
        Self::Dates,
        Self::Authorities,
    ];
}

/// A scored sentence with the evidence behind its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactAnchorScore {
    pub sentence: String,
    pub score: f64,
    /// Every kind is present; lists are empty when nothing matched.
    pub details: BTreeMap<FactKind, Vec<String>>,
}

/// Scores and selects fact anchors.
pub struct FactAnchorScorer {
    actions: Vec<String>,
    denials: Vec<String>,
    authorities: Vec<String>,
    amounts: Vec<Regex>,
    dates: Vec<Regex>,
    min_score: f64,
    fallback_count: usize,
}

impl Default for FactAnchorScorer {
    fn default() -> Self {
        Self::new(&AnchorLexicon::default()).expect("built-in anchor patterns compile")
    }
}

fn lowered(items: &[String]) -> Vec<String> {
    items.iter().map(|s| s.to_lowercase()).collect()
}

fn compile(kind: &str, patterns: &[String]) -> Result<Vec<Regex>, ConfigError> {
    patterns
        .iter()
        .enumerate()
        .map(|(i, p)| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .map_err(|source| ConfigError::Pattern {
                    name: format!("{kind}[{i}]"),
                    source,
                })
        })
        .collect()
}

impl FactAnchorScorer {
    pub fn new(lexicon: &AnchorLexicon) -> Result<Self, ConfigError> {
        Ok(Self {
            actions: lowered(&lexicon.actions),
            denials: lowered(&lexicon.denials),
            authorities: lowered(&lexicon.authorities),
            amounts: compile("amount_patterns", &lexicon.amount_patterns)?,
            dates: compile("date_patterns", &lexicon.date_patterns)?,
            min_score: lexicon.min_score,
            fallback_count: lexicon.fallback_count,
        })
    }

    pub fn from_config(config: &AnalysisConfig) -> Result<Self, ConfigError> {
        Self::new(&config.anchors)
    }

    /// Score a single sentence.
    pub fn score(&self, sentence: &str) -> FactAnchorScore {
        let lower = sentence.to_lowercase();
        let mut details: BTreeMap<FactKind, Vec<String>> =
            FactKind::ALL.iter().map(|k| (*k, Vec::new())).collect();
        let mut score = 0.0;

        let keyword_groups = [
            (FactKind::Actions, &self.actions, ACTION_WEIGHT),
            (FactKind::Denials, &self.denials, DENIAL_WEIGHT),
            (FactKind::Authorities, &self.authorities, AUTHORITY_WEIGHT),
        ];
        for (kind, keywords, weight) in keyword_groups {
            for keyword in keywords.iter().filter(|k| lower.contains(k.as_str())) {
                score += weight;
                details.entry(kind).or_default().push(keyword.clone());
            }
        }

        let pattern_groups = [
            (FactKind::Amounts, &self.amounts, AMOUNT_WEIGHT),
            (FactKind::Dates, &self.dates, DATE_WEIGHT),
        ];
        for (kind, patterns, weight) in pattern_groups {
            for pattern in patterns {
                for m in pattern.find_iter(sentence) {
                    score += weight;
                    details.entry(kind).or_default().push(m.as_str().to_string());
                }
            }
        }

        let words = sentence.split_whitespace().count();
        if (15..=50).contains(&words) {
            score += MID_LENGTH_BONUS;
        } else if words > 50 {
            score += LONG_LENGTH_BONUS;
        }
        if words < 5 {
            score *= SHORT_SENTENCE_FACTOR;
        }

        FactAnchorScore {
            sentence: sentence.to_string(),
            score,
            details,
        }
    }

    /// Every distinct sentence of `text`, highest score first.
    ///
    /// Sorting is stable: equal scores keep document order.
    pub fn rank(&self, text: &str) -> Vec<FactAnchorScore> {
        let mut seen = HashSet::new();
        let mut scored: Vec<FactAnchorScore> = split_sentences(text, ANCHOR_MIN_CHARS)
            .into_iter()
            .filter(|s| seen.insert(s.clone()))
            .map(|s| self.score(&s))
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    /// Up to `top_n` anchor sentences, best first.
    ///
    /// Only sentences reaching the minimum score qualify. When none does,
    /// the best `fallback_count` sentences are returned anyway, so a
    /// document with any sentences never yields an empty anchor set
    /// (unless `top_n` is zero).
    pub fn select(&self, text: &str, top_n: usize) -> Vec<String> {
        let ranked = self.rank(text);

        let anchors: Vec<String> = ranked
            .iter()
            .take(top_n)
            .take_while(|s| s.score >= self.min_score)
            .map(|s| s.sentence.clone())
            .collect();

        if anchors.is_empty() && !ranked.is_empty() {
            debug!(
                sentences = ranked.len(),
                min_score = self.min_score,
                "no sentence reached the anchor threshold, using fallback"
            );
            return ranked
                .into_iter()
                .take(self.fallback_count.min(top_n))
                .map(|s| s.sentence)
                .collect();
        }

        anchors
    }
}

/// Render anchors as a numbered list for prompt construction.
pub fn format_fact_anchors(anchors: &[String]) -> String {
    if anchors.is_empty() {
        return "No specific facts extracted.".to_string();
    }
    anchors
        .iter()
        .enumerate()
        .map(|(i, a)| format!("{}. {}", i + 1, a))
        .collect::<Vec<_>>()
        .join("\n")
}
