//! Plain-text rendering of analysis results.
//!
//! Output is grouped into titled sections with aligned `name value` rows.
//! Empty sections are skipped.

use std::fmt::Display;

use rtilens_core::{ActionReport, Category, StructuredResponse};
use rtilens_semantic::{FactAnchorScore, FactKind, format_fact_anchors};

use crate::analysis::Analysis;

const MAX_LIST_ITEMS: usize = 10;

// ── Card builder ──

#[derive(Default)]
struct Card {
    out: String,
}

impl Card {
    fn header(&mut self, header: &str) {
        self.out.push_str(header);
        self.out.push('\n');
    }

    fn field(&mut self, name: &str, value: impl Display) {
        self.out.push_str(&format!("  {name:<26} {value}\n"));
    }

    fn line(&mut self, indent: usize, text: impl Display) {
        self.out.push_str(&format!("{:indent$}{text}\n", ""));
    }

    fn end_section(&mut self) {
        self.out.push('\n');
    }

    fn finish(self) -> String {
        self.out
    }
}

// ── Public API ──

/// Full plain-text report for one document, dated `generated`.
pub fn render_report(analysis: &Analysis, generated: &str) -> String {
    let mut card = Card::default();
    card.header(&format!("=== RTI Response Analysis: {} ===", analysis.source));
    card.line(0, format!("Generated: {generated}"));
    card.end_section();

    classification_section(&mut card, &analysis.response);

    card.header("Fact Anchors");
    for line in format_fact_anchors(&analysis.fact_anchors).lines() {
        card.line(2, line);
    }
    card.end_section();

    report_sections(&mut card, &analysis.report);
    card.finish()
}

/// Statistics plus every sentence with its category and confidence.
pub fn render_classification(response: &StructuredResponse) -> String {
    let mut card = Card::default();
    classification_section(&mut card, response);

    for category in Category::ALL {
        let sentences = response.sentences(category);
        if sentences.is_empty() {
            continue;
        }
        card.header(&format!("{} ({})", title_case(category.as_str()), sentences.len()));
        for s in sentences {
            card.line(2, format!("[{:.2}] {}", s.confidence, s.text));
            if !s.matched_keywords.is_empty() {
                card.line(8, format!("keywords: {}", s.matched_keywords.join(", ")));
            }
        }
        card.end_section();
    }
    card.finish()
}

/// Ranked anchors with their score and evidence.
pub fn render_scored_anchors(scored: &[FactAnchorScore]) -> String {
    let mut card = Card::default();
    if scored.is_empty() {
        card.line(0, "No specific facts extracted.");
        return card.finish();
    }
    for (i, s) in scored.iter().enumerate() {
        card.line(0, format!("{}. [{:.1}] {}", i + 1, s.score, s.sentence));
        for kind in FactKind::ALL {
            let found = s.details.get(&kind).map(Vec::as_slice).unwrap_or_default();
            if !found.is_empty() {
                card.line(6, format!("{}: {}", fact_kind_label(kind), found.join(", ")));
            }
        }
    }
    card.finish()
}

// ── Sections ──

fn classification_section(card: &mut Card, response: &StructuredResponse) {
    let stats = response.stats();
    card.header("Classification");
    card.field("total_sentences", stats.total_sentences);
    for category in Category::ALL {
        card.field(category.as_str(), stats.count(category));
    }
    card.field("informative_ratio", format!("{:.2}", stats.informative_ratio));
    card.field("denial_ratio", format!("{:.2}", stats.denial_ratio));
    if !response.section_references.is_empty() {
        let titles: Vec<&str> = response.section_references.keys().map(|s| s.title()).collect();
        card.field("sections_referenced", titles.join(", "));
    }
    card.end_section();
}

fn report_sections(card: &mut Card, report: &ActionReport) {
    card.header("Suggested Actions");
    for s in &report.suggestions {
        card.line(2, format!("[{}] {}", s.priority.as_str().to_uppercase(), s.title));
        card.line(6, &s.description);
        if let Some(deadline) = &s.deadline {
            card.line(6, format!("Deadline: {deadline}"));
        }
        if let Some(reference) = &s.reference {
            card.line(6, format!("Reference: {reference}"));
        }
    }
    card.end_section();

    let eligibility = &report.appeal_eligibility;
    card.header("Appeal Eligibility");
    card.field("eligible", if eligibility.eligible { "yes" } else { "no" });
    if eligibility.eligible {
        card.field("appeal_type", &eligibility.appeal_type);
        card.field("deadline", &eligibility.deadline);
        card.field("authority", &eligibility.authority);
        card.line(2, "reasons:");
        for reason in &eligibility.reasons {
            card.line(4, format!("- {reason}"));
        }
    }
    card.end_section();

    if !report.flags.is_empty() {
        card.header(&format!("Flags ({})", report.flags.len()));
        for flag in report.flags.iter().take(MAX_LIST_ITEMS) {
            card.line(
                2,
                format!("[{}] {}: {}", flag.severity.as_str(), flag.kind.as_str(), flag.text),
            );
            card.line(6, &flag.reason);
        }
        if report.flags.len() > MAX_LIST_ITEMS {
            card.line(2, format!("... and {} more", report.flags.len() - MAX_LIST_ITEMS));
        }
        card.end_section();
    }

    card.header("Overall Assessment");
    card.line(2, report.overall_assessment);
}

// ── Helpers ──

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn fact_kind_label(kind: FactKind) -> &'static str {
    match kind {
        FactKind::Actions => "actions",
        FactKind::Denials => "denials",
        FactKind::Amounts => "amounts",
        FactKind::Dates => "dates",
        FactKind::Authorities => "authorities",
    }
}
