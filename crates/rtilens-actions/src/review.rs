//! Appeal eligibility, sentence flags and the overall verdict.

use rtilens_core::{
    AppealEligibility, Assessment, Flag, FlagKind, Section, Severity, Stats, StructuredResponse,
};

/// Neutral sentences tolerated before a response with no information
/// counts as not addressing the query.
const NEUTRAL_TOLERANCE: usize = 3;

pub fn check_appeal_eligibility(response: &StructuredResponse) -> AppealEligibility {
    let stats = response.stats();
    let mut reasons = Vec::new();

    if stats.denial_count > 0 {
        reasons.push("Information was denied");
    }
    if response.references_section(Section::Exemption) {
        reasons.push("Section 8 exemptions were cited");
    }
    if stats.evasive_count > 0 {
        reasons.push("Response contains evasive/unclear statements");
    }
    if stats.informative_count == 0 && stats.neutral_count > NEUTRAL_TOLERANCE {
        reasons.push("Response does not adequately address the query");
    }

    AppealEligibility {
        eligible: !reasons.is_empty(),
        reasons: reasons.into_iter().map(str::to_string).collect(),
        appeal_type: "First Appeal under Section 19(1)".to_string(),
        deadline: "30 days from receipt of response".to_string(),
        authority: "First Appellate Authority (FAA)".to_string(),
    }
}

/// Evasive sentences first, then denials that cite no section, each in
/// bucket order.
pub fn flag_issues(response: &StructuredResponse) -> Vec<Flag> {
    let evasive = response.evasive.iter().map(|s| Flag {
        kind: FlagKind::Evasive,
        severity: Severity::Medium,
        text: s.text.clone(),
        reason: "Response is vague or non-committal".to_string(),
    });

    let unreasoned = response
        .denial
        .iter()
        .filter(|s| !s.text.to_lowercase().contains("section"))
        .map(|s| Flag {
            kind: FlagKind::DenialWithoutReason,
            severity: Severity::High,
            text: s.text.clone(),
            reason: "Denial without citing specific exemption clause".to_string(),
        });

    evasive.chain(unreasoned).collect()
}

/// First matching rule wins.
pub fn assess(stats: &Stats) -> Assessment {
    if stats.informative_ratio > 0.6 {
        Assessment::Satisfactory
    } else if stats.denial_ratio >= 0.4 {
        Assessment::Unsatisfactory
    } else if stats.evasive_count > stats.informative_count {
        Assessment::Inadequate
    } else {
        Assessment::Partial
    }
}
