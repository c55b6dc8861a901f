//! Deterministic advice for a classified RTI response.
//!
//! [`build_action_report`] combines the suggestion rules, the appeal
//! eligibility check, sentence flags and the overall assessment. All of it
//! is a pure function of the [`StructuredResponse`].

mod review;
mod rules;

use rtilens_core::{ActionReport, StructuredResponse};
use tracing::debug;

pub use review::{assess, check_appeal_eligibility, flag_issues};
pub use rules::suggest_next_steps;

pub fn build_action_report(response: &StructuredResponse) -> ActionReport {
    let report = ActionReport {
        suggestions: suggest_next_steps(response),
        appeal_eligibility: check_appeal_eligibility(response),
        flags: flag_issues(response),
        overall_assessment: assess(&response.stats()),
    };
    debug!(
        assessment = report.overall_assessment.label(),
        suggestions = report.suggestions.len(),
        flags = report.flags.len(),
        eligible = report.appeal_eligibility.eligible,
        "action report built"
    );
    report
}
