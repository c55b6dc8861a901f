//! Suggestion rules.
//!
//! Every rule is evaluated independently against the response statistics;
//! several may fire. The catch-all review suggestion fires only when none
//! did. The final list is sorted by priority, stable within a priority.

use rtilens_core::{ActionKind, ActionSuggestion, Priority, Section, StructuredResponse};
use tracing::debug;

const APPEAL_DEADLINE: &str = "30 days from receipt of response";

fn suggestion(
    kind: ActionKind,
    priority: Priority,
    title: &str,
    description: &str,
    deadline: Option<&str>,
    reference: Option<&str>,
) -> ActionSuggestion {
    ActionSuggestion {
        kind,
        priority,
        title: title.to_string(),
        description: description.to_string(),
        deadline: deadline.map(str::to_string),
        reference: reference.map(str::to_string),
    }
}

fn first_appeal() -> ActionSuggestion {
    suggestion(
        ActionKind::FirstAppeal,
        Priority::High,
        "File First Appeal",
        "Significant information has been denied. You can file a First Appeal with the \
         First Appellate Authority within 30 days of receiving this response. Under \
         Section 19(1) of RTI Act, you have the right to appeal against denial.",
        Some(APPEAL_DEADLINE),
        Some("Section 19(1) of RTI Act, 2005"),
    )
}

fn request_clarification() -> ActionSuggestion {
    suggestion(
        ActionKind::Clarification,
        Priority::High,
        "Request Clarification",
        "The response contains vague or evasive statements that don't adequately answer \
         your query. You can write to the PIO requesting specific clarification or file an \
         appeal citing inadequate response.",
        None,
        Some("Section 7(8) of RTI Act, 2005"),
    )
}

fn challenge_exemption() -> ActionSuggestion {
    suggestion(
        ActionKind::FirstAppeal,
        Priority::High,
        "Challenge Exemption Claim",
        "The PIO has cited Section 8 exemptions to deny information. You can file an appeal \
         challenging whether the exemption genuinely applies. The burden is on the PIO to \
         prove that the exemption is justified.",
        Some("30 days from receipt"),
        Some("Section 8, Section 19 of RTI Act, 2005"),
    )
}

fn pay_fee() -> ActionSuggestion {
    suggestion(
        ActionKind::PayFee,
        Priority::Medium,
        "Pay Additional Fee",
        "The PIO has requested additional fees. Pay the fee within the specified timeline \
         to receive the information. Keep the receipt as proof.",
        None,
        Some("Section 7 of RTI Act, 2005"),
    )
}

fn await_transfer() -> ActionSuggestion {
    suggestion(
        ActionKind::Wait,
        Priority::Low,
        "Application Transferred",
        "Your application has been transferred to another department. Wait for a response \
         from the concerned PIO. The transfer should not reset your timeline.",
        None,
        Some("Section 6(3) of RTI Act, 2005"),
    )
}

fn response_complete() -> ActionSuggestion {
    suggestion(
        ActionKind::NoAction,
        Priority::Low,
        "Response Complete",
        "The RTI response appears to adequately address your query. No further action is \
         required unless you find the information incomplete.",
        None,
        None,
    )
}

fn review_carefully() -> ActionSuggestion {
    suggestion(
        ActionKind::NoAction,
        Priority::Low,
        "Review Response Carefully",
        "Review the response to determine if all your queries have been addressed. If \
         unsatisfied, you may file a First Appeal within 30 days.",
        Some("30 days if appeal needed"),
        Some("Section 19 of RTI Act, 2005"),
    )
}

fn mentions_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Priority-sorted suggestions for `response`. Never empty.
pub fn suggest_next_steps(response: &StructuredResponse) -> Vec<ActionSuggestion> {
    let stats = response.stats();
    let mut suggestions = Vec::new();

    if stats.denial_ratio > 0.3 || stats.denial_count >= 2 {
        suggestions.push(first_appeal());
    }

    if stats.evasive_count >= 2 || (stats.evasive_count > 0 && stats.informative_count == 0) {
        suggestions.push(request_clarification());
    }

    if response.references_section(Section::Exemption) {
        suggestions.push(challenge_exemption());
    }

    if stats.procedural_count > 0 {
        let procedural = response
            .procedural
            .iter()
            .map(|s| s.text.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");

        if mentions_any(&procedural, &["fee", "deposit", "payment"]) {
            suggestions.push(pay_fee());
        }
        if mentions_any(&procedural, &["transfer", "forward"]) {
            suggestions.push(await_transfer());
        }
    }

    if stats.informative_ratio > 0.6 && stats.denial_count == 0 {
        suggestions.push(response_complete());
    }

    if suggestions.is_empty() {
        suggestions.push(review_carefully());
    }

    suggestions.sort_by_key(|s| s.priority);
    debug!(
        count = suggestions.len(),
        titles = ?suggestions.iter().map(|s| s.title.as_str()).collect::<Vec<_>>(),
        "suggestions built"
    );
    suggestions
}
