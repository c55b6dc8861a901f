//! Action report types: suggestions, appeal eligibility, flags and the
//! overall assessment of a response.

use std::fmt;

use serde::Serialize;

/// What the citizen is advised to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    FirstAppeal,
    Clarification,
    PayFee,
    Wait,
    NoAction,
}

/// Suggestion priority. Orders `High < Medium < Low` so sorting ascending
/// puts urgent suggestions first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionSuggestion {
    #[serde(rename = "action")]
    pub kind: ActionKind,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub deadline: Option<String>,
    /// Statutory provision backing the suggestion.
    pub reference: Option<String>,
}

/// Whether the response can be taken to first appeal, and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppealEligibility {
    pub eligible: bool,
    pub reasons: Vec<String>,
    pub appeal_type: String,
    pub deadline: String,
    pub authority: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
    Evasive,
    DenialWithoutReason,
}

impl FlagKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Evasive => "evasive",
            Self::DenialWithoutReason => "denial_without_reason",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

/// A problematic sentence in the response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flag {
    #[serde(rename = "type")]
    pub kind: FlagKind,
    pub severity: Severity,
    pub text: String,
    pub reason: String,
}

/// Overall verdict on a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Assessment {
    Satisfactory,
    Unsatisfactory,
    Inadequate,
    Partial,
}

impl Assessment {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Satisfactory => "SATISFACTORY",
            Self::Unsatisfactory => "UNSATISFACTORY",
            Self::Inadequate => "INADEQUATE",
            Self::Partial => "PARTIAL",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Satisfactory => "Response adequately addresses most queries",
            Self::Unsatisfactory => "Significant information denied, consider appeal",
            Self::Inadequate => "Response is vague and non-committal",
            Self::Partial => "Some information provided, review for completeness",
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.label(), self.description())
    }
}

/// Complete, priority-ordered advice for one response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionReport {
    /// Never empty; sorted by priority, stable within a priority.
    pub suggestions: Vec<ActionSuggestion>,
    pub appeal_eligibility: AppealEligibility,
    pub flags: Vec<Flag>,
    pub overall_assessment: Assessment,
}
