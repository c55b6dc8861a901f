//! Core types for RTI response analysis: sentence categories, statutory
//! section detection, segmentation, lexicon configuration and report types.

pub mod action;
pub mod category;
pub mod config;
mod error;
pub mod response;
pub mod section;
pub mod segment;

pub use action::{
    ActionKind, ActionReport, ActionSuggestion, AppealEligibility, Assessment, Flag, FlagKind,
    Priority, Severity,
};
pub use category::{Category, ClassifiedSentence};
pub use config::{AnalysisConfig, AnchorLexicon, KeywordLexicon};
pub use error::ConfigError;
pub use response::{ResponseView, Stats, StructuredResponse};
pub use section::{Section, SectionPatterns, SectionReferences};
pub use segment::{ANCHOR_MIN_CHARS, CLASSIFY_MIN_CHARS, split_sentences};
