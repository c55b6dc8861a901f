//! One configured pipeline run: classify, extract anchors, build the report.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use rtilens_actions::build_action_report;
use rtilens_core::{ActionReport, AnalysisConfig, StructuredResponse};
use rtilens_semantic::{FactAnchorScore, FactAnchorScorer, SentenceClassifier};
use serde_json::{Value, json};

/// Classifier and scorer built once from configuration, shared across documents.
pub struct Analyzer {
    classifier: SentenceClassifier,
    scorer: FactAnchorScorer,
    anchor_count: usize,
}

/// Everything the CLI reports about one document.
pub struct Analysis {
    pub source: String,
    pub response: StructuredResponse,
    pub fact_anchors: Vec<String>,
    pub report: ActionReport,
}

impl Analyzer {
    pub fn from_config(config: &AnalysisConfig) -> anyhow::Result<Self> {
        Ok(Self {
            classifier: SentenceClassifier::from_config(config)
                .context("building sentence classifier")?,
            scorer: FactAnchorScorer::from_config(config).context("building fact-anchor scorer")?,
            anchor_count: config.anchor_count,
        })
    }

    /// Load `path` as JSON configuration, or use the built-in tables.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                AnalysisConfig::from_json(&json)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => AnalysisConfig::default(),
        };
        Self::from_config(&config)
    }

    pub fn anchor_count(&self) -> usize {
        self.anchor_count
    }

    pub fn classify(&self, text: &str) -> StructuredResponse {
        self.classifier.classify_document(text)
    }

    pub fn anchors(&self, text: &str, top_n: usize) -> Vec<String> {
        self.scorer.select(text, top_n)
    }

    pub fn scored_anchors(&self, text: &str, top_n: usize) -> Vec<FactAnchorScore> {
        let mut ranked = self.scorer.rank(text);
        ranked.truncate(top_n);
        ranked
    }

    /// The three independent operations over the same text.
    pub fn analyze(&self, source: &str, text: &str, top_n: usize) -> Analysis {
        let response = self.classify(text);
        let fact_anchors = self.anchors(text, top_n);
        let report = build_action_report(&response);
        Analysis {
            source: source.to_string(),
            response,
            fact_anchors,
            report,
        }
    }
}

impl Analysis {
    pub fn to_json(&self) -> Value {
        json!({
            "source": self.source,
            "response": self.response.view(),
            "fact_anchors": self.fact_anchors,
            "report": self.report,
        })
    }
}

/// Read a document from `path`, or stdin when `path` is `-`.
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DENIAL: &str = "Information cannot be provided as it is exempt under Section 8 of the Act. \
                          The request is vague and the records are voluminous, please resubmit.";

    #[test]
    fn analyze_runs_all_three_operations() {
        let analyzer = Analyzer::load(None).unwrap();
        let analysis = analyzer.analyze("reply.txt", DENIAL, analyzer.anchor_count());

        assert_eq!(analysis.response.stats().total_sentences, 2);
        assert!(!analysis.fact_anchors.is_empty());
        assert!(!analysis.report.suggestions.is_empty());

        let json = analysis.to_json();
        assert_eq!(json["source"], "reply.txt");
        assert_eq!(json["response"]["stats"]["denial_count"], 1);
        assert_eq!(json["report"]["overall_assessment"], "UNSATISFACTORY");
    }

    #[test]
    fn custom_config_replaces_keywords() {
        let config = AnalysisConfig::from_json(
            r#"{"keywords": {"denial": ["withheld"]}, "anchor_count": 1}"#,
        )
        .unwrap();
        let analyzer = Analyzer::from_config(&config).unwrap();
        assert_eq!(analyzer.anchor_count(), 1);

        let response = analyzer.classify("The file notings are withheld by the office.");
        assert_eq!(response.denial.len(), 1);
    }

    #[test]
    fn bad_pattern_is_reported() {
        let config =
            AnalysisConfig::from_json(r#"{"anchors": {"date_patterns": ["("]}}"#).unwrap();
        let err = Analyzer::from_config(&config).err().unwrap();
        assert!(format!("{err:#}").contains("date_patterns[0]"));
    }

    #[test]
    fn missing_input_file() {
        let err = read_input(Path::new("/nonexistent/reply.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/reply.txt"));
    }
}
