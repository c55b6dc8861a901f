//! Concurrent analysis of several documents.
//!
//! Each document is an independent invocation on the blocking pool; the
//! shared [`Analyzer`] is read-only, so no coordination is needed.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use futures::future::join_all;
use tracing::info;

use crate::analysis::{Analysis, Analyzer, read_input};

pub struct BatchStats {
    pub documents: usize,
    pub failed: usize,
    pub elapsed_secs: f64,
}

/// Analyze every file, preserving input order. A failed file does not
/// stop the others.
pub async fn run_batch(
    analyzer: Arc<Analyzer>,
    files: Vec<PathBuf>,
    top_n: usize,
) -> (Vec<anyhow::Result<Analysis>>, BatchStats) {
    let start = Instant::now();

    let tasks = files.into_iter().map(|path| {
        let analyzer = Arc::clone(&analyzer);
        tokio::task::spawn_blocking(move || -> anyhow::Result<Analysis> {
            let text = read_input(&path)?;
            Ok(analyzer.analyze(&path.display().to_string(), &text, top_n))
        })
    });

    let results: Vec<anyhow::Result<Analysis>> = join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.context("analysis task panicked").and_then(|result| result))
        .collect();

    let stats = BatchStats {
        documents: results.len(),
        failed: results.iter().filter(|r| r.is_err()).count(),
        elapsed_secs: start.elapsed().as_secs_f64(),
    };
    info!(
        documents = stats.documents,
        failed = stats.failed,
        elapsed_secs = stats.elapsed_secs,
        "batch complete"
    );
    (results, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_doc(dir: &std::path::Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, text).unwrap();
        path
    }

    #[tokio::test]
    async fn results_follow_input_order() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path();
        let denied = write_doc(
            dir,
            "denied.txt",
            "Information cannot be provided as it is exempt under Section 8 of the Act.",
        );
        let enclosed = write_doc(dir, "enclosed.txt", "The information is enclosed as per records.");
        let missing = dir.join("missing.txt");

        let analyzer = Arc::new(Analyzer::load(None).unwrap());
        let (results, stats) =
            run_batch(analyzer, vec![denied, missing, enclosed], 5).await;

        assert_eq!(stats.documents, 3);
        assert_eq!(stats.failed, 1);
        assert_eq!(results[0].as_ref().unwrap().response.denial.len(), 1);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().response.informative.len(), 1);
    }

    #[tokio::test]
    async fn empty_batch() {
        let analyzer = Arc::new(Analyzer::load(None).unwrap());
        let (results, stats) = run_batch(analyzer, Vec::new(), 5).await;
        assert!(results.is_empty());
        assert_eq!(stats.failed, 0);
    }
}
