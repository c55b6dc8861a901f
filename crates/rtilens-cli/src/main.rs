mod analysis;
mod batch;
mod display;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use analysis::{Analyzer, read_input};

#[derive(Parser)]
#[command(name = "rtilens")]
#[command(about = "Classify RTI responses, extract fact anchors and suggest next steps", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON analysis configuration (keyword lists, section patterns, anchor lexicon)
    #[arg(long, global = true, env = "RTILENS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every sentence of a response
    Classify {
        /// Cleaned response text, or `-` for stdin
        input: PathBuf,

        /// Output JSON (response with stats)
        #[arg(long)]
        json: bool,
    },

    /// Extract the most information-dense sentences
    Anchors {
        /// Cleaned response text, or `-` for stdin
        input: PathBuf,

        /// Number of anchors (defaults to the configured anchor count)
        #[arg(long, env = "RTILENS_TOP_N")]
        top_n: Option<usize>,

        /// Show every candidate's score and evidence, without threshold or fallback
        #[arg(long)]
        scores: bool,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Full analysis: classification, fact anchors and suggested actions
    Report {
        /// Cleaned response text, or `-` for stdin
        input: PathBuf,

        /// Number of anchors (defaults to the configured anchor count)
        #[arg(long, env = "RTILENS_TOP_N")]
        top_n: Option<usize>,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Full analysis of several responses, processed concurrently
    Batch {
        /// Cleaned response text files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Number of anchors (defaults to the configured anchor count)
        #[arg(long, env = "RTILENS_TOP_N")]
        top_n: Option<usize>,

        /// Output JSON lines, one document per line
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::info!("rtilens v{}", env!("CARGO_PKG_VERSION"));

    let analyzer = Analyzer::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Classify { input, json } => {
            let text = read_input(&input)?;
            let response = analyzer.classify(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&response.view())?);
            } else {
                print!("{}", display::render_classification(&response));
            }
        }
        Commands::Anchors {
            input,
            top_n,
            scores,
            json,
        } => {
            let text = read_input(&input)?;
            let top_n = top_n.unwrap_or(analyzer.anchor_count());
            if scores {
                let scored = analyzer.scored_anchors(&text, top_n);
                if json {
                    println!("{}", serde_json::to_string_pretty(&scored)?);
                } else {
                    print!("{}", display::render_scored_anchors(&scored));
                }
            } else {
                let anchors = analyzer.anchors(&text, top_n);
                if json {
                    println!("{}", serde_json::to_string_pretty(&anchors)?);
                } else {
                    println!("{}", rtilens_semantic::format_fact_anchors(&anchors));
                }
            }
        }
        Commands::Report { input, top_n, json } => {
            let text = read_input(&input)?;
            let top_n = top_n.unwrap_or(analyzer.anchor_count());
            let analysis = analyzer.analyze(&source_name(&input), &text, top_n);
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis.to_json())?);
            } else {
                print!("{}", display::render_report(&analysis, &today()));
            }
        }
        Commands::Batch { files, top_n, json } => {
            let top_n = top_n.unwrap_or(analyzer.anchor_count());
            let (results, stats) = batch::run_batch(Arc::new(analyzer), files, top_n).await;

            let generated = today();
            for result in &results {
                match result {
                    Ok(analysis) if json => println!("{}", analysis.to_json()),
                    Ok(analysis) => println!("{}", display::render_report(analysis, &generated)),
                    Err(e) => eprintln!("error: {e:#}"),
                }
            }
            eprintln!(
                "{} documents, {} failed, {:.2}s",
                stats.documents, stats.failed, stats.elapsed_secs
            );
            if stats.failed > 0 {
                anyhow::bail!("{} of {} documents failed", stats.failed, stats.documents);
            }
        }
    }

    Ok(())
}

fn source_name(input: &Path) -> String {
    if input == Path::new("-") {
        "stdin".to_string()
    } else {
        input.display().to_string()
    }
}

fn today() -> String {
    chrono::Local::now().format("%d %B %Y").to_string()
}
