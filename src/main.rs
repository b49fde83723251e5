use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use labsense::config::{self, ReportConfig};
use labsense::pipeline::analysis::render_markdown;
use labsense::pipeline::ReportProcessor;

/// Explain a lab-report PDF against standard reference ranges.
#[derive(Parser)]
#[command(name = "labsense", about = "Lab report explainer", version)]
struct Cli {
    /// Path to the lab report PDF
    pdf: PathBuf,

    /// Sliding-window chunk size in characters (300-1000)
    #[arg(long, default_value_t = 800)]
    chunk_size: usize,

    /// Overlap between consecutive chunks in characters (0-200)
    #[arg(long, default_value_t = 100)]
    overlap: usize,

    /// How many chunks retrieval returns
    #[arg(long, default_value_t = 5)]
    top_k: usize,

    /// Free-text focus for retrieval (defaults to a general lab-results query)
    #[arg(long)]
    focus: Option<String>,

    /// Also print the retrieved context chunks
    #[arg(long)]
    show_context: bool,

    /// Emit the analysis as JSON instead of markdown
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let cli = Cli::parse();

    let report_config = ReportConfig {
        chunk_size: cli.chunk_size,
        chunk_overlap: cli.overlap,
        top_k: cli.top_k,
        focus: cli.focus,
    };

    let processor = ReportProcessor::with_defaults(report_config)?;
    let outcome = processor
        .process_file(&cli.pdf)
        .with_context(|| format!("processing {}", cli.pdf.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome.analysis)?);
    } else {
        print!("{}", render_markdown(&outcome.analysis));
    }

    if cli.show_context {
        eprintln!("\n--- retrieved context ({}) ---", outcome.context.query);
        for chunk in &outcome.context.chunks {
            eprintln!("[chunk {} score {:.3}]\n{}\n", chunk.chunk_index, chunk.score, chunk.content);
        }
    }

    Ok(())
}
