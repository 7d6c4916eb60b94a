use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use docsim::domain::document::UploadedDocument;
use docsim::embedding::MiniLmEncoder;
use docsim::models::config::AppConfig;
use docsim::pipeline::{ComparisonReport, PipelineError, compare};

/// Compare two documents by the cosine similarity of their sentence
/// embeddings.
#[derive(Parser)]
#[command(name = "docsim", version, about)]
struct Cli {
    /// First document (.txt, .pdf, .docx or .pptx).
    first: PathBuf,
    /// Second document.
    second: PathBuf,
    /// Print the full report as JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

fn load_document(path: &PathBuf) -> Option<UploadedDocument> {
    match UploadedDocument::from_path(path) {
        Ok(document) => Some(document),
        Err(e) => {
            log::error!("{}: {e}", path.display());
            None
        }
    }
}

fn print_report(report: &ComparisonReport, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("Document 1 preview:\n{}\n", report.preview_a);
    println!("Document 2 preview:\n{}\n", report.preview_b);
    println!("Cosine similarity: {}", report.formatted_score());
    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let Some(first) = load_document(&cli.first) else {
        return ExitCode::FAILURE;
    };
    let Some(second) = load_document(&cli.second) else {
        return ExitCode::FAILURE;
    };

    log::info!("Loading embedding model");
    let mut encoder = match MiniLmEncoder::try_new(&config.embedding) {
        Ok(encoder) => encoder,
        Err(e) => {
            log::error!("Failed to load embedding model: {e}");
            return ExitCode::FAILURE;
        }
    };

    match compare(&mut encoder, first, second) {
        Ok(report) => {
            if let Err(e) = print_report(&report, cli.json) {
                log::error!("Failed to serialize report: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e @ PipelineError::EmptyExtraction) => {
            log::warn!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
