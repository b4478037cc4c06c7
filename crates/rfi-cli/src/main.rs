//! RFI Review CLI - reviews RFI response PDFs and writes a consolidated
//! JSON report of themes, actions, and timeframes.

use clap::Parser;
use rfi_analyzer::{AnalyzerConfig, Reviewer, Strategy};
use rfi_cli::{Cli, CliError, Formatter, Result};
use rfi_extract::PdfExtractor;
use rfi_llm::OpenAiProvider;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let formatter = Formatter::new(!cli.no_color);

    let config = load_config(&cli)?;
    let pdf_files = validate_inputs(&cli.pdf_files, &formatter)?;

    let strategy = match &cli.api_key {
        Some(key) => Strategy::Ai(Arc::new(
            OpenAiProvider::new(key.clone()).with_model(cli.model.clone()),
        )),
        None => {
            eprintln!(
                "{}",
                formatter.warning(
                    "No OpenAI API key provided. Falling back to keyword analysis."
                )
            );
            Strategy::Heuristic
        }
    };

    let reviewer = Reviewer::new(PdfExtractor, strategy, config);

    println!(
        "{}",
        formatter.info(&format!("Reviewing {} PDF file(s)...", pdf_files.len()))
    );

    // Sequential review; per-file extraction failures skip the file and
    // the batch continues.
    let mut results = Vec::new();
    for path in &pdf_files {
        match reviewer.review(path).await {
            Ok(result) => results.push(result),
            Err(e) => {
                eprintln!(
                    "{}",
                    formatter.warning(&format!("Skipping {}: {}", path.display(), e))
                );
            }
        }
    }

    if results.is_empty() {
        return Err(CliError::NoFilesProcessed);
    }

    let report = rfi_report::consolidate(results);
    rfi_report::write_report(&report, &cli.output)?;

    print!("{}", formatter.report_summary(&report, &cli.output));

    Ok(())
}

/// Load the analyzer config from `--config`, or use defaults
fn load_config(cli: &Cli) -> Result<AnalyzerConfig> {
    let config = match &cli.config {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)?;
            AnalyzerConfig::from_toml(&toml_str).map_err(CliError::Config)?
        }
        None => AnalyzerConfig::default(),
    };
    config.validate().map_err(CliError::Config)?;
    Ok(config)
}

/// Keep the input paths that exist, warning about the rest
fn validate_inputs(paths: &[PathBuf], formatter: &Formatter) -> Result<Vec<PathBuf>> {
    let mut valid = Vec::new();
    for path in paths {
        if !path.exists() {
            eprintln!(
                "{}",
                formatter.warning(&format!("File not found: {}", path.display()))
            );
            continue;
        }
        if path
            .extension()
            .map(|ext| !ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(true)
        {
            eprintln!(
                "{}",
                formatter.warning(&format!(
                    "{} does not appear to be a PDF file",
                    path.display()
                ))
            );
        }
        valid.push(path.clone());
    }

    if valid.is_empty() {
        return Err(CliError::NoValidInputs);
    }
    Ok(valid)
}
