//! CLI command definitions and argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Review RFI response PDF files and extract themes, actions, and
/// timeframes.
#[derive(Debug, Parser)]
#[command(name = "rfi-review")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path(s) to PDF file(s) to review
    #[arg(required = true)]
    pub pdf_files: Vec<PathBuf>,

    /// Output path for the JSON report
    #[arg(short, long, default_value = "rfi_review_report.json")]
    pub output: PathBuf,

    /// OpenAI API key (or set OPENAI_API_KEY); omit to use keyword analysis
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model to use for AI analysis
    #[arg(long, default_value = "gpt-4o-mini")]
    pub model: String,

    /// Analyzer configuration file (TOML keyword tables and timeouts)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_invocation() {
        let cli = Cli::parse_from(["rfi-review", "a.pdf"]);
        assert_eq!(cli.pdf_files.len(), 1);
        assert_eq!(cli.output, PathBuf::from("rfi_review_report.json"));
        assert_eq!(cli.model, "gpt-4o-mini");
        assert!(!cli.no_color);
    }

    #[test]
    fn test_multiple_files_and_output() {
        let cli = Cli::parse_from(["rfi-review", "a.pdf", "b.pdf", "-o", "out.json"]);
        assert_eq!(cli.pdf_files.len(), 2);
        assert_eq!(cli.output, PathBuf::from("out.json"));
    }

    #[test]
    fn test_api_key_flag() {
        let cli = Cli::parse_from(["rfi-review", "a.pdf", "--api-key", "sk-test"]);
        assert_eq!(cli.api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_requires_at_least_one_file() {
        let result = Cli::try_parse_from(["rfi-review"]);
        assert!(result.is_err());
    }
}
