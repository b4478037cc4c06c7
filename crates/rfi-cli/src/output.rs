//! Output formatting for the CLI.

use colored::*;
use rfi_domain::{ConsolidatedReport, Priority, SourcedAction};
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Maximum actions shown per priority group in the terminal summary
const SUMMARY_ACTIONS_PER_GROUP: usize = 5;

/// Terminal output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Render the post-run summary of a consolidated report.
    pub fn report_summary(&self, report: &ConsolidatedReport, output_path: &Path) -> String {
        let divider = "=".repeat(60);
        let mut out = String::new();

        out.push_str(&format!("\n{}\n", divider));
        out.push_str("RFI REVIEW SUMMARY\n");
        out.push_str(&format!("{}\n", divider));
        out.push_str(&format!("Files analyzed: {}\n", report.total_files));

        out.push_str(&format!(
            "\nConsolidated Themes ({}):\n",
            report.consolidated_themes.len()
        ));
        for theme in &report.consolidated_themes {
            out.push_str(&format!("  - {}\n", theme));
        }

        out.push_str(&format!(
            "\nTotal Actions Identified: {}\n",
            report.consolidated_actions.len()
        ));

        for priority in [Priority::High, Priority::Medium] {
            let group: Vec<&SourcedAction> = report
                .consolidated_actions
                .iter()
                .filter(|a| a.action.priority == priority)
                .collect();
            if group.is_empty() {
                continue;
            }

            let label = match priority {
                Priority::High => "High",
                Priority::Medium => "Medium",
                Priority::Low => "Low",
            };
            out.push_str(&format!(
                "\n{} Priority Actions ({}):\n",
                label,
                group.len()
            ));
            out.push_str(&action_table(&group));
            out.push('\n');
        }

        out.push_str(&format!("\n{}\n", divider));
        out.push_str(&format!(
            "Full report saved to: {}\n",
            output_path.display()
        ));
        out.push_str(&format!("{}\n", divider));

        out
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Render a group of actions as a table, truncated to the summary limit.
fn action_table(actions: &[&SourcedAction]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Action", "Timeframe", "Source"]);

    for sourced in actions.iter().take(SUMMARY_ACTIONS_PER_GROUP) {
        builder.push_record([
            truncate(&sourced.action.description, 60).as_str(),
            sourced.action.timeframe.as_str(),
            sourced.source_file.as_str(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
