//! CLI interface for the resume inspector

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Resume extensions the input layer can extract
pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "md", "markdown"];

#[derive(Parser)]
#[command(name = "resume-inspector")]
#[command(about = "Heuristic resume parser and skill scorer")]
#[command(long_about = "Split a resume into sections, extract a structured candidate record and score it against required skills")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a resume into a candidate record and render it
    Process {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Comma-separated must-have skills; enables scoring
        #[arg(short, long)]
        must_have: Option<String>,

        /// Comma-separated nice-to-have skills
        #[arg(short, long)]
        nice_to_have: Option<String>,

        /// Comma-separated industry keywords
        #[arg(short, long)]
        industry: Option<String>,

        /// Output format: console, json, markdown, html (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save the rendering to this file
        #[arg(short, long, conflicts_with = "out_dir")]
        save: Option<PathBuf>,

        /// Save the rendering under this directory with a suggested filename
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Print the rendering instead of saving it to the configured output directory
        #[arg(long, conflicts_with_all = ["save", "out_dir"])]
        stdout: bool,
    },

    /// Show the detected sections of a resume
    Sections {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,
    },

    /// Score a resume against skill requirements
    Score {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Comma-separated must-have skills
        #[arg(short, long)]
        must_have: String,

        /// Comma-separated nice-to-have skills
        #[arg(short, long)]
        nice_to_have: Option<String>,

        /// Comma-separated industry keywords
        #[arg(short, long)]
        industry: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
