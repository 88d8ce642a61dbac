//! Resume inspector: heuristic resume parser and skill scorer

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_inspector::cli::{self, Cli, Commands, ConfigAction};
use resume_inspector::config::{Config, OutputFormat};
use resume_inspector::error::{Result, ResumeInspectorError};
use resume_inspector::input::InputManager;
use resume_inspector::output::{suggest_filename, OutputTarget, ProcessingSummary, RenderContext, RenderGenerator};
use resume_inspector::processing::document::RawDocument;
use resume_inspector::processing::pipeline::ResumePipeline;
use resume_inspector::processing::skill_matcher::Requirements;
use std::path::Path;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Process {
            resume,
            must_have,
            nice_to_have,
            industry,
            output,
            save,
            out_dir,
            stdout,
        } => {
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeInspectorError::InvalidInput)?,
                None => config.output.format,
            };
            let document = load_resume(&resume).await?;
            let requirements =
                Requirements::from_fields(must_have.as_deref(), nice_to_have.as_deref(), industry.as_deref());

            let pipeline = ResumePipeline::new(&config);
            let processed = pipeline.process(&document, &requirements);
            info!("Processed {} in {}ms", resume.display(), processed.processing_time_ms);

            let context = RenderContext::new(processed.candidate);
            let filename = suggest_filename(&context.candidate.name, &output_format);
            let target = OutputTarget::resolve(save, out_dir, stdout, config.output_dir(), &filename);

            // ANSI colors only make sense on a terminal
            let use_colors = config.output.color_output && target.is_stdout();
            let generator = RenderGenerator::with_options(use_colors, config.output.pretty_json, true);
            let rendered = generator.render(&context, &output_format)?;
            target.write(&rendered)?;

            let saved_name = match &target {
                OutputTarget::File(path) => {
                    info!("Saved {:?} output to {}", output_format, path.display());
                    path.file_name()
                        .map(|name| name.to_string_lossy().to_string())
                        .unwrap_or(filename)
                }
                OutputTarget::Stdout => filename,
            };
            let summary = ProcessingSummary::new(saved_name, &context.candidate);
            print_summary(&summary, output_format, &target)?;
        }

        Commands::Sections { resume } => {
            let document = load_resume(&resume).await?;
            let sections = ResumePipeline::new(&config).segment(&document);

            println!("Detected {} sections in {}\n", sections.len(), resume.display());
            for section in sections.iter() {
                println!("[{}] {} lines", section.kind, section.lines.len());
                for line in &section.lines {
                    println!("    {}", line);
                }
            }

            let missing = sections.missing_kinds();
            if !missing.is_empty() {
                let names: Vec<&str> = missing.iter().map(|kind| kind.as_str()).collect();
                println!("\nNot found: {}", names.join(", "));
            }
        }

        Commands::Score {
            resume,
            must_have,
            nice_to_have,
            industry,
        } => {
            let requirements =
                Requirements::from_fields(Some(must_have.as_str()), nice_to_have.as_deref(), industry.as_deref());
            if !requirements.should_score() {
                return Err(ResumeInspectorError::InvalidInput(
                    "At least one must-have skill is required for scoring".to_string(),
                ));
            }

            let document = load_resume(&resume).await?;
            let bundle = ResumePipeline::new(&config).score(&document, &requirements);
            println!("{}", serde_json::to_string_pretty(&bundle)?);
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Configuration: {}\n", config_path.display());
                println!("Segmenter:");
                println!("  Strict headers: {}", config.segmenter.strict_headers);
                println!("  Preserve blank lines: {}", config.segmenter.preserve_blank_lines);
                println!("\nScoring Weights:");
                println!("  Must-have: {:.1}", config.scoring.must_have_weight);
                println!("  Nice-to-have: {:.1}", config.scoring.nice_to_have_weight);
                println!("  Industry: {:.1}", config.scoring.industry_weight);
                println!("  Education: {:.1}", config.scoring.education_weight);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Colors: {}", config.output.color_output);
                println!("  Directory: {}", config.output_dir().display());
            }

            Some(ConfigAction::Reset) => {
                Config::default().save_to(config_path)?;
                println!("Configuration reset to defaults: {}", config_path.display());
            }

            Some(ConfigAction::Path) => println!("{}", config_path.display()),
        },
    }

    Ok(())
}

async fn load_resume(path: &Path) -> Result<RawDocument> {
    cli::validate_file_extension(path, cli::RESUME_EXTENSIONS)
        .map_err(|e| ResumeInspectorError::InvalidInput(format!("Resume file: {}", e)))?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"]));
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(format!("Extracting text from {}", path.display()));

    let result = InputManager::new().load_document(path).await;
    spinner.finish_and_clear();

    let document = result?;
    if document.is_blank() {
        return Err(ResumeInspectorError::InvalidInput(format!(
            "No text could be extracted from {}",
            path.display()
        )));
    }
    Ok(document)
}

fn print_summary(summary: &ProcessingSummary, format: OutputFormat, target: &OutputTarget) -> Result<()> {
    // Keep machine-readable stdout clean
    if format == OutputFormat::Json && target.is_stdout() {
        return Ok(());
    }

    eprintln!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
