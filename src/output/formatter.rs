//! Output formatters that render a candidate record in a standard layout

use crate::config::OutputFormat;
use crate::error::{Result, ResumeInspectorError};
use crate::output::report::RenderContext;
use crate::processing::education::EducationEntry;
use crate::processing::experience::JobEntry;
use crate::processing::skill_matcher::ScoreBundle;
use askama::Template;
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

/// Trait for rendering a candidate record
pub trait OutputFormatter {
    fn format(&self, context: &RenderContext) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON of the full render context
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter;

/// Standalone HTML page
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Dispatches to the formatter for the requested format
pub struct RenderGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ name }} - Resume</title>
    {% if include_styles %}
    <style>
        body {
            font-family: Calibri, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.5;
            color: #222;
            max-width: 850px;
            margin: 0 auto;
            padding: 30px;
        }
        h1 { margin-bottom: 0; }
        .title { color: #555; font-size: 1.2em; margin-top: 4px; }
        h2 {
            color: #1f4e79;
            border-bottom: 2px solid #1f4e79;
            padding-bottom: 4px;
            text-transform: uppercase;
            font-size: 1.05em;
        }
        .job { margin-bottom: 16px; }
        .job-heading { font-weight: bold; }
        .job-meta { color: #666; font-style: italic; }
        .assessment { background: #f3f6f9; padding: 12px 16px; border-left: 4px solid #1f4e79; }
        .footer { color: #999; font-size: 0.8em; margin-top: 30px; }
    </style>
    {% endif %}
</head>
<body>
    <h1>{{ name }}</h1>
    {% if !title.is_empty() %}<p class="title">{{ title }}</p>{% endif %}

    {% if !summary_points.is_empty() %}
    <h2>Professional Summary</h2>
    <ul>
        {% for point in summary_points %}<li>{{ point }}</li>
        {% endfor %}
    </ul>
    {% endif %}

    {% if !education.is_empty() %}
    <h2>Education</h2>
    <ul>
        {% for entry in education %}<li>{{ entry }}</li>
        {% endfor %}
    </ul>
    {% endif %}

    {% if !certifications.is_empty() %}
    <h2>Certifications</h2>
    <ul>
        {% for cert in certifications %}<li>{{ cert }}</li>
        {% endfor %}
    </ul>
    {% endif %}

    {% if !jobs.is_empty() %}
    <h2>Professional Experience</h2>
    {% for job in jobs %}
    <div class="job">
        <div class="job-heading">{{ job.heading }}</div>
        {% if !job.meta.is_empty() %}<div class="job-meta">{{ job.meta }}</div>{% endif %}
        {% if !job.bullets.is_empty() %}
        <ul>
            {% for bullet in job.bullets %}<li>{{ bullet }}</li>
            {% endfor %}
        </ul>
        {% endif %}
    </div>
    {% endfor %}
    {% endif %}

    {% if !skills.is_empty() %}
    <h2>Skills</h2>
    {% for category in skills %}
    <p><strong>{{ category.name }}:</strong> {{ category.skills }}</p>
    {% endfor %}
    {% endif %}

    {% if has_assessment %}
    <h2>Skill Assessment</h2>
    <div class="assessment">
        <p><strong>Total score:</strong> {{ total_score }} / 100</p>
        <p>Must-have: {{ must_have_score }} | Nice-to-have: {{ nice_to_have_score }} | Industry: {{ industry_score }} | Education: {{ education_score }}</p>
        {% if !missing.is_empty() %}<p><strong>Missing must-have skills:</strong> {{ missing }}</p>{% endif %}
    </div>
    {% endif %}

    <p class="footer">Generated {{ current_date }}</p>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    name: String,
    title: String,
    current_date: String,
    summary_points: Vec<String>,
    education: Vec<String>,
    certifications: Vec<String>,
    jobs: Vec<HtmlJob>,
    skills: Vec<HtmlSkillCategory>,
    has_assessment: bool,
    total_score: String,
    must_have_score: String,
    nice_to_have_score: String,
    industry_score: String,
    education_score: String,
    missing: String,
}

struct HtmlJob {
    heading: String,
    meta: String,
    bullets: Vec<String>,
}

struct HtmlSkillCategory {
    name: String,
    skills: String,
}

/// "Degree, Institution (Year)" with absent parts left out
pub fn format_education(entry: &EducationEntry) -> String {
    let mut line = match &entry.degree {
        Some(degree) if !entry.institution.is_empty() => format!("{}, {}", degree, entry.institution),
        Some(degree) => degree.clone(),
        None => entry.institution.clone(),
    };
    if let Some(year) = &entry.year {
        line.push_str(&format!(" ({})", year));
    }
    line
}

/// "Role - Company" heading of a job
pub fn format_job_heading(job: &JobEntry) -> String {
    match &job.role {
        Some(role) if !job.company.is_empty() => format!("{} - {}", role, job.company),
        Some(role) => role.clone(),
        None => job.company.clone(),
    }
}

/// "Location | Dates" line of a job
pub fn format_job_meta(job: &JobEntry) -> String {
    [job.location.as_deref(), job.dates.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" | ")
}

fn score_label(score: f64) -> &'static str {
    match score {
        s if s >= 80.0 => "STRONG MATCH",
        s if s >= 60.0 => "GOOD MATCH",
        s if s >= 40.0 => "PARTIAL MATCH",
        _ => "WEAK MATCH",
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n{} {}\n", "▓", title)
        }
    }

    fn format_assessment(&self, bundle: &ScoreBundle) -> String {
        let mut output = String::new();
        let label = score_label(bundle.total_score);
        let color = match label {
            "STRONG MATCH" => Color::Green,
            "GOOD MATCH" => Color::BrightGreen,
            "PARTIAL MATCH" => Color::Yellow,
            _ => Color::Red,
        };

        output.push_str(&format!(
            "Total Score: {:.1}/100 [{}]\n",
            bundle.total_score,
            self.colorize(label, color)
        ));
        output.push_str(&format!(
            "  Must-have: {:.1} ({} matched)\n",
            bundle.must_have.score,
            bundle.must_have.matches.len()
        ));
        output.push_str(&format!("  Nice-to-have: {:.1}\n", bundle.nice_to_have.score));
        output.push_str(&format!("  Industry: {:.1}\n", bundle.industry.score));
        output.push_str(&format!(
            "  Education: {:.1} ({})\n",
            bundle.education.score,
            if bundle.education.present { "present" } else { "not found" }
        ));
        if !bundle.must_have.missing.is_empty() {
            output.push_str(&format!(
                "  Missing: {}\n",
                self.colorize(&bundle.must_have.missing.join(", "), Color::Red)
            ));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, context: &RenderContext) -> Result<String> {
        let candidate = &context.candidate;
        let mut output = String::new();

        let name = if candidate.name.is_empty() { "Unnamed Candidate" } else { &candidate.name };
        output.push_str(&self.format_header(name));
        if !candidate.title.is_empty() {
            output.push_str(&format!("{}\n", self.colorize(&candidate.title, Color::Cyan)));
        }

        if !candidate.summary_points.is_empty() {
            output.push_str(&self.format_header("Professional Summary"));
            for point in &candidate.summary_points {
                output.push_str(&format!("  • {}\n", point));
            }
        }

        if !candidate.education.is_empty() {
            output.push_str(&self.format_header("Education"));
            for entry in &candidate.education {
                output.push_str(&format!("  • {}\n", format_education(entry)));
            }
        }

        if !candidate.certifications.is_empty() {
            output.push_str(&self.format_header("Certifications"));
            for cert in &candidate.certifications {
                output.push_str(&format!("  • {}\n", cert));
            }
        }

        if !candidate.experience.is_empty() {
            output.push_str(&self.format_header("Professional Experience"));
            for job in &candidate.experience {
                output.push_str(&format!("{}\n", self.colorize(&format_job_heading(job), Color::White)));
                let meta = format_job_meta(job);
                if !meta.is_empty() {
                    output.push_str(&format!("{}\n", self.colorize(&meta, Color::BrightBlack)));
                }
                for bullet in &job.bullets {
                    output.push_str(&format!("  • {}\n", bullet));
                }
                output.push('\n');
            }
        }

        if !candidate.skills.is_empty() {
            output.push_str(&self.format_header("Skills"));
            for category in candidate.skills.iter() {
                output.push_str(&format!(
                    "{}: {}\n",
                    self.colorize(&category.name, Color::Yellow),
                    category.skills.join(", ")
                ));
            }
        }

        if let Some(bundle) = &candidate.skill_assessment {
            output.push_str(&self.format_header("Skill Assessment"));
            output.push_str(&self.format_assessment(bundle));
        }

        output.push_str(&format!("\nGenerated: {}\n", context.current_date));
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, context: &RenderContext) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(context)?)
        } else {
            Ok(serde_json::to_string(context)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, context: &RenderContext) -> Result<String> {
        let candidate = &context.candidate;
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", candidate.name));
        if !candidate.title.is_empty() {
            output.push_str(&format!("**{}**\n\n", candidate.title));
        }

        if !candidate.summary_points.is_empty() {
            output.push_str("## Professional Summary\n\n");
            for point in &candidate.summary_points {
                output.push_str(&format!("- {}\n", point));
            }
            output.push('\n');
        }

        if !candidate.education.is_empty() {
            output.push_str("## Education\n\n");
            for entry in &candidate.education {
                output.push_str(&format!("- {}\n", format_education(entry)));
            }
            output.push('\n');
        }

        if !candidate.certifications.is_empty() {
            output.push_str("## Certifications\n\n");
            for cert in &candidate.certifications {
                output.push_str(&format!("- {}\n", cert));
            }
            output.push('\n');
        }

        if !candidate.experience.is_empty() {
            output.push_str("## Professional Experience\n\n");
            for job in &candidate.experience {
                output.push_str(&format!("### {}\n\n", format_job_heading(job)));
                let meta = format_job_meta(job);
                if !meta.is_empty() {
                    output.push_str(&format!("*{}*\n\n", meta));
                }
                for bullet in &job.bullets {
                    output.push_str(&format!("- {}\n", bullet));
                }
                if !job.bullets.is_empty() {
                    output.push('\n');
                }
            }
        }

        if !candidate.skills.is_empty() {
            output.push_str("## Skills\n\n");
            for category in candidate.skills.iter() {
                output.push_str(&format!("- **{}:** {}\n", category.name, category.skills.join(", ")));
            }
            output.push('\n');
        }

        if let Some(bundle) = &candidate.skill_assessment {
            output.push_str("## Skill Assessment\n\n");
            output.push_str("| Component | Score |\n|---|---|\n");
            output.push_str(&format!("| Must-have | {:.1} |\n", bundle.must_have.score));
            output.push_str(&format!("| Nice-to-have | {:.1} |\n", bundle.nice_to_have.score));
            output.push_str(&format!("| Industry | {:.1} |\n", bundle.industry.score));
            output.push_str(&format!("| Education | {:.1} |\n", bundle.education.score));
            output.push_str(&format!("| **Total** | **{:.1}** |\n\n", bundle.total_score));
            if !bundle.must_have.missing.is_empty() {
                output.push_str(&format!("Missing must-have skills: {}\n\n", bundle.must_have.missing.join(", ")));
            }
        }

        output.push_str(&format!("---\n*Generated {}*\n", context.current_date));
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, context: &RenderContext) -> HtmlTemplate {
        let candidate = &context.candidate;
        let assessment = candidate.skill_assessment.as_ref();
        let score = |value: Option<f64>| value.map(|v| format!("{:.1}", v)).unwrap_or_default();

        HtmlTemplate {
            include_styles: self.include_styles,
            name: candidate.name.clone(),
            title: candidate.title.clone(),
            current_date: context.current_date.clone(),
            summary_points: candidate.summary_points.clone(),
            education: candidate.education.iter().map(format_education).collect(),
            certifications: candidate.certifications.clone(),
            jobs: candidate
                .experience
                .iter()
                .map(|job| HtmlJob {
                    heading: format_job_heading(job),
                    meta: format_job_meta(job),
                    bullets: job.bullets.clone(),
                })
                .collect(),
            skills: candidate
                .skills
                .iter()
                .map(|category| HtmlSkillCategory {
                    name: category.name.clone(),
                    skills: category.skills.join(", "),
                })
                .collect(),
            has_assessment: assessment.is_some(),
            total_score: score(assessment.map(|b| b.total_score)),
            must_have_score: score(assessment.map(|b| b.must_have.score)),
            nice_to_have_score: score(assessment.map(|b| b.nice_to_have.score)),
            industry_score: score(assessment.map(|b| b.industry.score)),
            education_score: score(assessment.map(|b| b.education.score)),
            missing: assessment.map(|b| b.must_have.missing.join(", ")).unwrap_or_default(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format(&self, context: &RenderContext) -> Result<String> {
        self.create_template_data(context)
            .render()
            .map_err(|e| ResumeInspectorError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl RenderGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true, true)
    }

    pub fn with_options(use_colors: bool, pretty_json: bool, include_html_styles: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter,
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn render(&self, context: &RenderContext, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format(context),
            OutputFormat::Json => self.json_formatter.format(context),
            OutputFormat::Markdown => self.markdown_formatter.format(context),
            OutputFormat::Html => self.html_formatter.format(context),
        }
    }
}

impl Default for RenderGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Destination of a rendered resume
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// An explicit file wins, then an explicit directory, then the configured
    /// output directory unless stdout was asked for
    pub fn resolve(
        save: Option<PathBuf>,
        out_dir: Option<PathBuf>,
        stdout: bool,
        output_dir: &Path,
        filename: &str,
    ) -> Self {
        match (save, out_dir) {
            (Some(path), _) => OutputTarget::File(path),
            (None, Some(dir)) => OutputTarget::File(dir.join(filename)),
            (None, None) if stdout => OutputTarget::Stdout,
            (None, None) => OutputTarget::File(output_dir.join(filename)),
        }
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, OutputTarget::Stdout)
    }

    pub fn write(&self, content: &str) -> Result<()> {
        match self {
            OutputTarget::Stdout => {
                println!("{}", content);
                Ok(())
            }
            OutputTarget::File(path) => save_output(content, path),
        }
    }
}

pub fn save_output(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// `<Candidate_Name>_resume.<ext>`, or `formatted_resume.<ext>` without a name
pub fn suggest_filename(candidate_name: &str, format: &OutputFormat) -> String {
    let name = candidate_name.trim();
    let base_name = if name.is_empty() {
        "formatted".to_string()
    } else {
        name.replace(' ', "_")
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_resume.{}", base_name, extension)
}
