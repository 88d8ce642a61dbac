//! Integration tests for the resume inspector

use resume_inspector::config::{Config, OutputFormat};
use resume_inspector::error::ResumeInspectorError;
use resume_inspector::input::manager::InputManager;
use resume_inspector::output::{save_output, suggest_filename, ProcessingSummary, RenderContext, RenderGenerator};
use resume_inspector::processing::document::SectionKind;
use resume_inspector::processing::pipeline::ResumePipeline;
use resume_inspector::processing::skill_matcher::Requirements;
use std::path::Path;
use std::process::Command;

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {}, got {}", expected, actual);
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Senior Software Engineer"));
    assert!(text.contains("Kubernetes"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Acme Corp, New York NY"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let manager = InputManager::new();
    let result = manager.load_document(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(matches!(result, Err(ResumeInspectorError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_text_extraction_from_docx() {
    let manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.docx"))
        .await
        .unwrap();

    // One trimmed line per non-empty paragraph
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Jane Doe");
    assert_eq!(lines[2], "PROFESSIONAL SUMMARY");
    assert!(lines.iter().all(|line| !line.is_empty() && *line == line.trim()));
    assert!(text.contains("Master of Science in Computer Science, MIT (2016)"));
}

#[tokio::test]
async fn test_docx_resume_matches_text_resume() {
    let manager = InputManager::new();
    let pipeline = ResumePipeline::default();

    let docx = manager
        .load_document(Path::new("tests/fixtures/sample_resume.docx"))
        .await
        .unwrap();
    let text = manager
        .load_document(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let from_docx = pipeline.process(&docx, &Requirements::default());
    let from_text = pipeline.process(&text, &Requirements::default());
    assert_eq!(from_docx.sections, from_text.sections);
    assert_eq!(from_docx.candidate, from_text.candidate);
}

#[tokio::test]
async fn test_corrupt_docx() {
    let manager = InputManager::new();
    let result = manager.load_document(Path::new("tests/fixtures/corrupt_resume.docx")).await;
    assert!(matches!(result, Err(ResumeInspectorError::DocxExtraction(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let manager = InputManager::new();
    let result = manager.load_document(Path::new("tests/fixtures/nonexistent.txt")).await;
    assert!(matches!(result, Err(ResumeInspectorError::InvalidInput(_))));
}

#[tokio::test]
async fn test_full_pipeline_on_text_resume() {
    let document = InputManager::new()
        .load_document(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let result = ResumePipeline::default().process(&document, &Requirements::default());

    assert_eq!(
        result.sections.kinds(),
        vec![
            SectionKind::Header,
            SectionKind::Summary,
            SectionKind::Experience,
            SectionKind::Education,
            SectionKind::Skills,
            SectionKind::Certifications,
        ]
    );

    // Every non-blank, non-header line lands in exactly one section
    let covered: usize = result.sections.iter().map(|section| section.lines.len()).sum();
    let non_blank = document.lines().iter().filter(|line| !line.trim().is_empty()).count();
    assert_eq!(covered, non_blank - 5);

    let candidate = &result.candidate;
    assert_eq!(candidate.name, "Jane Doe");
    assert_eq!(candidate.title, "Senior Software Engineer");
    assert_eq!(
        candidate.summary_points,
        vec![
            "Eight years building distributed backend systems",
            "Led migration of monolith services to Rust"
        ]
    );

    // Without blank-line separators the whole section reads as one job
    assert_eq!(candidate.experience.len(), 1);
    let job = &candidate.experience[0];
    assert_eq!(job.company, "Acme Corp");
    assert_eq!(job.location.as_deref(), Some("New York NY"));
    assert_eq!(job.dates.as_deref(), Some("Jan 2020 - Present"));
    assert_eq!(job.role.as_deref(), Some("Lead Engineer"));
    assert_eq!(job.bullets.len(), 6);

    assert_eq!(candidate.education.len(), 2);
    assert_eq!(candidate.education[0].degree.as_deref(), Some("Master of Science in Computer Science"));
    assert_eq!(candidate.education[0].institution, "MIT");
    assert_eq!(candidate.education[0].year.as_deref(), Some("2016"));
    assert_eq!(candidate.education[1].institution, "Stanford University");

    assert_eq!(candidate.skills.names(), vec!["Programming", "Cloud"]);
    assert_eq!(candidate.skills.get("Cloud").unwrap(), ["AWS", "Docker", "Kubernetes"]);
    assert_eq!(
        candidate.certifications,
        vec!["AWS Certified Solutions Architect", "Certified Kubernetes Administrator"]
    );
    assert!(candidate.skill_assessment.is_none());
}

#[tokio::test]
async fn test_preserved_blank_lines_separate_jobs() {
    let mut config = Config::default();
    config.segmenter.preserve_blank_lines = true;

    let document = InputManager::new()
        .load_document(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let result = ResumePipeline::new(&config).process(&document, &Requirements::default());

    let experience = &result.candidate.experience;
    assert_eq!(experience.len(), 2);
    assert_eq!(experience[0].bullets.len(), 2);
    assert_eq!(experience[1].company, "Globex");
    assert_eq!(experience[1].location.as_deref(), Some("Remote"));
    assert_eq!(experience[1].dates.as_deref(), Some("2016 - 2019"));
    assert_eq!(experience[1].role.as_deref(), Some("Backend Developer"));
    assert_eq!(experience[1].bullets, vec!["Built REST APIs in Python and PostgreSQL"]);
}

#[tokio::test]
async fn test_skill_assessment() {
    let document = InputManager::new()
        .load_document(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let requirements = Requirements::from_fields(Some("Rust, Python, Go"), Some("Kubernetes, Terraform"), Some("Backend"));
    let result = ResumePipeline::default().process(&document, &requirements);

    let bundle = result.candidate.skill_assessment.unwrap();
    assert_eq!(bundle.must_have.matches, vec!["Rust", "Python"]);
    assert_eq!(bundle.must_have.missing, vec!["Go"]);
    assert_close(bundle.must_have.score, 40.0);
    assert_eq!(bundle.nice_to_have.matches, vec!["Kubernetes"]);
    assert_close(bundle.nice_to_have.score, 10.0);
    assert_close(bundle.industry.score, 10.0);
    assert!(bundle.education.present);
    assert_close(bundle.total_score, 70.0);
    assert_close(
        bundle.total_score,
        bundle.must_have.score + bundle.nice_to_have.score + bundle.industry.score + bundle.education.score,
    );
}

#[tokio::test]
async fn test_full_pipeline_on_markdown_resume() {
    let document = InputManager::new()
        .load_document(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();
    let result = ResumePipeline::default().process(&document, &Requirements::default());
    let candidate = &result.candidate;

    assert_eq!(candidate.name, "Jane Doe");
    assert_eq!(candidate.title, "Senior Software Engineer");
    assert_eq!(candidate.summary_points.len(), 2);
    assert_eq!(candidate.experience[0].company, "Acme Corp");
    assert_eq!(candidate.experience[0].role.as_deref(), Some("Lead Engineer"));
    assert_eq!(candidate.education[0].year.as_deref(), Some("2016"));
    assert_eq!(candidate.skills.names(), vec!["Programming", "Cloud"]);
    assert!(candidate.certifications.is_empty());
}

#[tokio::test]
async fn test_render_and_save_every_format() {
    let document = InputManager::new()
        .load_document(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let requirements = Requirements::from_fields(Some("Rust"), None, None);
    let result = ResumePipeline::default().process(&document, &requirements);

    let context = RenderContext::new(result.candidate);
    let generator = RenderGenerator::with_options(false, true, true);
    let dir = tempfile::tempdir().unwrap();

    for format in [OutputFormat::Console, OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Html] {
        let rendered = generator.render(&context, &format).unwrap();
        assert!(rendered.contains("Jane Doe"));

        let filename = suggest_filename(&context.candidate.name, &format);
        assert!(filename.starts_with("Jane_Doe_resume."));
        let path = dir.path().join(&filename);
        save_output(&rendered, &path).unwrap();
        assert!(path.exists());
    }

    let summary = ProcessingSummary::new("Jane_Doe_resume.html", &context.candidate);
    assert_eq!(summary.candidate_name, "Jane Doe");
    assert_eq!(summary.skill_assessment.unwrap().total_score, 70.0);
}

#[tokio::test]
async fn test_configured_weights_change_scores() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.scoring.must_have_weight = 50.0;
    config.scoring.education_weight = 20.0;
    config.save_to(&config_path).unwrap();

    let loaded = Config::load_from(&config_path).unwrap();
    assert_eq!(loaded, config);

    let document = InputManager::new()
        .load_document(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let requirements = Requirements::from_fields(Some("Rust"), None, None);
    let bundle = ResumePipeline::new(&loaded).score(&document, &requirements);

    assert_close(bundle.must_have.score, 50.0);
    assert_close(bundle.education.score, 20.0);
    assert_close(bundle.total_score, 70.0);
}

#[test]
fn test_process_saves_to_configured_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    let output_dir = dir.path().join("rendered");

    let mut config = Config::default();
    config.output.output_dir = output_dir.clone();
    config.save_to(&config_path).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_resume-inspector"))
        .args(["--config"])
        .arg(&config_path)
        .args(["process", "--resume", "tests/fixtures/sample_resume.txt", "--output", "markdown"])
        .status()
        .unwrap();
    assert!(status.success());

    let saved = output_dir.join("Jane_Doe_resume.md");
    assert!(saved.exists());
    assert!(std::fs::read_to_string(saved).unwrap().starts_with("# Jane Doe"));
}

#[test]
fn test_process_stdout_skips_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    let output_dir = dir.path().join("rendered");

    let mut config = Config::default();
    config.output.output_dir = output_dir.clone();
    config.save_to(&config_path).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_resume-inspector"))
        .args(["--config"])
        .arg(&config_path)
        .args(["process", "--resume", "tests/fixtures/sample_resume.txt", "--output", "json", "--stdout"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rendered: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rendered["candidate"]["name"], "Jane Doe");
    assert!(!output_dir.exists());
}
