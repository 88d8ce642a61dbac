//! Name, title, summary points and certifications

use crate::processing::text_processor::{first_non_empty_line, TextProcessor};

pub struct SummaryParser {
    text_processor: TextProcessor,
}

impl Default for SummaryParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryParser {
    pub fn new() -> Self {
        Self {
            text_processor: TextProcessor::new(),
        }
    }

    /// Candidate name: first non-empty line of the header section
    pub fn name(&self, header: &str) -> String {
        first_non_empty_line(header).unwrap_or_default().to_string()
    }

    /// Candidate title: first non-empty line of the summary section
    pub fn title(&self, summary: &str) -> String {
        first_non_empty_line(summary).unwrap_or_default().to_string()
    }

    /// Summary bullets, without the leading title line
    pub fn summary_points(&self, summary: &str, title: &str) -> Vec<String> {
        let remainder = match summary.strip_prefix(title) {
            Some(rest) if !title.is_empty() => rest.trim(),
            _ => summary,
        };
        self.text_processor.split_bullets(remainder)
    }

    pub fn certifications(&self, certifications: &str) -> Vec<String> {
        self.text_processor.split_bullets(certifications)
    }
}
