//! Section segmentation: assigns every line of a resume to a named section

use crate::config::SegmenterConfig;
use crate::processing::document::{SectionKind, SectionMap};
use log::debug;
use regex::Regex;

/// Header vocabulary, tested in this order. The first matching kind wins.
const HEADER_PATTERNS: [(SectionKind, &str); 9] = [
    (SectionKind::Summary, r"SUMMARY|PROFESSIONAL\s+SUMMARY|PROFILE|OBJECTIVE"),
    (SectionKind::Experience, r"EXPERIENCE|WORK\s+EXPERIENCE|PROFESSIONAL\s+EXPERIENCE|EMPLOYMENT"),
    (SectionKind::Education, r"EDUCATION|ACADEMIC|QUALIFICATIONS"),
    (SectionKind::Skills, r"SKILLS|TECHNICAL\s+SKILLS|CORE\s+COMPETENCIES|COMPETENCIES"),
    (SectionKind::Certifications, r"CERTIFICATIONS|CERTIFICATES|ACCREDITATIONS"),
    (SectionKind::Projects, r"PROJECTS|KEY\s+PROJECTS"),
    (SectionKind::References, r"REFERENCES"),
    (SectionKind::Languages, r"LANGUAGES|LANGUAGE\s+PROFICIENCY"),
    (SectionKind::Awards, r"AWARDS|HONORS|ACHIEVEMENTS"),
];

pub struct SectionSegmenter {
    patterns: Vec<(SectionKind, Regex)>,
    preserve_blank_lines: bool,
}

/// Fold state: the section being filled and the lines read since its header
#[derive(Debug, Clone)]
pub struct SegmenterState {
    current: SectionKind,
    pending: Vec<String>,
    sections: SectionMap,
}

impl SegmenterState {
    pub fn new(start: SectionKind) -> Self {
        Self {
            current: start,
            pending: Vec::new(),
            sections: SectionMap::new(),
        }
    }

    pub fn current(&self) -> SectionKind {
        self.current
    }

    fn flush(&mut self) {
        let mut lines = std::mem::take(&mut self.pending);

        // Blank separators only matter between content lines
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        let leading = lines.iter().take_while(|line| line.is_empty()).count();
        lines.drain(..leading);

        if !lines.is_empty() {
            self.sections.append(self.current, lines);
        }
    }

    pub fn finish(mut self) -> SectionMap {
        self.flush();
        self.sections
    }
}

impl Default for SectionSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionSegmenter {
    pub fn new() -> Self {
        Self::with_options(false, false)
    }

    pub fn from_config(config: &SegmenterConfig) -> Self {
        Self::with_options(config.strict_headers, config.preserve_blank_lines)
    }

    pub fn with_options(strict_headers: bool, preserve_blank_lines: bool) -> Self {
        let patterns = HEADER_PATTERNS
            .iter()
            .map(|(kind, alternatives)| {
                let pattern = if strict_headers {
                    format!(r"(?i)^(?:{})\s*:?$", alternatives)
                } else {
                    format!(r"(?i)(?:{})", alternatives)
                };
                let regex = Regex::new(&pattern).expect("Invalid section header regex");
                (*kind, regex)
            })
            .collect();

        Self {
            patterns,
            preserve_blank_lines,
        }
    }

    /// Section kind introduced by `line`, if it is a header
    pub fn classify(&self, line: &str) -> Option<SectionKind> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        self.patterns
            .iter()
            .find(|(_, regex)| regex.is_match(line))
            .map(|(kind, _)| *kind)
    }

    pub fn segment<S: AsRef<str>>(&self, lines: &[S]) -> SectionMap {
        self.segment_from(SectionKind::Header, lines)
    }

    /// Segment starting with `start` as the active section
    pub fn segment_from<S: AsRef<str>>(&self, start: SectionKind, lines: &[S]) -> SectionMap {
        let sections = lines
            .iter()
            .fold(SegmenterState::new(start), |state, line| self.step(state, line.as_ref()))
            .finish();

        debug!(
            "Segmented {} lines into sections: {:?}",
            lines.len(),
            sections.kinds()
        );
        sections
    }

    /// Advance the fold by one line
    pub fn step(&self, mut state: SegmenterState, line: &str) -> SegmenterState {
        let line = line.trim();

        if line.is_empty() {
            if self.preserve_blank_lines {
                state.pending.push(String::new());
            }
            return state;
        }

        match self.classify(line) {
            Some(kind) => {
                state.flush();
                state.current = kind;
            }
            None => state.pending.push(line.to_string()),
        }

        state
    }
}
