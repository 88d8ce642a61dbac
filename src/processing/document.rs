//! Document structures: raw extracted lines and the section map built from them

use serde::{Deserialize, Serialize};

/// Ordered plain-text lines extracted from a source document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    lines: Vec<String>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Header,
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Projects,
    References,
    Languages,
    Awards,
}

/// One bucket of the section map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub lines: Vec<String>,
}

/// Sections in the order they first appeared in the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMap {
    sections: Vec<Section>,
}

impl RawDocument {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines, source: None }
    }

    /// Split extracted text into lines, normalizing `\r\n` endings
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(|line| line.trim_end_matches('\r').to_string()).collect())
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The full text the skill matcher runs against, blank lines included
    pub fn full_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }

    pub fn word_count(&self) -> usize {
        self.lines.iter().map(|line| line.split_whitespace().count()).sum()
    }
}

impl SectionKind {
    pub const ALL: [SectionKind; 10] = [
        SectionKind::Header,
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Certifications,
        SectionKind::Projects,
        SectionKind::References,
        SectionKind::Languages,
        SectionKind::Awards,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Certifications => "certifications",
            SectionKind::Projects => "projects",
            SectionKind::References => "references",
            SectionKind::Languages => "languages",
            SectionKind::Awards => "awards",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Section {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append lines to the bucket for `kind`, creating it at the end if absent.
    /// Re-opened sections keep their first position.
    pub fn append(&mut self, kind: SectionKind, lines: Vec<String>) {
        match self.sections.iter_mut().find(|section| section.kind == kind) {
            Some(section) => section.lines.extend(lines),
            None => self.sections.push(Section { kind, lines }),
        }
    }

    pub fn get(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    /// Section text joined with newlines, `None` when the section never appeared
    pub fn text(&self, kind: SectionKind) -> Option<String> {
        self.get(kind).map(Section::text)
    }

    pub fn contains(&self, kind: SectionKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|section| section.kind).collect()
    }

    /// Known kinds with no bucket, in canonical order
    pub fn missing_kinds(&self) -> Vec<SectionKind> {
        SectionKind::ALL
            .into_iter()
            .filter(|kind| !self.contains(*kind))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
