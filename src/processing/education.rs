//! Education section parsing

use crate::processing::text_processor::{non_empty, split_first_comma};
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub institution: String,
    pub year: Option<String>,
}

pub struct EducationParser {
    block_regex: Regex,
    year_regex: Regex,
}

impl Default for EducationParser {
    fn default() -> Self {
        Self::new()
    }
}

impl EducationParser {
    pub fn new() -> Self {
        // Blank lines or a newline followed by a bullet glyph both end a block
        let block_regex = Regex::new(r"\n\s*\n+|\n\s*[•\-\*]").expect("Invalid education block regex");
        let year_regex = Regex::new(r"\((\d{4})\)").expect("Invalid year regex");

        Self {
            block_regex,
            year_regex,
        }
    }

    /// One entry per block, read from the block's first line only. The block
    /// boundary consumes the glyph of later bulleted lines; a glyph opening the
    /// very first line stays part of it.
    pub fn parse(&self, text: &str) -> Vec<EducationEntry> {
        self.block_regex
            .split(text)
            .filter_map(|block| block.lines().map(str::trim).find(|line| !line.is_empty()))
            .map(|line| self.parse_line(line))
            .collect()
    }

    fn parse_line(&self, line: &str) -> EducationEntry {
        let mut line = line.to_string();

        let mut year = None;
        if let Some(caps) = self.year_regex.captures(&line) {
            year = Some(caps[1].to_string());
            let matched = caps[0].to_string();
            line = line.replace(&matched, "").trim().to_string();
        }

        match split_first_comma(&line) {
            Some((degree, institution)) => EducationEntry {
                degree: non_empty(degree),
                institution: institution.to_string(),
                year,
            },
            None => EducationEntry {
                degree: None,
                institution: line,
                year,
            },
        }
    }
}
