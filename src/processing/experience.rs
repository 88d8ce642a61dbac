//! Experience section parsing: one job entry per block of lines

use crate::processing::text_processor::{non_empty, split_first_comma, strip_bullet, TextProcessor};
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobEntry {
    pub company: String,
    pub location: Option<String>,
    pub dates: Option<String>,
    pub role: Option<String>,
    pub bullets: Vec<String>,
}

pub struct ExperienceParser {
    text_processor: TextProcessor,
    date_regex: Regex,
}

impl Default for ExperienceParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperienceParser {
    pub fn new() -> Self {
        let date_regex = Regex::new(r"\d{4}|\d{2}/\d{2}|Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec")
            .expect("Invalid date regex");

        Self {
            text_processor: TextProcessor::new(),
            date_regex,
        }
    }

    pub fn parse(&self, text: &str) -> Vec<JobEntry> {
        self.text_processor
            .split_blocks(text)
            .into_iter()
            .map(|block| self.parse_block(block))
            .collect()
    }

    /// Whether the second line of a block reads as a date range
    pub fn looks_like_dates(&self, line: &str) -> bool {
        self.date_regex.is_match(line)
    }

    fn parse_block(&self, block: &str) -> JobEntry {
        let lines: Vec<&str> = block.lines().map(str::trim).collect();

        let (company, location) = match split_first_comma(lines[0]) {
            Some((company, location)) => (company.to_string(), non_empty(location)),
            None => (lines[0].to_string(), None),
        };

        // Line 2 is either the date range (then line 3 is the role) or the role
        let (dates, role, bullet_start) = match lines.get(1) {
            Some(second) if self.looks_like_dates(second) => {
                let role = lines.get(2).and_then(|line| non_empty(line));
                (non_empty(second), role, 3)
            }
            Some(second) => (None, non_empty(second), 2),
            None => (None, None, 1),
        };

        let bullets = lines
            .iter()
            .skip(bullet_start)
            .map(|line| strip_bullet(line))
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        JobEntry {
            company,
            location,
            dates,
            role,
            bullets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_a_job() {
        let parser = ExperienceParser::new();
        let jobs = parser.parse("Acme Corp, NYC\n2020-2022\nEngineer\n- Shipped X");

        assert_eq!(
            jobs,
            vec![JobEntry {
                company: "Acme Corp".to_string(),
                location: Some("NYC".to_string()),
                dates: Some("2020-2022".to_string()),
                role: Some("Engineer".to_string()),
                bullets: vec!["Shipped X".to_string()],
            }]
        );
    }

    #[test]
    fn test_role_without_dates() {
        let parser = ExperienceParser::new();
        let jobs = parser.parse("Globex\nStaff Engineer\n• Led migration\nOwned on-call rotation");

        let job = &jobs[0];
        assert_eq!(job.company, "Globex");
        assert_eq!(job.location, None);
        assert_eq!(job.dates, None);
        assert_eq!(job.role.as_deref(), Some("Staff Engineer"));
        assert_eq!(job.bullets, vec!["Led migration", "Owned on-call rotation"]);
    }

    #[test]
    fn test_month_and_slash_dates() {
        let parser = ExperienceParser::new();
        assert!(parser.looks_like_dates("Jan 2019 - Present"));
        assert!(parser.looks_like_dates("03/19 - 04/21"));
        assert!(parser.looks_like_dates("Sep - Dec"));
        assert!(!parser.looks_like_dates("Senior Engineer"));
        // Month abbreviations are case-sensitive
        assert!(!parser.looks_like_dates("marketing lead"));
    }

    #[test]
    fn test_blocks_split_on_blank_lines() {
        let parser = ExperienceParser::new();
        let text = "Acme Corp, Boston, MA\nMar 2019 - Dec 2021\nDeveloper\n* Built APIs\n\n\nInitech\nAnalyst";
        let jobs = parser.parse(text);

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].location.as_deref(), Some("Boston, MA"));
        assert_eq!(jobs[0].bullets, vec!["Built APIs"]);
        assert_eq!(jobs[1].company, "Initech");
        assert_eq!(jobs[1].role.as_deref(), Some("Analyst"));
    }

    #[test]
    fn test_bare_glyph_lines_are_not_bullets() {
        let parser = ExperienceParser::new();
        let jobs = parser.parse("Acme Corp\n2020 - 2022\nEngineer\n-\n• Shipped X\n*\n- Led Y");

        assert_eq!(jobs[0].bullets, vec!["Shipped X", "Led Y"]);
    }

    #[test]
    fn test_short_blocks_keep_derivable_fields() {
        let parser = ExperienceParser::new();

        let jobs = parser.parse("Acme Corp");
        assert_eq!(jobs[0].company, "Acme Corp");
        assert_eq!(jobs[0].role, None);
        assert!(jobs[0].bullets.is_empty());

        let jobs = parser.parse("Acme Corp\n2020 - 2021");
        assert_eq!(jobs[0].dates.as_deref(), Some("2020 - 2021"));
        assert_eq!(jobs[0].role, None);
        assert!(jobs[0].bullets.is_empty());

        assert!(parser.parse("\n\n  \n").is_empty());
    }
}
