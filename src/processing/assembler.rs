//! Candidate record assembly from section parser and scorer output

use crate::processing::document::{SectionKind, SectionMap};
use crate::processing::education::{EducationEntry, EducationParser};
use crate::processing::experience::{ExperienceParser, JobEntry};
use crate::processing::skill_matcher::ScoreBundle;
use crate::processing::skills::{SkillCategoryMap, SkillsParser};
use crate::processing::summary::SummaryParser;
use serde::{Deserialize, Serialize};

/// The normalized record handed to renderers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,
    pub title: String,
    pub summary_points: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<String>,
    pub experience: Vec<JobEntry>,
    pub skills: SkillCategoryMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_assessment: Option<ScoreBundle>,
}

/// Parsed fields before they are merged; anything left out defaults to empty
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateParts {
    pub name: Option<String>,
    pub title: Option<String>,
    pub summary_points: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<String>,
    pub experience: Vec<JobEntry>,
    pub skills: SkillCategoryMap,
}

impl CandidateRecord {
    /// Split the record back into its parts and assessment
    pub fn into_parts(self) -> (CandidateParts, Option<ScoreBundle>) {
        let parts = CandidateParts {
            name: Some(self.name),
            title: Some(self.title),
            summary_points: self.summary_points,
            education: self.education,
            certifications: self.certifications,
            experience: self.experience,
            skills: self.skills,
        };
        (parts, self.skill_assessment)
    }
}

/// Merge parsed fields and an optional assessment into one record
pub fn assemble(parts: CandidateParts, skill_assessment: Option<ScoreBundle>) -> CandidateRecord {
    CandidateRecord {
        name: parts.name.unwrap_or_default(),
        title: parts.title.unwrap_or_default(),
        summary_points: parts.summary_points,
        education: parts.education,
        certifications: parts.certifications,
        experience: parts.experience,
        skills: parts.skills,
        skill_assessment,
    }
}

/// Runs every section parser over a section map
pub struct CandidateAssembler {
    summary_parser: SummaryParser,
    experience_parser: ExperienceParser,
    education_parser: EducationParser,
    skills_parser: SkillsParser,
}

impl Default for CandidateAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateAssembler {
    pub fn new() -> Self {
        Self {
            summary_parser: SummaryParser::new(),
            experience_parser: ExperienceParser::new(),
            education_parser: EducationParser::new(),
            skills_parser: SkillsParser::new(),
        }
    }

    pub fn parse_parts(&self, sections: &SectionMap) -> CandidateParts {
        let section_text = |kind| sections.text(kind).unwrap_or_default();

        let summary = section_text(SectionKind::Summary);
        let title = self.summary_parser.title(&summary);
        let summary_points = self.summary_parser.summary_points(&summary, &title);

        CandidateParts {
            name: Some(self.summary_parser.name(&section_text(SectionKind::Header))),
            title: Some(title),
            summary_points,
            education: self.education_parser.parse(&section_text(SectionKind::Education)),
            certifications: self.summary_parser.certifications(&section_text(SectionKind::Certifications)),
            experience: self.experience_parser.parse(&section_text(SectionKind::Experience)),
            skills: self.skills_parser.parse(&section_text(SectionKind::Skills)),
        }
    }

    pub fn build_candidate(&self, sections: &SectionMap, skill_assessment: Option<ScoreBundle>) -> CandidateRecord {
        assemble(self.parse_parts(sections), skill_assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::sections::SectionSegmenter;
    use crate::processing::skill_matcher::{Requirements, SkillMatcher};

    fn sample_sections() -> SectionMap {
        let lines = vec![
            "Jane Doe",
            "jane@example.com",
            "SUMMARY",
            "Senior Developer",
            "Built things",
            "EXPERIENCE",
            "Acme Corp, NYC",
            "2020-2022",
            "Engineer",
            "- Shipped X",
            "EDUCATION",
            "Master of Science, MIT (2019)",
            "SKILLS",
            "Rust, SQL",
            "CERTIFICATIONS",
            "• CKA",
        ];
        SectionSegmenter::new().segment(&lines)
    }

    #[test]
    fn test_build_candidate() {
        let candidate = CandidateAssembler::new().build_candidate(&sample_sections(), None);

        assert_eq!(candidate.name, "Jane Doe");
        assert_eq!(candidate.title, "Senior Developer");
        assert_eq!(candidate.summary_points, vec!["Built things"]);
        assert_eq!(candidate.experience.len(), 1);
        assert_eq!(candidate.experience[0].role.as_deref(), Some("Engineer"));
        assert_eq!(candidate.education[0].year.as_deref(), Some("2019"));
        assert_eq!(candidate.certifications, vec!["CKA"]);
        assert_eq!(candidate.skills.get("Technical Skills").unwrap(), &["Rust", "SQL"]);
        assert!(candidate.skill_assessment.is_none());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let candidate = CandidateAssembler::new().build_candidate(&SectionMap::new(), None);
        assert_eq!(candidate, CandidateRecord::default());

        let candidate = assemble(CandidateParts::default(), None);
        assert_eq!(candidate.name, "");
        assert!(candidate.skills.is_empty());
    }

    #[test]
    fn test_reassembly_is_idempotent() {
        let sections = sample_sections();
        let bundle = SkillMatcher::new().score(
            "jane rust sql",
            &Requirements::new(vec!["Rust".to_string()], vec![], vec![]),
        );
        let candidate = CandidateAssembler::new().build_candidate(&sections, Some(bundle));

        let (parts, assessment) = candidate.clone().into_parts();
        assert_eq!(assemble(parts, assessment), candidate);
    }

    #[test]
    fn test_serialized_shape() {
        let candidate = CandidateAssembler::new().build_candidate(&sample_sections(), None);
        let json = serde_json::to_value(&candidate).unwrap();

        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["experience"][0]["company"], "Acme Corp");
        assert!(json.get("skill_assessment").is_none());
    }
}
