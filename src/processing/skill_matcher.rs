//! Skill matching and weighted candidate scoring

use crate::config::ScoringConfig;
use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Whole-word patterns that indicate the resume mentions formal education
const EDUCATION_PATTERN: &str = r"\b(?:bachelor|master|phd|doctorate|degree|diploma|mba|university|college)\b";

/// Skill matcher for whole-word requirement matching
pub struct SkillMatcher {
    weights: ScoringConfig,
    education_regex: Regex,
}

/// Requirement lists supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    pub must_have: Vec<String>,
    pub nice_to_have: Vec<String>,
    pub industry: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MustHaveScore {
    pub matches: Vec<String>,
    pub missing: Vec<String>,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub matches: Vec<String>,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationScore {
    pub present: bool,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBundle {
    pub must_have: MustHaveScore,
    pub nice_to_have: CategoryScore,
    pub industry: CategoryScore,
    pub education: EducationScore,
    pub total_score: f64,
}

impl Requirements {
    pub fn new(must_have: Vec<String>, nice_to_have: Vec<String>, industry: Vec<String>) -> Self {
        Self {
            must_have,
            nice_to_have,
            industry,
        }
    }

    /// Build from comma-separated form fields, trimming and dropping empty tokens
    pub fn from_fields(must_have: Option<&str>, nice_to_have: Option<&str>, industry: Option<&str>) -> Self {
        Self {
            must_have: split_field(must_have),
            nice_to_have: split_field(nice_to_have),
            industry: split_field(industry),
        }
    }

    /// Scoring only runs when must-have skills were requested
    pub fn should_score(&self) -> bool {
        !self.must_have.is_empty()
    }
}

fn split_field(field: Option<&str>) -> Vec<String> {
    field
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

impl SkillMatcher {
    pub fn new() -> Self {
        Self::with_weights(ScoringConfig::default())
    }

    pub fn with_weights(weights: ScoringConfig) -> Self {
        let education_regex = Regex::new(EDUCATION_PATTERN).expect("Invalid education regex");
        Self {
            weights,
            education_regex,
        }
    }

    /// Case-insensitive whole-word test of `skill` against already lowercased text
    pub fn contains_skill(&self, lowered_text: &str, skill: &str) -> bool {
        let skill = skill.trim().to_lowercase();
        if skill.is_empty() {
            return false;
        }

        let pattern = format!(r"\b{}\b", regex::escape(&skill));
        match Regex::new(&pattern) {
            Ok(regex) => regex.is_match(lowered_text),
            Err(e) => {
                warn!("Could not build matcher for skill '{}': {}", skill, e);
                false
            }
        }
    }

    pub fn has_education(&self, lowered_text: &str) -> bool {
        self.education_regex.is_match(lowered_text)
    }

    /// Score the resume text against the requirement lists
    pub fn score(&self, resume_text: &str, requirements: &Requirements) -> ScoreBundle {
        let text = resume_text.to_lowercase();

        let (must_matches, must_missing): (Vec<String>, Vec<String>) = requirements
            .must_have
            .iter()
            .cloned()
            .partition(|skill| self.contains_skill(&text, skill));
        let nice_matches = self.matching(&text, &requirements.nice_to_have);
        let industry_matches = self.matching(&text, &requirements.industry);
        let education_present = self.has_education(&text);

        let must_have = MustHaveScore {
            score: weighted_ratio(must_matches.len(), requirements.must_have.len(), self.weights.must_have_weight),
            matches: must_matches,
            missing: must_missing,
        };
        let nice_to_have = CategoryScore {
            score: weighted_ratio(nice_matches.len(), requirements.nice_to_have.len(), self.weights.nice_to_have_weight),
            matches: nice_matches,
        };
        let industry = CategoryScore {
            score: weighted_ratio(industry_matches.len(), requirements.industry.len(), self.weights.industry_weight),
            matches: industry_matches,
        };
        let education = EducationScore {
            present: education_present,
            score: if education_present { self.weights.education_weight } else { 0.0 },
        };

        let total_score = must_have.score + nice_to_have.score + industry.score + education.score;
        debug!(
            "Scored resume: must-have {:.1}, nice-to-have {:.1}, industry {:.1}, education {:.1}, total {:.1}",
            must_have.score, nice_to_have.score, industry.score, education.score, total_score
        );

        ScoreBundle {
            must_have,
            nice_to_have,
            industry,
            education,
            total_score,
        }
    }

    fn matching(&self, lowered_text: &str, skills: &[String]) -> Vec<String> {
        skills
            .iter()
            .filter(|skill| self.contains_skill(lowered_text, skill))
            .cloned()
            .collect()
    }

    pub fn weights(&self) -> &ScoringConfig {
        &self.weights
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// `matched / required * weight`, zero for an empty requirement list
fn weighted_ratio(matched: usize, required: usize, weight: f64) -> f64 {
    if required == 0 {
        return 0.0;
    }
    matched as f64 / required as f64 * weight
}
