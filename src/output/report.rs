//! Data handed to renderers and the summary reported after a run

use crate::processing::assembler::CandidateRecord;
use crate::processing::skill_matcher::ScoreBundle;
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Template context: the candidate plus the time the document was rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderContext {
    pub candidate: CandidateRecord,
    pub current_date: String,
}

/// What a caller gets back after processing a resume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingSummary {
    pub filename: String,
    pub candidate_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_assessment: Option<AssessmentSummary>,
}

/// Flattened scores for quick display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSummary {
    pub total_score: f64,
    pub must_have_score: f64,
    pub nice_to_have_score: f64,
    pub industry_score: f64,
    pub education_score: f64,
    pub missing_must_have: Vec<String>,
}

impl RenderContext {
    pub fn new(candidate: CandidateRecord) -> Self {
        Self::at(candidate, Local::now())
    }

    pub fn at<Tz: TimeZone>(candidate: CandidateRecord, when: DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            candidate,
            current_date: when.format(DATE_FORMAT).to_string(),
        }
    }
}

impl From<&ScoreBundle> for AssessmentSummary {
    fn from(bundle: &ScoreBundle) -> Self {
        Self {
            total_score: bundle.total_score,
            must_have_score: bundle.must_have.score,
            nice_to_have_score: bundle.nice_to_have.score,
            industry_score: bundle.industry.score,
            education_score: bundle.education.score,
            missing_must_have: bundle.must_have.missing.clone(),
        }
    }
}

impl ProcessingSummary {
    pub fn new(filename: impl Into<String>, candidate: &CandidateRecord) -> Self {
        Self {
            filename: filename.into(),
            candidate_name: candidate.name.clone(),
            skill_assessment: candidate.skill_assessment.as_ref().map(AssessmentSummary::from),
        }
    }
}
