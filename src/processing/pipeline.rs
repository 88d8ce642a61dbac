//! Resume pipeline: segment, parse and score one document

use crate::config::Config;
use crate::processing::assembler::{CandidateAssembler, CandidateRecord};
use crate::processing::document::{RawDocument, SectionMap};
use crate::processing::sections::SectionSegmenter;
use crate::processing::skill_matcher::{Requirements, ScoreBundle, SkillMatcher};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Coordinates the segmenter, section parsers and skill matcher
pub struct ResumePipeline {
    segmenter: SectionSegmenter,
    assembler: CandidateAssembler,
    matcher: SkillMatcher,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedResume {
    pub sections: SectionMap,
    pub candidate: CandidateRecord,
    pub processing_time_ms: u64,
}

impl Default for ResumePipeline {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ResumePipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            segmenter: SectionSegmenter::from_config(&config.segmenter),
            assembler: CandidateAssembler::new(),
            matcher: SkillMatcher::with_weights(config.scoring.clone()),
        }
    }

    pub fn segment(&self, document: &RawDocument) -> SectionMap {
        self.segmenter.segment(document.lines())
    }

    pub fn score(&self, document: &RawDocument, requirements: &Requirements) -> ScoreBundle {
        self.matcher.score(&document.full_text(), requirements)
    }

    /// Run the whole pipeline. Scoring is skipped when no must-have skills are given.
    pub fn process(&self, document: &RawDocument, requirements: &Requirements) -> ProcessedResume {
        let start_time = Instant::now();

        let sections = self.segment(document);
        info!(
            "Detected {} sections in {}",
            sections.len(),
            document.source.as_deref().unwrap_or("resume")
        );

        let skill_assessment = if requirements.should_score() {
            let bundle = self.score(document, requirements);
            info!(
                "Skill assessment: {:.1}/100 ({} of {} must-have skills)",
                bundle.total_score,
                bundle.must_have.matches.len(),
                requirements.must_have.len()
            );
            Some(bundle)
        } else {
            debug!("No must-have skills supplied, skipping skill assessment");
            None
        };

        let candidate = self.assembler.build_candidate(&sections, skill_assessment);
        debug!(
            "Assembled candidate '{}': {} jobs, {} education entries, {} skills",
            candidate.name,
            candidate.experience.len(),
            candidate.education.len(),
            candidate.skills.skill_count()
        );

        ProcessedResume {
            sections,
            candidate,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        }
    }
}
