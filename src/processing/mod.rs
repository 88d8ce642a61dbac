//! Resume structure extraction and scoring

pub mod document;
pub mod text_processor;
pub mod sections;
pub mod experience;
pub mod education;
pub mod skills;
pub mod summary;
pub mod skill_matcher;
pub mod assembler;
pub mod pipeline;
