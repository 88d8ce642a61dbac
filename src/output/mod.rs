//! Rendering of candidate records

pub mod formatter;
pub mod report;

pub use formatter::{suggest_filename, save_output, OutputFormatter, OutputTarget, RenderGenerator};
pub use report::{ProcessingSummary, RenderContext};
