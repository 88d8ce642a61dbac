//! Error handling for the resume inspector

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeInspectorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeInspectorError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeInspectorError {
    fn from(err: anyhow::Error) -> Self {
        ResumeInspectorError::Processing(err.to_string())
    }
}
