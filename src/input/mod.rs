//! Input processing module
//! Handles file detection and text extraction into raw documents

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::InputManager;
