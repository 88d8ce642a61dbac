//! Configuration management for the resume inspector

use crate::error::{Result, ResumeInspectorError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub segmenter: SegmenterConfig,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// Only treat a line as a section header when the whole line is the header
    pub strict_headers: bool,
    /// Keep blank lines inside sections so parsers can split blocks on them
    pub preserve_blank_lines: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub must_have_weight: f64,
    pub nice_to_have_weight: f64,
    pub industry_weight: f64,
    pub education_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub pretty_json: bool,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            must_have_weight: 60.0,
            nice_to_have_weight: 20.0,
            industry_weight: 10.0,
            education_weight: 10.0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let output_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".resume-inspector")
            .join("output");

        Self {
            segmenter: SegmenterConfig {
                strict_headers: false,
                preserve_blank_lines: false,
            },
            scoring: ScoringConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                pretty_json: true,
                output_dir,
            },
        }
    }
}

impl ScoringConfig {
    pub fn total_weight(&self) -> f64 {
        self.must_have_weight + self.nice_to_have_weight + self.industry_weight + self.education_weight
    }

    /// Weights must be non-negative and add up to a 100 point scale
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("must_have_weight", self.must_have_weight),
            ("nice_to_have_weight", self.nice_to_have_weight),
            ("industry_weight", self.industry_weight),
            ("education_weight", self.education_weight),
        ];

        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ResumeInspectorError::Configuration(format!(
                    "scoring.{} must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }

        if (self.total_weight() - 100.0).abs() > 1e-6 {
            return Err(ResumeInspectorError::Configuration(format!(
                "Scoring weights must total 100, got {}",
                self.total_weight()
            )));
        }

        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load the config at `path`, writing the defaults there on first use
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeInspectorError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.scoring.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeInspectorError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-inspector")
            .join("config.toml")
    }

    pub fn output_dir(&self) -> &PathBuf {
        &self.output.output_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_total_100() {
        let config = Config::default();
        assert_eq!(config.scoring.total_weight(), 100.0);
        assert!(config.scoring.validate().is_ok());
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let scoring = ScoringConfig {
            must_have_weight: 70.0,
            ..ScoringConfig::default()
        };
        assert!(scoring.validate().is_err());

        let scoring = ScoringConfig {
            must_have_weight: 80.0,
            education_weight: -10.0,
            ..ScoringConfig::default()
        };
        assert!(scoring.validate().is_err());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config, Config::default());

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_load_rejects_bad_weights() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.scoring.industry_weight = 25.0;
        config.save_to(&path).unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ResumeInspectorError::Configuration(_))
        ));
    }
}
