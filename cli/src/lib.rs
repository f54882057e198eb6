use glyph::{EncoderConfig, ExportFormat, FeatureEncoder};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;


#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    TomlDeError(#[from] toml::de::Error),
    #[error(transparent)]
    TomlSerError(#[from] toml::ser::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    Glyph(#[from] glyph::GlyphError),
    #[error("Unsupported file format. Please use .toml or .json files")]
    UnsupportedFileFormat,
}


/// Output settings for batch encoding
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct ExportSection {
    pub format: ExportFormat,
}

/// Configuration file layout
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct GlyphConfig {
    pub encoder: EncoderConfig,
    pub export: ExportSection,
}

impl GlyphConfig {
    /// Load configuration from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        let config: GlyphConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load configuration from a JSON string
    pub fn from_json(content: &str) -> Result<Self, CliError> {
        let config: GlyphConfig = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Auto-detect file format and load configuration
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let path_ref = path.as_ref();
        match path_ref.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(CliError::UnsupportedFileFormat),
        }
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }

    /// Convert configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, CliError> {
        let toml = toml::to_string_pretty(&self)?;
        Ok(toml)
    }

    /// Override the grid size from the command line
    pub fn with_grid_size(mut self, grid_size: Option<u32>) -> Self {
        if let Some(grid_size) = grid_size {
            self.encoder.grid_size = grid_size;
        }
        self
    }

    /// Build the encoder this configuration describes
    pub fn encoder(&self) -> Result<FeatureEncoder, CliError> {
        Ok(FeatureEncoder::new(self.encoder.clone())?)
    }

    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(GlyphConfig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_config() {
        let config = GlyphConfig::from_toml(
            r#"
            [encoder]
            grid_size = 16
            min_area_ratio = 0.02

            [export]
            format = "jsonl"
            "#,
        )
        .expect("Should parse TOML");

        assert_eq!(config.encoder.grid_size, 16);
        assert_eq!(config.encoder.min_area_ratio, 0.02);
        assert_eq!(config.encoder.threshold, 127);
        assert_eq!(config.export.format, ExportFormat::JsonLines);
    }

    #[test]
    fn test_json_config_defaults() {
        let config = GlyphConfig::from_json("{}").expect("Should parse JSON");
        assert_eq!(config, GlyphConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GlyphConfig::default().with_grid_size(Some(12));
        let text = config.to_toml().expect("Should serialize");
        let parsed = GlyphConfig::from_toml(&text).expect("Should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_zero_grid_rejected_when_building() {
        let config = GlyphConfig::default().with_grid_size(Some(0));
        assert!(matches!(
            config.encoder(),
            Err(CliError::Glyph(glyph::GlyphError::InvalidConfiguration(_)))
        ));
    }

    #[test]
    fn test_fractional_grid_rejected_when_parsing() {
        let result = GlyphConfig::from_toml("[encoder]\ngrid_size = 8.5\n");
        assert!(matches!(result, Err(CliError::TomlDeError(_))));
    }

    #[test]
    fn test_from_file_dispatches_on_extension() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let toml_path = dir.path().join("glyph.toml");
        let yaml_path = dir.path().join("glyph.yaml");
        fs::write(&toml_path, "[encoder]\ngrid_size = 4\n").expect("Should write");
        fs::write(&yaml_path, "encoder: {}").expect("Should write");

        let config = GlyphConfig::from_file(&toml_path).expect("Should load TOML");
        assert_eq!(config.encoder.grid_size, 4);
        assert!(matches!(
            GlyphConfig::from_file(&yaml_path),
            Err(CliError::UnsupportedFileFormat)
        ));
    }
}
