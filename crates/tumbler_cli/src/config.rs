//! Tumbler configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tumbler_picker::{Field, PickerOptions};
use tumbler_scroll::ScrollOptionsPatch;

/// Top-level Tumbler configuration (tumbler.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TumblerConfig {
    #[serde(default)]
    pub picker: PickerOptions,
    /// Scroll overrides for every slot; `picker.scroll` wins where both set a field
    #[serde(default)]
    pub scroll: ScrollOptionsPatch,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Scripted gesture session
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Date to navigate to first, as YYYY-MM-DD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Slot the flick is performed on
    #[serde(default = "default_field")]
    pub field: Field,
    /// Finger travel in pixels; positive moves the content forward
    #[serde(default)]
    pub flick: f32,
    /// Duration of the flick gesture in milliseconds
    #[serde(default = "default_flick_duration")]
    pub flick_duration: f64,
    /// Frames simulated after each step
    #[serde(default = "default_frames")]
    pub frames: usize,
    /// Frame interval in milliseconds
    #[serde(default = "default_frame_interval")]
    pub frame_interval: f32,
}

fn default_field() -> Field {
    Field::Day
}

fn default_flick_duration() -> f64 {
    48.0
}

fn default_frames() -> usize {
    600
}

fn default_frame_interval() -> f32 {
    16.0
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            date: None,
            field: default_field(),
            flick: 0.0,
            flick_duration: default_flick_duration(),
            frames: default_frames(),
            frame_interval: default_frame_interval(),
        }
    }
}

impl TumblerConfig {
    /// Load configuration from a file or a directory containing tumbler.toml
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join("tumbler.toml")
        };

        if !config_path.exists() {
            anyhow::bail!("No tumbler.toml found in {}", path.display());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Load tumbler.toml from `dir` if present, otherwise use the defaults
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        if dir.join("tumbler.toml").exists() {
            Self::load_from_path(dir)
        } else {
            tracing::debug!("No tumbler.toml in {}, using defaults", dir.display());
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: TumblerConfig = toml::from_str(content)?;
        config.picker = config.picker.sanitized();
        Ok(config)
    }

    /// Picker options with the top-level scroll overrides folded in
    pub fn picker_options(&self) -> PickerOptions {
        PickerOptions {
            scroll: self.scroll.and(self.picker.scroll),
            ..self.picker.clone()
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_file_is_default() {
        let config = TumblerConfig::from_toml_str("").unwrap();
        assert_eq!(config, TumblerConfig::default());
        assert_eq!(config.session.frames, 600);
        assert_eq!(config.session.field, Field::Day);
    }

    #[test]
    fn test_sections() {
        let config = TumblerConfig::from_toml_str(
            r#"
[picker]
range = 7
years = { start = 2020, end = 2030 }

[picker.scroll]
pagePeriod = 300.0

[scroll]
pagePeriod = 400.0
pageDamp = 0.9

[session]
date = "2024-02-29"
field = "month"
flick = 150.0
"#,
        )
        .unwrap();

        assert_eq!(config.picker.range, 7);
        assert_eq!(config.session.date.as_deref(), Some("2024-02-29"));
        assert_eq!(config.session.field, Field::Month);
        assert_eq!(config.session.flick, 150.0);

        let options = config.picker_options();
        assert_eq!(options.scroll.page_period, Some(300.0));
        assert_eq!(options.scroll.page_damp, Some(0.9));
    }

    #[test]
    fn test_even_range_is_sanitized() {
        let config = TumblerConfig::from_toml_str("[picker]\nrange = 6\n").unwrap();
        assert_eq!(config.picker.range, 5);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(TumblerConfig::from_toml_str("[session]\nfield = \"week\"\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = std::env::temp_dir().join("tumbler-config-missing");
        let err = TumblerConfig::load_from_path(&dir).unwrap_err();
        assert!(err.to_string().starts_with("No tumbler.toml found in"));
    }

    #[test]
    fn test_load_from_dir() {
        let dir = std::env::temp_dir().join(format!("tumbler-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("tumbler.toml"), "[session]\nframes = 10\n").unwrap();

        let config = TumblerConfig::load_or_default(&dir).unwrap();
        assert_eq!(config.session.frames, 10);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_toml_round_trip() {
        let config = TumblerConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(TumblerConfig::from_toml_str(&text).unwrap(), config);
    }
}
