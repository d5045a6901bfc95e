use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::EngineError;

const DEFAULT_TITLE: &str = "Untitled";

/// Construction parameters for an engine instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_logical_width")]
    pub logical_width: u32,
    #[serde(default = "default_logical_height")]
    pub logical_height: u32,
    #[serde(default = "default_pixel_scale")]
    pub pixel_width: u32,
    #[serde(default = "default_pixel_scale")]
    pub pixel_height: u32,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            logical_width: default_logical_width(),
            logical_height: default_logical_height(),
            pixel_width: default_pixel_scale(),
            pixel_height: default_pixel_scale(),
            title: default_title(),
        }
    }
}

impl EngineConfig {
    pub fn new(
        logical_width: u32,
        logical_height: u32,
        pixel_width: u32,
        pixel_height: u32,
        title: impl Into<String>,
    ) -> Self {
        Self {
            logical_width,
            logical_height,
            pixel_width,
            pixel_height,
            title: title.into(),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, EngineError> {
        let config: EngineConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, EngineError> {
        let raw = fs::read_to_string(path).map_err(|source| EngineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Zero sizes or scales are fatal: they are reported before any window exists.
    pub fn validate(&self) -> Result<(), EngineError> {
        let checks = [
            ("logical_width", self.logical_width),
            ("logical_height", self.logical_height),
            ("pixel_width", self.pixel_width),
            ("pixel_height", self.pixel_height),
        ];
        for (name, value) in checks {
            if value == 0 {
                return Err(EngineError::InvalidConfig(format!("{name} must be > 0")));
            }
        }
        if self
            .logical_width
            .checked_mul(self.pixel_width)
            .zip(self.logical_height.checked_mul(self.pixel_height))
            .is_none()
        {
            return Err(EngineError::InvalidConfig(format!(
                "window size {}x{} scaled by {}x{} overflows",
                self.logical_width, self.logical_height, self.pixel_width, self.pixel_height
            )));
        }
        Ok(())
    }

    /// Title used for the window; blank titles fall back to a placeholder.
    pub fn window_title(&self) -> &str {
        if self.title.trim().is_empty() {
            DEFAULT_TITLE
        } else {
            &self.title
        }
    }

    /// Requested inner window size: logical size times pixel scale.
    pub fn window_size(&self) -> (u32, u32) {
        (
            self.logical_width.saturating_mul(self.pixel_width),
            self.logical_height.saturating_mul(self.pixel_height),
        )
    }
}

const fn default_logical_width() -> u32 {
    256
}

const fn default_logical_height() -> u32 {
    240
}

const fn default_pixel_scale() -> u32 {
    4
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window_size(), (1024, 960));
        assert_eq!(config.window_title(), "Untitled");
    }

    #[test]
    fn zero_values_are_rejected() {
        let base = EngineConfig::new(100, 100, 4, 4, "Hello");
        assert!(base.validate().is_ok());

        for config in [
            EngineConfig { logical_width: 0, ..base.clone() },
            EngineConfig { logical_height: 0, ..base.clone() },
            EngineConfig { pixel_width: 0, ..base.clone() },
            EngineConfig { pixel_height: 0, ..base.clone() },
        ] {
            let err = config.validate().unwrap_err();
            assert!(matches!(err, EngineError::InvalidConfig(_)), "{config:?}");
        }
    }

    #[test]
    fn overflowing_window_is_rejected() {
        let config = EngineConfig::new(u32::MAX, 1, 2, 1, "big");
        assert!(config.validate().is_err());
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = EngineConfig::from_json_str(r#"{ "logical_width": 100, "title": "Hello" }"#)
            .unwrap();
        assert_eq!(config.logical_width, 100);
        assert_eq!(config.logical_height, 240);
        assert_eq!(config.pixel_width, 4);
        assert_eq!(config.title, "Hello");
    }

    #[test]
    fn json_with_zero_scale_fails_validation() {
        let err = EngineConfig::from_json_str(r#"{ "pixel_width": 0 }"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = EngineConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, EngineError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let path = std::env::temp_dir().join(format!(
            "pfe_config_missing_{}.json",
            std::process::id()
        ));
        let err = EngineConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, EngineError::ConfigRead { .. }));
    }

    #[test]
    fn load_from_path_round_trips_a_file() {
        let path = std::env::temp_dir().join(format!(
            "pfe_config_test_{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{ "logical_width": 64, "logical_height": 48, "title": "File" }"#)
            .unwrap();
        let config = EngineConfig::load_from_path(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!((config.logical_width, config.logical_height), (64, 48));
        assert_eq!(config.window_title(), "File");
    }

    #[test]
    fn blank_title_falls_back() {
        let config = EngineConfig::new(1, 1, 1, 1, "   ");
        assert_eq!(config.window_title(), "Untitled");
    }
}
