use std::path::PathBuf;

use clap::Parser;
use pfe_core::{EngineConfig, EngineError};

#[derive(Parser, Debug, Clone)]
#[command(name = "pfe_demo")]
#[command(about = "Pixel frame engine demo", long_about = None)]
pub struct Cli {
    /// JSON engine config; flags below override its fields
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Logical screen width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Logical screen height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Horizontal size of one logical pixel in window pixels
    #[arg(long)]
    pub pixel_width: Option<u32>,

    /// Vertical size of one logical pixel in window pixels
    #[arg(long)]
    pub pixel_height: Option<u32>,

    #[arg(long)]
    pub title: Option<String>,
}

impl Cli {
    pub fn engine_config(&self) -> Result<EngineConfig, EngineError> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load_from_path(path)?,
            None => EngineConfig::default(),
        };

        if let Some(width) = self.width {
            config.logical_width = width;
        }
        if let Some(height) = self.height {
            config.logical_height = height;
        }
        if let Some(pixel_width) = self.pixel_width {
            config.pixel_width = pixel_width;
        }
        if let Some(pixel_height) = self.pixel_height {
            config.pixel_height = pixel_height;
        }
        if let Some(title) = &self.title {
            config.title = title.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_gives_defaults() {
        let cli = Cli::parse_from(["pfe_demo"]);
        assert_eq!(cli.engine_config().unwrap(), EngineConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "pfe_demo",
            "--width",
            "100",
            "--height",
            "100",
            "--pixel-width",
            "4",
            "--pixel-height",
            "4",
            "--title",
            "Hello",
        ]);
        assert_eq!(
            cli.engine_config().unwrap(),
            EngineConfig::new(100, 100, 4, 4, "Hello")
        );
    }

    #[test]
    fn flags_override_config_file() {
        let path = std::env::temp_dir().join(format!("pfe_demo_cli_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "logical_width": 320, "title": "From file" }"#).unwrap();

        let path_arg = path.to_string_lossy().into_owned();
        let cli = Cli::parse_from(["pfe_demo", "--config", &path_arg, "--height", "200"]);
        let config = cli.engine_config().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.logical_width, 320);
        assert_eq!(config.logical_height, 200);
        assert_eq!(config.title, "From file");
    }

    #[test]
    fn zero_override_is_rejected() {
        let cli = Cli::parse_from(["pfe_demo", "--pixel-width", "0"]);
        assert!(matches!(
            cli.engine_config(),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let cli = Cli::parse_from(["pfe_demo", "--config", "/nonexistent/pfe.json"]);
        assert!(matches!(
            cli.engine_config(),
            Err(EngineError::ConfigRead { .. })
        ));
    }
}
