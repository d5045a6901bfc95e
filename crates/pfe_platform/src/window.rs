use std::sync::Arc;

use pfe_core::{EngineConfig, EngineError};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

pub struct PlatformConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self::from_engine(&EngineConfig::default())
    }
}

impl PlatformConfig {
    /// Window sized to exactly `logical * pixel_scale` physical pixels.
    pub fn from_engine(config: &EngineConfig) -> Self {
        let (width, height) = config.window_size();
        Self {
            title: config.window_title().to_string(),
            width,
            height,
        }
    }
}

pub fn create_window(
    event_loop: &ActiveEventLoop,
    config: &PlatformConfig,
) -> Result<Arc<Window>, EngineError> {
    // Physical size: one logical pixel is exactly `pixel_scale` device pixels,
    // independent of the monitor's DPI factor.
    let attrs = WindowAttributes::default()
        .with_title(&config.title)
        .with_inner_size(winit::dpi::PhysicalSize::new(config.width, config.height));

    let window = event_loop
        .create_window(attrs)
        .map_err(|e| EngineError::Window(e.to_string()))?;
    Ok(Arc::new(window))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_size_is_scaled_logical_size() {
        let config = PlatformConfig::from_engine(&EngineConfig::new(100, 100, 4, 4, "Hello"));
        assert_eq!((config.width, config.height), (400, 400));
        assert_eq!(config.title, "Hello");
    }

    #[test]
    fn default_matches_engine_defaults() {
        let config = PlatformConfig::default();
        assert_eq!((config.width, config.height), (1024, 960));
        assert_eq!(config.title, "Untitled");
    }
}
