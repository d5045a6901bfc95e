use pfe_core::{EngineConfig, EngineError, Platform, PlatformEvent};
use pfe_platform::{PlatformConfig, WinitPlatform};

use crate::presenter::GpuPresenter;

/// A winit window presented through wgpu.
///
/// The native event loop is created on first `open`, so constructing the
/// backend never touches the display server.
#[derive(Default)]
pub struct DesktopBackend {
    platform: Option<WinitPlatform>,
}

impl DesktopBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Platform for DesktopBackend {
    type Presenter = GpuPresenter;

    fn open(&mut self, config: &EngineConfig) -> Result<GpuPresenter, EngineError> {
        let platform = match self.platform.take() {
            Some(platform) => platform,
            None => WinitPlatform::new()?,
        };
        let platform = self.platform.insert(platform);

        let window = platform.open_window(PlatformConfig::from_engine(config))?;
        match GpuPresenter::new(window, config.logical_width, config.logical_height) {
            Ok(presenter) => Ok(presenter),
            Err(e) => {
                platform.close_window();
                Err(e)
            }
        }
    }

    fn poll_events(&mut self, events: &mut Vec<PlatformEvent>) {
        if let Some(platform) = &mut self.platform {
            platform.pump(events);
        }
    }

    fn close(&mut self) {
        if let Some(platform) = &mut self.platform {
            platform.close_window();
        }
    }
}
