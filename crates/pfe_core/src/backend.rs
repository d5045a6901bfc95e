//! Seams to the host windowing and graphics layers.
//!
//! A [`Platform`] owns the window and the native event source; opening it also
//! yields the [`Presenter`] bound to that window. The frame loop only ever
//! talks to these traits, so a scripted in-memory backend can stand in for a
//! real window in tests.

use glam::UVec2;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::event::PlatformEvent;
use crate::surface::Surface;
use crate::viewport::Viewport;

pub trait Platform {
    type Presenter: Presenter;

    /// Create the window (`logical * pixel_scale`, titled from the config) and
    /// the presentation backend that draws into it.
    fn open(&mut self, config: &EngineConfig) -> Result<Self::Presenter, EngineError>;

    /// Append every pending event to `events` without blocking. Zero events
    /// is a normal outcome.
    fn poll_events(&mut self, events: &mut Vec<PlatformEvent>);

    /// Destroy the window. Called once, after the presenter has been dropped.
    fn close(&mut self);
}

pub trait Presenter {
    /// Upload the frame, scale it into the viewport rectangle with
    /// nearest-neighbour sampling and make it visible.
    fn present(&mut self, frame: &Frame<'_>) -> Result<(), EngineError>;
}

/// Everything a presenter needs for one frame: the default surface's pixels
/// and the letterbox geometry they must land in.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Tightly packed RGBA8 rows, `width * height * 4` bytes.
    pub pixels: &'a [u8],
    pub width: u32,
    pub height: u32,
    pub window_size: UVec2,
    pub viewport_offset: UVec2,
    pub viewport_extent: UVec2,
}

impl<'a> Frame<'a> {
    pub fn new(surface: &'a Surface, viewport: &Viewport) -> Self {
        Self {
            pixels: surface.as_bytes(),
            width: surface.width(),
            height: surface.height(),
            window_size: viewport.window_size(),
            viewport_offset: viewport.offset(),
            viewport_extent: viewport.extent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Pixel;

    #[test]
    fn frame_describes_surface_and_letterbox() {
        let mut surface = Surface::new(2, 2).unwrap();
        surface.fill(Pixel::RED);
        let mut viewport = Viewport::new(UVec2::new(2, 2), UVec2::new(1, 1));
        viewport.resize(40, 20);

        let frame = Frame::new(&surface, &viewport);
        assert_eq!(frame.pixels.len(), 2 * 2 * 4);
        assert_eq!((frame.width, frame.height), (2, 2));
        assert_eq!(frame.window_size, UVec2::new(40, 20));
        assert_eq!(frame.viewport_offset, UVec2::new(10, 0));
        assert_eq!(frame.viewport_extent, UVec2::new(20, 20));
    }
}
