//! Letterboxed mapping between window pixels and logical pixels.
//!
//! The logical surface is scaled uniformly to the largest rectangle that fits
//! the window while keeping the aspect ratio of `logical * pixel_scale`, then
//! centred. The margins left over are the letterbox. Geometry is recomputed
//! only when the window size changes.

use glam::{IVec2, UVec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    logical: UVec2,
    pixel_scale: UVec2,
    window: UVec2,
    offset: UVec2,
    extent: UVec2,
}

impl Viewport {
    /// Start with the window the engine asks for: exactly `logical * pixel_scale`.
    /// Both arguments must be non-zero on every axis (checked by config validation).
    pub fn new(logical: UVec2, pixel_scale: UVec2) -> Self {
        let mut viewport = Self {
            logical,
            pixel_scale,
            window: UVec2::new(
                logical.x.saturating_mul(pixel_scale.x),
                logical.y.saturating_mul(pixel_scale.y),
            ),
            offset: UVec2::ZERO,
            extent: UVec2::ZERO,
        };
        viewport.recompute();
        viewport
    }

    /// Record a new window size. Returns `true` if the size actually changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let window = UVec2::new(width, height);
        if window == self.window {
            return false;
        }
        self.window = window;
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        // Integer rational arithmetic keeps e.g. 1024x960 in a 1024-wide window
        // from truncating to 959 through float error.
        let aspect_w = self.logical.x as u64 * self.pixel_scale.x as u64;
        let aspect_h = self.logical.y as u64 * self.pixel_scale.y as u64;
        let (win_w, win_h) = (self.window.x as u64, self.window.y as u64);

        let mut view_w = win_w;
        let mut view_h = win_w * aspect_h / aspect_w;
        if view_h > win_h {
            view_h = win_h;
            view_w = win_h * aspect_w / aspect_h;
        }

        self.extent = UVec2::new(view_w as u32, view_h as u32);
        self.offset = (self.window - self.extent) / 2;
    }

    pub fn logical_size(&self) -> UVec2 {
        self.logical
    }

    pub fn pixel_scale(&self) -> UVec2 {
        self.pixel_scale
    }

    pub fn window_size(&self) -> UVec2 {
        self.window
    }

    /// Top-left corner of the letterboxed area, in window pixels.
    pub fn offset(&self) -> UVec2 {
        self.offset
    }

    /// Size of the letterboxed area, in window pixels.
    pub fn extent(&self) -> UVec2 {
        self.extent
    }

    /// Map a window-space position to logical pixel coordinates, clamped to
    /// the logical surface. Positions in the letterbox clamp to the nearest edge.
    pub fn window_to_logical(&self, x: f64, y: f64) -> IVec2 {
        IVec2::new(
            map_axis(x, self.offset.x, self.window.x, self.logical.x),
            map_axis(y, self.offset.y, self.window.y, self.logical.y),
        )
    }
}

fn map_axis(pos: f64, offset: u32, window: u32, logical: u32) -> i32 {
    let span = window as f64 - 2.0 * offset as f64;
    if span <= 0.0 {
        return 0;
    }
    let mapped = ((pos - offset as f64) / span * logical as f64) as i64;
    let max = logical.saturating_sub(1).min(i32::MAX as u32) as i64;
    mapped.clamp(0, max) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(logical: (u32, u32), scale: (u32, u32)) -> Viewport {
        Viewport::new(UVec2::new(logical.0, logical.1), UVec2::new(scale.0, scale.1))
    }

    #[test]
    fn initial_window_is_scaled_logical_size() {
        let vp = viewport((100, 100), (4, 4));
        assert_eq!(vp.window_size(), UVec2::new(400, 400));
        assert_eq!(vp.extent(), UVec2::new(400, 400));
        assert_eq!(vp.offset(), UVec2::ZERO);
    }

    #[test]
    fn wide_window_letterboxes_horizontally() {
        let mut vp = viewport((100, 100), (1, 1));
        vp.resize(400, 300);
        assert_eq!(vp.extent(), UVec2::new(300, 300));
        assert_eq!(vp.offset(), UVec2::new(50, 0));
    }

    #[test]
    fn tall_window_letterboxes_vertically() {
        let mut vp = viewport((100, 100), (1, 1));
        vp.resize(300, 400);
        assert_eq!(vp.extent(), UVec2::new(300, 300));
        assert_eq!(vp.offset(), UVec2::new(0, 50));
    }

    #[test]
    fn viewport_never_exceeds_window() {
        let mut vp = viewport((256, 240), (4, 4));
        for (w, h) in [(1, 1), (1024, 960), (1920, 1080), (800, 1200), (7, 3000)] {
            vp.resize(w, h);
            let end = vp.offset() + vp.extent();
            assert!(end.x <= w && end.y <= h, "{w}x{h}: {:?}", end);
        }
    }

    #[test]
    fn exact_aspect_has_no_letterbox() {
        let mut vp = viewport((256, 240), (4, 4));
        vp.resize(1024, 960);
        assert_eq!(vp.extent(), UVec2::new(1024, 960));
        assert_eq!(vp.offset(), UVec2::ZERO);
    }

    #[test]
    fn non_square_pixels_shape_the_aspect() {
        // 100x100 logical drawn with 2:1 pixels is twice as wide as tall.
        let mut vp = viewport((100, 100), (2, 1));
        vp.resize(400, 400);
        assert_eq!(vp.extent(), UVec2::new(400, 200));
        assert_eq!(vp.offset(), UVec2::new(0, 100));
    }

    #[test]
    fn resize_reports_changes_only() {
        let mut vp = viewport((100, 100), (4, 4));
        assert!(!vp.resize(400, 400));
        assert!(vp.resize(400, 300));
        assert!(!vp.resize(400, 300));
    }

    #[test]
    fn viewport_centre_maps_to_logical_centre() {
        let mut vp = viewport((100, 100), (1, 1));
        vp.resize(400, 300);
        let p = vp.window_to_logical(200.0, 150.0);
        assert!((49..=50).contains(&p.x), "{p:?}");
        assert!((49..=50).contains(&p.y), "{p:?}");
    }

    #[test]
    fn letterbox_margin_clamps_to_edges() {
        let mut vp = viewport((100, 100), (1, 1));
        vp.resize(400, 300);
        assert_eq!(vp.window_to_logical(10.0, 150.0).x, 0);
        assert_eq!(vp.window_to_logical(390.0, 150.0).x, 99);
        assert_eq!(vp.window_to_logical(-50.0, -50.0), IVec2::new(0, 0));
        assert_eq!(vp.window_to_logical(5000.0, 5000.0), IVec2::new(99, 99));
    }

    #[test]
    fn scaled_window_maps_whole_pixels() {
        let vp = viewport((100, 100), (4, 4));
        assert_eq!(vp.window_to_logical(0.0, 0.0), IVec2::new(0, 0));
        assert_eq!(vp.window_to_logical(7.9, 4.0), IVec2::new(1, 1));
        assert_eq!(vp.window_to_logical(399.0, 399.0), IVec2::new(99, 99));
    }

    #[test]
    fn collapsed_window_maps_to_origin() {
        let mut vp = viewport((100, 100), (1, 1));
        vp.resize(0, 0);
        assert_eq!(vp.extent(), UVec2::ZERO);
        assert_eq!(vp.window_to_logical(10.0, 10.0), IVec2::ZERO);
    }
}
