//! The engine context handed to application hooks.
//!
//! All per-instance state lives here: the surface arena (slot 0 is the
//! default draw target that gets presented), viewport geometry, input edges,
//! focus and frame timing. Nothing is global, so independent instances can
//! coexist, e.g. one per test.

use glam::{IVec2, UVec2};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::event::PlatformEvent;
use crate::input::{ButtonState, InputState, Key, MouseButton};
use crate::surface::{Pixel, Surface};
use crate::time::FrameClock;
use crate::viewport::Viewport;

/// Handle to a surface owned by an [`Engine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(usize);

impl SurfaceId {
    /// The surface created with the engine and presented every frame.
    pub const DEFAULT: SurfaceId = SurfaceId(0);
}

pub struct Engine {
    config: EngineConfig,
    surfaces: Vec<Surface>,
    draw_target: SurfaceId,
    viewport: Viewport,
    input: InputState,
    focused: bool,
    clock: FrameClock,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let default_target = Surface::new(config.logical_width, config.logical_height)?;
        let viewport = Viewport::new(
            UVec2::new(config.logical_width, config.logical_height),
            UVec2::new(config.pixel_width, config.pixel_height),
        );
        log::info!(
            "Engine constructed: {}x{} logical, {}x{} pixel scale",
            config.logical_width,
            config.logical_height,
            config.pixel_width,
            config.pixel_height
        );
        Ok(Self {
            config,
            surfaces: vec![default_target],
            draw_target: SurfaceId::DEFAULT,
            viewport,
            input: InputState::new(),
            focused: false,
            clock: FrameClock::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn screen_width(&self) -> u32 {
        self.config.logical_width
    }

    pub fn screen_height(&self) -> u32 {
        self.config.logical_height
    }

    // --- Surfaces ----------------------------------------------------------------

    /// Allocate an off-screen surface the application can redirect drawing to.
    pub fn create_surface(&mut self, width: u32, height: u32) -> Result<SurfaceId, EngineError> {
        let surface = Surface::new(width, height)?;
        self.surfaces.push(surface);
        Ok(SurfaceId(self.surfaces.len() - 1))
    }

    pub fn surface(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.get(id.0)
    }

    pub fn surface_mut(&mut self, id: SurfaceId) -> Option<&mut Surface> {
        self.surfaces.get_mut(id.0)
    }

    /// The surface presented every frame, whatever the current draw target is.
    pub fn default_surface(&self) -> &Surface {
        &self.surfaces[SurfaceId::DEFAULT.0]
    }

    /// Redirect drawing. `None` (or an id this engine never issued) restores
    /// the default target.
    pub fn set_draw_target(&mut self, target: Option<SurfaceId>) {
        self.draw_target = match target {
            Some(id) if id.0 < self.surfaces.len() => id,
            Some(id) => {
                log::warn!("Unknown draw target {:?}, using default", id);
                SurfaceId::DEFAULT
            }
            None => SurfaceId::DEFAULT,
        };
    }

    pub fn draw_target(&self) -> SurfaceId {
        self.draw_target
    }

    fn target(&self) -> &Surface {
        &self.surfaces[self.draw_target.0]
    }

    fn target_mut(&mut self) -> &mut Surface {
        &mut self.surfaces[self.draw_target.0]
    }

    pub fn draw_target_width(&self) -> u32 {
        self.target().width()
    }

    pub fn draw_target_height(&self) -> u32 {
        self.target().height()
    }

    /// Plot one opaque pixel on the current draw target. Out-of-range
    /// coordinates return `false` and draw nothing.
    pub fn draw(&mut self, x: i32, y: i32, color: Pixel) -> bool {
        self.target_mut().set_pixel(x, y, color)
    }

    /// Fill the whole current draw target.
    pub fn clear(&mut self, color: Pixel) {
        self.target_mut().fill(color);
    }

    // --- Input -------------------------------------------------------------------

    pub fn key(&self, key: Key) -> ButtonState {
        self.input.key(key)
    }

    pub fn mouse(&self, button: MouseButton) -> ButtonState {
        self.input.mouse(button)
    }

    /// Pointer position in logical pixels, fixed for the duration of a frame.
    pub fn mouse_position(&self) -> IVec2 {
        self.input.pointer()
    }

    pub fn mouse_x(&self) -> i32 {
        self.input.pointer().x
    }

    pub fn mouse_y(&self) -> i32 {
        self.input.pointer().y
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    // --- Geometry and timing -----------------------------------------------------

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Seconds between the start of the previous frame and this one.
    pub fn elapsed_time(&self) -> f64 {
        self.clock.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count
    }

    pub fn fps(&self) -> f64 {
        self.clock.smoothed_fps
    }

    // --- Driven by the frame loop ------------------------------------------------

    pub(crate) fn begin_frame(&mut self) {
        self.clock.begin_frame();
    }

    /// Stage one drained event into raw state. Close requests are the frame
    /// loop's business and are ignored here.
    pub(crate) fn apply_event(&mut self, event: &PlatformEvent) {
        match *event {
            PlatformEvent::Resized { width, height } => {
                if self.viewport.resize(width, height) {
                    log::info!(
                        "Resized to {}x{}, viewport {:?} at {:?}",
                        width,
                        height,
                        self.viewport.extent(),
                        self.viewport.offset()
                    );
                }
            }
            PlatformEvent::Key { key, down } => self.input.set_key(key, down),
            PlatformEvent::Button { button, down } => self.input.set_button(button, down),
            PlatformEvent::PointerMoved { x, y } => {
                let position = self.viewport.window_to_logical(x, y);
                self.input.move_pointer(position);
            }
            PlatformEvent::Focus(focused) => self.focused = focused,
            PlatformEvent::CloseRequested => {}
        }
    }

    /// Edge detection for every key and button, then latch the pointer.
    pub(crate) fn begin_input_frame(&mut self) {
        self.input.poll();
        self.input.latch_pointer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine {
        Engine::new(EngineConfig::new(100, 100, 4, 4, "Test")).unwrap()
    }

    #[test]
    fn invalid_config_fails_construction() {
        assert!(Engine::new(EngineConfig::new(0, 100, 4, 4, "Bad")).is_err());
        assert!(Engine::new(EngineConfig::new(100, 100, 4, 0, "Bad")).is_err());
    }

    #[test]
    fn default_target_matches_logical_size() {
        let engine = engine();
        assert_eq!(engine.draw_target(), SurfaceId::DEFAULT);
        assert_eq!(engine.draw_target_width(), 100);
        assert_eq!(engine.draw_target_height(), 100);
        assert_eq!(engine.screen_width(), 100);
        assert_eq!(engine.screen_height(), 100);
    }

    #[test]
    fn draw_and_clear_hit_the_default_target() {
        let mut engine = engine();
        engine.clear(Pixel::YELLOW);
        assert!(engine.draw(10, 10, Pixel::RED));
        assert!(!engine.draw(100, 50, Pixel::RED));
        let surface = engine.default_surface();
        assert_eq!(surface.pixel(10, 10), Some(Pixel::RED));
        assert_eq!(surface.pixel(11, 11), Some(Pixel::YELLOW));
    }

    #[test]
    fn redirected_drawing_leaves_default_untouched() {
        let mut engine = engine();
        engine.clear(Pixel::BLACK);
        let sprite = engine.create_surface(8, 4).unwrap();

        engine.set_draw_target(Some(sprite));
        assert_eq!(engine.draw_target_width(), 8);
        assert_eq!(engine.draw_target_height(), 4);
        engine.clear(Pixel::BLUE);
        assert!(engine.draw(7, 3, Pixel::WHITE));
        assert!(!engine.draw(8, 0, Pixel::WHITE));

        assert!(engine
            .default_surface()
            .pixels()
            .iter()
            .all(|p| *p == Pixel::BLACK));
        let off_screen = engine.surface(sprite).unwrap();
        assert_eq!(off_screen.pixel(0, 0), Some(Pixel::BLUE));
        assert_eq!(off_screen.pixel(7, 3), Some(Pixel::WHITE));

        engine.set_draw_target(None);
        assert_eq!(engine.draw_target(), SurfaceId::DEFAULT);
    }

    #[test]
    fn unknown_draw_target_falls_back_to_default() {
        let mut engine = engine();
        engine.set_draw_target(Some(SurfaceId(42)));
        assert_eq!(engine.draw_target(), SurfaceId::DEFAULT);
    }

    #[test]
    fn zero_sized_off_screen_surface_is_rejected() {
        let mut engine = engine();
        assert!(engine.create_surface(0, 4).is_err());
    }

    #[test]
    fn resize_event_updates_viewport() {
        let mut engine = engine();
        engine.apply_event(&PlatformEvent::Resized {
            width: 400,
            height: 300,
        });
        assert_eq!(engine.viewport().extent(), UVec2::new(300, 300));
        assert_eq!(engine.viewport().offset(), UVec2::new(50, 0));
    }

    #[test]
    fn pointer_events_map_through_viewport_and_latch() {
        let mut engine = engine();
        engine.apply_event(&PlatformEvent::PointerMoved { x: 200.0, y: 200.0 });
        assert_eq!(engine.mouse_position(), IVec2::ZERO);
        engine.begin_input_frame();
        assert_eq!(engine.mouse_x(), 50);
        assert_eq!(engine.mouse_y(), 50);
    }

    #[test]
    fn key_and_button_events_feed_edges() {
        let mut engine = engine();
        engine.apply_event(&PlatformEvent::Key {
            key: Key::Enter,
            down: true,
        });
        engine.apply_event(&PlatformEvent::Button {
            button: MouseButton::Middle,
            down: true,
        });
        engine.begin_input_frame();
        assert!(engine.key(Key::Enter).pressed);
        assert!(engine.mouse(MouseButton::Middle).pressed);
        assert!(!engine.mouse(MouseButton::Left).held);
    }

    #[test]
    fn focus_follows_events() {
        let mut engine = engine();
        assert!(!engine.is_focused());
        engine.apply_event(&PlatformEvent::Focus(true));
        assert!(engine.is_focused());
        engine.apply_event(&PlatformEvent::Focus(false));
        assert!(!engine.is_focused());
    }
}
