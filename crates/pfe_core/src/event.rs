use crate::input::{Key, MouseButton};

/// Backend-neutral platform event. Window backends translate their native
/// events into these; the frame loop never sees backend types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformEvent {
    /// New inner window size in physical pixels.
    Resized { width: u32, height: u32 },
    Key { key: Key, down: bool },
    Button { button: MouseButton, down: bool },
    /// Pointer position in window pixels.
    PointerMoved { x: f64, y: f64 },
    Focus(bool),
    CloseRequested,
}
