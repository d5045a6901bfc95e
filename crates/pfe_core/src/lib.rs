//! Core of the pixel frame engine: the drawing surface, letterbox geometry,
//! input edge detection and the frame loop that sequences them. Windowing and
//! GPU presentation are reached only through the traits in [`backend`].

pub mod backend;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod frame_loop;
pub mod input;
pub mod surface;
pub mod time;
pub mod viewport;

pub use backend::{Frame, Platform, Presenter};
pub use config::EngineConfig;
pub use engine::{Engine, SurfaceId};
pub use error::EngineError;
pub use event::PlatformEvent;
pub use frame_loop::{Application, FrameLoop, LoopState};
pub use input::{ButtonState, InputState, Key, MouseButton};
pub use surface::{Pixel, Surface};
pub use viewport::Viewport;

pub use glam;
