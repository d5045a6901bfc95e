pub mod event_pump;
pub mod keymap;
pub mod window;

pub use event_pump::WinitPlatform;
pub use keymap::{map_key, map_mouse_button, map_physical_key, translate_window_event};
pub use window::{create_window, PlatformConfig};
