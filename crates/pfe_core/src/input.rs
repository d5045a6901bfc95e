//! Input state with edge-triggered and level-triggered queries.
//!
//! Raw "is it down" values arrive from the platform any number of times
//! between polls and simply overwrite each other (last write wins). Once per
//! frame [`InputState::poll`] compares the raw value against the value seen at
//! the previous poll and derives:
//!
//! - **pressed / released:** true for exactly the poll at which the raw state
//!   changed, false again at the next poll.
//! - **held:** true from the poll that saw the press (inclusive) until the poll
//!   that saw the release (exclusive).
//!
//! A press and release that both land between two polls cancel out.

use glam::IVec2;

/// Keyboard identifiers. Native keys with no mapping arrive as [`Key::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Key {
    None,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    K0,
    K1,
    K2,
    K3,
    K4,
    K5,
    K6,
    K7,
    K8,
    K9,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    Up,
    Down,
    Left,
    Right,
    Space,
    Tab,
    Shift,
    Ctrl,
    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Back,
    Escape,
    Return,
    Enter,
    Pause,
    Scroll,
    Np0,
    Np1,
    Np2,
    Np3,
    Np4,
    Np5,
    Np6,
    Np7,
    Np8,
    Np9,
    NpMul,
    NpDiv,
    NpAdd,
    NpSub,
    NpDecimal,
}

impl Key {
    /// Every key in discriminant order; `ALL[k as usize] == k`.
    pub const ALL: [Key; Key::COUNT] = [
        Key::None,
        Key::A,
        Key::B,
        Key::C,
        Key::D,
        Key::E,
        Key::F,
        Key::G,
        Key::H,
        Key::I,
        Key::J,
        Key::K,
        Key::L,
        Key::M,
        Key::N,
        Key::O,
        Key::P,
        Key::Q,
        Key::R,
        Key::S,
        Key::T,
        Key::U,
        Key::V,
        Key::W,
        Key::X,
        Key::Y,
        Key::Z,
        Key::K0,
        Key::K1,
        Key::K2,
        Key::K3,
        Key::K4,
        Key::K5,
        Key::K6,
        Key::K7,
        Key::K8,
        Key::K9,
        Key::F1,
        Key::F2,
        Key::F3,
        Key::F4,
        Key::F5,
        Key::F6,
        Key::F7,
        Key::F8,
        Key::F9,
        Key::F10,
        Key::F11,
        Key::F12,
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Space,
        Key::Tab,
        Key::Shift,
        Key::Ctrl,
        Key::Insert,
        Key::Delete,
        Key::Home,
        Key::End,
        Key::PageUp,
        Key::PageDown,
        Key::Back,
        Key::Escape,
        Key::Return,
        Key::Enter,
        Key::Pause,
        Key::Scroll,
        Key::Np0,
        Key::Np1,
        Key::Np2,
        Key::Np3,
        Key::Np4,
        Key::Np5,
        Key::Np6,
        Key::Np7,
        Key::Np8,
        Key::Np9,
        Key::NpMul,
        Key::NpDiv,
        Key::NpAdd,
        Key::NpSub,
        Key::NpDecimal,
    ];

    pub const COUNT: usize = Key::NpDecimal as usize + 1;

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub const ALL: [MouseButton; MouseButton::COUNT] =
        [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

    pub const COUNT: usize = 3;

    fn index(self) -> usize {
        self as usize
    }
}

/// Per-identifier view handed to application code.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    /// Set once, on the poll where the button went down.
    pub pressed: bool,
    /// Set once, on the poll where the button went up.
    pub released: bool,
    /// Set for every poll between press (inclusive) and release (exclusive).
    pub held: bool,
}

impl ButtonState {
    const UP: ButtonState = ButtonState {
        pressed: false,
        released: false,
        held: false,
    };
}

/// Raw new/old arrays plus the derived states for one identifier space.
struct EdgeTracker<const N: usize> {
    raw_new: [bool; N],
    raw_old: [bool; N],
    states: [ButtonState; N],
}

impl<const N: usize> EdgeTracker<N> {
    fn new() -> Self {
        Self {
            raw_new: [false; N],
            raw_old: [false; N],
            states: [ButtonState::UP; N],
        }
    }

    fn set_raw(&mut self, index: usize, down: bool) {
        self.raw_new[index] = down;
    }

    fn poll(&mut self) {
        for ((state, &new), old) in self
            .states
            .iter_mut()
            .zip(self.raw_new.iter())
            .zip(self.raw_old.iter_mut())
        {
            state.pressed = false;
            state.released = false;
            if new != *old {
                if new {
                    state.pressed = true;
                    state.held = true;
                } else {
                    state.released = true;
                    state.held = false;
                }
            }
            *old = new;
        }
    }
}

pub struct InputState {
    keys: EdgeTracker<{ Key::COUNT }>,
    buttons: EdgeTracker<{ MouseButton::COUNT }>,
    pointer_live: IVec2,
    pointer_frame: IVec2,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: EdgeTracker::new(),
            buttons: EdgeTracker::new(),
            pointer_live: IVec2::ZERO,
            pointer_frame: IVec2::ZERO,
        }
    }

    // --- Raw side: written while draining platform events ----------------------

    pub fn set_key(&mut self, key: Key, down: bool) {
        self.keys.set_raw(key.index(), down);
    }

    pub fn key_down(&mut self, key: Key) {
        self.set_key(key, true);
    }

    pub fn key_up(&mut self, key: Key) {
        self.set_key(key, false);
    }

    pub fn set_button(&mut self, button: MouseButton, down: bool) {
        self.buttons.set_raw(button.index(), down);
    }

    pub fn mouse_down(&mut self, button: MouseButton) {
        self.set_button(button, true);
    }

    pub fn mouse_up(&mut self, button: MouseButton) {
        self.set_button(button, false);
    }

    /// Update the live pointer position (already in logical coordinates).
    pub fn move_pointer(&mut self, position: IVec2) {
        self.pointer_live = position;
    }

    // --- Once per frame ------------------------------------------------------

    /// Derive edges for every tracked key and button, including ones that saw
    /// no events, so last frame's pressed/released flags are cleared.
    pub fn poll(&mut self) {
        self.keys.poll();
        self.buttons.poll();
    }

    /// Copy the live pointer into the position readers see for this frame.
    pub fn latch_pointer(&mut self) {
        self.pointer_frame = self.pointer_live;
    }

    // --- Queries -------------------------------------------------------------

    pub fn key(&self, key: Key) -> ButtonState {
        self.keys.states[key.index()]
    }

    pub fn mouse(&self, button: MouseButton) -> ButtonState {
        self.buttons.states[button.index()]
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.key(key).held
    }

    pub fn is_just_pressed(&self, key: Key) -> bool {
        self.key(key).pressed
    }

    pub fn is_just_released(&self, key: Key) -> bool {
        self.key(key).released
    }

    /// Pointer position as of the last [`latch_pointer`](Self::latch_pointer).
    pub fn pointer(&self) -> IVec2 {
        self.pointer_frame
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
