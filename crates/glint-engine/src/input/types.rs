/// Keyboard key identifier.
///
/// Intentionally minimal: the bootstrap core only ever interprets the
/// configured close key. Unmapped keys carry their platform scancode in
/// `Key::Unknown` so callers can still distinguish them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    /// Platform-dependent key not represented above.
    Unknown(u32),
}

/// One keyboard transition observed during a poll.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    /// True on press, false on release.
    pub pressed: bool,
    /// True when this press is an OS auto-repeat.
    pub repeat: bool,
}
