use eframe::egui::{self, Key};
use std::fmt;

/// A key combined with an exact set of modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotkey {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Hotkey {
    pub const fn ctrl(key: Key) -> Self {
        Self {
            key,
            ctrl: true,
            shift: false,
            alt: false,
        }
    }

    pub const fn ctrl_alt(key: Key) -> Self {
        Self {
            key,
            ctrl: true,
            shift: false,
            alt: true,
        }
    }

    pub const fn shift(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            shift: true,
            alt: false,
        }
    }

    /// Modifiers must match exactly; `Ctrl+L` does not fire for `Ctrl+Shift+L`.
    pub fn matches(&self, key: Key, modifiers: KeyModifiers) -> bool {
        self.key == key
            && self.ctrl == modifiers.ctrl
            && self.shift == modifiers.shift
            && self.alt == modifiers.alt
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        write!(f, "{}", key_label(self.key))
    }
}

fn key_label(key: Key) -> &'static str {
    match key {
        Key::ArrowUp => "Up",
        Key::ArrowDown => "Down",
        other => other.name(),
    }
}

/// Modifier state of a key press. `ctrl` is the platform command modifier
/// (Ctrl everywhere except macOS, where it is Cmd).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl From<egui::Modifiers> for KeyModifiers {
    fn from(m: egui::Modifiers) -> Self {
        Self {
            ctrl: m.command,
            shift: m.shift,
            alt: m.alt,
        }
    }
}
