use crate::hotkey::{Hotkey, KeyModifiers};
use eframe::egui::{self, Key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: KeyModifiers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutCommand {
    ToggleLock,
    EmergencyUnlock,
    ToggleScroll,
    OpenColorPicker,
    ToggleControls,
    IncreaseSpeed,
    DecreaseSpeed,
    NudgeUp,
    NudgeDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutOutcome {
    Command(ShortcutCommand),
    /// Recognised shortcut swallowed because the overlay is locked.
    Blocked,
    Unhandled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub hotkey: Hotkey,
    pub command: ShortcutCommand,
    pub description: &'static str,
}

/// Checked first, regardless of lock state.
pub const ALWAYS_AVAILABLE: [Shortcut; 3] = [
    Shortcut {
        hotkey: Hotkey::ctrl_alt(Key::U),
        command: ShortcutCommand::EmergencyUnlock,
        description: "Emergency unlock",
    },
    Shortcut {
        hotkey: Hotkey::ctrl(Key::L),
        command: ShortcutCommand::ToggleLock,
        description: "Lock/unlock position",
    },
    Shortcut {
        hotkey: Hotkey::ctrl(Key::S),
        command: ShortcutCommand::ToggleScroll,
        description: "Start/stop scrolling",
    },
];

/// Only dispatched while unlocked.
pub const UNLOCKED_ONLY: [Shortcut; 6] = [
    Shortcut {
        hotkey: Hotkey::ctrl(Key::C),
        command: ShortcutCommand::OpenColorPicker,
        description: "Change font color",
    },
    Shortcut {
        hotkey: Hotkey::ctrl(Key::H),
        command: ShortcutCommand::ToggleControls,
        description: "Show/hide control panel",
    },
    Shortcut {
        hotkey: Hotkey::ctrl(Key::ArrowUp),
        command: ShortcutCommand::IncreaseSpeed,
        description: "Increase scroll speed",
    },
    Shortcut {
        hotkey: Hotkey::ctrl(Key::ArrowDown),
        command: ShortcutCommand::DecreaseSpeed,
        description: "Decrease scroll speed",
    },
    Shortcut {
        hotkey: Hotkey::shift(Key::ArrowUp),
        command: ShortcutCommand::NudgeUp,
        description: "Scroll up manually",
    },
    Shortcut {
        hotkey: Hotkey::shift(Key::ArrowDown),
        command: ShortcutCommand::NudgeDown,
        description: "Scroll down manually",
    },
];

pub fn shortcuts() -> impl Iterator<Item = &'static Shortcut> {
    ALWAYS_AVAILABLE.iter().chain(UNLOCKED_ONLY.iter())
}

fn lookup(table: &'static [Shortcut], event: KeyEvent) -> Option<&'static Shortcut> {
    table
        .iter()
        .find(|shortcut| shortcut.hotkey.matches(event.key, event.modifiers))
}

pub fn map_key_event_to_command(locked: bool, event: KeyEvent) -> ShortcutOutcome {
    if let Some(shortcut) = lookup(&ALWAYS_AVAILABLE, event) {
        return ShortcutOutcome::Command(shortcut.command);
    }

    match lookup(&UNLOCKED_ONLY, event) {
        Some(_) if locked => ShortcutOutcome::Blocked,
        Some(shortcut) => ShortcutOutcome::Command(shortcut.command),
        None => ShortcutOutcome::Unhandled,
    }
}

/// Translate a raw toolkit event into a shortcut candidate.
///
/// The toolkit reports `Ctrl+C` as a copy event rather than a key press, so
/// it is mapped back to the key combination here.
pub fn key_event_from_egui(event: &egui::Event) -> Option<KeyEvent> {
    match event {
        egui::Event::Key {
            key,
            pressed: true,
            modifiers,
            ..
        } => Some(KeyEvent {
            key: *key,
            modifiers: (*modifiers).into(),
        }),
        egui::Event::Copy => Some(KeyEvent {
            key: Key::C,
            modifiers: KeyModifiers {
                ctrl: true,
                ..Default::default()
            },
        }),
        _ => None,
    }
}

pub fn is_shortcut(event: KeyEvent) -> bool {
    shortcuts().any(|shortcut| shortcut.hotkey.matches(event.key, event.modifiers))
}

/// Remove every recognised shortcut from the frame's input and return them in
/// arrival order, blocked ones included.
///
/// Consuming the events before any widget runs keeps the text editor from
/// acting on them. Each event is mapped against the lock state current when
/// it is handled, so `Ctrl+L` followed by `Ctrl+H` in one frame is blocked.
pub fn drain_shortcut_events(input: &mut egui::InputState) -> Vec<KeyEvent> {
    let mut shortcuts = Vec::new();
    input.events.retain(|event| match key_event_from_egui(event) {
        Some(key_event) if is_shortcut(key_event) => {
            shortcuts.push(key_event);
            false
        }
        _ => true,
    });
    shortcuts
}
