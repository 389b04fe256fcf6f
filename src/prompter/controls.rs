use crate::prompter::state::LockMode;

/// Enabled/read-only flags of every control on the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlFlags {
    pub font_family: bool,
    pub font_size: bool,
    pub font_color: bool,
    pub transparency: bool,
    pub scroll_speed: bool,
    pub lock_toggle: bool,
    pub scroll_toggle: bool,
    pub text_read_only: bool,
}

impl ControlFlags {
    pub fn for_mode(mode: LockMode) -> Self {
        let editable = !mode.is_locked();
        Self {
            font_family: editable,
            font_size: editable,
            font_color: editable,
            transparency: editable,
            scroll_speed: editable,
            // Lock and scroll toggles stay operable so the overlay is always
            // escapable.
            lock_toggle: true,
            scroll_toggle: true,
            text_read_only: !editable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_mode_disables_style_controls_only() {
        let flags = ControlFlags::for_mode(LockMode::Locked);
        assert!(!flags.font_family);
        assert!(!flags.font_size);
        assert!(!flags.font_color);
        assert!(!flags.transparency);
        assert!(!flags.scroll_speed);
        assert!(flags.text_read_only);
        assert!(flags.lock_toggle);
        assert!(flags.scroll_toggle);
    }

    #[test]
    fn unlocked_mode_enables_everything() {
        let flags = ControlFlags::for_mode(LockMode::Unlocked);
        assert!(flags.font_family && flags.font_size && flags.font_color);
        assert!(flags.transparency && flags.scroll_speed);
        assert!(flags.lock_toggle && flags.scroll_toggle);
        assert!(!flags.text_read_only);
    }
}
