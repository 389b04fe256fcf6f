use crate::help;
use crate::prompter::color_picker::{ColorPickerOutcome, ColorPickerState};
use crate::prompter::controls::ControlFlags;
use crate::prompter::input::{GestureKind, GestureTracker, PointerCursor, PointerSample};
use crate::prompter::keyboard::{
    map_key_event_to_command, KeyEvent, ShortcutCommand, ShortcutOutcome,
};
use crate::prompter::messages::WindowCommand;
use crate::prompter::model::{PresentationStyle, ScrollState, WindowGeometry, WindowState};
use crate::prompter::scroll::{ScrollPosition, TickClock};
use crate::prompter::state::{can_transition, LockMode, ScrollMode};
use crate::settings::{self, OverlaySettings, MANUAL_NUDGE_UNITS, SCROLL_TICK};
use crate::visibility::toggle_visibility;
use eframe::egui::{pos2, vec2, Pos2, Vec2};
use std::time::Instant;

/// Owns every piece of overlay state and applies user intent to it.
///
/// Nothing here touches the toolkit. Platform side effects are queued as
/// [`WindowCommand`]s and drained by the app once per frame.
pub struct OverlayController {
    window: WindowState,
    scroll: ScrollState,
    style: PresentationStyle,
    geometry: WindowGeometry,
    position: ScrollPosition,
    clock: TickClock,
    gestures: GestureTracker,
    controls_visible: bool,
    color_picker: ColorPickerState,
    text: String,
    pending: Vec<WindowCommand>,
}

impl OverlayController {
    pub fn new(settings: &OverlaySettings) -> Self {
        let settings = settings.clone().sanitized();
        Self {
            window: WindowState::default(),
            scroll: ScrollState::new(settings.scroll_speed),
            style: PresentationStyle::from_settings(&settings),
            geometry: WindowGeometry {
                origin: pos2(settings.window_pos.0, settings.window_pos.1),
                size: vec2(settings.window_size.0, settings.window_size.1),
            },
            position: ScrollPosition::default(),
            clock: TickClock::new(SCROLL_TICK),
            gestures: GestureTracker::new(vec2(
                settings.min_window_size.0,
                settings.min_window_size.1,
            )),
            controls_visible: true,
            color_picker: ColorPickerState::default(),
            text: String::new(),
            pending: Vec::new(),
        }
    }

    pub fn window_state(&self) -> &WindowState {
        &self.window
    }

    pub fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn style(&self) -> &PresentationStyle {
        &self.style
    }

    pub fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    pub fn scroll_position(&self) -> &ScrollPosition {
        &self.position
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    pub fn lock_mode(&self) -> LockMode {
        self.window.lock
    }

    pub fn is_locked(&self) -> bool {
        self.window.locked()
    }

    pub fn scroll_mode(&self) -> ScrollMode {
        self.scroll.mode
    }

    pub fn control_flags(&self) -> ControlFlags {
        ControlFlags::for_mode(self.window.lock)
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    pub fn color_picker(&self) -> &ColorPickerState {
        &self.color_picker
    }

    pub fn color_picker_mut(&mut self) -> &mut ColorPickerState {
        &mut self.color_picker
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable script text, or `None` while the surface is read-only.
    pub fn text_mut(&mut self) -> Option<&mut String> {
        if self.control_flags().text_read_only {
            None
        } else {
            Some(&mut self.text)
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        if let Some(buffer) = self.text_mut() {
            *buffer = text.into();
        }
    }

    pub fn drain_commands(&mut self) -> Vec<WindowCommand> {
        std::mem::take(&mut self.pending)
    }

    // Lock mode

    pub fn toggle_lock(&mut self) {
        self.set_lock_mode(self.window.lock.toggled());
    }

    /// Unconditional escape hatch. Returns `true` when the overlay was locked.
    pub fn emergency_unlock(&mut self) -> bool {
        if !self.window.locked() {
            return false;
        }
        tracing::warn!("emergency unlock requested");
        self.set_lock_mode(self.window.lock.emergency_unlocked());
        true
    }

    fn set_lock_mode(&mut self, mode: LockMode) {
        if !can_transition(self.window.lock, mode) {
            return;
        }
        self.window.lock = mode;
        if mode.is_locked() && self.color_picker.is_open() {
            self.color_picker.close();
            tracing::debug!("color picker cancelled by lock");
        }
        tracing::info!(locked = mode.is_locked(), "lock mode changed");
        help::print_lock_notice(mode.is_locked());
        self.pending.push(WindowCommand::ReassertOverlayFlags);
        self.pending.push(WindowCommand::BringToFront);
    }

    // Scroll mode

    pub fn toggle_scrolling(&mut self, now: Instant) {
        self.scroll.mode = self.scroll.mode.toggled();
        if self.scroll.scrolling() {
            self.clock.start(now);
        } else {
            self.clock.stop();
        }
        tracing::info!(
            scrolling = self.scroll.scrolling(),
            speed = self.scroll.speed(),
            "scroll mode changed"
        );
    }

    /// Apply every tick that elapsed up to `now`. Returns the tick count.
    pub fn advance_ticks(&mut self, now: Instant) -> u32 {
        if !self.scroll.scrolling() {
            return 0;
        }
        let ticks = self.clock.due_ticks(now);
        for _ in 0..ticks {
            self.position.scroll_by(f32::from(self.scroll.speed()));
        }
        ticks
    }

    pub fn scroll_up(&mut self) {
        if self.window.locked() {
            return;
        }
        self.position.scroll_by(-MANUAL_NUDGE_UNITS);
    }

    pub fn scroll_down(&mut self) {
        if self.window.locked() {
            return;
        }
        self.position.scroll_by(MANUAL_NUDGE_UNITS);
    }

    pub fn sync_scroll_from_view(&mut self, offset: f32, max_offset: f32) {
        self.position.sync_from_view(offset, max_offset);
    }

    pub fn set_scroll_speed(&mut self, speed: u8) {
        if !self.control_flags().scroll_speed {
            return;
        }
        self.scroll.set_speed(speed);
        tracing::debug!(speed = self.scroll.speed(), "scroll speed set");
    }

    pub fn increase_scroll_speed(&mut self) {
        if !self.control_flags().scroll_speed {
            return;
        }
        self.scroll.increase();
        tracing::debug!(speed = self.scroll.speed(), "scroll speed increased");
    }

    pub fn decrease_scroll_speed(&mut self) {
        if !self.control_flags().scroll_speed {
            return;
        }
        self.scroll.decrease();
        tracing::debug!(speed = self.scroll.speed(), "scroll speed decreased");
    }

    // Presentation

    pub fn set_transparency_percent(&mut self, percent: u8) {
        if !self.control_flags().transparency {
            return;
        }
        self.style.set_opacity(settings::opacity_from_percent(percent));
        tracing::debug!(opacity = self.style.opacity(), "opacity set");
    }

    pub fn transparency_percent(&self) -> u8 {
        settings::percent_from_opacity(self.style.opacity())
    }

    pub fn set_font_size(&mut self, size: u8) {
        if !self.control_flags().font_size {
            return;
        }
        self.style.set_font_size(size);
        tracing::debug!(size = self.style.font_size(), "font size set");
    }

    pub fn set_font_family(&mut self, family: &str) {
        if !self.control_flags().font_family || self.style.font_family == family {
            return;
        }
        self.style.font_family = family.to_string();
        tracing::debug!(family, "font family set");
    }

    /// Fall back to a family that actually loaded, bypassing the lock check.
    pub fn replace_font_family(&mut self, family: &str) {
        self.style.font_family = family.to_string();
    }

    pub fn open_color_picker(&mut self) {
        if !self.control_flags().font_color {
            return;
        }
        self.color_picker.open_beside(self.geometry, self.style.font_color);
    }

    pub fn finish_color_pick(&mut self, outcome: ColorPickerOutcome) {
        if let ColorPickerOutcome::Confirmed(color) = outcome {
            if self.control_flags().font_color {
                self.style.font_color = color;
                tracing::debug!(?color, "font color set");
            } else {
                tracing::debug!(?color, "font color ignored while locked");
            }
        }
        self.color_picker.close();
    }

    pub fn toggle_controls(&mut self) -> bool {
        toggle_visibility(&mut self.controls_visible)
    }

    // Keyboard

    pub fn handle_key_event(&mut self, event: KeyEvent, now: Instant) -> ShortcutOutcome {
        let outcome = map_key_event_to_command(self.window.locked(), event);
        self.apply_shortcut(outcome, now);
        outcome
    }

    pub fn apply_shortcut(&mut self, outcome: ShortcutOutcome, now: Instant) {
        let ShortcutOutcome::Command(command) = outcome else {
            return;
        };
        match command {
            ShortcutCommand::ToggleLock => self.toggle_lock(),
            ShortcutCommand::EmergencyUnlock => {
                self.emergency_unlock();
            }
            ShortcutCommand::ToggleScroll => self.toggle_scrolling(now),
            ShortcutCommand::OpenColorPicker => self.open_color_picker(),
            ShortcutCommand::ToggleControls => {
                self.toggle_controls();
            }
            ShortcutCommand::IncreaseSpeed => self.increase_scroll_speed(),
            ShortcutCommand::DecreaseSpeed => self.decrease_scroll_speed(),
            ShortcutCommand::NudgeUp => self.scroll_up(),
            ShortcutCommand::NudgeDown => self.scroll_down(),
        }
    }

    // Pointer

    pub fn sync_geometry(&mut self, origin: Pos2, size: Vec2) {
        self.geometry = WindowGeometry { origin, size };
    }

    pub fn pointer_pressed(&mut self, pointer: PointerSample) -> Option<GestureKind> {
        let kind = self
            .gestures
            .handle_press(&mut self.window, self.geometry, pointer);
        if let Some(kind) = kind {
            tracing::debug!(?kind, "gesture started");
            if kind == GestureKind::Drag {
                self.pending.push(WindowCommand::StartDrag);
            }
        }
        kind
    }

    pub fn pointer_moved(&mut self, global: Pos2) {
        let Some(command) = self.gestures.handle_move(&self.window, global) else {
            return;
        };
        match command {
            WindowCommand::MoveTo(origin) => self.geometry.origin = origin,
            WindowCommand::ResizeTo(size) => self.geometry.size = size,
            _ => {}
        }
        self.pending.push(command);
    }

    /// Always clears gesture state, even for presses that never became a
    /// valid gesture.
    pub fn pointer_released(&mut self) {
        if self.window.dragging || self.window.resizing {
            tracing::debug!("gesture finished");
        }
        self.gestures.handle_release(&mut self.window);
    }

    pub fn hover_cursor(&self, local: Pos2) -> PointerCursor {
        self.gestures.hover_cursor(&self.window, local, self.geometry.size)
    }
}

impl Default for OverlayController {
    fn default() -> Self {
        Self::new(&OverlaySettings::default())
    }
}
