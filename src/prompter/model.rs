use crate::prompter::state::{LockMode, ScrollMode};
use crate::settings::{self, OverlaySettings};
use eframe::egui::{Color32, Pos2, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl FontColor {
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_color32(self) -> Color32 {
        Color32::from_rgb(self.r, self.g, self.b)
    }

    pub fn from_color32(color: Color32) -> Self {
        Self::rgb(color.r(), color.g(), color.b())
    }
}

/// Interaction mode of the overlay window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowState {
    pub lock: LockMode,
    pub dragging: bool,
    pub resizing: bool,
    /// Pointer position minus window origin at the start of a drag.
    pub drag_offset: Vec2,
    /// Global pointer position at the start of a resize.
    pub resize_start_pos: Pos2,
    pub resize_start_size: Vec2,
}

impl WindowState {
    pub fn locked(&self) -> bool {
        self.lock.is_locked()
    }

    pub fn clear_gestures(&mut self) {
        self.dragging = false;
        self.resizing = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub mode: ScrollMode,
    speed: u8,
}

impl ScrollState {
    pub fn new(speed: u8) -> Self {
        Self {
            mode: ScrollMode::Idle,
            speed: settings::clamp_scroll_speed(speed),
        }
    }

    pub fn scrolling(&self) -> bool {
        self.mode.is_scrolling()
    }

    /// Scroll units advanced per tick, always within `1..=10`.
    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.speed = settings::clamp_scroll_speed(speed);
    }

    pub fn increase(&mut self) {
        self.set_speed(self.speed.saturating_add(1));
    }

    pub fn decrease(&mut self) {
        self.set_speed(self.speed.saturating_sub(1));
    }
}

/// Visual appearance of the overlay, applied through
/// [`crate::prompter::style`].
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationStyle {
    opacity: f32,
    pub font_family: String,
    font_size: u8,
    pub font_color: FontColor,
}

impl PresentationStyle {
    pub fn new(
        opacity: f32,
        font_family: impl Into<String>,
        font_size: u8,
        font_color: FontColor,
    ) -> Self {
        Self {
            opacity: settings::clamp_opacity(opacity),
            font_family: font_family.into(),
            font_size: settings::clamp_font_size(font_size),
            font_color,
        }
    }

    pub fn from_settings(settings: &OverlaySettings) -> Self {
        Self::new(
            settings.opacity,
            settings.font_family.clone(),
            settings.font_size,
            settings.font_color,
        )
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = settings::clamp_opacity(opacity);
    }

    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    pub fn set_font_size(&mut self, size: u8) {
        self.font_size = settings::clamp_font_size(size);
    }
}

/// Last known outer position and inner size of the overlay window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowGeometry {
    pub origin: Pos2,
    pub size: Vec2,
}

impl WindowGeometry {
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_stays_within_bounds() {
        let mut scroll = ScrollState::new(10);
        scroll.increase();
        assert_eq!(scroll.speed(), 10);

        let mut scroll = ScrollState::new(1);
        scroll.decrease();
        assert_eq!(scroll.speed(), 1);

        scroll.set_speed(0);
        assert_eq!(scroll.speed(), 1);
        scroll.set_speed(42);
        assert_eq!(scroll.speed(), 10);
    }

    #[test]
    fn style_setters_clamp() {
        let mut style = PresentationStyle::new(0.0, "Arial", 4, FontColor::WHITE);
        assert!((style.opacity() - 0.1).abs() < f32::EPSILON);
        assert_eq!(style.font_size(), 8);

        style.set_font_size(99);
        assert_eq!(style.font_size(), 72);
        style.set_opacity(2.0);
        assert_eq!(style.opacity(), 1.0);
    }

    #[test]
    fn font_color_round_trips_through_color32() {
        let color = FontColor::rgb(12, 200, 7);
        assert_eq!(FontColor::from_color32(color.to_color32()), color);
    }
}
