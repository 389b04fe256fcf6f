use crate::prompter::model::FontColor;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Scroll speed range in scroll units per tick.
pub const SCROLL_SPEED_RANGE: RangeInclusive<u8> = 1..=10;
/// Font size range in points.
pub const FONT_SIZE_RANGE: RangeInclusive<u8> = 8..=72;
/// Transparency slider range in percent. Opacity is `value / 100`.
pub const TRANSPARENCY_PERCENT_RANGE: RangeInclusive<u8> = 10..=100;

pub const MIN_OPACITY: f32 = 0.10;
pub const MAX_OPACITY: f32 = 1.00;

/// Fixed period of the auto-scroll tick.
pub const SCROLL_TICK: Duration = Duration::from_millis(50);
/// Offset applied by a single `Shift+Up` / `Shift+Down` nudge.
pub const MANUAL_NUDGE_UNITS: f32 = 10.0;
/// Side of the square resize hotspot anchored at the bottom-right corner.
pub const RESIZE_HOTSPOT: f32 = 20.0;
/// Horizontal gap between the main window and the color dialog.
pub const COLOR_DIALOG_GAP: f32 = 10.0;

/// Startup values for every piece of overlay state.
///
/// Nothing is read from disk; every run starts from [`OverlaySettings::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySettings {
    pub window_pos: (f32, f32),
    pub window_size: (f32, f32),
    pub min_window_size: (f32, f32),
    pub opacity: f32,
    pub font_family: String,
    pub font_size: u8,
    pub font_color: FontColor,
    pub scroll_speed: u8,
    /// When enabled the application initialises the logger at debug level.
    pub debug_logging: bool,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            window_pos: (100.0, 100.0),
            window_size: (600.0, 400.0),
            min_window_size: (300.0, 200.0),
            opacity: 0.8,
            font_family: "Arial".to_string(),
            font_size: 18,
            font_color: FontColor::WHITE,
            scroll_speed: 1,
            debug_logging: cfg!(debug_assertions),
        }
    }
}

impl OverlaySettings {
    /// Clamp every ranged value into its documented range.
    pub fn sanitized(mut self) -> Self {
        self.opacity = clamp_opacity(self.opacity);
        self.font_size = clamp_font_size(self.font_size);
        self.scroll_speed = clamp_scroll_speed(self.scroll_speed);
        self.min_window_size = (
            self.min_window_size.0.max(1.0),
            self.min_window_size.1.max(1.0),
        );
        self.window_size = (
            self.window_size.0.max(self.min_window_size.0),
            self.window_size.1.max(self.min_window_size.1),
        );
        self
    }
}

pub fn clamp_scroll_speed(speed: u8) -> u8 {
    speed.clamp(*SCROLL_SPEED_RANGE.start(), *SCROLL_SPEED_RANGE.end())
}

pub fn clamp_font_size(size: u8) -> u8 {
    size.clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end())
}

pub fn clamp_opacity(opacity: f32) -> f32 {
    if opacity.is_nan() {
        return MAX_OPACITY;
    }
    opacity.clamp(MIN_OPACITY, MAX_OPACITY)
}

/// Map a transparency slider value in percent to a window opacity.
pub fn opacity_from_percent(percent: u8) -> f32 {
    let percent = percent.clamp(
        *TRANSPARENCY_PERCENT_RANGE.start(),
        *TRANSPARENCY_PERCENT_RANGE.end(),
    );
    f32::from(percent) / 100.0
}

/// Inverse of [`opacity_from_percent`], used to position the slider.
pub fn percent_from_opacity(opacity: f32) -> u8 {
    (clamp_opacity(opacity) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_startup_values() {
        let s = OverlaySettings::default();
        assert_eq!(s.window_size, (600.0, 400.0));
        assert_eq!(s.min_window_size, (300.0, 200.0));
        assert_eq!(s.font_family, "Arial");
        assert_eq!(s.font_size, 18);
        assert_eq!(s.scroll_speed, 1);
        assert!((s.opacity - 0.8).abs() < f32::EPSILON);
        assert_eq!(s.font_color, FontColor::WHITE);
    }

    #[test]
    fn sanitized_clamps_out_of_range_values() {
        let s = OverlaySettings {
            opacity: 3.0,
            font_size: 200,
            scroll_speed: 0,
            window_size: (10.0, 10.0),
            ..OverlaySettings::default()
        }
        .sanitized();
        assert_eq!(s.opacity, MAX_OPACITY);
        assert_eq!(s.font_size, 72);
        assert_eq!(s.scroll_speed, 1);
        assert_eq!(s.window_size, (300.0, 200.0));
    }

    #[test]
    fn transparency_percent_maps_to_opacity() {
        for percent in TRANSPARENCY_PERCENT_RANGE {
            let opacity = opacity_from_percent(percent);
            assert!((opacity - f32::from(percent) / 100.0).abs() < f32::EPSILON);
            assert_eq!(percent_from_opacity(opacity), percent);
        }
        assert!((opacity_from_percent(0) - MIN_OPACITY).abs() < f32::EPSILON);
    }

    #[test]
    fn nan_opacity_falls_back_to_opaque() {
        assert_eq!(clamp_opacity(f32::NAN), MAX_OPACITY);
    }
}
