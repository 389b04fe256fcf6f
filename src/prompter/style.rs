use crate::prompter::model::PresentationStyle;
use eframe::egui::{self, Color32, FontFamily, FontId, Rounding, Stroke};

const STRIP_FILL: Color32 = Color32::from_rgba_premultiplied(32, 32, 32, 204);
const BUTTON_FILL: Color32 = Color32::from_rgba_premultiplied(48, 48, 48, 204);
const BUTTON_HOVER_FILL: Color32 = Color32::from_rgba_premultiplied(72, 72, 72, 230);
const SURFACE_FILL: Color32 = Color32::from_rgba_premultiplied(6, 6, 6, 77);
const SURFACE_BORDER: Color32 = Color32::from_rgba_premultiplied(50, 50, 50, 128);
const STRIP_TEXT: Color32 = Color32::WHITE;

pub const STRIP_ROUNDING: f32 = 10.0;
pub const SURFACE_ROUNDING: f32 = 5.0;

/// Everything needed to paint the text surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceStyle {
    pub font: FontId,
    pub text_color: Color32,
    pub fill: Color32,
    pub stroke: Stroke,
}

/// The egui family to render with. Falls back to the built-in proportional
/// font until the requested system family has been loaded.
pub fn font_family(style: &PresentationStyle, loaded_family: Option<&str>) -> FontFamily {
    match loaded_family {
        Some(loaded) if loaded == style.font_family => FontFamily::Name(loaded.into()),
        _ => FontFamily::Proportional,
    }
}

pub fn surface_style(style: &PresentationStyle, loaded_family: Option<&str>) -> SurfaceStyle {
    let opacity = style.opacity();
    SurfaceStyle {
        font: FontId::new(
            f32::from(style.font_size()),
            font_family(style, loaded_family),
        ),
        text_color: style.font_color.to_color32().gamma_multiply(opacity),
        fill: SURFACE_FILL.gamma_multiply(opacity),
        stroke: Stroke::new(1.0, SURFACE_BORDER.gamma_multiply(opacity)),
    }
}

pub fn strip_frame(style: &PresentationStyle) -> egui::Frame {
    egui::Frame::none()
        .fill(STRIP_FILL.gamma_multiply(style.opacity()))
        .rounding(Rounding::same(STRIP_ROUNDING))
        .inner_margin(egui::Margin::same(5.0))
}

pub fn surface_frame(surface: &SurfaceStyle) -> egui::Frame {
    egui::Frame::none()
        .fill(surface.fill)
        .stroke(surface.stroke)
        .rounding(Rounding::same(SURFACE_ROUNDING))
        .inner_margin(egui::Margin::same(5.0))
}

/// Control-strip visuals with every color scaled by the window opacity, so
/// the whole overlay fades together.
pub fn presentation_to_visuals(
    style: &PresentationStyle,
    defaults: &egui::Visuals,
) -> egui::Visuals {
    let opacity = style.opacity();
    let fade = |color: Color32| color.gamma_multiply(opacity);

    let mut visuals = defaults.clone();
    visuals.dark_mode = true;
    visuals.panel_fill = Color32::TRANSPARENT;
    visuals.window_fill = fade(STRIP_FILL);
    visuals.extreme_bg_color = fade(SURFACE_FILL);
    visuals.override_text_color = Some(fade(STRIP_TEXT));

    visuals.widgets.noninteractive.bg_fill = fade(STRIP_FILL);
    visuals.widgets.inactive.bg_fill = fade(BUTTON_FILL);
    visuals.widgets.inactive.weak_bg_fill = fade(BUTTON_FILL);
    visuals.widgets.hovered.bg_fill = fade(BUTTON_HOVER_FILL);
    visuals.widgets.hovered.weak_bg_fill = fade(BUTTON_HOVER_FILL);
    visuals.widgets.active.bg_fill = fade(BUTTON_HOVER_FILL);
    visuals.widgets.active.weak_bg_fill = fade(BUTTON_HOVER_FILL);
    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widget.rounding = Rounding::same(SURFACE_ROUNDING);
        widget.fg_stroke.color = fade(STRIP_TEXT);
    }

    visuals
}
