use crate::prompter::model::{FontColor, WindowGeometry};
use crate::settings::COLOR_DIALOG_GAP;
use eframe::egui::{self, pos2, Pos2};

const DIALOG_SIZE: [f32; 2] = [280.0, 340.0];
const DIALOG_FILL: egui::Color32 = egui::Color32::from_gray(32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPickerOutcome {
    Confirmed(FontColor),
    Cancelled,
}

/// Font color dialog. Opens beside the main window and edits a draft color
/// that only reaches the text surface once confirmed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPickerState {
    open: bool,
    anchor: Pos2,
    pub draft: FontColor,
}

impl Default for ColorPickerState {
    fn default() -> Self {
        Self {
            open: false,
            anchor: Pos2::ZERO,
            draft: FontColor::WHITE,
        }
    }
}

impl ColorPickerState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn open_beside(&mut self, window: WindowGeometry, current: FontColor) {
        self.open = true;
        self.anchor = pos2(window.right() + COLOR_DIALOG_GAP, window.origin.y);
        self.draft = current;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

fn viewport_id() -> egui::ViewportId {
    egui::ViewportId::from_hash_of("font_color_picker")
}

/// Render the dialog when open and report what the user decided this frame.
///
/// Uses a separate always-on-top native window when the backend supports
/// multiple viewports and falls back to an embedded window otherwise.
pub fn show(ctx: &egui::Context, picker: &mut ColorPickerState) -> Option<ColorPickerOutcome> {
    if !picker.is_open() {
        return None;
    }

    let anchor = picker.anchor();
    let builder = egui::ViewportBuilder::default()
        .with_title("Font Color")
        .with_position(anchor)
        .with_inner_size(DIALOG_SIZE)
        .with_resizable(false)
        .with_always_on_top();

    let mut draft = picker.draft.to_color32();
    let outcome = ctx.show_viewport_immediate(viewport_id(), builder, |ctx, class| {
        let mut outcome = None;
        if matches!(class, egui::ViewportClass::Embedded) {
            egui::Window::new("Font Color")
                .collapsible(false)
                .resizable(false)
                .anchor(
                    egui::Align2::RIGHT_TOP,
                    egui::vec2(-COLOR_DIALOG_GAP, COLOR_DIALOG_GAP),
                )
                .show(ctx, |ui| outcome = picker_body(ui, &mut draft));
        } else {
            egui::CentralPanel::default()
                .frame(egui::Frame::none().fill(DIALOG_FILL).inner_margin(8.0))
                .show(ctx, |ui| outcome = picker_body(ui, &mut draft));
            if ctx.input(|i| i.viewport().close_requested()) {
                outcome = Some(ColorPickerOutcome::Cancelled);
            }
        }
        outcome
    });
    picker.draft = FontColor::from_color32(draft);
    outcome
}

fn picker_body(ui: &mut egui::Ui, color: &mut egui::Color32) -> Option<ColorPickerOutcome> {
    egui::color_picker::color_picker_color32(ui, color, egui::color_picker::Alpha::Opaque);
    ui.separator();

    let mut outcome = None;
    ui.horizontal(|ui| {
        if ui.button("OK").clicked() {
            outcome = Some(ColorPickerOutcome::Confirmed(FontColor::from_color32(
                *color,
            )));
        }
        if ui.button("Cancel").clicked() {
            outcome = Some(ColorPickerOutcome::Cancelled);
        }
    });
    outcome
}
