use crate::prompter::color_picker;
use crate::prompter::controller::OverlayController;
use crate::prompter::fonts::{self, SystemFonts};
use crate::prompter::input::{PointerCursor, PointerSample};
use crate::prompter::keyboard;
use crate::prompter::messages::WindowCommand;
use crate::prompter::platform;
use crate::prompter::style::{self, SurfaceStyle};
use crate::settings::{
    OverlaySettings, FONT_SIZE_RANGE, RESIZE_HOTSPOT, SCROLL_SPEED_RANGE,
    TRANSPARENCY_PERCENT_RANGE,
};
use eframe::egui::{self, ViewportCommand};
use std::collections::BTreeSet;
use std::time::Instant;

const PLACEHOLDER: &str = "Type or paste your script here...";
const COLOR_TOOLTIP: &str = "Click to change the font color (Ctrl+C)";

/// The overlay window. Feeds toolkit input into [`OverlayController`] and
/// renders its state every frame.
pub struct PrompterApp {
    controller: OverlayController,
    fonts: SystemFonts,
    /// Family registered with egui and safe to render with.
    loaded_family: Option<String>,
    /// Family handed to egui this frame; usable from the next one.
    pending_family: Option<String>,
    /// Families that failed to load; never retried.
    failed_families: BTreeSet<String>,
}

impl PrompterApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &OverlaySettings) -> Self {
        if let Err(err) = platform::exclude_from_capture(cc) {
            tracing::warn!(?err, "screen capture exclusion unavailable");
        }

        let fonts = SystemFonts::load();
        if !fonts.contains(&settings.font_family) {
            tracing::info!(
                family = %settings.font_family,
                "default font family not installed, using built-in font"
            );
        }

        Self::with_fonts(OverlayController::new(settings), fonts)
    }

    pub fn with_fonts(controller: OverlayController, fonts: SystemFonts) -> Self {
        Self {
            controller,
            fonts,
            loaded_family: None,
            pending_family: None,
            failed_families: BTreeSet::new(),
        }
    }

    pub fn controller(&self) -> &OverlayController {
        &self.controller
    }

    fn sync_fonts(&mut self, ctx: &egui::Context) {
        if let Some(pending) = self.pending_family.take() {
            self.loaded_family = Some(pending);
        }

        let wanted = self.controller.style().font_family.clone();
        let plan = plan_font_sync(
            &wanted,
            self.loaded_family.as_deref(),
            &self.failed_families,
            &self.fonts,
        );
        match plan {
            FontSync::Current => {}
            FontSync::Revert => self.revert_font_family(wanted),
            FontSync::Install => match fonts::install_family(ctx, &self.fonts, &wanted) {
                Ok(()) => self.pending_family = Some(wanted),
                Err(err) => {
                    tracing::warn!(?err, family = %wanted, "failed to load font family");
                    self.revert_font_family(wanted);
                }
            },
        }
    }

    /// Put the selector back on the family that is actually rendering.
    fn revert_font_family(&mut self, failed: String) {
        if let Some(previous) = self.loaded_family.clone() {
            self.controller.replace_font_family(&previous);
        }
        self.failed_families.insert(failed);
    }

    fn sync_window_geometry(&mut self, ctx: &egui::Context) {
        let (outer, size) = ctx.input(|i| (i.viewport().outer_rect, i.screen_rect().size()));
        if let Some(outer) = outer {
            self.controller.sync_geometry(outer.min, size);
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context, now: Instant) {
        let events = ctx.input_mut(keyboard::drain_shortcut_events);
        for event in events {
            self.controller.handle_key_event(event, now);
        }
    }

    fn handle_pointer(&mut self, ctx: &egui::Context, pressed_on_background: bool) {
        let origin = self.controller.geometry().origin;
        let (local, primary_pressed, primary_down) = ctx.input(|i| {
            (
                i.pointer.interact_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
            )
        });

        if let Some(local) = local {
            if primary_pressed && pressed_on_background {
                self.controller
                    .pointer_pressed(PointerSample::new(local, origin));
            }
            let state = self.controller.window_state();
            if primary_down && state.resizing {
                self.controller.pointer_moved(origin + local.to_vec2());
            }
            if self.controller.hover_cursor(local) == PointerCursor::ResizeDiagonal {
                ctx.set_cursor_icon(egui::CursorIcon::ResizeNwSe);
            }
        }

        if !primary_down {
            self.controller.pointer_released();
        }
    }

    fn apply_window_commands(&mut self, ctx: &egui::Context) {
        for command in self.controller.drain_commands() {
            for viewport_command in viewport_commands(command) {
                ctx.send_viewport_cmd(viewport_command);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FontSync {
    Current,
    Revert,
    Install,
}

fn plan_font_sync(
    wanted: &str,
    loaded: Option<&str>,
    failed: &BTreeSet<String>,
    fonts: &SystemFonts,
) -> FontSync {
    if loaded == Some(wanted) {
        FontSync::Current
    } else if failed.contains(wanted) || !fonts.contains(wanted) {
        FontSync::Revert
    } else {
        FontSync::Install
    }
}

/// Toolkit commands that carry out one queued [`WindowCommand`].
pub fn viewport_commands(command: WindowCommand) -> Vec<ViewportCommand> {
    match command {
        WindowCommand::MoveTo(origin) => vec![ViewportCommand::OuterPosition(origin)],
        WindowCommand::StartDrag => vec![ViewportCommand::StartDrag],
        WindowCommand::ResizeTo(size) => vec![ViewportCommand::InnerSize(size)],
        WindowCommand::ReassertOverlayFlags => platform::reassert_overlay_flags().to_vec(),
        WindowCommand::BringToFront => vec![ViewportCommand::Focus],
    }
}

impl eframe::App for PrompterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.sync_fonts(ctx);
        self.sync_window_geometry(ctx);
        self.handle_shortcuts(ctx, now);
        self.controller.advance_ticks(now);

        ctx.set_visuals(style::presentation_to_visuals(
            self.controller.style(),
            &egui::Visuals::dark(),
        ));
        let surface = style::surface_style(self.controller.style(), self.loaded_family.as_deref());

        let mut pressed_on_background = false;
        if self.controller.controls_visible() {
            egui::TopBottomPanel::top("control_strip")
                .frame(egui::Frame::none().inner_margin(egui::Margin::same(6.0)))
                .show_separator_line(false)
                .show(ctx, |ui| {
                    style::strip_frame(self.controller.style()).show(ui, |ui| {
                        let background = ui.interact(
                            ui.max_rect(),
                            ui.id().with("strip_background"),
                            egui::Sense::drag(),
                        );
                        pressed_on_background |= background.hovered();
                        control_strip_ui(ui, &mut self.controller, self.fonts.families(), now);
                    });
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().inner_margin(egui::Margin::same(6.0)))
            .show(ctx, |ui| {
                let background = ui.interact(
                    ui.max_rect(),
                    ui.id().with("surface_background"),
                    egui::Sense::drag(),
                );
                pressed_on_background |= background.hovered();
                text_surface_ui(ui, &mut self.controller, &surface);
                pressed_on_background |= size_grip_ui(ui, ctx.screen_rect()).hovered();
            });

        self.handle_pointer(ctx, pressed_on_background);

        if let Some(outcome) = color_picker::show(ctx, self.controller.color_picker_mut()) {
            self.controller.finish_color_pick(outcome);
        }

        self.apply_window_commands(ctx);

        if let Some(wait) = self.controller.clock().until_next(now) {
            ctx.request_repaint_after(wait);
        }
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }
}

fn control_strip_ui(
    ui: &mut egui::Ui,
    controller: &mut OverlayController,
    families: &[String],
    now: Instant,
) {
    let flags = controller.control_flags();
    let style = controller.style().clone();

    egui::Grid::new("control_strip_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Font:");
            ui.add_enabled_ui(flags.font_family, |ui| {
                let mut selected = style.font_family.clone();
                egui::ComboBox::from_id_source("font_family")
                    .selected_text(&selected)
                    .width(220.0)
                    .show_ui(ui, |ui| {
                        for family in families {
                            ui.selectable_value(&mut selected, family.clone(), family);
                        }
                    });
                if selected != style.font_family {
                    controller.set_font_family(&selected);
                }
            });
            ui.end_row();

            ui.label("Size:");
            let mut size = style.font_size();
            let slider = egui::Slider::new(&mut size, FONT_SIZE_RANGE);
            if ui.add_enabled(flags.font_size, slider).changed() {
                controller.set_font_size(size);
            }
            ui.end_row();

            ui.label("Font Color:");
            let swatch = egui::Button::new("")
                .fill(style.font_color.to_color32())
                .min_size(egui::vec2(30.0, 20.0));
            if ui
                .add_enabled(flags.font_color, swatch)
                .on_hover_text(COLOR_TOOLTIP)
                .clicked()
            {
                controller.open_color_picker();
            }
            ui.end_row();

            ui.label("Transparency:");
            let mut percent = controller.transparency_percent();
            let slider = egui::Slider::new(&mut percent, TRANSPARENCY_PERCENT_RANGE).suffix("%");
            if ui.add_enabled(flags.transparency, slider).changed() {
                controller.set_transparency_percent(percent);
            }
            ui.end_row();

            ui.label("Scroll Speed:");
            let mut speed = controller.scroll_state().speed();
            let slider = egui::Slider::new(&mut speed, SCROLL_SPEED_RANGE);
            if ui.add_enabled(flags.scroll_speed, slider).changed() {
                controller.set_scroll_speed(speed);
            }
            ui.end_row();
        });

    ui.horizontal(|ui| {
        let lock = egui::Button::new(controller.lock_mode().button_label());
        if ui.add_enabled(flags.lock_toggle, lock).clicked() {
            controller.toggle_lock();
        }
        let scroll = egui::Button::new(controller.scroll_mode().button_label());
        if ui.add_enabled(flags.scroll_toggle, scroll).clicked() {
            controller.toggle_scrolling(now);
        }
    });
}

fn script_editor<'t>(
    text: &'t mut dyn egui::TextBuffer,
    surface: &SurfaceStyle,
) -> egui::TextEdit<'t> {
    egui::TextEdit::multiline(text)
        .id_source("script_text")
        .font(surface.font.clone())
        .text_color(surface.text_color)
        .hint_text(PLACEHOLDER)
        .frame(false)
        .desired_width(f32::INFINITY)
}

fn text_surface_ui(ui: &mut egui::Ui, controller: &mut OverlayController, surface: &SurfaceStyle) {
    let offset = controller.scroll_position().offset();
    let read_only = controller.control_flags().text_read_only;

    style::surface_frame(surface).show(ui, |ui| {
        let output = egui::ScrollArea::vertical()
            .id_source("script_surface")
            .auto_shrink([false, false])
            .drag_to_scroll(false)
            .vertical_scroll_offset(offset)
            .show(ui, |ui| {
                let min_size = ui.available_size();
                if read_only {
                    let mut view: &str = controller.text();
                    ui.add(script_editor(&mut view, surface).min_size(min_size));
                } else if let Some(text) = controller.text_mut() {
                    ui.add(script_editor(text, surface).min_size(min_size));
                }
            });

        let max_offset = output.content_size.y - output.inner_rect.height();
        controller.sync_scroll_from_view(output.state.offset.y, max_offset);
    });
}

/// Paint the size grip in the resize hotspot and return its response.
fn size_grip_ui(ui: &mut egui::Ui, window: egui::Rect) -> egui::Response {
    let rect = egui::Rect::from_min_max(
        window.max - egui::vec2(RESIZE_HOTSPOT, RESIZE_HOTSPOT),
        window.max,
    );
    let response = ui.interact(rect, egui::Id::new("resize_grip"), egui::Sense::drag());
    let stroke = ui.visuals().widgets.inactive.fg_stroke;
    let painter = ui.painter_at(rect);
    for step in [6.0, 11.0, 16.0] {
        painter.line_segment(
            [
                egui::pos2(rect.max.x - step, rect.max.y - 2.0),
                egui::pos2(rect.max.x - 2.0, rect.max.y - step),
            ],
            stroke,
        );
    }
    response
}
