use eframe::egui::{Pos2, Vec2};

/// Platform requests queued by the controller and applied by the app at the
/// end of the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowCommand {
    MoveTo(Pos2),
    /// Hand a background drag to the window manager.
    StartDrag,
    ResizeTo(Vec2),
    /// Re-request frameless + always-on-top after a lock transition.
    ReassertOverlayFlags,
    BringToFront,
}
