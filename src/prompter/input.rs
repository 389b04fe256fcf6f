use crate::prompter::messages::WindowCommand;
use crate::prompter::model::{WindowGeometry, WindowState};
use crate::settings::RESIZE_HOTSPOT;
use eframe::egui::{Pos2, Vec2};

/// Pointer position in both window-local and screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub local: Pos2,
    pub global: Pos2,
}

impl PointerSample {
    pub fn new(local: Pos2, window_origin: Pos2) -> Self {
        Self {
            local,
            global: window_origin + local.to_vec2(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Resize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerCursor {
    #[default]
    Default,
    ResizeDiagonal,
}

pub fn in_resize_hotspot(local: Pos2, window_size: Vec2) -> bool {
    window_size.x - local.x < RESIZE_HOTSPOT && window_size.y - local.y < RESIZE_HOTSPOT
}

/// Turns pointer press/move/release into drag and resize gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureTracker {
    min_size: Vec2,
}

impl GestureTracker {
    pub fn new(min_size: Vec2) -> Self {
        Self { min_size }
    }

    pub fn min_size(&self) -> Vec2 {
        self.min_size
    }

    /// Resize wins inside the corner hotspot even while locked; elsewhere a
    /// drag starts only when unlocked.
    pub fn handle_press(
        &self,
        state: &mut WindowState,
        geometry: WindowGeometry,
        pointer: PointerSample,
    ) -> Option<GestureKind> {
        if in_resize_hotspot(pointer.local, geometry.size) {
            state.dragging = false;
            state.resizing = true;
            state.resize_start_pos = pointer.global;
            state.resize_start_size = geometry.size;
            return Some(GestureKind::Resize);
        }

        if state.locked() {
            return None;
        }

        state.dragging = true;
        state.resizing = false;
        state.drag_offset = pointer.global - geometry.origin;
        Some(GestureKind::Drag)
    }

    pub fn handle_move(&self, state: &WindowState, global: Pos2) -> Option<WindowCommand> {
        if state.resizing {
            let delta = global - state.resize_start_pos;
            let size = (state.resize_start_size + delta).max(self.min_size);
            return Some(WindowCommand::ResizeTo(size));
        }

        if state.dragging && !state.locked() {
            return Some(WindowCommand::MoveTo(global - state.drag_offset));
        }

        None
    }

    pub fn handle_release(&self, state: &mut WindowState) {
        state.clear_gestures();
    }

    pub fn hover_cursor(
        &self,
        state: &WindowState,
        local: Pos2,
        window_size: Vec2,
    ) -> PointerCursor {
        if state.resizing {
            return PointerCursor::ResizeDiagonal;
        }
        if state.dragging {
            return PointerCursor::Default;
        }
        if in_resize_hotspot(local, window_size) {
            PointerCursor::ResizeDiagonal
        } else {
            PointerCursor::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompter::state::LockMode;
    use eframe::egui::{pos2, vec2};

    fn geometry() -> WindowGeometry {
        WindowGeometry {
            origin: pos2(100.0, 100.0),
            size: vec2(600.0, 400.0),
        }
    }

    fn tracker() -> GestureTracker {
        GestureTracker::new(vec2(300.0, 200.0))
    }

    #[test]
    fn hotspot_is_the_bottom_right_square() {
        let size = vec2(600.0, 400.0);
        assert!(in_resize_hotspot(pos2(590.0, 390.0), size));
        assert!(in_resize_hotspot(pos2(581.0, 381.0), size));
        assert!(!in_resize_hotspot(pos2(580.0, 390.0), size));
        assert!(!in_resize_hotspot(pos2(590.0, 10.0), size));
    }

    #[test]
    fn press_outside_hotspot_starts_drag_with_offset() {
        let mut state = WindowState::default();
        let pointer = PointerSample::new(pos2(30.0, 40.0), geometry().origin);

        let kind = tracker().handle_press(&mut state, geometry(), pointer);

        assert_eq!(kind, Some(GestureKind::Drag));
        assert!(state.dragging);
        assert_eq!(state.drag_offset, vec2(30.0, 40.0));
        assert_eq!(
            tracker().handle_move(&state, pos2(500.0, 300.0)),
            Some(WindowCommand::MoveTo(pos2(470.0, 260.0)))
        );
    }

    #[test]
    fn locked_press_outside_hotspot_is_ignored() {
        let mut state = WindowState {
            lock: LockMode::Locked,
            ..WindowState::default()
        };
        let before = state;
        let pointer = PointerSample::new(pos2(30.0, 40.0), geometry().origin);

        assert_eq!(tracker().handle_press(&mut state, geometry(), pointer), None);
        assert_eq!(state, before);
        assert_eq!(tracker().handle_move(&state, pos2(0.0, 0.0)), None);
    }

    #[test]
    fn resize_floors_at_minimum() {
        let mut state = WindowState::default();
        let pointer = PointerSample::new(pos2(595.0, 395.0), geometry().origin);
        assert_eq!(
            tracker().handle_press(&mut state, geometry(), pointer),
            Some(GestureKind::Resize)
        );

        let grow = tracker().handle_move(&state, pointer.global + vec2(50.0, 25.0));
        assert_eq!(grow, Some(WindowCommand::ResizeTo(vec2(650.0, 425.0))));

        let shrink = tracker().handle_move(&state, pointer.global - vec2(5_000.0, 5_000.0));
        assert_eq!(shrink, Some(WindowCommand::ResizeTo(vec2(300.0, 200.0))));
    }

    #[test]
    fn release_clears_both_flags() {
        let mut state = WindowState {
            dragging: true,
            resizing: true,
            ..WindowState::default()
        };
        tracker().handle_release(&mut state);
        assert!(!state.dragging);
        assert!(!state.resizing);
    }

    #[test]
    fn hover_cursor_tracks_hotspot() {
        let state = WindowState::default();
        let size = vec2(600.0, 400.0);
        assert_eq!(
            tracker().hover_cursor(&state, pos2(599.0, 399.0), size),
            PointerCursor::ResizeDiagonal
        );
        assert_eq!(
            tracker().hover_cursor(&state, pos2(10.0, 10.0), size),
            PointerCursor::Default
        );
    }
}
