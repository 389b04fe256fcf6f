use eframe::egui::{pos2, vec2};
use overlay_prompter::prompter::input::{GestureKind, PointerCursor, PointerSample};
use overlay_prompter::prompter::messages::WindowCommand;
use overlay_prompter::prompter::OverlayController;

fn controller_at_default_geometry() -> OverlayController {
    let mut controller = OverlayController::default();
    controller.sync_geometry(pos2(100.0, 100.0), vec2(600.0, 400.0));
    controller
}

#[test]
fn resize_never_shrinks_below_minimum() {
    let mut controller = controller_at_default_geometry();
    let origin = controller.geometry().origin;

    let kind = controller.pointer_pressed(PointerSample::new(pos2(590.0, 390.0), origin));
    assert_eq!(kind, Some(GestureKind::Resize));

    controller.pointer_moved(pos2(0.0, 0.0));
    assert_eq!(
        controller.drain_commands(),
        vec![WindowCommand::ResizeTo(vec2(300.0, 200.0))]
    );
}

#[test]
fn resize_grows_with_the_pointer() {
    let mut controller = controller_at_default_geometry();
    let origin = controller.geometry().origin;

    controller.pointer_pressed(PointerSample::new(pos2(595.0, 395.0), origin));
    controller.pointer_moved(pos2(745.0, 545.0));

    assert_eq!(controller.geometry().size, vec2(650.0, 450.0));
}

#[test]
fn drag_is_ignored_while_locked() {
    let mut controller = controller_at_default_geometry();
    controller.toggle_lock();
    controller.drain_commands();
    let origin = controller.geometry().origin;

    let kind = controller.pointer_pressed(PointerSample::new(pos2(50.0, 50.0), origin));
    assert_eq!(kind, None);
    controller.pointer_moved(pos2(400.0, 400.0));

    assert!(controller.drain_commands().is_empty());
    assert_eq!(controller.geometry().origin, pos2(100.0, 100.0));
}

#[test]
fn resize_still_works_while_locked() {
    let mut controller = controller_at_default_geometry();
    controller.toggle_lock();
    controller.drain_commands();
    let origin = controller.geometry().origin;

    let kind = controller.pointer_pressed(PointerSample::new(pos2(590.0, 390.0), origin));
    assert_eq!(kind, Some(GestureKind::Resize));
}

#[test]
fn release_clears_every_gesture() {
    let mut controller = controller_at_default_geometry();
    let origin = controller.geometry().origin;
    controller.pointer_pressed(PointerSample::new(pos2(590.0, 390.0), origin));
    controller.pointer_released();

    let state = controller.window_state();
    assert!(!state.dragging);
    assert!(!state.resizing);
}

#[test]
fn cursor_reflects_the_resize_corner() {
    let controller = controller_at_default_geometry();
    assert_eq!(
        controller.hover_cursor(pos2(590.0, 390.0)),
        PointerCursor::ResizeDiagonal
    );
    assert_eq!(
        controller.hover_cursor(pos2(580.0, 390.0)),
        PointerCursor::Default
    );
}

#[test]
fn background_press_hands_drag_to_the_window_manager() {
    let mut controller = controller_at_default_geometry();
    let origin = controller.geometry().origin;

    let kind = controller.pointer_pressed(PointerSample::new(pos2(50.0, 50.0), origin));
    assert_eq!(kind, Some(GestureKind::Drag));
    assert_eq!(controller.drain_commands(), vec![WindowCommand::StartDrag]);
}
