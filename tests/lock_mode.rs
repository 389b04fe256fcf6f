use overlay_prompter::prompter::color_picker::ColorPickerOutcome;
use overlay_prompter::prompter::controls::ControlFlags;
use overlay_prompter::prompter::messages::WindowCommand;
use overlay_prompter::prompter::model::FontColor;
use overlay_prompter::prompter::state::LockMode;
use overlay_prompter::prompter::OverlayController;

#[test]
fn lock_round_trip_restores_controls() {
    let mut controller = OverlayController::default();
    let unlocked = controller.control_flags();
    assert_eq!(unlocked, ControlFlags::for_mode(LockMode::Unlocked));
    assert_eq!(controller.lock_mode().button_label(), "Lock Position");

    controller.toggle_lock();
    let locked = controller.control_flags();
    assert!(!locked.font_family);
    assert!(!locked.font_size);
    assert!(!locked.font_color);
    assert!(!locked.transparency);
    assert!(!locked.scroll_speed);
    assert!(locked.text_read_only);
    assert!(locked.lock_toggle);
    assert!(locked.scroll_toggle);
    assert_eq!(controller.lock_mode().button_label(), "Unlock Position");

    controller.toggle_lock();
    assert_eq!(controller.control_flags(), unlocked);
}

#[test]
fn emergency_unlock_always_leaves_overlay_unlocked() {
    let mut controller = OverlayController::default();
    controller.toggle_lock();
    controller.drain_commands();

    assert!(controller.emergency_unlock());
    assert!(!controller.is_locked());
    assert_eq!(
        controller.drain_commands(),
        vec![
            WindowCommand::ReassertOverlayFlags,
            WindowCommand::BringToFront
        ]
    );

    assert!(!controller.emergency_unlock());
    assert!(!controller.is_locked());
}

#[test]
fn scrolling_can_be_toggled_while_locked() {
    let mut controller = OverlayController::default();
    controller.toggle_lock();
    controller.toggle_scrolling(std::time::Instant::now());
    assert!(controller.scroll_mode().is_scrolling());
    assert_eq!(controller.scroll_mode().button_label(), "Stop Scrolling");
}

#[test]
fn locking_cancels_an_open_color_picker() {
    let mut controller = OverlayController::default();
    controller.open_color_picker();
    controller.toggle_lock();

    assert!(!controller.color_picker().is_open());
    controller.finish_color_pick(ColorPickerOutcome::Confirmed(FontColor::rgb(255, 0, 0)));
    assert_eq!(controller.style().font_color, FontColor::WHITE);
}

#[test]
fn confirmed_color_is_ignored_while_locked() {
    let mut controller = OverlayController::default();
    controller.toggle_lock();
    controller.finish_color_pick(ColorPickerOutcome::Confirmed(FontColor::rgb(0, 255, 0)));
    assert_eq!(controller.style().font_color, FontColor::WHITE);

    controller.toggle_lock();
    controller.open_color_picker();
    controller.finish_color_pick(ColorPickerOutcome::Confirmed(FontColor::rgb(0, 255, 0)));
    assert_eq!(controller.style().font_color, FontColor::rgb(0, 255, 0));
}
