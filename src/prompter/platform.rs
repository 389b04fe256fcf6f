use crate::settings::OverlaySettings;
use eframe::egui::{self, ViewportBuilder, ViewportCommand};

pub const APP_NAME: &str = "Overlay Prompter";

/// Frameless, translucent, always-on-top viewport without a taskbar entry.
pub fn overlay_viewport(settings: &OverlaySettings) -> ViewportBuilder {
    ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_position(settings.window_pos)
        .with_inner_size(settings.window_size)
        .with_min_inner_size(settings.min_window_size)
        .with_decorations(false)
        .with_transparent(true)
        .with_always_on_top()
        .with_taskbar(false)
}

pub fn native_options(settings: &OverlaySettings) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: overlay_viewport(settings),
        ..Default::default()
    }
}

/// Commands that re-request the overlay window flags after a lock change.
pub fn reassert_overlay_flags() -> [ViewportCommand; 2] {
    [
        ViewportCommand::Decorations(false),
        ViewportCommand::WindowLevel(egui::viewport::WindowLevel::AlwaysOnTop),
    ]
}

/// Ask the OS to leave the window out of screen captures. Best effort: only
/// Windows exposes this and older builds ignore it.
pub fn exclude_from_capture(cc: &eframe::CreationContext<'_>) -> anyhow::Result<()> {
    #[cfg(target_os = "windows")]
    {
        use raw_window_handle::{HasWindowHandle, RawWindowHandle};
        use windows::Win32::Foundation::HWND;
        use windows::Win32::UI::WindowsAndMessaging::{
            SetWindowDisplayAffinity, WDA_EXCLUDEFROMCAPTURE,
        };

        let handle = cc
            .window_handle()
            .map_err(|err| anyhow::anyhow!("window handle unavailable: {err}"))?;
        let RawWindowHandle::Win32(win32) = handle.as_raw() else {
            anyhow::bail!("unexpected window handle type");
        };
        let hwnd = HWND(win32.hwnd.get() as *mut std::ffi::c_void);
        unsafe { SetWindowDisplayAffinity(hwnd, WDA_EXCLUDEFROMCAPTURE)? };
        tracing::debug!("window excluded from screen capture");
        Ok(())
    }
    #[cfg(not(target_os = "windows"))]
    {
        let _ = cc;
        anyhow::bail!("screen capture exclusion is not supported on this platform")
    }
}
