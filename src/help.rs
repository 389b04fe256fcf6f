use crate::prompter::keyboard;
use std::io::{self, Write};

pub const LOCK_NOTICE: &str = "Overlay locked. Press Ctrl+Alt+U to unlock in an emergency.";
pub const UNLOCK_NOTICE: &str = "Overlay unlocked.";

/// Write the shortcut table shown once at startup.
pub fn write_shortcut_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Overlay prompter started!")?;
    writeln!(out, "Keyboard shortcuts:")?;
    for shortcut in keyboard::shortcuts() {
        writeln!(out, "  {}: {}", shortcut.hotkey, shortcut.description)?;
    }
    Ok(())
}

pub fn print_shortcut_help() {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = write_shortcut_help(&mut out) {
        tracing::warn!(?err, "failed to print shortcut help");
    }
}

pub fn print_lock_notice(locked: bool) {
    println!("{}", if locked { LOCK_NOTICE } else { UNLOCK_NOTICE });
}
