pub mod help;
pub mod hotkey;
pub mod logging;
pub mod prompter;
pub mod settings;
pub mod visibility;
