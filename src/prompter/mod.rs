pub mod color_picker;
pub mod controller;
pub mod controls;
pub mod fonts;
pub mod input;
pub mod keyboard;
pub mod messages;
pub mod model;
pub mod overlay;
pub mod platform;
pub mod scroll;
pub mod state;
pub mod style;

pub use controller::OverlayController;
pub use overlay::PrompterApp;
