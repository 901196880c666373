//! Client view model.
//!
//! Platform-independent half of the capture/upload UI and result renderer.
//! The browser page owns a [`ViewState`], sends [`ViewEvent`]s to the
//! server, and executes the returned [`Effect`]s against real devices.

pub mod calendar;
pub mod camera;
pub mod event;
pub mod font;
pub mod keymap;
pub mod layout;
pub mod speech;
pub mod state;

pub use event::{Effect, ViewEvent};
pub use font::FontScale;
pub use keymap::{KeyCombo, Keymap, Modifier, Shortcut};
pub use state::{CameraStatus, ViewState};
