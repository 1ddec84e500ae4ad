//! Reusable UI components
//!
//! - `keybindings` - key to action registry and its display labels
//! - `help_overlay` - floating keybinding reference

pub mod help_overlay;
pub mod keybindings;

pub use help_overlay::HelpOverlay;
pub use keybindings::{KeyAction, KeybindingContext, NavBarItem};
