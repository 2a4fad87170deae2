//! Input handling module for keyboard shortcuts

pub mod actions;
pub mod keymap;

pub use actions::*;
pub use keymap::{Shortcut, bindings, shortcuts};
