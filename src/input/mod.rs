//! Input adapters: command-line arguments, and the keyboard-driven viewer
//! when built with the `gui` feature.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
pub mod keyboard;
