//! Interactive viewer: a winit window with a pixels surface, redrawn once
//! per tick from the held keys.

pub mod key_bindings;
pub mod run_gui;
