//! Turns the set of currently held keys into one tick's viewport commands.
//!
//! Held keys act every tick for as long as they stay down, so panning and
//! zooming are continuous. Kept free of any windowing types so the mapping
//! can be tested headless.

use crate::core::data::viewport::ViewCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerKey {
    Up,
    Down,
    Left,
    Right,
    ZoomIn,
    ZoomOut,
    Reset,
    Exit,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeldKeys {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    zoom_in: bool,
    zoom_out: bool,
    reset: bool,
    exit: bool,
}

impl HeldKeys {
    pub fn handle_key(&mut self, key: ExplorerKey, pressed: bool) {
        match key {
            ExplorerKey::Up => self.up = pressed,
            ExplorerKey::Down => self.down = pressed,
            ExplorerKey::Left => self.left = pressed,
            ExplorerKey::Right => self.right = pressed,
            ExplorerKey::ZoomIn => self.zoom_in = pressed,
            ExplorerKey::ZoomOut => self.zoom_out = pressed,
            ExplorerKey::Reset => self.reset = pressed,
            ExplorerKey::Exit => self.exit = pressed,
        }
    }

    /// Commands for one tick, in application order: pan, reset, zoom.
    /// Exit pre-empts everything else. Zoom-out wins when both zoom keys are
    /// held.
    #[must_use]
    pub fn commands(&self) -> Vec<ViewCommand> {
        if self.exit {
            return vec![ViewCommand::Exit];
        }

        let mut commands = Vec::new();

        let dx = axis(self.right, self.left);
        let dy = axis(self.up, self.down);
        if dx != 0.0 || dy != 0.0 {
            commands.push(ViewCommand::Pan { dx, dy });
        }

        if self.reset {
            commands.push(ViewCommand::Reset);
        }

        if self.zoom_out {
            commands.push(ViewCommand::ZoomOut);
        } else if self.zoom_in {
            commands.push(ViewCommand::ZoomIn);
        }

        commands
    }

    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}

fn axis(positive: bool, negative: bool) -> f64 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}
