//! Pan/zoom state mapping the pixel grid onto the complex plane.

/// Multiplicative zoom step applied per tick.
pub const ZOOM_STEP: f64 = 0.03;

/// Pan distance, in complex units at zoom 1, for one unit of input.
pub const PAN_STEP: f64 = 0.1;

/// One tick's worth of input, produced by whatever is polling the keyboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    /// Pan by `dx`/`dy` input units; the distance shrinks as zoom grows.
    Pan { dx: f64, dy: f64 },
    ZoomIn,
    ZoomOut,
    /// Back to the origin at zoom 1.
    Reset,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pan_x: f64,
    pan_y: f64,
    zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    /// A zoom of exactly zero is replaced by 1.
    #[must_use]
    pub fn new(pan_x: f64, pan_y: f64, zoom: f64) -> Self {
        let mut viewport = Self { pan_x, pan_y, zoom };
        viewport.correct_zoom();
        viewport
    }

    #[must_use]
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    #[must_use]
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Applies one command. `Exit` leaves the viewport untouched.
    pub fn apply(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::Pan { dx, dy } => {
                let shift = PAN_STEP / self.zoom;
                self.pan_x += dx * shift;
                self.pan_y += dy * shift;
            }
            ViewCommand::ZoomIn => self.zoom += self.zoom * ZOOM_STEP,
            ViewCommand::ZoomOut => self.zoom -= self.zoom * ZOOM_STEP,
            ViewCommand::Reset => *self = Self::default(),
            ViewCommand::Exit => {}
        }

        self.correct_zoom();
    }

    fn correct_zoom(&mut self) {
        if self.zoom == 0.0 {
            self.zoom = 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_corrects_zero_zoom() {
        assert_eq!(Viewport::new(0.5, -0.5, 0.0).zoom(), 1.0);
    }

    #[test]
    fn test_new_keeps_negative_zoom() {
        assert_eq!(Viewport::new(0.0, 0.0, -2.0).zoom(), -2.0);
    }

    #[test]
    fn test_pan_scales_with_inverse_zoom() {
        let mut viewport = Viewport::new(0.0, 0.0, 2.0);
        viewport.apply(ViewCommand::Pan { dx: 1.0, dy: -1.0 });

        assert_eq!(viewport.pan_x(), 0.05);
        assert_eq!(viewport.pan_y(), -0.05);
    }

    #[test]
    fn test_zoom_in_and_out_are_three_percent() {
        let mut viewport = Viewport::default();
        viewport.apply(ViewCommand::ZoomIn);
        assert!((viewport.zoom() - 1.03).abs() < 1e-12);

        let mut viewport = Viewport::default();
        viewport.apply(ViewCommand::ZoomOut);
        assert!((viewport.zoom() - 0.97).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_underflowing_to_zero_is_corrected() {
        let mut viewport = Viewport::new(0.0, 0.0, f64::MIN_POSITIVE * f64::EPSILON);
        for _ in 0..64 {
            viewport.apply(ViewCommand::ZoomOut);
            assert_ne!(viewport.zoom(), 0.0);
        }
    }

    #[test]
    fn test_reset_returns_to_origin() {
        let mut viewport = Viewport::new(1.0, 2.0, 40.0);
        viewport.apply(ViewCommand::Reset);

        assert_eq!(viewport, Viewport::default());
    }

    #[test]
    fn test_exit_does_not_touch_viewport() {
        let mut viewport = Viewport::new(1.0, 2.0, 3.0);
        viewport.apply(ViewCommand::Exit);

        assert_eq!(viewport, Viewport::new(1.0, 2.0, 3.0));
    }
}
