use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

/// Scales the distance from the cap straight into RGB, no palette needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectLinear {
    max_iterations: u32,
}

impl ColourMap for DirectLinear {
    fn map(&self, iterations: u32) -> Colour {
        // counts left over from a higher cap saturate at the current one
        let iterations = iterations.min(self.max_iterations);
        let max = self.max_iterations as f64;
        let t = (max - iterations as f64) / max;

        Colour::opaque(
            (t * 230.0).floor() as u8,
            (t * 235.0).floor() as u8,
            (t * 255.0).floor() as u8,
        )
    }

    fn display_name(&self) -> &str {
        "Direct linear"
    }
}

impl DirectLinear {
    /// `max_iterations` must be non-zero; a zero cap is clamped to 1.
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations: max_iterations.max(1),
        }
    }
}
