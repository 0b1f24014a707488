use crate::core::actions::render_frame::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::ESCAPE_RADIUS;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// `z_{n+1} = z_n² + z0`, starting from `z_0 = z0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl EscapeTimeAlgorithm for MandelbrotAlgorithm {
    #[inline]
    fn escape_time(&self, z0: Complex) -> u32 {
        let mut z = z0;

        for iteration in 0..self.max_iterations {
            if z.magnitude() > ESCAPE_RADIUS {
                return iteration;
            }
            z = z.square() + z0;
        }

        self.max_iterations
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
    }
}
