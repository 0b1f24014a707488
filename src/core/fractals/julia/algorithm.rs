use crate::core::actions::render_frame::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::ESCAPE_RADIUS;
use crate::core::fractals::julia::errors::JuliaError;
use std::ops::ControlFlow;

/// Fixed parameter of the rendered Julia set.
pub const JULIA_C: Complex = Complex::new(0.25, 0.5);

/// `z_{n+1} = z_n² + c` for the fixed `c`, starting from `z_0 = z0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    c: Complex,
    max_iterations: u32,
}

impl EscapeTimeAlgorithm for JuliaAlgorithm {
    #[inline]
    fn escape_time(&self, z0: Complex) -> u32 {
        let iterations = (1..=self.max_iterations).try_fold(z0, |z, iteration| {
            if z.magnitude() > ESCAPE_RADIUS {
                ControlFlow::Break(iteration - 1)
            } else {
                ControlFlow::Continue(z.square() + self.c)
            }
        });

        match iterations {
            ControlFlow::Break(iteration) => iteration,
            ControlFlow::Continue(_) => self.max_iterations,
        }
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl JuliaAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, JuliaError> {
        if max_iterations == 0 {
            return Err(JuliaError::ZeroMaxIterationsError);
        }

        Ok(Self {
            c: JULIA_C,
            max_iterations,
        })
    }
}
