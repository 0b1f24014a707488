use std::fmt;
use std::str::FromStr;

use crate::core::actions::render_frame::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::julia::errors::JuliaError;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }

    /// Builds the evaluator for this kind with the given cap.
    pub fn evaluator(self, max_iterations: u32) -> Result<Evaluator, EvaluatorError> {
        Ok(match self {
            Self::Mandelbrot => Evaluator::Mandelbrot(MandelbrotAlgorithm::new(max_iterations)?),
            Self::Julia => Evaluator::Julia(JuliaAlgorithm::new(max_iterations)?),
        })
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for FractalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown fractal kind '{}', expected mandelbrot or julia", s))
    }
}

#[derive(Debug, PartialEq)]
pub enum EvaluatorError {
    Mandelbrot(MandelbrotError),
    Julia(JuliaError),
}

impl fmt::Display for EvaluatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mandelbrot(err) => write!(f, "mandelbrot: {}", err),
            Self::Julia(err) => write!(f, "julia: {}", err),
        }
    }
}

impl std::error::Error for EvaluatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Mandelbrot(err) => Some(err),
            Self::Julia(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for EvaluatorError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

impl From<JuliaError> for EvaluatorError {
    fn from(err: JuliaError) -> Self {
        Self::Julia(err)
    }
}

/// Statically dispatched evaluator for the configured [`FractalKind`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluator {
    Mandelbrot(MandelbrotAlgorithm),
    Julia(JuliaAlgorithm),
}

impl EscapeTimeAlgorithm for Evaluator {
    #[inline]
    fn escape_time(&self, z0: Complex) -> u32 {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.escape_time(z0),
            Self::Julia(algorithm) => algorithm.escape_time(z0),
        }
    }

    fn max_iterations(&self) -> u32 {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.max_iterations(),
            Self::Julia(algorithm) => algorithm.max_iterations(),
        }
    }
}
