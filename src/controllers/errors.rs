use std::{error::Error, fmt};

use crate::core::colour_mapping::errors::PaletteError;
use crate::core::data::frame_size::FrameSizeError;
use crate::core::fractals::fractal_kinds::EvaluatorError;

/// Fatal startup problems. Reported once; no frame is rendered.
#[derive(Debug)]
pub enum ConfigError {
    ZeroMaxIterations,
    InvalidAdaptiveQuality(String),
    FrameSize(FrameSizeError),
    Palette(PaletteError),
    Evaluator(EvaluatorError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => write!(f, "maximum iterations must be greater than zero"),
            Self::InvalidAdaptiveQuality(reason) => {
                write!(f, "invalid adaptive quality settings: {}", reason)
            }
            Self::FrameSize(err) => write!(f, "frame size error: {}", err),
            Self::Palette(err) => write!(f, "palette error: {}", err),
            Self::Evaluator(err) => write!(f, "evaluator error: {}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZeroMaxIterations | Self::InvalidAdaptiveQuality(_) => None,
            Self::FrameSize(err) => Some(err),
            Self::Palette(err) => Some(err),
            Self::Evaluator(err) => Some(err),
        }
    }
}

impl From<FrameSizeError> for ConfigError {
    fn from(err: FrameSizeError) -> Self {
        Self::FrameSize(err)
    }
}

impl From<PaletteError> for ConfigError {
    fn from(err: PaletteError) -> Self {
        Self::Palette(err)
    }
}

impl From<EvaluatorError> for ConfigError {
    fn from(err: EvaluatorError) -> Self {
        Self::Evaluator(err)
    }
}
