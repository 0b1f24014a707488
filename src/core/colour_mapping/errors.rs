use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    TooFewStops { stops: usize },
    ZeroMaxIterations,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewStops { stops } => {
                write!(f, "palette needs at least two stops to interpolate, got {}", stops)
            }
            Self::ZeroMaxIterations => {
                write!(f, "palette size (maximum iterations) must be greater than zero")
            }
        }
    }
}

impl Error for PaletteError {}
