//! Lowers the iteration cap when frames take longer than the tick budget.

use std::time::Duration;

use crate::controllers::errors::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveQuality {
    /// Frames slower than this trigger a reduction.
    pub target_frame_time: Duration,
    /// The cap is never lowered below this.
    pub min_iterations: u32,
    /// Fraction of the current cap removed per slow frame, in `(0, 1)`.
    pub reduction: f64,
}

const DEFAULT_MIN_ITERATIONS: u32 = 32;
const DEFAULT_REDUCTION: f64 = 0.1;

impl Default for AdaptiveQuality {
    fn default() -> Self {
        Self {
            target_frame_time: Duration::from_secs(1) / 30,
            min_iterations: DEFAULT_MIN_ITERATIONS,
            reduction: DEFAULT_REDUCTION,
        }
    }
}

impl AdaptiveQuality {
    /// Targets one frame per tick at `frames_per_second`. The rate must be
    /// positive and finite, and its frame time must fit in a `Duration`.
    pub fn for_frame_rate(frames_per_second: f64) -> Result<Self, ConfigError> {
        let invalid = || {
            ConfigError::InvalidAdaptiveQuality(format!(
                "target fps {} must be a positive, finite frame rate",
                frames_per_second
            ))
        };

        if !(frames_per_second > 0.0 && frames_per_second.is_finite()) {
            return Err(invalid());
        }

        let target_frame_time =
            Duration::try_from_secs_f64(1.0 / frames_per_second).map_err(|_| invalid())?;

        Ok(Self {
            target_frame_time,
            min_iterations: DEFAULT_MIN_ITERATIONS,
            reduction: DEFAULT_REDUCTION,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_iterations == 0 {
            return Err(ConfigError::InvalidAdaptiveQuality(
                "minimum iterations must be greater than zero".to_string(),
            ));
        }

        if !(self.reduction > 0.0 && self.reduction < 1.0) {
            return Err(ConfigError::InvalidAdaptiveQuality(format!(
                "reduction {} must lie strictly between 0 and 1",
                self.reduction
            )));
        }

        Ok(())
    }

    /// The cap to use for the next frame, or `None` to keep `current`.
    /// Never raises the cap and never goes below `min_iterations`.
    #[must_use]
    pub fn next_max_iterations(&self, current: u32, last_render: Duration) -> Option<u32> {
        if last_render <= self.target_frame_time || current <= self.min_iterations {
            return None;
        }

        let reduced = (current as f64 * (1.0 - self.reduction)) as u32;
        let next = reduced.max(self.min_iterations).min(current - 1);

        Some(next)
    }
}
