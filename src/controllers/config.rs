use crate::controllers::adaptive_quality::AdaptiveQuality;
use crate::controllers::errors::ConfigError;
use crate::core::colour_mapping::kinds::ColourStrategyKind;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_kinds::FractalKind;

pub const DEFAULT_WIDTH: u32 = FrameSize::DEFAULT.width();
pub const DEFAULT_HEIGHT: u32 = FrameSize::DEFAULT.height();
pub const DEFAULT_MAX_ITERATIONS: u32 = 300;

/// Startup configuration. Fixed for the lifetime of a render context except
/// for the viewport and the iteration cap, which only seed the mutable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub frame_size: FrameSize,
    pub viewport: Viewport,
    pub fractal_kind: FractalKind,
    pub fast_eval: bool,
    pub max_iterations: u32,
    pub colour_strategy: ColourStrategyKind,
    pub adaptive_quality: Option<AdaptiveQuality>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            frame_size: FrameSize::DEFAULT,
            viewport: Viewport::default(),
            fractal_kind: FractalKind::default(),
            fast_eval: true,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_strategy: ColourStrategyKind::default(),
            adaptive_quality: None,
        }
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        if let Some(policy) = self.adaptive_quality {
            policy.validate()?;
        }

        Ok(())
    }
}
