use std::path::PathBuf;

use clap::Parser;

use crate::controllers::adaptive_quality::AdaptiveQuality;
use crate::controllers::config::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH, ExplorerConfig,
};
use crate::controllers::errors::ConfigError;
use crate::core::colour_mapping::kinds::ColourStrategyKind;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_kinds::FractalKind;

/// Command-line options shared by the batch renderer and the viewer.
#[derive(Debug, Clone, Parser)]
#[command(name = "fractal_viewer")]
#[command(about = "Escape-time Mandelbrot and Julia renderer")]
pub struct ExplorerArgs {
    /// Frame width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Frame height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Real coordinate of the frame centre
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub x_pos: f64,

    /// Imaginary coordinate of the frame centre
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub y_pos: f64,

    #[arg(long, default_value_t = 1.0)]
    pub zoom: f64,

    /// mandelbrot or julia
    #[arg(long, default_value_t = FractalKind::default())]
    pub fractal: FractalKind,

    /// Evaluate every pixel instead of reusing agreeing neighbours
    #[arg(long)]
    pub no_fast_eval: bool,

    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// palette or direct
    #[arg(long, default_value_t = ColourStrategyKind::default())]
    pub colour: ColourStrategyKind,

    /// Lower the iteration cap when frames miss the tick budget
    #[arg(long)]
    pub adaptive: bool,

    /// Tick budget used by --adaptive
    #[arg(long, default_value_t = 30.0, allow_hyphen_values = true)]
    pub target_fps: f64,

    /// Output file for the batch renderer (.ppm or .png)
    #[arg(short, long, default_value = "output/fractal.png")]
    pub output: PathBuf,
}

impl ExplorerArgs {
    pub fn to_config(&self) -> Result<ExplorerConfig, ConfigError> {
        let adaptive_quality = if self.adaptive {
            Some(AdaptiveQuality::for_frame_rate(self.target_fps)?)
        } else {
            None
        };

        let config = ExplorerConfig {
            frame_size: FrameSize::new(self.width, self.height)?,
            viewport: Viewport::new(self.x_pos, self.y_pos, self.zoom),
            fractal_kind: self.fractal,
            fast_eval: !self.no_fast_eval,
            max_iterations: self.max_iterations,
            colour_strategy: self.colour,
            adaptive_quality,
        };
        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_default_config() {
        let args = ExplorerArgs::try_parse_from(["fractal_viewer"]).unwrap();

        assert_eq!(args.to_config().unwrap(), ExplorerConfig::default());
        assert_eq!(args.output, PathBuf::from("output/fractal.png"));
    }

    #[test]
    fn test_parses_negative_coordinates_and_kinds() {
        let args = ExplorerArgs::try_parse_from([
            "fractal_viewer",
            "--x-pos",
            "-0.75",
            "--y-pos",
            "-0.1",
            "--fractal",
            "julia",
            "--colour",
            "direct",
            "--no-fast-eval",
        ])
        .unwrap();
        let config = args.to_config().unwrap();

        assert_eq!(config.viewport, Viewport::new(-0.75, -0.1, 1.0));
        assert_eq!(config.fractal_kind, FractalKind::Julia);
        assert_eq!(config.colour_strategy, ColourStrategyKind::Direct);
        assert!(!config.fast_eval);
    }

    #[test]
    fn test_zero_size_is_a_config_error() {
        let args = ExplorerArgs::try_parse_from(["fractal_viewer", "--width", "0"]).unwrap();

        assert!(matches!(args.to_config(), Err(ConfigError::FrameSize(_))));
    }

    #[test]
    fn test_adaptive_uses_target_fps() {
        let args =
            ExplorerArgs::try_parse_from(["fractal_viewer", "--adaptive", "--target-fps", "10"])
                .unwrap();
        let policy = args.to_config().unwrap().adaptive_quality.unwrap();

        assert_eq!(policy.target_frame_time, std::time::Duration::from_millis(100));
    }

    #[test]
    fn test_unusable_target_fps_is_a_config_error() {
        for fps in ["1e-30", "0", "-30"] {
            let args =
                ExplorerArgs::try_parse_from(["fractal_viewer", "--adaptive", "--target-fps", fps])
                    .unwrap();

            assert!(
                matches!(args.to_config(), Err(ConfigError::InvalidAdaptiveQuality(_))),
                "target fps {} accepted",
                fps
            );
        }
    }

    #[test]
    fn test_target_fps_is_ignored_without_adaptive() {
        let args = ExplorerArgs::try_parse_from(["fractal_viewer", "--target-fps", "0"]).unwrap();

        assert_eq!(args.to_config().unwrap().adaptive_quality, None);
    }

    #[test]
    fn test_unknown_fractal_is_rejected() {
        assert!(ExplorerArgs::try_parse_from(["fractal_viewer", "--fractal", "newton"]).is_err());
    }
}
