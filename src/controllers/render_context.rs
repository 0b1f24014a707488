use std::ops::ControlFlow;
use std::time::Instant;

use log::{debug, warn};

use crate::controllers::config::ExplorerConfig;
use crate::controllers::diagnostics::FrameDiagnostics;
use crate::controllers::errors::ConfigError;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::render_frame::{FrameStats, render_frame};
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::viewport::{ViewCommand, Viewport};
use crate::core::fractals::fractal_kinds::Evaluator;

/// Owns all per-session render state: the view, the iteration cap, both
/// buffers and the collaborators derived from the cap.
///
/// Commands and cap changes are only accepted between frames, since every
/// mutating method takes `&mut self` and `render_frame` holds that borrow
/// until the frame is complete.
pub struct RenderContext {
    config: ExplorerConfig,
    viewport: Viewport,
    max_iterations: u32,
    evaluator: Evaluator,
    colour_map: Box<dyn ColourMap>,
    iterations: IterationBuffer,
    frame: FrameBuffer,
    has_history: bool,
    diagnostics: FrameDiagnostics,
}

impl RenderContext {
    pub fn new(config: ExplorerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let evaluator = config.fractal_kind.evaluator(config.max_iterations)?;
        let colour_map = colour_map_factory(config.colour_strategy, config.max_iterations)?;

        Ok(Self {
            viewport: config.viewport,
            max_iterations: config.max_iterations,
            evaluator,
            colour_map,
            iterations: IterationBuffer::new(config.frame_size),
            frame: FrameBuffer::new(config.frame_size),
            has_history: false,
            diagnostics: FrameDiagnostics::default(),
            config,
        })
    }

    /// Applies one input command to the viewport. `Exit` breaks.
    pub fn apply(&mut self, command: ViewCommand) -> ControlFlow<()> {
        if command == ViewCommand::Exit {
            return ControlFlow::Break(());
        }

        self.viewport.apply(command);
        ControlFlow::Continue(())
    }

    /// Renders a full frame for the current viewport.
    ///
    /// The first frame of a context never uses fast-eval, since there is no
    /// previous frame to borrow counts from. With adaptive quality enabled,
    /// a slow frame lowers the cap for the next one.
    pub fn render_frame(&mut self) -> FrameStats {
        let fast_eval = self.config.fast_eval && self.has_history;

        let stats = render_frame(
            &self.viewport,
            &self.evaluator,
            self.colour_map.as_ref(),
            fast_eval,
            &self.iterations,
            &mut self.frame,
        );

        self.has_history = true;
        self.diagnostics.record(stats, Instant::now());

        debug!(
            "frame {} rendered in {:?} ({} fast-eval hits, max iterations {})",
            self.diagnostics.frames_rendered(),
            stats.render_duration,
            stats.fast_eval_hits,
            self.max_iterations
        );

        self.adapt_quality(stats);

        stats
    }

    fn adapt_quality(&mut self, stats: FrameStats) {
        let Some(policy) = self.config.adaptive_quality else {
            return;
        };

        if let Some(next) = policy.next_max_iterations(self.max_iterations, stats.render_duration) {
            warn!(
                "frame took {:?} (target {:?}), lowering max iterations {} -> {}",
                stats.render_duration, policy.target_frame_time, self.max_iterations, next
            );

            // next is never zero, so rebuilding cannot fail
            if let Err(err) = self.set_max_iterations(next) {
                warn!("keeping max iterations {}: {}", self.max_iterations, err);
            }
        }
    }

    /// Changes the iteration cap, rebuilding the evaluator and colour map to
    /// match. The iteration history is kept.
    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), ConfigError> {
        if max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        let evaluator = self.config.fractal_kind.evaluator(max_iterations)?;
        let colour_map = colour_map_factory(self.config.colour_strategy, max_iterations)?;

        self.evaluator = evaluator;
        self.colour_map = colour_map;
        self.max_iterations = max_iterations;

        Ok(())
    }

    #[must_use]
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    #[must_use]
    pub fn iterations(&self) -> &IterationBuffer {
        &self.iterations
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn colour_map_name(&self) -> &str {
        self.colour_map.display_name()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &FrameDiagnostics {
        &self.diagnostics
    }

    /// One-line readout of the frame diagnostics and the current view.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!(
            "{} | zoom {:.2} | x {:.2} | y {:.2}",
            self.diagnostics,
            self.viewport.zoom(),
            self.viewport.pan_x(),
            self.viewport.pan_y()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::adaptive_quality::AdaptiveQuality;
    use crate::core::actions::render_frame::ports::escape_time_algorithm::EscapeTimeAlgorithm;
    use crate::core::colour_mapping::kinds::ColourStrategyKind;
    use crate::core::data::frame_size::FrameSize;
    use crate::core::fractals::fractal_kinds::FractalKind;
    use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
    use std::time::Duration;

    fn small_config() -> ExplorerConfig {
        ExplorerConfig {
            frame_size: FrameSize::new(40, 30).unwrap(),
            max_iterations: 64,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_rejects_zero_iterations() {
        let config = ExplorerConfig {
            max_iterations: 0,
            ..small_config()
        };

        assert!(matches!(
            RenderContext::new(config),
            Err(ConfigError::ZeroMaxIterations)
        ));
    }

    #[test]
    fn test_apply_moves_viewport_and_exit_breaks() {
        let mut context = RenderContext::new(small_config()).unwrap();

        assert_eq!(context.apply(ViewCommand::ZoomIn), ControlFlow::Continue(()));
        assert_eq!(context.viewport().zoom(), 1.03);
        assert_eq!(context.apply(ViewCommand::Exit), ControlFlow::Break(()));
        assert_eq!(context.viewport().zoom(), 1.03);
    }

    #[test]
    fn test_first_frame_bypasses_fast_eval() {
        let mut context = RenderContext::new(small_config()).unwrap();

        let first = context.render_frame();
        let second = context.render_frame();

        assert_eq!(first.fast_eval_hits, 0);
        assert!(second.fast_eval_hits > 0);
        assert_eq!(context.diagnostics().frames_rendered(), 2);
    }

    #[test]
    fn test_first_frame_counts_match_evaluator() {
        let config = small_config();
        let mut context = RenderContext::new(config).unwrap();
        context.render_frame();

        let evaluator = FractalKind::Mandelbrot.evaluator(64).unwrap();
        for (x, y) in [(0, 0), (20, 15), (39, 29), (7, 22)] {
            let z0 = pixel_to_complex_coords(x, y, config.frame_size, context.viewport());
            assert_eq!(context.iterations().at(x, y), evaluator.escape_time(z0));
        }
    }

    #[test]
    fn test_disabled_fast_eval_never_hits() {
        let config = ExplorerConfig {
            fast_eval: false,
            ..small_config()
        };
        let mut context = RenderContext::new(config).unwrap();

        context.render_frame();
        assert_eq!(context.render_frame().fast_eval_hits, 0);
    }

    #[test]
    fn test_set_max_iterations_rebuilds_collaborators() {
        let mut context = RenderContext::new(small_config()).unwrap();

        context.set_max_iterations(10).unwrap();
        context.render_frame();

        assert_eq!(context.max_iterations(), 10);
        assert!(context.iterations().snapshot().iter().all(|&c| c <= 10));
        assert!(context.set_max_iterations(0).is_err());
        assert_eq!(context.max_iterations(), 10);
    }

    #[test]
    fn test_status_line_reports_view() {
        let config = ExplorerConfig {
            viewport: Viewport::new(-0.75, 0.1, 2.0),
            ..small_config()
        };
        let mut context = RenderContext::new(config).unwrap();
        context.render_frame();

        let status = context.status_line();
        assert!(status.starts_with("frame 1 "));
        assert!(status.ends_with("zoom 2.00 | x -0.75 | y 0.10"));
    }

    #[test]
    fn test_colour_strategy_is_honoured() {
        let config = ExplorerConfig {
            colour_strategy: ColourStrategyKind::Direct,
            ..small_config()
        };
        let context = RenderContext::new(config).unwrap();

        assert_eq!(context.colour_map_name(), "Direct linear");
    }

    #[test]
    fn test_adaptive_quality_lowers_cap_after_slow_frame() {
        let config = ExplorerConfig {
            adaptive_quality: Some(AdaptiveQuality {
                target_frame_time: Duration::ZERO,
                min_iterations: 60,
                reduction: 0.5,
            }),
            ..small_config()
        };
        let mut context = RenderContext::new(config).unwrap();

        context.render_frame();
        assert_eq!(context.max_iterations(), 60);

        context.render_frame();
        assert_eq!(context.max_iterations(), 60);
    }
}
