use std::fmt;
use std::time::{Duration, Instant};

use crate::core::actions::render_frame::render_frame::FrameStats;

/// Rolling per-frame numbers for the window title and the log.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameDiagnostics {
    frames_rendered: u64,
    last_render_duration: Duration,
    last_fast_eval_hits: usize,
    current_fps: f64,
    previous_fps: f64,
    last_frame_at: Option<Instant>,
}

impl FrameDiagnostics {
    pub fn record(&mut self, stats: FrameStats, finished_at: Instant) {
        if let Some(previous) = self.last_frame_at {
            let interval = finished_at.saturating_duration_since(previous).as_secs_f64();
            self.previous_fps = self.current_fps;
            self.current_fps = if interval > 0.0 { 1.0 / interval } else { 0.0 };
        }

        self.frames_rendered += 1;
        self.last_render_duration = stats.render_duration;
        self.last_fast_eval_hits = stats.fast_eval_hits;
        self.last_frame_at = Some(finished_at);
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

impl fmt::Display for FrameDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frame {} | {:.1} fps (prev {:.1}) | render {} ms | fast-eval hits {}",
            self.frames_rendered,
            self.current_fps,
            self.previous_fps,
            self.last_render_duration.as_millis(),
            self.last_fast_eval_hits
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(millis: u64, hits: usize) -> FrameStats {
        FrameStats {
            render_duration: Duration::from_millis(millis),
            fast_eval_hits: hits,
        }
    }

    #[test]
    fn test_first_frame_has_no_rate() {
        let mut diagnostics = FrameDiagnostics::default();
        diagnostics.record(stats(12, 3), Instant::now());

        assert_eq!(diagnostics.frames_rendered(), 1);
        assert_eq!(diagnostics.current_fps, 0.0);
        assert_eq!(diagnostics.last_render_duration, Duration::from_millis(12));
        assert_eq!(diagnostics.last_fast_eval_hits, 3);
    }

    #[test]
    fn test_rate_follows_frame_interval() {
        let mut diagnostics = FrameDiagnostics::default();
        let start = Instant::now();

        diagnostics.record(stats(5, 0), start);
        diagnostics.record(stats(5, 0), start + Duration::from_millis(100));
        diagnostics.record(stats(5, 0), start + Duration::from_millis(150));

        assert!((diagnostics.previous_fps - 10.0).abs() < 1e-9);
        assert!((diagnostics.current_fps - 20.0).abs() < 1e-9);
        assert_eq!(diagnostics.frames_rendered(), 3);
    }

    #[test]
    fn test_display_mentions_hits() {
        let mut diagnostics = FrameDiagnostics::default();
        diagnostics.record(stats(7, 42), Instant::now());

        let text = diagnostics.to_string();
        assert!(text.contains("render 7 ms"));
        assert!(text.contains("fast-eval hits 42"));
    }
}
