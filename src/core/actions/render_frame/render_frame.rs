use rayon::prelude::*;
use std::time::{Duration, Instant};

use crate::core::actions::fast_eval::neighbour_fast_eval::{FastEval, neighbour_fast_eval};
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::frame_buffer::{FrameBuffer, write_pixel};
use crate::core::data::frame_size::FrameSize;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::{column_to_real, row_to_imag};

/// Timing and heuristic counters for one completed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub render_duration: Duration,
    pub fast_eval_hits: usize,
}

/// Everything a row task reads. Shared by reference across all rows.
struct RowJob<'a, Alg: ?Sized, CMap: ?Sized> {
    frame_size: FrameSize,
    viewport: &'a Viewport,
    algorithm: &'a Alg,
    colour_map: &'a CMap,
    iterations: &'a IterationBuffer,
    fast_eval: bool,
}

impl<Alg, CMap> RowJob<'_, Alg, CMap>
where
    Alg: EscapeTimeAlgorithm + ?Sized,
    CMap: ColourMap + ?Sized,
{
    /// Fills one row of counts and colours, returning the number of fast-eval
    /// hits in the row.
    fn render_row(&self, y: u32, row: &mut [u8]) -> usize {
        let imag = row_to_imag(y, self.frame_size, self.viewport);
        let mut hits = 0;

        for x in 0..self.frame_size.width() {
            let count = match neighbour_fast_eval(self.iterations, x, y, self.fast_eval) {
                FastEval::Hit(count) => {
                    hits += 1;
                    count
                }
                FastEval::Miss => {
                    let real = column_to_real(x, self.frame_size, self.viewport);
                    self.algorithm.escape_time(Complex::new(real, imag))
                }
            };

            self.iterations.store(self.frame_size.index(x, y), count);
            write_pixel(row, x as usize, self.colour_map.map(count));
        }

        hits
    }
}

/// Renders one frame into `frame`, recording every pixel's count in
/// `iterations`.
///
/// Each row is an independent rayon task owning its slice of `frame`; the
/// call returns only after every row has finished, so `frame` is complete
/// and consistent once this returns. `iterations` is read by the fast-eval
/// heuristic and written by the row tasks at the same time.
///
/// # Panics
/// Panics if `iterations` and `frame` were sized for different frames.
pub fn render_frame<Alg, CMap>(
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
    fast_eval: bool,
    iterations: &IterationBuffer,
    frame: &mut FrameBuffer,
) -> FrameStats
where
    Alg: EscapeTimeAlgorithm + Sync + ?Sized,
    CMap: ColourMap + ?Sized,
{
    let frame_size = frame.frame_size();
    assert_eq!(
        iterations.frame_size(),
        frame_size,
        "iteration buffer does not match frame buffer"
    );

    let job = RowJob {
        frame_size,
        viewport,
        algorithm,
        colour_map,
        iterations,
        fast_eval,
    };

    let stride = frame.row_stride();
    let start = Instant::now();

    let fast_eval_hits: usize = frame
        .buffer_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .map(|(y, row)| job.render_row(y as u32, row))
        .sum();

    FrameStats {
        render_duration: start.elapsed(),
        fast_eval_hits,
    }
}
