use crate::core::data::iteration_buffer::IterationBuffer;

/// Outcome of the neighbour lookup. A miss is ordinary control flow: the
/// caller evaluates the pixel directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastEval {
    Hit(u32),
    Miss,
}

/// Reuses the count shared by all four 4-connected neighbours of `(x, y)` in
/// the previous frame's counts.
///
/// Trades resolution for speed while the view moves: a pixel whose
/// neighbours all agree is assumed to be in the same band. Border pixels and
/// a disabled heuristic always miss. The buffer may be partly overwritten by
/// the frame in progress; see [`IterationBuffer`] for the consistency terms.
#[inline]
pub fn neighbour_fast_eval(buffer: &IterationBuffer, x: u32, y: u32, enabled: bool) -> FastEval {
    if !enabled {
        return FastEval::Miss;
    }

    let frame_size = buffer.frame_size();
    if x == 0 || y == 0 || x >= frame_size.width() - 1 || y >= frame_size.height() - 1 {
        return FastEval::Miss;
    }

    let left = buffer.at(x - 1, y);
    let right = buffer.at(x + 1, y);
    let up = buffer.at(x, y + 1);
    let down = buffer.at(x, y - 1);

    if left == right && up == down && left == up {
        FastEval::Hit(left)
    } else {
        FastEval::Miss
    }
}
