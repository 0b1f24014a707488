//! Per-pixel escape counts shared between concurrently running row tasks.
//!
//! Consistency contract: during a frame every row task stores only into its
//! own row, but the neighbour lookup of the fast-eval heuristic loads from the
//! rows above and below, which may be mid-write in the same frame. Those loads
//! may observe the previous frame's value or the current one. All accesses are
//! `Relaxed` atomic loads and stores: no locks, no fences, no read-modify-write,
//! so the cost is that of plain memory accesses. Stale values are expected and
//! are not an error.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::core::data::frame_size::FrameSize;

#[derive(Debug)]
pub struct IterationBuffer {
    frame_size: FrameSize,
    counts: Vec<AtomicU32>,
}

impl IterationBuffer {
    #[must_use]
    pub fn new(frame_size: FrameSize) -> Self {
        Self {
            frame_size,
            counts: (0..frame_size.pixel_count()).map(|_| AtomicU32::new(0)).collect(),
        }
    }

    /// Builds a buffer holding `counts` in row-major order. Returns `None`
    /// when the length does not match the frame.
    #[must_use]
    #[cfg(test)]
    pub(crate) fn from_counts(frame_size: FrameSize, counts: &[u32]) -> Option<Self> {
        if counts.len() != frame_size.pixel_count() {
            return None;
        }

        Some(Self {
            frame_size,
            counts: counts.iter().map(|&count| AtomicU32::new(count)).collect(),
        })
    }

    #[must_use]
    pub fn frame_size(&self) -> FrameSize {
        self.frame_size
    }

    #[inline]
    #[must_use]
    pub fn load(&self, index: usize) -> u32 {
        self.counts[index].load(Ordering::Relaxed)
    }

    #[inline]
    pub fn store(&self, index: usize, count: u32) {
        self.counts[index].store(count, Ordering::Relaxed);
    }

    #[inline]
    #[must_use]
    pub fn at(&self, x: u32, y: u32) -> u32 {
        self.load(self.frame_size.index(x, y))
    }

    /// Copies the current contents out. Only meaningful once no frame is in
    /// flight.
    #[must_use]
    pub fn snapshot(&self) -> Vec<u32> {
        self.counts.iter().map(|count| count.load(Ordering::Relaxed)).collect()
    }
}
