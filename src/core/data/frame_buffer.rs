use crate::core::data::colour::Colour;
use crate::core::data::frame_size::FrameSize;

pub const BYTES_PER_PIXEL: usize = 4;

pub type FrameBufferData = Vec<u8>;

/// Row-major RGBA output of one frame, `width * height * 4` bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    frame_size: FrameSize,
    buffer: FrameBufferData,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(frame_size: FrameSize) -> Self {
        Self {
            frame_size,
            buffer: vec![0; frame_size.pixel_count() * BYTES_PER_PIXEL],
        }
    }

    #[must_use]
    pub fn frame_size(&self) -> FrameSize {
        self.frame_size
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.frame_size.width() as usize * BYTES_PER_PIXEL
    }

    /// Mutable access for the frame scheduler, which splits it into one
    /// disjoint slice per row.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Colour {
        let offset = self.frame_size.index(x, y) * BYTES_PER_PIXEL;

        Colour {
            r: self.buffer[offset],
            g: self.buffer[offset + 1],
            b: self.buffer[offset + 2],
            a: self.buffer[offset + 3],
        }
    }

    /// Drops the alpha channel, for sinks that only store RGB.
    #[must_use]
    pub fn to_rgb(&self) -> Vec<u8> {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .flat_map(|pixel| [pixel[0], pixel[1], pixel[2]])
            .collect()
    }
}

/// Writes `colour` into the pixel slot at `x` of a single row slice. Alpha is
/// always written as opaque.
#[inline]
pub fn write_pixel(row: &mut [u8], x: usize, colour: Colour) {
    let offset = x * BYTES_PER_PIXEL;
    row[offset] = colour.r;
    row[offset + 1] = colour.g;
    row[offset + 2] = colour.b;
    row[offset + 3] = 0xff;
}
