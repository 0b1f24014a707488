use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::controllers::ports::frame_sink::{FrameSink, FrameSinkError};
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::frame_size::FrameSize;

/// Blits finished frames onto a `pixels` surface attached to the window.
/// The pixel buffer keeps the frame's resolution and is scaled to the
/// window on present.
pub struct PixelsSink {
    pixels: Pixels<'static>,
    frame_size: FrameSize,
}

impl PixelsSink {
    pub fn new(window: &'static Window, frame_size: FrameSize) -> Result<Self, FrameSinkError> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);

        let pixels = Pixels::new(frame_size.width(), frame_size.height(), surface_texture)
            .map_err(|err| FrameSinkError::Surface(err.to_string()))?;

        Ok(Self { pixels, frame_size })
    }

    /// Follows window resizes. A minimised window (zero size) is ignored.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), FrameSinkError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels
            .resize_surface(width, height)
            .map_err(|err| FrameSinkError::Surface(err.to_string()))
    }
}

impl FrameSink for PixelsSink {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), FrameSinkError> {
        if frame.frame_size() != self.frame_size {
            return Err(FrameSinkError::Surface(format!(
                "frame is {}x{} but the surface buffer is {}x{}",
                frame.frame_size().width(),
                frame.frame_size().height(),
                self.frame_size.width(),
                self.frame_size.height()
            )));
        }

        self.pixels.frame_mut().copy_from_slice(frame.buffer());

        self.pixels
            .render()
            .map_err(|err| FrameSinkError::Surface(err.to_string()))
    }
}
