use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::controllers::ports::frame_sink::{FrameSink, FrameSinkError};
use crate::core::data::frame_buffer::FrameBuffer;

/// Writes each presented frame as an RGBA PNG.
#[derive(Debug, Clone)]
pub struct PngFileSink {
    path: PathBuf,
}

impl PngFileSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl FrameSink for PngFileSink {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), FrameSinkError> {
        let frame_size = frame.frame_size();
        let image = RgbaImage::from_raw(
            frame_size.width(),
            frame_size.height(),
            frame.buffer().to_vec(),
        )
        .ok_or_else(|| {
            FrameSinkError::Surface(format!(
                "frame buffer does not hold {}x{} RGBA pixels",
                frame_size.width(),
                frame_size.height()
            ))
        })?;

        image.save_with_format(&self.path, ImageFormat::Png)?;

        Ok(())
    }
}
