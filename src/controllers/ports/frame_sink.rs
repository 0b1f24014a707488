use std::{error::Error, fmt, io};

use crate::core::data::frame_buffer::FrameBuffer;

/// Destination for completed frames: a file on disk or a window surface.
/// Only ever handed a frame after every row has been rendered.
pub trait FrameSink {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), FrameSinkError>;
}

impl FrameSink for Box<dyn FrameSink> {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), FrameSinkError> {
        self.as_mut().present(frame)
    }
}

#[derive(Debug)]
pub enum FrameSinkError {
    Io(io::Error),
    Image(image::ImageError),
    UnsupportedExtension(String),
    Surface(String),
}

impl fmt::Display for FrameSinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {}", err),
            Self::Image(err) => write!(f, "image encoding error: {}", err),
            Self::UnsupportedExtension(ext) => {
                write!(f, "unsupported output extension '{}', expected ppm or png", ext)
            }
            Self::Surface(message) => write!(f, "surface error: {}", message),
        }
    }
}

impl Error for FrameSinkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Image(err) => Some(err),
            Self::UnsupportedExtension(_) | Self::Surface(_) => None,
        }
    }
}

impl From<io::Error> for FrameSinkError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for FrameSinkError {
    fn from(err: image::ImageError) -> Self {
        Self::Image(err)
    }
}
