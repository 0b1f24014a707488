pub mod png;
pub mod ppm;

use std::path::Path;

use crate::controllers::ports::frame_sink::{FrameSink, FrameSinkError};
use crate::presenters::file::png::PngFileSink;
use crate::presenters::file::ppm::PpmFileSink;

/// Picks a file sink from the extension of `path` (`ppm` or `png`,
/// case-insensitive).
pub fn file_sink_for_path(path: impl AsRef<Path>) -> Result<Box<dyn FrameSink>, FrameSinkError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "ppm" => Ok(Box::new(PpmFileSink::new(path))),
        "png" => Ok(Box::new(PngFileSink::new(path))),
        _ => Err(FrameSinkError::UnsupportedExtension(extension)),
    }
}
