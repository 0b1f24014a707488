use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::controllers::ports::frame_sink::{FrameSink, FrameSinkError};
use crate::core::data::frame_buffer::FrameBuffer;

/// Writes each presented frame as a binary (P6) PPM. Alpha is dropped.
#[derive(Debug, Clone)]
pub struct PpmFileSink {
    path: PathBuf,
}

impl PpmFileSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl FrameSink for PpmFileSink {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), FrameSinkError> {
        let mut file = BufWriter::new(File::create(&self.path)?);
        let frame_size = frame.frame_size();

        // P6 means binary RGB, followed by width, height and max colour value
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", frame_size.width(), frame_size.height())?;
        writeln!(file, "255")?;
        file.write_all(&frame.to_rgb())?;
        file.flush()?;

        Ok(())
    }
}
