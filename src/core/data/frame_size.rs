use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSizeError {
    ZeroDimension { width: u32, height: u32 },
}

impl fmt::Display for FrameSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "frame size {}x{} must be non-zero in both dimensions", width, height)
            }
        }
    }
}

impl Error for FrameSizeError {}

/// Dimensions of the viewport in pixels. Both dimensions are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    width: u32,
    height: u32,
}

impl FrameSize {
    /// 800x600, the viewer's startup window.
    pub const DEFAULT: Self = Self {
        width: 800,
        height: 600,
    };

    pub fn new(width: u32, height: u32) -> Result<Self, FrameSizeError> {
        if width == 0 || height == 0 {
            return Err(FrameSizeError::ZeroDimension { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn index(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.width as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_a_valid_frame() {
        assert_eq!(FrameSize::new(800, 600), Ok(FrameSize::DEFAULT));
        assert_eq!(FrameSize::DEFAULT.pixel_count(), 480_000);
    }

    #[test]
    fn test_rejects_zero_width() {
        assert_eq!(
            FrameSize::new(0, 10),
            Err(FrameSizeError::ZeroDimension {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_rejects_zero_height() {
        assert!(FrameSize::new(10, 0).is_err());
    }

    #[test]
    fn test_pixel_count_and_index() {
        let size = FrameSize::new(800, 600).unwrap();

        assert_eq!(size.pixel_count(), 480_000);
        assert_eq!(size.index(400, 300), 400 + 300 * 800);
    }
}
