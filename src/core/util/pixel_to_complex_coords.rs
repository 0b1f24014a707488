use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::viewport::Viewport;

/// Stretch applied to the real axis so the classic silhouette fills a 4:3 frame.
pub const REAL_AXIS_STRETCH: f64 = 1.5;

/// Imaginary coordinate shared by every pixel of row `y`.
#[must_use]
pub fn row_to_imag(y: u32, frame_size: FrameSize, viewport: &Viewport) -> f64 {
    let height = frame_size.height() as f64;

    ((y as f64 - height / 2.0) / (0.5 * viewport.zoom() * height)) + viewport.pan_y()
}

/// Real coordinate of column `x`.
#[must_use]
pub fn column_to_real(x: u32, frame_size: FrameSize, viewport: &Viewport) -> f64 {
    let width = frame_size.width() as f64;

    (REAL_AXIS_STRETCH * (x as f64 - width / 2.0) / (0.5 * viewport.zoom() * width))
        + viewport.pan_x()
}

#[must_use]
pub fn pixel_to_complex_coords(x: u32, y: u32, frame_size: FrameSize, viewport: &Viewport) -> Complex {
    Complex::new(
        column_to_real(x, frame_size, viewport),
        row_to_imag(y, frame_size, viewport),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_800x600() -> FrameSize {
        FrameSize::new(800, 600).unwrap()
    }

    #[test]
    fn test_centre_pixel_maps_to_pan() {
        let viewport = Viewport::new(0.25, -0.5, 3.0);
        let c = pixel_to_complex_coords(400, 300, frame_800x600(), &viewport);

        assert_eq!(c, Complex::new(0.25, -0.5));
    }

    #[test]
    fn test_top_left_at_unit_zoom() {
        let c = pixel_to_complex_coords(0, 0, frame_800x600(), &Viewport::default());

        assert_eq!(c.real, -1.5);
        assert_eq!(c.imag, -1.0);
    }

    #[test]
    fn test_real_axis_is_stretched_relative_to_imag() {
        let size = FrameSize::new(100, 100).unwrap();
        let viewport = Viewport::default();

        assert_eq!(column_to_real(100, size, &viewport), 1.5);
        assert_eq!(row_to_imag(100, size, &viewport), 1.0);
    }

    #[test]
    fn test_zoom_shrinks_extent() {
        let viewport = Viewport::new(0.0, 0.0, 2.0);

        assert_eq!(row_to_imag(0, frame_800x600(), &viewport), -0.5);
        assert_eq!(column_to_real(0, frame_800x600(), &viewport), -0.75);
    }
}
