use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::PaletteError;
use crate::core::colour_mapping::palette::builder::{Palette, build_palette};
use crate::core::colour_mapping::palette::curated::CURATED_STOPS;
use crate::core::data::colour::Colour;

/// `c1 * (1 - mu) + c2 * mu` over packed `0xRRGGBBAA` words, in wrapping
/// `u32` arithmetic.
///
/// The weight passed by [`PaletteGradient`] is the raw iteration count, not a
/// fraction in `[0, 1]`, so for counts above 1 this extrapolates and wraps.
/// The resulting colours are kept as they are.
#[inline]
#[must_use]
pub fn linear_interpolation(c1: u32, c2: u32, mu: u32) -> u32 {
    c1.wrapping_mul(1u32.wrapping_sub(mu))
        .wrapping_add(c2.wrapping_mul(mu))
}

/// Colours a count by blending palette entries `n` and `n + 1`. Counts in the
/// last palette slot or beyond are black.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteGradient {
    palette: Palette,
}

impl ColourMap for PaletteGradient {
    fn map(&self, iterations: u32) -> Colour {
        let n = iterations as usize;

        let len = self.palette.colours().len();
        if len < 2 || n >= len - 1 {
            return Colour::BLACK;
        }

        match (self.palette.get(n), self.palette.get(n + 1)) {
            (Some(c1), Some(c2)) => Colour::from_packed(linear_interpolation(
                c1.to_packed(),
                c2.to_packed(),
                iterations,
            )),
            _ => Colour::BLACK,
        }
    }

    fn display_name(&self) -> &str {
        "Palette gradient"
    }
}

impl PaletteGradient {
    /// Expands the curated stops into a palette with one entry per iteration.
    pub fn new(max_iterations: u32) -> Result<Self, PaletteError> {
        Ok(Self::from_palette(build_palette(&CURATED_STOPS, max_iterations)?))
    }

    #[must_use]
    pub fn from_palette(palette: Palette) -> Self {
        Self { palette }
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_interpolation_endpoints() {
        assert_eq!(linear_interpolation(0x1020_30ff, 0x4050_60ff, 0), 0x1020_30ff);
        assert_eq!(linear_interpolation(0x1020_30ff, 0x4050_60ff, 1), 0x4050_60ff);
    }

    #[test]
    fn test_linear_interpolation_raw_weight_extrapolates() {
        // weight 2 gives 2 * c2 - c1, not a blend
        assert_eq!(linear_interpolation(10, 30, 2), 50);
        // and wraps below zero when c1 dominates
        assert_eq!(linear_interpolation(30, 10, 2), 10u32.wrapping_mul(2).wrapping_sub(30));
    }

    #[test]
    fn test_count_zero_uses_first_entry() {
        let mapper = PaletteGradient::new(300).unwrap();

        assert_eq!(mapper.map(0), mapper.palette().get(0).unwrap());
    }

    #[test]
    fn test_count_one_uses_entry_two_because_weight_is_raw_count() {
        // with weight 1 the blend of entries 1 and 2 is entry 2 itself
        let mapper = PaletteGradient::new(300).unwrap();

        assert_eq!(mapper.map(1), mapper.palette().get(2).unwrap());
    }

    #[test]
    fn test_larger_counts_follow_packed_wrapping_formula() {
        let mapper = PaletteGradient::new(300).unwrap();
        let palette = mapper.palette();

        for n in [2u32, 17, 100, 297] {
            let c1 = palette.get(n as usize).unwrap().to_packed();
            let c2 = palette.get(n as usize + 1).unwrap().to_packed();

            assert_eq!(
                mapper.map(n),
                Colour::from_packed(linear_interpolation(c1, c2, n))
            );
        }
    }

    #[test]
    fn test_last_slot_and_bounded_points_are_black() {
        let mapper = PaletteGradient::new(300).unwrap();

        assert_eq!(mapper.map(299), Colour::BLACK);
        assert_eq!(mapper.map(300), Colour::BLACK);
        assert_eq!(mapper.map(u32::MAX), Colour::BLACK);
    }

    #[test]
    fn test_single_entry_palette_is_all_black() {
        let mapper = PaletteGradient::new(1).unwrap();

        assert_eq!(mapper.map(0), Colour::BLACK);
        assert_eq!(mapper.map(1), Colour::BLACK);
    }

    #[test]
    fn test_alpha_is_always_opaque() {
        let mapper = PaletteGradient::new(64).unwrap();

        assert!((0..=64).all(|n| mapper.map(n).a == 0xff));
    }

    #[test]
    fn test_rejects_zero_cap() {
        assert_eq!(PaletteGradient::new(0), Err(PaletteError::ZeroMaxIterations));
    }
}
