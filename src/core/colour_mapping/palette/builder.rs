//! Expands a short list of anchor colours into one colour per iteration.

use std::f64::consts::PI;

use crate::core::colour_mapping::errors::PaletteError;
use crate::core::data::colour::Colour;

/// One colour per iteration count, `0..max_iterations`.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }
}

/// Normalised position of each stop: `(j + 1) / len`, truncated to two
/// decimal places.
pub(crate) fn stop_positions(stop_count: usize) -> Vec<f64> {
    (0..stop_count)
        .map(|j| {
            let ratio = (j + 1) as f64 / stop_count as f64;
            (ratio * 100.0).trunc() / 100.0
        })
        .collect()
}

/// Index `j` of the segment with `positions[j] <= u < positions[j + 1]`.
pub(crate) fn bracketing_segment(positions: &[f64], u: f64) -> Option<usize> {
    positions
        .windows(2)
        .position(|segment| u >= segment[0] && u < segment[1])
}

// high * (1 - mu2) + low * mu2, arranged so equal endpoints stay exact
fn cosine_interpolation(high: u8, low: u8, mu: f64) -> u8 {
    let mu2 = (1.0 - (mu * PI).cos()) / 2.0;
    let (high, low) = (high as f64, low as f64);
    (high + (low - high) * mu2) as u8
}

fn blend(high: Colour, low: Colour, mu: f64) -> Colour {
    Colour::opaque(
        cosine_interpolation(high.r, low.r, mu),
        cosine_interpolation(high.g, low.g, mu),
        cosine_interpolation(high.b, low.b, mu),
    )
}

/// Builds a palette of exactly `max_iterations` colours from `stops`.
///
/// Entry `i` sits at `u = i / max_iterations`. Inside the segment between
/// stops `j` and `j + 1`, channels are eased with a cosine weight from the
/// upper stop's value towards the lower stop's value. Positions before the
/// first stop take the first stop's colour.
pub fn build_palette(stops: &[Colour], max_iterations: u32) -> Result<Palette, PaletteError> {
    if stops.len() < 2 {
        return Err(PaletteError::TooFewStops { stops: stops.len() });
    }

    if max_iterations == 0 {
        return Err(PaletteError::ZeroMaxIterations);
    }

    let positions = stop_positions(stops.len());
    let size = max_iterations as f64;

    let colours = (0..max_iterations)
        .map(|i| {
            let u = i as f64 / size;

            match bracketing_segment(&positions, u) {
                Some(j) => {
                    let (low_bound, high_bound) = (positions[j], positions[j + 1]);
                    let mu = (u - low_bound) / (high_bound - low_bound);
                    blend(stops[j + 1], stops[j], mu)
                }
                None if u < positions[0] => stops[0],
                None => stops[stops.len() - 1],
            }
        })
        .collect();

    Ok(Palette { colours })
}
