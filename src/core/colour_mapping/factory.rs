use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::PaletteError;
use crate::core::colour_mapping::kinds::ColourStrategyKind;
use crate::core::colour_mapping::maps::direct_linear::DirectLinear;
use crate::core::colour_mapping::maps::palette_gradient::PaletteGradient;

pub fn colour_map_factory(
    kind: ColourStrategyKind,
    max_iterations: u32,
) -> Result<Box<dyn ColourMap>, PaletteError> {
    if max_iterations == 0 {
        return Err(PaletteError::ZeroMaxIterations);
    }

    Ok(match kind {
        ColourStrategyKind::Direct => Box::new(DirectLinear::new(max_iterations)),
        ColourStrategyKind::Palette => Box::new(PaletteGradient::new(max_iterations)?),
    })
}
