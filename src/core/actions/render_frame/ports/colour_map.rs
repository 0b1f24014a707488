use crate::core::data::colour::Colour;

/// Maps an escape count to a colour. Must accept every count up to and
/// including the cap it was built for.
pub trait ColourMap: Send + Sync {
    fn map(&self, iterations: u32) -> Colour;

    fn display_name(&self) -> &str;
}
