/// An 8-bit-per-channel RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Packs the channels into a single word laid out as `0xRRGGBBAA`.
    #[must_use]
    pub const fn to_packed(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    /// Unpacks a `0xRRGGBBAA` word. The alpha byte of the word is ignored and
    /// the result is always opaque.
    #[must_use]
    pub const fn from_packed(packed: u32) -> Self {
        Self::opaque(
            (packed >> 24 & 0xff) as u8,
            (packed >> 16 & 0xff) as u8,
            (packed >> 8 & 0xff) as u8,
        )
    }
}
