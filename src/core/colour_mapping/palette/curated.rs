use crate::core::data::colour::Colour;

/// Sixteen anchor colours running from near-black through green, ochre and
/// lilac to near-white.
pub const CURATED_STOPS: [Colour; 16] = [
    Colour::opaque(0x00, 0x04, 0x0f),
    Colour::opaque(0x03, 0x26, 0x28),
    Colour::opaque(0x07, 0x3e, 0x1e),
    Colour::opaque(0x18, 0x55, 0x08),
    Colour::opaque(0x5f, 0x6e, 0x0f),
    Colour::opaque(0x84, 0x50, 0x19),
    Colour::opaque(0x9b, 0x30, 0x22),
    Colour::opaque(0xb4, 0x92, 0x2f),
    Colour::opaque(0x94, 0xca, 0x3d),
    Colour::opaque(0x4f, 0xd5, 0x51),
    Colour::opaque(0x66, 0xff, 0xb3),
    Colour::opaque(0x82, 0xc9, 0xe5),
    Colour::opaque(0x9d, 0xa3, 0xeb),
    Colour::opaque(0xd7, 0xb5, 0xf3),
    Colour::opaque(0xfd, 0xd6, 0xf6),
    Colour::opaque(0xff, 0xf0, 0xf2),
];
