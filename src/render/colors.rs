//! Color definitions for shots, explosions and sides

use palette::Srgb;

use crate::core::types::Side;

/// Every strip cell holds one of these
pub type Rgb = Srgb<u8>;

/// Unlit cell
pub const OFF: Rgb = Srgb::new(0, 0, 0);

/// Bright core of an explosion flash
pub const EXPLOSION_CORE: Rgb = hex(0xff0000);

/// Dimmer ember phase of an explosion flash
pub const EXPLOSION_EMBER: Rgb = hex(0xffaa66);

/// Unpack a 0xRRGGBB value; bits above 24 are ignored
pub const fn hex(value: u32) -> Rgb {
    Srgb::new(
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    )
}

pub fn is_off(color: Rgb) -> bool {
    color == OFF
}

/// Victory color for a side
pub fn side_color(side: Side) -> Rgb {
    match side {
        Side::Red => hex(0xff0000),
        Side::Green => hex(0x00ff00),
    }
}
