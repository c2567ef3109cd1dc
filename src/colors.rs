//! Color conversion helpers.
//!
//! Strips store 8-bit channels, but animations are easier to write in floating
//! point or HSV. These helpers bridge `palette` colors to the byte values
//! [`Strip::set_pixel`](crate::Strip::set_pixel) expects.

use palette::{FromColor, Hsv, Srgb};

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgb {
    let hsv = Hsv::new(hue, saturation, value);
    Srgb::from_color(hsv)
}

/// Creates an RGB color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Srgb {
    hsv(hue, 1.0, 1.0)
}

/// Converts a 0.0-1.0 color to 8-bit `[r, g, b]`, clamping out-of-range components.
#[inline]
pub fn to_rgb8(color: Srgb) -> [u8; 3] {
    let color: Srgb<u8> = color.into_format();
    [color.red, color.green, color.blue]
}
