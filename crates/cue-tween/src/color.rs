//! sRGB → linear color conversions for tweened colors.
//!
//! Style colors are authored as CSS-like sRGB bytes but interpolated in
//! linear space, so the conversions live here, next to the value types.

use palette::{FromColor, LinSrgba, Srgba};

/// Convert sRGB u8 RGBA components to a linear RGBA array.
#[inline]
pub fn from_srgba_u8(r: u8, g: u8, b: u8, a: u8) -> [f32; 4] {
    let s = Srgba::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    );
    let lin: LinSrgba = LinSrgba::from_color(s);
    [lin.red, lin.green, lin.blue, lin.alpha]
}

/// Convert sRGB u8 RGB with float alpha (CSS-like rgba) to linear RGBA.
#[inline]
pub fn from_srgba(r: u8, g: u8, b: u8, a: f32) -> [f32; 4] {
    let s = Srgba::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a);
    let lin: LinSrgba = LinSrgba::from_color(s);
    [lin.red, lin.green, lin.blue, lin.alpha]
}

/// Convert a linear RGBA array back to sRGB u8 components.
#[inline]
pub fn to_srgba_u8(c: [f32; 4]) -> [u8; 4] {
    let lin = LinSrgba::new(c[0], c[1], c[2], c[3]);
    let srgb: Srgba = Srgba::from_color(lin);

    [
        (srgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
        (srgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
        (srgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
        (srgb.alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_white_round_trip() {
        assert_eq!(to_srgba_u8(from_srgba_u8(0, 0, 0, 255)), [0, 0, 0, 255]);
        assert_eq!(
            to_srgba_u8(from_srgba_u8(255, 255, 255, 255)),
            [255, 255, 255, 255]
        );
    }

    #[test]
    fn test_linearization_darkens_midtones() {
        // sRGB 128 maps to roughly 0.215 in linear space
        let lin = from_srgba_u8(128, 128, 128, 255);
        assert!(lin[0] > 0.18 && lin[0] < 0.25, "got {}", lin[0]);
    }

    #[test]
    fn test_alpha_passes_through() {
        let lin = from_srgba(96, 165, 250, 0.5);
        assert!((lin[3] - 0.5).abs() < 1e-6);
    }
}
