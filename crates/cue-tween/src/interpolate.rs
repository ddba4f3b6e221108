//! Interpolation system for tweenable values.
//!
//! This module provides the `Interpolate` trait and implementations for all
//! tweenable value types. Interpolation is the core mechanism that produces
//! the in-between values of a running tween.
//!
//! # Color Space Handling
//!
//! Color interpolation is done per-component in linear RGB space for
//! perceptually smooth blends. The colors stored in `StyleValue::Color` are
//! expected to be in linear format (see the `color` module for sRGB
//! conversions).

use super::types::StyleValue;

/// Trait for types that can be interpolated between two values.
///
/// # Arguments
/// * `to` - Target value to interpolate towards
/// * `t` - Interpolation factor (0.0 = self, 1.0 = to)
///
/// # Returns
/// Interpolated value between self and to at factor t.
pub trait Interpolate: Sized {
    /// Interpolate between self and another value.
    ///
    /// When t = 0.0, returns self.
    /// When t = 1.0, returns to.
    /// Values between 0.0 and 1.0 return intermediate values; values outside
    /// that range extrapolate (overshooting easings rely on this).
    fn interpolate(&self, to: &Self, t: f32) -> Self;
}

/// Linear interpolation helper for f64 values.
#[inline]
fn lerp_f64(from: f64, to: f64, t: f32) -> f64 {
    from + (to - from) * t as f64
}

/// Linear interpolation helper for f32 values.
#[inline]
fn lerp_f32(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

impl Interpolate for f64 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        lerp_f64(*self, *to, t)
    }
}

impl Interpolate for f32 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        lerp_f32(*self, *to, t)
    }
}

impl Interpolate for [f32; 4] {
    /// Interpolate RGBA color values.
    ///
    /// Interpolation is done per-component in linear RGB space.
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        [
            lerp_f32(self[0], to[0], t),
            lerp_f32(self[1], to[1], t),
            lerp_f32(self[2], to[2], t),
            lerp_f32(self[3], to[3], t),
        ]
    }
}

impl Interpolate for StyleValue {
    /// Interpolate style values of matching kinds.
    ///
    /// Mismatched kinds cannot blend; they switch discretely at the midpoint.
    /// The engine rejects mismatched requests up front, so this path only
    /// covers values constructed by hand.
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        match (self, to) {
            (Self::F64 { value: a }, Self::F64 { value: b }) => Self::F64 {
                value: a.interpolate(b, t),
            },
            (Self::Color { rgba: a }, Self::Color { rgba: b }) => Self::Color {
                rgba: a.interpolate(b, t),
            },
            _ => {
                if t < 0.5 {
                    self.clone()
                } else {
                    to.clone()
                }
            }
        }
    }
}
