//! Computed styles for stage elements.
//!
//! A `ComputedStyle` holds the small set of visual properties the motion
//! layer drives: opacity, 2D/3D transform components, and two tweenable
//! colors. Opacity is optional so "never styled" is distinguishable from
//! "explicitly visible" — stylesheet-hidden entrance targets start out unset.

use serde::{Deserialize, Serialize};

use cue_tween::{StyleProperty, StyleValue};

/// Visual style state of one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputedStyle {
    /// Element opacity; `None` means never set.
    pub opacity: Option<f64>,
    /// Horizontal translation in pixels.
    pub translate_x: f64,
    /// Vertical translation in pixels.
    pub translate_y: f64,
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
    /// In-plane rotation in degrees.
    pub rotate: f64,
    /// Rotation around the X axis in degrees (3D tilt).
    pub rotate_x: f64,
    /// Rotation around the Y axis in degrees (3D tilt).
    pub rotate_y: f64,
    /// Text color in linear RGBA; `None` means never set.
    pub text_color: Option<[f32; 4]>,
    /// Border color in linear RGBA; `None` means never set.
    pub border_color: Option<[f32; 4]>,
    /// Background color in linear RGBA; `None` means never set.
    pub background_color: Option<[f32; 4]>,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            opacity: None,
            translate_x: 0.0,
            translate_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotate: 0.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
            text_color: None,
            border_color: None,
            background_color: None,
        }
    }
}

impl ComputedStyle {
    /// Apply a resolved tween value to this style.
    ///
    /// `Scale` drives both axes; `ScaleX` only the horizontal one.
    pub fn apply(&mut self, property: StyleProperty, value: &StyleValue) {
        match (property, value) {
            (StyleProperty::Opacity, StyleValue::F64 { value }) => self.opacity = Some(*value),
            (StyleProperty::TranslateX, StyleValue::F64 { value }) => self.translate_x = *value,
            (StyleProperty::TranslateY, StyleValue::F64 { value }) => self.translate_y = *value,
            (StyleProperty::Scale, StyleValue::F64 { value }) => {
                self.scale_x = *value;
                self.scale_y = *value;
            }
            (StyleProperty::ScaleX, StyleValue::F64 { value }) => self.scale_x = *value,
            (StyleProperty::Rotate, StyleValue::F64 { value }) => self.rotate = *value,
            (StyleProperty::RotateX, StyleValue::F64 { value }) => self.rotate_x = *value,
            (StyleProperty::RotateY, StyleValue::F64 { value }) => self.rotate_y = *value,
            (StyleProperty::TextColor, StyleValue::Color { rgba }) => {
                self.text_color = Some(*rgba)
            }
            (StyleProperty::BorderColor, StyleValue::Color { rgba }) => {
                self.border_color = Some(*rgba)
            }
            (StyleProperty::BackgroundColor, StyleValue::Color { rgba }) => {
                self.background_color = Some(*rgba)
            }
            // Kind mismatches are rejected at submission; ignore here.
            _ => {}
        }
    }

    /// Read the current value of a property, if it has one.
    pub fn get(&self, property: StyleProperty) -> Option<StyleValue> {
        match property {
            StyleProperty::Opacity => self.opacity.map(StyleValue::from),
            StyleProperty::TranslateX => Some(StyleValue::from(self.translate_x)),
            StyleProperty::TranslateY => Some(StyleValue::from(self.translate_y)),
            StyleProperty::Scale | StyleProperty::ScaleX => Some(StyleValue::from(self.scale_x)),
            StyleProperty::Rotate => Some(StyleValue::from(self.rotate)),
            StyleProperty::RotateX => Some(StyleValue::from(self.rotate_x)),
            StyleProperty::RotateY => Some(StyleValue::from(self.rotate_y)),
            StyleProperty::TextColor => self.text_color.map(StyleValue::from),
            StyleProperty::BorderColor => self.border_color.map(StyleValue::from),
            StyleProperty::BackgroundColor => self.background_color.map(StyleValue::from),
        }
    }

    /// Whether this element is currently hidden.
    ///
    /// Unset opacity counts as hidden: entrance targets are hidden by the
    /// stylesheet until something writes an opacity.
    pub fn is_hidden(&self) -> bool {
        match self.opacity {
            None => true,
            Some(v) => v <= 0.0,
        }
    }

    /// Effective opacity, treating unset as fully transparent.
    pub fn effective_opacity(&self) -> f64 {
        self.opacity.unwrap_or(0.0)
    }

    /// Whether all transform components are at rest.
    pub fn has_identity_transform(&self) -> bool {
        self.translate_x == 0.0
            && self.translate_y == 0.0
            && self.scale_x == 1.0
            && self.scale_y == 1.0
            && self.rotate == 0.0
            && self.rotate_x == 0.0
            && self.rotate_y == 0.0
    }

    /// Reset every transform component to its resting value.
    pub fn reset_transform(&mut self) {
        self.translate_x = 0.0;
        self.translate_y = 0.0;
        self.scale_x = 1.0;
        self.scale_y = 1.0;
        self.rotate = 0.0;
        self.rotate_x = 0.0;
        self.rotate_y = 0.0;
    }
}
