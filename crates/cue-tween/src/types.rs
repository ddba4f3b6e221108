//! Core tween types and data structures.
//!
//! This module defines the fundamental types for the tween engine:
//! - `StyleValue`: Enum for all tweenable property values
//! - `StyleProperty`: Enum naming the style properties a tween can drive
//! - `PropertySet`: A bag of property/value pairs (the from/to halves of a request)
//! - `TweenId`: Unique identifier for tweens
//! - `PlaybackState`: Current state of a tween

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a tween instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TweenId(pub u64);

impl TweenId {
    /// Generate a new unique tween ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for TweenId {
    fn default() -> Self {
        Self::new()
    }
}

/// Current state of a tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// Tween has been created but not yet started (waiting for delay).
    Pending,
    /// Tween is actively running.
    Running,
    /// Tween has been paused.
    Paused,
    /// Tween has completed normally.
    Finished,
    /// Tween was cancelled before completion.
    Cancelled,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Pending
    }
}

/// Enum naming the style properties a tween can drive.
///
/// These correspond to fields on an element's computed style. Transform
/// components are individual scalars; rotations are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleProperty {
    // Visual properties
    Opacity,

    // Transform properties (individual)
    TranslateX,
    TranslateY,
    /// Uniform scale on both axes.
    Scale,
    ScaleX,
    Rotate,
    RotateX,
    RotateY,

    // Color properties
    TextColor,
    BorderColor,
    BackgroundColor,
}

impl StyleProperty {
    /// Returns the expected value kind for this property.
    pub fn value_kind(&self) -> StyleValueKind {
        match self {
            Self::Opacity
            | Self::TranslateX
            | Self::TranslateY
            | Self::Scale
            | Self::ScaleX
            | Self::Rotate
            | Self::RotateX
            | Self::RotateY => StyleValueKind::Scalar,
            Self::TextColor | Self::BorderColor | Self::BackgroundColor => StyleValueKind::Color,
        }
    }

    /// The resting value of this property for an element that is fully
    /// visible and untransformed.
    ///
    /// Color properties have no universal resting value and return `None`.
    pub fn identity_value(&self) -> Option<StyleValue> {
        match self {
            Self::Opacity | Self::Scale | Self::ScaleX => Some(StyleValue::from(1.0)),
            Self::TranslateX | Self::TranslateY | Self::Rotate | Self::RotateX | Self::RotateY => {
                Some(StyleValue::from(0.0))
            }
            Self::TextColor | Self::BorderColor | Self::BackgroundColor => None,
        }
    }
}

/// Expected value kind for a style property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleValueKind {
    Scalar,
    Color,
}

/// Enum representing all tweenable value types.
///
/// This enum wraps the different types of values that can be tweened,
/// allowing the engine to handle them uniformly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StyleValue {
    /// Numeric value (opacity, translation, scale, rotation in degrees).
    F64 { value: f64 },
    /// RGBA color value in linear space.
    Color { rgba: [f32; 4] },
}

impl StyleValue {
    /// Try to extract an f64 value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64 { value } => Some(*value),
            _ => None,
        }
    }

    /// Try to extract a color value.
    pub fn as_color(&self) -> Option<[f32; 4]> {
        match self {
            Self::Color { rgba } => Some(*rgba),
            _ => None,
        }
    }

    /// The kind of this value.
    pub fn kind(&self) -> StyleValueKind {
        match self {
            Self::F64 { .. } => StyleValueKind::Scalar,
            Self::Color { .. } => StyleValueKind::Color,
        }
    }

    /// Whether every component of this value is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            Self::F64 { value } => value.is_finite(),
            Self::Color { rgba } => rgba.iter().all(|c| c.is_finite()),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        Self::F64 { value: v }
    }
}

impl From<[f32; 4]> for StyleValue {
    fn from(c: [f32; 4]) -> Self {
        Self::Color { rgba: c }
    }
}

/// A set of property/value pairs.
///
/// Used for the initial ("from") and final ("to") halves of a tween request,
/// for hover/leave property sets, and as the snapshot format when reading
/// current values back from a style sink.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySet {
    /// Property values in this set.
    pub values: HashMap<StyleProperty, StyleValue>,
}

impl PropertySet {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    pub fn with(mut self, property: StyleProperty, value: impl Into<StyleValue>) -> Self {
        self.values.insert(property, value.into());
        self
    }

    /// Set a property value.
    pub fn set(&mut self, property: StyleProperty, value: impl Into<StyleValue>) {
        self.values.insert(property, value.into());
    }

    /// Get a property value.
    pub fn get(&self, property: StyleProperty) -> Option<&StyleValue> {
        self.values.get(&property)
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the number of properties in the set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterate over all property/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&StyleProperty, &StyleValue)> {
        self.values.iter()
    }
}
