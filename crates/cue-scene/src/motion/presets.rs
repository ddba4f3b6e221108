//! Entrance and interaction presets.
//!
//! The property sets and timings behind each named intent. Entrances pair a
//! hidden/offset initial state with a visible/identity final state; hover
//! presets are single "to" sets applied on enter and reversed on leave.

use serde::{Deserialize, Serialize};

use cue_tween::{EasingFunction, PropertySet, StyleProperty, TweenSpec};

/// Default entrance duration.
pub const ENTRANCE_DURATION_MS: f32 = 800.0;
/// Scale-in runs a touch longer so the overshoot reads.
pub const SCALE_IN_DURATION_MS: f32 = 1000.0;
/// Default stagger between grouped targets.
pub const GROUP_STAGGER_MS: f32 = 200.0;
/// How far fade-up entrances rise, in pixels.
pub const RISE_PX: f64 = 50.0;
/// Grouped fade-ups rise a little less.
pub const GROUP_RISE_PX: f64 = 40.0;
/// How far side entrances slide, in pixels.
pub const SLIDE_PX: f64 = 50.0;
/// Initial scale for scale-in entrances.
pub const SCALE_FROM: f64 = 0.9;
/// Default scroll-gate activation line (fraction of viewport height).
pub const GATE_THRESHOLD: f32 = 0.8;

/// Duration of hover feedback tweens.
pub const HOVER_DURATION_MS: f32 = 200.0;
/// Duration of the card lift tween.
pub const LIFT_DURATION_MS: f32 = 300.0;
/// How far cards lift on hover, in pixels.
pub const LIFT_PX: f64 = 10.0;

/// The named entrance intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntranceKind {
    /// Rise from below while fading in.
    FadeUp,
    /// Slide in from the left while fading in.
    FadeLeft,
    /// Slide in from the right while fading in.
    FadeRight,
    /// Grow from slightly shrunken while fading in, with overshoot.
    ScaleIn,
}

impl EntranceKind {
    /// The hidden/offset initial state and visible/identity final state for
    /// this entrance.
    pub fn property_sets(&self) -> (PropertySet, PropertySet) {
        match self {
            Self::FadeUp => (
                PropertySet::new()
                    .with(StyleProperty::Opacity, 0.0)
                    .with(StyleProperty::TranslateY, RISE_PX),
                PropertySet::new()
                    .with(StyleProperty::Opacity, 1.0)
                    .with(StyleProperty::TranslateY, 0.0),
            ),
            Self::FadeLeft => (
                PropertySet::new()
                    .with(StyleProperty::Opacity, 0.0)
                    .with(StyleProperty::TranslateX, -SLIDE_PX),
                PropertySet::new()
                    .with(StyleProperty::Opacity, 1.0)
                    .with(StyleProperty::TranslateX, 0.0),
            ),
            Self::FadeRight => (
                PropertySet::new()
                    .with(StyleProperty::Opacity, 0.0)
                    .with(StyleProperty::TranslateX, SLIDE_PX),
                PropertySet::new()
                    .with(StyleProperty::Opacity, 1.0)
                    .with(StyleProperty::TranslateX, 0.0),
            ),
            Self::ScaleIn => (
                PropertySet::new()
                    .with(StyleProperty::Opacity, 0.0)
                    .with(StyleProperty::Scale, SCALE_FROM),
                PropertySet::new()
                    .with(StyleProperty::Opacity, 1.0)
                    .with(StyleProperty::Scale, 1.0),
            ),
        }
    }

    /// Default timing for this entrance.
    pub fn spec(&self) -> TweenSpec {
        match self {
            Self::ScaleIn => TweenSpec::new(SCALE_IN_DURATION_MS)
                .with_easing(EasingFunction::back_out(1.7)),
            _ => TweenSpec::new(ENTRANCE_DURATION_MS)
                .with_easing(EasingFunction::power_out(3.0)),
        }
    }

    /// Variant of the sets for grouped (staggered) targets.
    ///
    /// Grouped fade-ups rise from a shallower offset; other kinds are
    /// unchanged.
    pub fn group_property_sets(&self) -> (PropertySet, PropertySet) {
        match self {
            Self::FadeUp => (
                PropertySet::new()
                    .with(StyleProperty::Opacity, 0.0)
                    .with(StyleProperty::TranslateY, GROUP_RISE_PX),
                PropertySet::new()
                    .with(StyleProperty::Opacity, 1.0)
                    .with(StyleProperty::TranslateY, 0.0),
            ),
            _ => self.property_sets(),
        }
    }
}

/// Hover feedback: the enter and leave property sets plus timing.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverPreset {
    /// Properties tweened to on pointer enter.
    pub enter: PropertySet,
    /// Properties tweened to on pointer leave.
    pub leave: PropertySet,
    /// Timing for both directions.
    pub spec: TweenSpec,
}

/// Button hover: grow slightly, snap back on leave.
pub fn button_hover() -> HoverPreset {
    HoverPreset {
        enter: PropertySet::new().with(StyleProperty::Scale, 1.05),
        leave: PropertySet::new().with(StyleProperty::Scale, 1.0),
        spec: TweenSpec::new(HOVER_DURATION_MS).with_easing(EasingFunction::power_out(2.0)),
    }
}

/// Card hover: lift and grow slightly, settle back on leave.
pub fn card_lift() -> HoverPreset {
    HoverPreset {
        enter: PropertySet::new()
            .with(StyleProperty::TranslateY, -LIFT_PX)
            .with(StyleProperty::Scale, 1.02),
        leave: PropertySet::new()
            .with(StyleProperty::TranslateY, 0.0)
            .with(StyleProperty::Scale, 1.0),
        spec: TweenSpec::new(LIFT_DURATION_MS).with_easing(EasingFunction::power_out(2.0)),
    }
}
