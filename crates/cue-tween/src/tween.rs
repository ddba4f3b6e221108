//! Property tweens.
//!
//! This module provides:
//! - `TweenSpec`: Timing configuration for a tween (duration, delay, easing)
//! - `TweenRequest`: A submission payload (targets + from/to property sets)
//! - `ActiveTween`: Runtime state for one in-flight (target, property) tween
//!
//! # Example
//!
//! ```
//! use cue_tween::easing::EasingFunction;
//! use cue_tween::tween::{TweenRequest, TweenSpec};
//! use cue_tween::types::{PropertySet, StyleProperty};
//!
//! // Fade #hero-title in from 50px below over 800ms
//! let request = TweenRequest::from_to(
//!     vec!["hero-title".to_string()],
//!     PropertySet::new()
//!         .with(StyleProperty::Opacity, 0.0)
//!         .with(StyleProperty::TranslateY, 50.0),
//!     PropertySet::new()
//!         .with(StyleProperty::Opacity, 1.0)
//!         .with(StyleProperty::TranslateY, 0.0),
//!     TweenSpec::new(800.0).with_easing(EasingFunction::power_out(3.0)),
//! );
//! assert_eq!(request.targets.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use super::easing::EasingFunction;
use super::interpolate::Interpolate;
use super::scroll::ScrollGate;
use super::types::{PlaybackState, PropertySet, StyleProperty, StyleValue, TweenId};

/// Timing specification for a tween.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweenSpec {
    /// Duration of the tween in milliseconds.
    pub duration_ms: f32,
    /// Delay before the tween starts in milliseconds.
    pub delay_ms: f32,
    /// Easing function for the tween timing.
    pub easing: EasingFunction,
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self {
            duration_ms: 300.0,
            delay_ms: 0.0,
            easing: EasingFunction::Ease,
        }
    }
}

impl TweenSpec {
    /// Create a new spec with the given duration.
    pub fn new(duration_ms: f32) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }

    /// Set the delay for this spec.
    pub fn with_delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set the easing function for this spec.
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Return a copy with negative timing values clamped to zero.
    pub fn clamped(&self) -> Self {
        Self {
            duration_ms: self.duration_ms.max(0.0),
            delay_ms: self.delay_ms.max(0.0),
            easing: self.easing,
        }
    }
}

/// A tween submission payload.
///
/// One request covers any number of targets and properties; the engine fans
/// it out into per-(target, property) tweens, spacing successive targets by
/// `stagger_ms`. A request with a `gate` is held until its scroll condition
/// activates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweenRequest {
    /// Element ids this request animates.
    pub targets: Vec<String>,
    /// Initial property values, applied immediately on submission.
    ///
    /// When `None`, each property starts from its current value (in-flight
    /// tween, last resolved value, or the property's resting value).
    pub from: Option<PropertySet>,
    /// Final property values.
    pub to: PropertySet,
    /// Timing for each spawned tween.
    pub spec: TweenSpec,
    /// Extra delay applied per successive target.
    pub stagger_ms: f32,
    /// Optional scroll condition gating execution.
    pub gate: Option<ScrollGate>,
}

impl TweenRequest {
    /// Create a request with explicit initial and final states.
    pub fn from_to(
        targets: Vec<String>,
        from: PropertySet,
        to: PropertySet,
        spec: TweenSpec,
    ) -> Self {
        Self {
            targets,
            from: Some(from),
            to,
            spec,
            stagger_ms: 0.0,
            gate: None,
        }
    }

    /// Create a request animating from current values to a final state.
    pub fn to(targets: Vec<String>, to: PropertySet, spec: TweenSpec) -> Self {
        Self {
            targets,
            from: None,
            to,
            spec,
            stagger_ms: 0.0,
            gate: None,
        }
    }

    /// Set the per-target stagger interval.
    pub fn with_stagger(mut self, stagger_ms: f32) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    /// Gate this request on a scroll condition.
    pub fn with_gate(mut self, gate: ScrollGate) -> Self {
        self.gate = Some(gate);
        self
    }

    /// The set of properties this request drives.
    pub fn properties(&self) -> impl Iterator<Item = StyleProperty> + '_ {
        self.to.iter().map(|(p, _)| *p)
    }
}

/// An active tween that is currently in progress.
///
/// Tracks the runtime state of one (target, property) pair, including
/// elapsed time and the values being interpolated between.
#[derive(Debug, Clone)]
pub struct ActiveTween {
    /// Unique identifier for this tween.
    pub id: TweenId,
    /// The element id this tween applies to.
    pub target: String,
    /// The property being tweened.
    pub property: StyleProperty,
    /// Starting value.
    pub from_value: StyleValue,
    /// Final value.
    pub to_value: StyleValue,
    /// Total duration in milliseconds.
    pub duration_ms: f32,
    /// Delay before the tween starts in milliseconds.
    pub delay_ms: f32,
    /// Time elapsed since the tween was created in milliseconds.
    pub elapsed_ms: f32,
    /// Easing function for timing.
    pub easing: EasingFunction,
    /// Current state of the tween.
    pub state: PlaybackState,
}

impl ActiveTween {
    /// Create a new active tween.
    pub fn new(
        target: String,
        property: StyleProperty,
        from_value: StyleValue,
        to_value: StyleValue,
        spec: &TweenSpec,
    ) -> Self {
        Self {
            id: TweenId::new(),
            target,
            property,
            from_value,
            to_value,
            duration_ms: spec.duration_ms,
            delay_ms: spec.delay_ms,
            elapsed_ms: 0.0,
            easing: spec.easing,
            state: if spec.delay_ms > 0.0 {
                PlaybackState::Pending
            } else {
                PlaybackState::Running
            },
        }
    }

    /// Get the current interpolated value of the tween.
    pub fn current_value(&self) -> StyleValue {
        match self.state {
            PlaybackState::Pending => self.from_value.clone(),
            PlaybackState::Finished => self.to_value.clone(),
            PlaybackState::Cancelled => self.from_value.clone(),
            PlaybackState::Running | PlaybackState::Paused => {
                let active_elapsed = (self.elapsed_ms - self.delay_ms).max(0.0);
                let progress = if self.duration_ms > 0.0 {
                    (active_elapsed / self.duration_ms).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                let eased_progress = self.easing.evaluate(progress);
                self.from_value.interpolate(&self.to_value, eased_progress)
            }
        }
    }

    /// Update the tween by advancing time.
    ///
    /// Returns `true` if the tween is still active (running or pending),
    /// `false` if it has finished or was cancelled.
    pub fn update(&mut self, delta_ms: f32) -> bool {
        match self.state {
            PlaybackState::Finished | PlaybackState::Cancelled => false,
            PlaybackState::Paused => true,
            PlaybackState::Pending => {
                self.elapsed_ms += delta_ms;
                if self.elapsed_ms >= self.delay_ms {
                    self.state = PlaybackState::Running;
                }
                true
            }
            PlaybackState::Running => {
                self.elapsed_ms += delta_ms;
                let active_elapsed = self.elapsed_ms - self.delay_ms;
                if active_elapsed >= self.duration_ms {
                    self.state = PlaybackState::Finished;
                    false
                } else {
                    true
                }
            }
        }
    }

    /// Pause the tween.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Running || self.state == PlaybackState::Pending {
            self.state = PlaybackState::Paused;
        }
    }

    /// Resume a paused tween.
    pub fn resume(&mut self) {
        if self.state == PlaybackState::Paused {
            if self.elapsed_ms < self.delay_ms {
                self.state = PlaybackState::Pending;
            } else {
                self.state = PlaybackState::Running;
            }
        }
    }

    /// Cancel the tween.
    pub fn cancel(&mut self) {
        self.state = PlaybackState::Cancelled;
    }

    /// Check if this tween is still active.
    pub fn is_active(&self) -> bool {
        matches!(
            self.state,
            PlaybackState::Pending | PlaybackState::Running | PlaybackState::Paused
        )
    }

    /// Check if this tween has completed successfully.
    pub fn is_finished(&self) -> bool {
        self.state == PlaybackState::Finished
    }

    /// Get the progress of this tween (0.0 to 1.0).
    pub fn progress(&self) -> f32 {
        let active_elapsed = (self.elapsed_ms - self.delay_ms).max(0.0);
        if self.duration_ms > 0.0 {
            (active_elapsed / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Retarget the tween to a new destination value.
    ///
    /// Used when the same (target, property) receives another request while a
    /// tween is in flight: the newest request wins, and the tween continues
    /// from its current value to the new destination.
    pub fn retarget(&mut self, new_to_value: StyleValue, spec: &TweenSpec) {
        // Start from current interpolated value
        self.from_value = self.current_value();
        self.to_value = new_to_value;

        // Reset timing with new spec
        self.duration_ms = spec.duration_ms;
        self.delay_ms = spec.delay_ms;
        self.elapsed_ms = 0.0;
        self.easing = spec.easing;
        self.state = if spec.delay_ms > 0.0 {
            PlaybackState::Pending
        } else {
            PlaybackState::Running
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opacity_tween(duration_ms: f32) -> ActiveTween {
        ActiveTween::new(
            "hero-title".to_string(),
            StyleProperty::Opacity,
            StyleValue::from(0.0),
            StyleValue::from(1.0),
            &TweenSpec::new(duration_ms).with_easing(EasingFunction::Linear),
        )
    }

    #[test]
    fn test_spec_defaults() {
        let spec = TweenSpec::default();
        assert_eq!(spec.duration_ms, 300.0);
        assert_eq!(spec.delay_ms, 0.0);
        assert_eq!(spec.easing, EasingFunction::Ease);
    }

    #[test]
    fn test_spec_clamping() {
        let spec = TweenSpec::new(-100.0).with_delay(-5.0).clamped();
        assert_eq!(spec.duration_ms, 0.0);
        assert_eq!(spec.delay_ms, 0.0);
    }

    #[test]
    fn test_tween_lifecycle() {
        let mut tween = opacity_tween(100.0);

        // Should start running (no delay)
        assert_eq!(tween.state, PlaybackState::Running);
        assert!(tween.is_active());

        // Update partially
        assert!(tween.update(50.0));
        assert_eq!(tween.state, PlaybackState::Running);
        assert!((tween.progress() - 0.5).abs() < 0.01);

        // Update to completion
        assert!(!tween.update(60.0));
        assert_eq!(tween.state, PlaybackState::Finished);
        assert!(tween.is_finished());
        assert!(!tween.is_active());
    }

    #[test]
    fn test_tween_with_delay() {
        let mut tween = ActiveTween::new(
            "hero-title".to_string(),
            StyleProperty::Opacity,
            StyleValue::from(0.0),
            StyleValue::from(1.0),
            &TweenSpec::new(100.0).with_delay(50.0),
        );

        // Should start pending
        assert_eq!(tween.state, PlaybackState::Pending);

        // During delay, value should be from_value
        tween.update(25.0);
        assert_eq!(tween.state, PlaybackState::Pending);
        assert_eq!(tween.current_value().as_f64(), Some(0.0));

        // After delay, should be running
        tween.update(30.0);
        assert_eq!(tween.state, PlaybackState::Running);
    }

    #[test]
    fn test_tween_pause_resume() {
        let mut tween = opacity_tween(100.0);

        tween.update(50.0);
        let value_before_pause = tween.current_value();

        tween.pause();
        assert_eq!(tween.state, PlaybackState::Paused);

        // Time passes but value doesn't change
        tween.update(100.0);
        assert_eq!(tween.state, PlaybackState::Paused);
        assert_eq!(tween.current_value(), value_before_pause);

        // Resume and continue
        tween.resume();
        assert_eq!(tween.state, PlaybackState::Running);
    }

    #[test]
    fn test_tween_current_value() {
        let mut tween = opacity_tween(100.0);

        // At start
        assert!((tween.current_value().as_f64().unwrap() - 0.0).abs() < 0.01);

        // At 50%
        tween.update(50.0);
        assert!((tween.current_value().as_f64().unwrap() - 0.5).abs() < 0.01);

        // At 100%
        tween.update(50.0);
        assert!((tween.current_value().as_f64().unwrap() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_tween_retarget() {
        let mut tween = opacity_tween(100.0);

        // Progress to 50%
        tween.update(50.0);
        let mid_value = tween.current_value().as_f64().unwrap();
        assert!((mid_value - 0.5).abs() < 0.01);

        // Retarget back to 0 (hover-leave style reversal)
        let new_spec = TweenSpec::new(200.0).with_easing(EasingFunction::Linear);
        tween.retarget(StyleValue::from(0.0), &new_spec);

        // Should continue from current value (0.5) toward the new target
        assert_eq!(tween.state, PlaybackState::Running);
        assert_eq!(tween.elapsed_ms, 0.0);
        assert_eq!(tween.duration_ms, 200.0);
        assert!((tween.current_value().as_f64().unwrap() - 0.5).abs() < 0.01);

        // Progress to end
        tween.update(200.0);
        assert!((tween.current_value().as_f64().unwrap() - 0.0).abs() < 0.01);
    }

    #[test]
    fn test_zero_duration_tween() {
        let mut tween = opacity_tween(0.0);

        // Should immediately be at end value
        assert!((tween.current_value().as_f64().unwrap() - 1.0).abs() < 0.01);

        // First update should complete it
        assert!(!tween.update(1.0));
        assert!(tween.is_finished());
    }

    #[test]
    fn test_request_builders() {
        let req = TweenRequest::to(
            vec!["cta-button".to_string()],
            PropertySet::new().with(StyleProperty::Scale, 1.05),
            TweenSpec::new(200.0),
        )
        .with_stagger(100.0);

        assert!(req.from.is_none());
        assert_eq!(req.stagger_ms, 100.0);
        assert!(req.gate.is_none());
        assert_eq!(req.properties().count(), 1);
    }
}
