//! Scroll gating for tween requests.
//!
//! This module implements the scroll-trigger side of the engine: a request
//! carrying a `ScrollGate` is held until its trigger element crosses the
//! activation threshold in the viewport, and (optionally) reverses when the
//! viewport scrolls back above it. `ScrollToggle` is the two-state variant
//! used for header chrome that switches appearance past a scroll offset.
//!
//! The engine reads positions through the `ViewQuery` trait so it stays
//! decoupled from any concrete scene representation.

use serde::{Deserialize, Serialize};

use super::tween::TweenRequest;

/// Read access to element positions and the viewport, as needed for scroll
/// gating. Implemented by the hosting scene.
pub trait ViewQuery {
    /// Document-space top edge of the element with the given id.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Height of the viewport.
    fn viewport_height(&self) -> f64;

    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;
}

/// A scroll condition gating a tween request.
///
/// The gate activates when the trigger element's top edge rises above
/// `threshold` × viewport height (measured from the viewport top). With
/// `replay_on_exit`, scrolling back above the threshold reverses the
/// entrance so it can play again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollGate {
    /// Element id whose position drives the gate.
    pub trigger: String,
    /// Activation line as a fraction of the viewport height.
    pub threshold: f32,
    /// Reverse the tween when the trigger leaves back above the line.
    pub replay_on_exit: bool,
}

impl ScrollGate {
    /// Gate on the given trigger with the default threshold (80% of the
    /// viewport height).
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            threshold: 0.8,
            replay_on_exit: true,
        }
    }

    /// Set the activation threshold.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Set whether leaving the gate reverses the tween.
    pub fn with_replay_on_exit(mut self, replay: bool) -> Self {
        self.replay_on_exit = replay;
        self
    }

    /// Whether the gate condition currently holds.
    ///
    /// A missing trigger element counts as active, so content never stays
    /// hidden behind a gate that can no longer fire.
    pub fn is_active(&self, view: &dyn ViewQuery) -> bool {
        let Some(top) = view.element_top(&self.trigger) else {
            return true;
        };
        let visible_top = top - view.scroll_y();
        visible_top <= view.viewport_height() * self.threshold as f64
    }
}

/// A two-state scroll effect: play `enter` once the scroll offset passes
/// `threshold_y`, play `exit` when it comes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollToggle {
    /// Scroll offset (in pixels) separating the two states.
    pub threshold_y: f64,
    /// Request submitted when scrolling past the threshold.
    pub enter: TweenRequest,
    /// Request submitted when scrolling back above the threshold.
    pub exit: TweenRequest,
}

impl ScrollToggle {
    /// Create a toggle around the given scroll offset.
    pub fn new(threshold_y: f64, enter: TweenRequest, exit: TweenRequest) -> Self {
        Self {
            threshold_y,
            enter,
            exit,
        }
    }

    /// Whether the scroll position is past the threshold.
    pub fn is_past(&self, view: &dyn ViewQuery) -> bool {
        view.scroll_y() > self.threshold_y
    }
}
