//! The engine capability consumed by the motion layer.
//!
//! The dispatcher never talks to a concrete engine type: it holds an
//! optional `Engine` capability resolved once at construction. Anything that
//! can accept property-interpolation requests can drive the motion layer —
//! the real tween engine, or a fake in tests.

use cue_tween::{EngineError, ScrollToggle, Timeline, TweenEngine, TweenId, TweenRequest};

/// Capability to accept animation requests.
///
/// Scroll gating is an optional extension: engine presence does not imply
/// gating support, so callers probe `supports_scroll_gating` before
/// submitting gated work and degrade to ungated submission otherwise.
pub trait Engine {
    /// Submit a tween request for immediate or gated execution.
    fn submit(&mut self, request: TweenRequest) -> Result<Vec<TweenId>, EngineError>;

    /// Submit a timeline of entries sharing one clock.
    fn submit_timeline(&mut self, timeline: Timeline) -> Result<Vec<TweenId>, EngineError>;

    /// Register a two-state scroll effect.
    fn submit_scroll_toggle(&mut self, toggle: ScrollToggle) -> Result<(), EngineError>;

    /// Whether this engine honors scroll gates and toggles.
    fn supports_scroll_gating(&self) -> bool;
}

impl Engine for TweenEngine {
    fn submit(&mut self, request: TweenRequest) -> Result<Vec<TweenId>, EngineError> {
        TweenEngine::submit(self, request)
    }

    fn submit_timeline(&mut self, timeline: Timeline) -> Result<Vec<TweenId>, EngineError> {
        TweenEngine::submit_timeline(self, timeline)
    }

    fn submit_scroll_toggle(&mut self, toggle: ScrollToggle) -> Result<(), EngineError> {
        TweenEngine::submit_scroll_toggle(self, toggle)
    }

    fn supports_scroll_gating(&self) -> bool {
        true
    }
}
