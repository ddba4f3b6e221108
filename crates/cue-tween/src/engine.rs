//! The tween engine: accepts requests, runs tweens, resolves values.
//!
//! The `TweenEngine` is the central coordinator for all running tweens. It
//! handles:
//! - Fanning requests out into per-(target, property) tweens with stagger
//! - Overwrite-newest-wins conflict resolution (retargeting in-flight tweens)
//! - Holding scroll-gated requests until their trigger condition activates
//! - Updating all active tweens each frame and emitting lifecycle events
//! - Resolving current values and writing them through a `StyleSink`
//!
//! # Usage
//!
//! ```ignore
//! let mut engine = TweenEngine::new();
//!
//! engine.submit(request)?;
//!
//! // Each frame:
//! engine.update(16.67);
//! engine.on_scroll(&stage);
//! engine.apply_to(&mut stage);
//! ```

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use super::events::{EventQueue, TweenEvent};
use super::scroll::{ScrollGate, ScrollToggle, ViewQuery};
use super::timeline::Timeline;
use super::tween::{ActiveTween, TweenRequest, TweenSpec};
use super::types::{PlaybackState, PropertySet, StyleProperty, StyleValue, TweenId};

/// Write access to element styles. Implemented by the hosting scene so the
/// engine can push resolved values without knowing its representation.
pub trait StyleSink {
    /// Apply a resolved value to the element with the given id.
    ///
    /// Unknown element ids are ignored.
    fn apply_style(&mut self, target: &str, property: StyleProperty, value: &StyleValue);
}

/// Errors a request can be rejected with at submission time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A property value in the request is NaN or infinite.
    #[error("property {property:?} received a non-finite value")]
    NonFiniteValue { property: StyleProperty },

    /// A value's kind does not match its property (scalar vs color).
    #[error("property {property:?} received a value of the wrong kind")]
    MismatchedKinds { property: StyleProperty },

    /// The engine does not support scroll gating.
    #[error("scroll gating is not supported by this engine")]
    GatingUnsupported,
}

/// A gated submission held until its scroll condition activates.
#[derive(Debug, Clone)]
enum GateBody {
    Request(TweenRequest),
    Timeline(Timeline),
}

#[derive(Debug, Clone)]
struct PendingGate {
    gate: ScrollGate,
    body: GateBody,
    activated: bool,
}

#[derive(Debug, Clone)]
struct PendingToggle {
    toggle: ScrollToggle,
    past: bool,
}

/// Central coordinator for all running tweens.
#[derive(Debug, Default)]
pub struct TweenEngine {
    /// Active tweens indexed by their ID.
    tweens: HashMap<TweenId, ActiveTween>,

    /// Index from (target, property) to tween ID for conflict resolution.
    /// Only one tween can be active per (target, property) pair.
    target_index: HashMap<(String, StyleProperty), TweenId>,

    /// Last resolved value per (target, property). Values persist after a
    /// tween finishes so late `apply_to` calls keep the final state.
    resolved: HashMap<(String, StyleProperty), StyleValue>,

    /// Scroll-gated submissions waiting on their trigger.
    gates: Vec<PendingGate>,

    /// Two-state scroll effects.
    toggles: Vec<PendingToggle>,

    /// Queue of lifecycle events emitted during updates.
    events: EventQueue,
}

impl TweenEngine {
    /// Create a new engine with no running tweens.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Submission
    // ========================================================================

    /// Submit a tween request.
    ///
    /// Ungated requests spawn immediately and return the spawned (or
    /// retargeted) tween ids. Gated requests are held until `on_scroll`
    /// observes their trigger condition and return an empty id list.
    ///
    /// Negative timing values are treated as zero. An empty target or
    /// property list is a no-op.
    pub fn submit(&mut self, request: TweenRequest) -> Result<Vec<TweenId>, EngineError> {
        validate_request(&request)?;

        if request.targets.is_empty() || request.to.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(gate) = request.gate.clone() {
            let mut body = request;
            body.gate = None;
            debug!(trigger = %gate.trigger, "holding tween request behind scroll gate");
            self.gates.push(PendingGate {
                gate,
                body: GateBody::Request(body),
                activated: false,
            });
            return Ok(Vec::new());
        }

        Ok(self.spawn_request(&request))
    }

    /// Submit a timeline.
    ///
    /// Each entry spawns as tweens whose delay encodes the entry offset.
    /// A gated timeline is held whole until its condition activates.
    pub fn submit_timeline(&mut self, timeline: Timeline) -> Result<Vec<TweenId>, EngineError> {
        for entry in &timeline.entries {
            validate_request(&entry_request(entry))?;
        }

        if let Some(gate) = timeline.gate.clone() {
            let mut body = timeline;
            body.gate = None;
            debug!(trigger = %gate.trigger, "holding timeline behind scroll gate");
            self.gates.push(PendingGate {
                gate,
                body: GateBody::Timeline(body),
                activated: false,
            });
            return Ok(Vec::new());
        }

        Ok(self.spawn_timeline(&timeline))
    }

    /// Register a two-state scroll effect.
    pub fn submit_scroll_toggle(&mut self, toggle: ScrollToggle) -> Result<(), EngineError> {
        validate_request(&toggle.enter)?;
        validate_request(&toggle.exit)?;
        self.toggles.push(PendingToggle {
            toggle,
            past: false,
        });
        Ok(())
    }

    fn spawn_request(&mut self, request: &TweenRequest) -> Vec<TweenId> {
        let spec = request.spec.clamped();
        let stagger_ms = request.stagger_ms.max(0.0);
        let mut ids = Vec::new();

        for (index, target) in request.targets.iter().enumerate() {
            let per_target = TweenSpec {
                delay_ms: spec.delay_ms + stagger_ms * index as f32,
                ..spec.clone()
            };

            // Properties present only in the "from" half are set instantly.
            if let Some(from) = &request.from {
                for (property, value) in from.iter() {
                    if request.to.get(*property).is_none() {
                        self.resolved
                            .insert((target.clone(), *property), value.clone());
                    }
                }
            }

            for (property, to_value) in request.to.iter() {
                let key = (target.clone(), *property);
                let explicit_from = request.from.as_ref().and_then(|f| f.get(*property)).cloned();

                // Overwrite newest wins: an in-flight tween on the same
                // (target, property) is retargeted rather than duplicated.
                if let Some(&existing_id) = self.target_index.get(&key) {
                    if let Some(existing) = self.tweens.get_mut(&existing_id) {
                        existing.retarget(to_value.clone(), &per_target);
                        if let Some(from) = explicit_from {
                            existing.from_value = from;
                        }
                        self.resolved.insert(key, existing.current_value());
                        ids.push(existing_id);
                        continue;
                    }
                }

                let from_value = explicit_from
                    .or_else(|| self.resolved.get(&key).cloned())
                    .or_else(|| property.identity_value())
                    .unwrap_or_else(|| to_value.clone());

                let tween = ActiveTween::new(
                    target.clone(),
                    *property,
                    from_value,
                    to_value.clone(),
                    &per_target,
                );

                // The initial state applies immediately, before any delay.
                self.resolved.insert(key.clone(), tween.current_value());
                self.events.push(TweenEvent::Started {
                    tween_id: tween.id,
                    target: target.clone(),
                    property: *property,
                });
                self.target_index.insert(key, tween.id);
                ids.push(tween.id);
                self.tweens.insert(tween.id, tween);
            }
        }

        ids
    }

    fn spawn_timeline(&mut self, timeline: &Timeline) -> Vec<TweenId> {
        let mut ids = Vec::new();
        for entry in &timeline.entries {
            ids.extend(self.spawn_request(&entry_request(entry)));
        }
        ids
    }

    // ========================================================================
    // Frame updates
    // ========================================================================

    /// Update all active tweens by the given delta time.
    ///
    /// This should be called once per frame with the elapsed time in
    /// milliseconds. Finished tweens are cleaned up; their final values stay
    /// resolved.
    pub fn update(&mut self, delta_ms: f32) {
        if self.tweens.is_empty() {
            return;
        }

        let mut finished = Vec::new();
        for (id, tween) in self.tweens.iter_mut() {
            let alive = tween.update(delta_ms);
            self.resolved.insert(
                (tween.target.clone(), tween.property),
                tween.current_value(),
            );
            if !alive {
                finished.push(*id);
            }
        }

        for id in finished {
            if let Some(tween) = self.tweens.remove(&id) {
                let key = (tween.target.clone(), tween.property);
                if self.target_index.get(&key) == Some(&id) {
                    self.target_index.remove(&key);
                }

                let event = if tween.state == PlaybackState::Cancelled {
                    TweenEvent::Cancelled {
                        tween_id: id,
                        target: tween.target,
                        property: tween.property,
                    }
                } else {
                    TweenEvent::Ended {
                        tween_id: id,
                        target: tween.target,
                        property: tween.property,
                    }
                };
                self.events.push(event);
            }
        }
    }

    /// Process scroll state: activate gated submissions whose trigger crossed
    /// the threshold, reverse replayable ones that left, and flip toggles.
    pub fn on_scroll(&mut self, view: &dyn ViewQuery) {
        let mut gates = std::mem::take(&mut self.gates);
        for pending in gates.iter_mut() {
            let active = pending.gate.is_active(view);

            if active && !pending.activated {
                pending.activated = true;
                debug!(trigger = %pending.gate.trigger, "scroll gate activated");
                match &pending.body {
                    GateBody::Request(request) => {
                        self.spawn_request(request);
                    }
                    GateBody::Timeline(timeline) => {
                        self.spawn_timeline(timeline);
                    }
                }
            } else if !active && pending.activated && pending.gate.replay_on_exit {
                pending.activated = false;
                debug!(trigger = %pending.gate.trigger, "scroll gate exited, reversing");
                match &pending.body {
                    GateBody::Request(request) => {
                        for reverse in reverse_requests(std::slice::from_ref(request)) {
                            self.spawn_request(&reverse);
                        }
                    }
                    GateBody::Timeline(timeline) => {
                        let bodies: Vec<TweenRequest> =
                            timeline.entries.iter().map(entry_request).collect();
                        for reverse in reverse_requests(&bodies) {
                            self.spawn_request(&reverse);
                        }
                    }
                }
            }
        }
        self.gates = gates;

        let mut toggles = std::mem::take(&mut self.toggles);
        for pending in toggles.iter_mut() {
            let past = pending.toggle.is_past(view);
            if past != pending.past {
                pending.past = past;
                let request = if past {
                    pending.toggle.enter.clone()
                } else {
                    pending.toggle.exit.clone()
                };
                self.spawn_request(&request);
            }
        }
        self.toggles = toggles;
    }

    /// Write all resolved values through the given sink.
    pub fn apply_to(&self, sink: &mut dyn StyleSink) {
        for ((target, property), value) in &self.resolved {
            sink.apply_style(target, *property, value);
        }
    }

    // ========================================================================
    // Introspection and control
    // ========================================================================

    /// Drain all queued lifecycle events.
    pub fn drain_events(&mut self) -> Vec<TweenEvent> {
        self.events.drain()
    }

    /// Check if any tweens are currently active.
    pub fn has_active_tweens(&self) -> bool {
        self.tweens.values().any(|t| t.is_active())
    }

    /// Number of active tweens.
    pub fn active_count(&self) -> usize {
        self.tweens.values().filter(|t| t.is_active()).count()
    }

    /// Number of gated submissions still waiting (or armed for replay).
    pub fn pending_gate_count(&self) -> usize {
        self.gates.iter().filter(|g| !g.activated).count()
    }

    /// Iterate over the active tweens.
    pub fn active_tweens(&self) -> impl Iterator<Item = &ActiveTween> {
        self.tweens.values().filter(|t| t.is_active())
    }

    /// Last resolved value for a (target, property) pair.
    pub fn resolved_value(&self, target: &str, property: StyleProperty) -> Option<&StyleValue> {
        self.resolved.get(&(target.to_string(), property))
    }

    /// Cancel all tweens for a target. Cleanup happens on the next update.
    pub fn cancel_all_for(&mut self, target: &str) {
        for tween in self.tweens.values_mut() {
            if tween.target == target {
                tween.cancel();
            }
        }
    }
}

/// Build the request equivalent of a timeline entry: the entry offset folds
/// into the tween delay.
fn entry_request(entry: &super::timeline::TimelineEntry) -> TweenRequest {
    let offset = entry.offset_ms.max(0.0);
    TweenRequest {
        targets: entry.targets.clone(),
        from: entry.from.clone(),
        to: entry.to.clone(),
        spec: TweenSpec {
            delay_ms: entry.spec.delay_ms + offset,
            ..entry.spec.clone()
        },
        stagger_ms: entry.stagger_ms,
        gate: None,
    }
}

/// Build the reversal of each request: tween from current values back to the
/// request's initial state, without delay or stagger.
fn reverse_requests(requests: &[TweenRequest]) -> Vec<TweenRequest> {
    requests
        .iter()
        .filter_map(|request| {
            let from = request.from.clone()?;
            Some(TweenRequest {
                targets: request.targets.clone(),
                from: None,
                to: from,
                spec: TweenSpec {
                    delay_ms: 0.0,
                    ..request.spec.clone()
                },
                stagger_ms: 0.0,
                gate: None,
            })
        })
        .collect()
}

fn validate_request(request: &TweenRequest) -> Result<(), EngineError> {
    let halves = [request.from.as_ref(), Some(&request.to)];
    for set in halves.into_iter().flatten() {
        for (property, value) in set.iter() {
            if !value.is_finite() {
                return Err(EngineError::NonFiniteValue {
                    property: *property,
                });
            }
            if value.kind() != property.value_kind() {
                return Err(EngineError::MismatchedKinds {
                    property: *property,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::EasingFunction;

    fn fade_request(targets: &[&str]) -> TweenRequest {
        TweenRequest::from_to(
            targets.iter().map(|t| t.to_string()).collect(),
            PropertySet::new()
                .with(StyleProperty::Opacity, 0.0)
                .with(StyleProperty::TranslateY, 50.0),
            PropertySet::new()
                .with(StyleProperty::Opacity, 1.0)
                .with(StyleProperty::TranslateY, 0.0),
            TweenSpec::new(800.0).with_easing(EasingFunction::Linear),
        )
    }

    struct RecordingSink {
        writes: Vec<(String, StyleProperty, StyleValue)>,
    }

    impl StyleSink for RecordingSink {
        fn apply_style(&mut self, target: &str, property: StyleProperty, value: &StyleValue) {
            self.writes
                .push((target.to_string(), property, value.clone()));
        }
    }

    struct FixedView {
        tops: Vec<(&'static str, f64)>,
        viewport_height: f64,
        scroll_y: f64,
    }

    impl ViewQuery for FixedView {
        fn element_top(&self, id: &str) -> Option<f64> {
            self.tops.iter().find(|(i, _)| *i == id).map(|(_, t)| *t)
        }
        fn viewport_height(&self) -> f64 {
            self.viewport_height
        }
        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }
    }

    #[test]
    fn test_submit_spawns_per_property_tweens() {
        let mut engine = TweenEngine::new();
        let ids = engine.submit(fade_request(&["hero-title"])).unwrap();

        assert_eq!(ids.len(), 2);
        assert_eq!(engine.active_count(), 2);

        // Initial state is resolved immediately
        assert_eq!(
            engine.resolved_value("hero-title", StyleProperty::Opacity),
            Some(&StyleValue::from(0.0))
        );
    }

    #[test]
    fn test_update_converges_to_final_state() {
        let mut engine = TweenEngine::new();
        engine.submit(fade_request(&["hero-title"])).unwrap();

        engine.update(400.0);
        let mid = engine
            .resolved_value("hero-title", StyleProperty::Opacity)
            .and_then(StyleValue::as_f64)
            .unwrap();
        assert!((mid - 0.5).abs() < 0.01);

        engine.update(500.0);
        assert!(!engine.has_active_tweens());
        assert_eq!(
            engine.resolved_value("hero-title", StyleProperty::Opacity),
            Some(&StyleValue::from(1.0))
        );
        assert_eq!(
            engine.resolved_value("hero-title", StyleProperty::TranslateY),
            Some(&StyleValue::from(0.0))
        );
    }

    #[test]
    fn test_stagger_spaces_target_starts() {
        let mut engine = TweenEngine::new();
        let request = fade_request(&["card-1", "card-2", "card-3"]).with_stagger(200.0);
        let ids = engine.submit(request).unwrap();
        assert_eq!(ids.len(), 6);

        let mut delays: Vec<f32> = engine
            .active_tweens()
            .filter(|t| t.property == StyleProperty::Opacity)
            .map(|t| t.delay_ms)
            .collect();
        delays.sort_by(f32::total_cmp);
        assert_eq!(delays, vec![0.0, 200.0, 400.0]);

        // Mid-flight: first card moving, last card still hidden
        engine.update(300.0);
        let first = engine
            .resolved_value("card-1", StyleProperty::Opacity)
            .and_then(StyleValue::as_f64)
            .unwrap();
        let last = engine
            .resolved_value("card-3", StyleProperty::Opacity)
            .and_then(StyleValue::as_f64)
            .unwrap();
        assert!(first > 0.0);
        assert_eq!(last, 0.0);

        // Everyone converges
        engine.update(2000.0);
        for target in ["card-1", "card-2", "card-3"] {
            assert_eq!(
                engine.resolved_value(target, StyleProperty::Opacity),
                Some(&StyleValue::from(1.0))
            );
        }
    }

    #[test]
    fn test_overwrite_newest_wins() {
        let mut engine = TweenEngine::new();
        let up = TweenRequest::to(
            vec!["cta-button".to_string()],
            PropertySet::new().with(StyleProperty::Scale, 1.05),
            TweenSpec::new(200.0).with_easing(EasingFunction::Linear),
        );
        let ids_a = engine.submit(up).unwrap();

        engine.update(100.0);

        let down = TweenRequest::to(
            vec!["cta-button".to_string()],
            PropertySet::new().with(StyleProperty::Scale, 1.0),
            TweenSpec::new(200.0).with_easing(EasingFunction::Linear),
        );
        let ids_b = engine.submit(down).unwrap();

        // Same tween retargeted, not a duplicate
        assert_eq!(ids_a, ids_b);
        assert_eq!(engine.active_count(), 1);

        engine.update(300.0);
        assert_eq!(
            engine.resolved_value("cta-button", StyleProperty::Scale),
            Some(&StyleValue::from(1.0))
        );
    }

    #[test]
    fn test_resubmit_is_idempotent_on_final_state() {
        let mut engine = TweenEngine::new();
        engine.submit(fade_request(&["hero-title"])).unwrap();
        engine.update(300.0);
        engine.submit(fade_request(&["hero-title"])).unwrap();
        engine.update(2000.0);

        assert_eq!(
            engine.resolved_value("hero-title", StyleProperty::Opacity),
            Some(&StyleValue::from(1.0))
        );
        assert_eq!(
            engine.resolved_value("hero-title", StyleProperty::TranslateY),
            Some(&StyleValue::from(0.0))
        );
    }

    #[test]
    fn test_empty_request_is_noop() {
        let mut engine = TweenEngine::new();
        let ids = engine.submit(fade_request(&[])).unwrap();
        assert!(ids.is_empty());
        assert_eq!(engine.active_count(), 0);
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut engine = TweenEngine::new();
        let request = TweenRequest::to(
            vec!["hero-title".to_string()],
            PropertySet::new().with(StyleProperty::Opacity, f64::NAN),
            TweenSpec::new(200.0),
        );
        assert_eq!(
            engine.submit(request),
            Err(EngineError::NonFiniteValue {
                property: StyleProperty::Opacity
            })
        );
    }

    #[test]
    fn test_kind_mismatch_rejected() {
        let mut engine = TweenEngine::new();
        let request = TweenRequest::to(
            vec!["hero-title".to_string()],
            PropertySet::new().with(StyleProperty::Opacity, [1.0, 1.0, 1.0, 1.0]),
            TweenSpec::new(200.0),
        );
        assert_eq!(
            engine.submit(request),
            Err(EngineError::MismatchedKinds {
                property: StyleProperty::Opacity
            })
        );
    }

    #[test]
    fn test_gated_request_waits_for_scroll() {
        let mut engine = TweenEngine::new();
        let request = fade_request(&["feature-1"]).with_gate(ScrollGate::new("feature-grid"));
        let ids = engine.submit(request).unwrap();
        assert!(ids.is_empty());
        assert_eq!(engine.pending_gate_count(), 1);
        assert_eq!(engine.active_count(), 0);

        // Trigger below the fold: nothing happens
        let mut view = FixedView {
            tops: vec![("feature-grid", 1500.0)],
            viewport_height: 720.0,
            scroll_y: 0.0,
        };
        engine.on_scroll(&view);
        assert_eq!(engine.active_count(), 0);

        // Scroll the trigger past the activation line
        view.scroll_y = 1100.0;
        engine.on_scroll(&view);
        assert_eq!(engine.pending_gate_count(), 0);
        assert_eq!(engine.active_count(), 2);

        engine.update(1000.0);
        assert_eq!(
            engine.resolved_value("feature-1", StyleProperty::Opacity),
            Some(&StyleValue::from(1.0))
        );
    }

    #[test]
    fn test_gate_reverses_on_exit() {
        let mut engine = TweenEngine::new();
        let request = fade_request(&["feature-1"]).with_gate(ScrollGate::new("feature-grid"));
        engine.submit(request).unwrap();

        let mut view = FixedView {
            tops: vec![("feature-grid", 1500.0)],
            viewport_height: 720.0,
            scroll_y: 1100.0,
        };
        engine.on_scroll(&view);
        engine.update(1000.0);
        assert_eq!(
            engine.resolved_value("feature-1", StyleProperty::Opacity),
            Some(&StyleValue::from(1.0))
        );

        // Scroll back above the trigger: entrance reverses
        view.scroll_y = 0.0;
        engine.on_scroll(&view);
        engine.update(1000.0);
        assert_eq!(
            engine.resolved_value("feature-1", StyleProperty::Opacity),
            Some(&StyleValue::from(0.0))
        );

        // And it is armed to replay
        assert_eq!(engine.pending_gate_count(), 1);
    }

    #[test]
    fn test_scroll_toggle_flips_both_ways() {
        let mut engine = TweenEngine::new();
        let enter = TweenRequest::to(
            vec!["site-header".to_string()],
            PropertySet::new().with(StyleProperty::Opacity, 1.0),
            TweenSpec::new(0.0),
        );
        let exit = TweenRequest::to(
            vec!["site-header".to_string()],
            PropertySet::new().with(StyleProperty::Opacity, 0.0),
            TweenSpec::new(0.0),
        );
        engine
            .submit_scroll_toggle(ScrollToggle::new(50.0, enter, exit))
            .unwrap();

        let mut view = FixedView {
            tops: vec![],
            viewport_height: 720.0,
            scroll_y: 100.0,
        };
        engine.on_scroll(&view);
        engine.update(1.0);
        assert_eq!(
            engine.resolved_value("site-header", StyleProperty::Opacity),
            Some(&StyleValue::from(1.0))
        );

        view.scroll_y = 0.0;
        engine.on_scroll(&view);
        engine.update(1.0);
        assert_eq!(
            engine.resolved_value("site-header", StyleProperty::Opacity),
            Some(&StyleValue::from(0.0))
        );
    }

    #[test]
    fn test_apply_to_writes_resolved_values() {
        let mut engine = TweenEngine::new();
        engine.submit(fade_request(&["hero-title"])).unwrap();
        engine.update(900.0);

        let mut sink = RecordingSink { writes: Vec::new() };
        engine.apply_to(&mut sink);

        assert!(sink.writes.iter().any(|(t, p, v)| {
            t == "hero-title" && *p == StyleProperty::Opacity && *v == StyleValue::from(1.0)
        }));
    }

    #[test]
    fn test_events_emitted() {
        let mut engine = TweenEngine::new();
        engine.submit(fade_request(&["hero-title"])).unwrap();

        let events = engine.drain_events();
        assert_eq!(events.iter().filter(|e| e.is_started()).count(), 2);

        engine.update(900.0);
        let events = engine.drain_events();
        assert_eq!(events.iter().filter(|e| e.is_ended()).count(), 2);
    }

    #[test]
    fn test_cancel_all_for_target() {
        let mut engine = TweenEngine::new();
        engine.submit(fade_request(&["hero-title"])).unwrap();
        engine.cancel_all_for("hero-title");
        engine.update(16.0);

        assert!(!engine.has_active_tweens());
        let events = engine.drain_events();
        assert_eq!(events.iter().filter(|e| e.is_cancelled()).count(), 2);
    }

    #[test]
    fn test_timeline_offsets_become_delays() {
        use crate::timeline::{Timeline, TimelineEntry};

        let spec = TweenSpec::new(800.0).with_easing(EasingFunction::Linear);
        let hidden = PropertySet::new().with(StyleProperty::Opacity, 0.0);
        let shown = PropertySet::new().with(StyleProperty::Opacity, 1.0);

        let timeline = Timeline::new()
            .entry(
                TimelineEntry::new(vec!["hero-title".into()], 200.0, spec.clone())
                    .from_to(hidden.clone(), shown.clone()),
            )
            .entry(
                TimelineEntry::new(vec!["hero-subtitle".into()], 400.0, spec)
                    .from_to(hidden, shown),
            );

        let mut engine = TweenEngine::new();
        engine.submit_timeline(timeline).unwrap();

        let mut delays: Vec<f32> = engine.active_tweens().map(|t| t.delay_ms).collect();
        delays.sort_by(f32::total_cmp);
        assert_eq!(delays, vec![200.0, 400.0]);
    }
}
