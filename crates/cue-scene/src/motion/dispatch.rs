//! The intent dispatcher.
//!
//! `MotionController` translates named entrance intents into engine requests.
//! It holds the engine capability resolved once at construction; when the
//! capability is absent every operation degrades to a no-op and the fallback
//! path keeps content visible. A submission error triggers immediate
//! visibility enforcement for everything registered so far — content never
//! stays hidden because an animation went wrong.

use tracing::warn;

use cue_tween::{
    EngineError, PropertySet, ScrollGate, ScrollToggle, Timeline, TimelineEntry, TweenRequest,
    TweenSpec, color,
};

use super::capability::Engine;
use super::fallback;
use super::interact::InteractionBinder;
use super::presets::{self, EntranceKind};
use crate::events::PointerEvent;
use crate::stage::Stage;

/// Scroll-gate options for an entrance.
#[derive(Debug, Clone, PartialEq)]
pub struct GateOptions {
    /// Selector of the trigger element; defaults to the entrance target.
    pub trigger: Option<String>,
    /// Activation line as a fraction of the viewport height.
    pub threshold: f32,
    /// Reverse the entrance when scrolled back above the line.
    pub replay_on_exit: bool,
}

impl Default for GateOptions {
    fn default() -> Self {
        Self {
            trigger: None,
            threshold: presets::GATE_THRESHOLD,
            replay_on_exit: true,
        }
    }
}

impl GateOptions {
    /// Gate on a specific trigger selector instead of the target itself.
    pub fn trigger(mut self, selector: impl Into<String>) -> Self {
        self.trigger = Some(selector.into());
        self
    }

    /// Set the activation threshold.
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Numeric options accepted by every entrance operation.
///
/// Negative values are clamped to zero at dispatch; a non-positive duration
/// falls back to the intent's default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotionOptions {
    /// Delay before the entrance starts, in milliseconds.
    pub delay_ms: f32,
    /// Duration override; `None` uses the intent's default.
    pub duration_ms: Option<f32>,
    /// Stagger between successive targets, in milliseconds.
    pub stagger_ms: f32,
    /// Optional scroll gate.
    pub gate: Option<GateOptions>,
}

impl MotionOptions {
    /// Options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start delay.
    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Override the duration.
    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Set the per-target stagger.
    pub fn stagger(mut self, stagger_ms: f32) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    /// Gate on the target scrolling into view, with default options.
    pub fn gated(mut self) -> Self {
        self.gate = Some(GateOptions::default());
        self
    }

    /// Gate with explicit options.
    pub fn gate(mut self, gate: GateOptions) -> Self {
        self.gate = Some(gate);
        self
    }
}

/// One step of an entrance sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceStep {
    /// Target selector.
    pub selector: String,
    /// Entrance intent for this step.
    pub kind: EntranceKind,
    /// Pull this step's start earlier by this much, overlapping the
    /// previous step. `None` keeps the regular cadence.
    pub overlap_ms: Option<f32>,
}

/// An ordered entrance sequence with overlapping cadence.
///
/// Steps start `step_ms` apart — deliberately less than the entrance
/// duration, so each step begins while the previous one is still finishing.
/// A per-step overlap pulls that step's start earlier still (computed as the
/// running offset minus the overlap); results below zero clamp to the
/// sequence start.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    steps: Vec<SequenceStep>,
    base_delay_ms: f32,
    step_ms: f32,
    gate: Option<GateOptions>,
}

impl Default for Sequence {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            base_delay_ms: presets::GROUP_STAGGER_MS,
            step_ms: presets::GROUP_STAGGER_MS,
            gate: None,
        }
    }
}

impl Sequence {
    /// An empty sequence with the default cadence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset of the first step from submission.
    pub fn starting_at(mut self, base_delay_ms: f32) -> Self {
        self.base_delay_ms = base_delay_ms.max(0.0);
        self
    }

    /// Spacing between successive step starts.
    pub fn step_every(mut self, step_ms: f32) -> Self {
        self.step_ms = step_ms.max(0.0);
        self
    }

    /// Append a step with the regular cadence.
    pub fn step(mut self, selector: impl Into<String>, kind: EntranceKind) -> Self {
        self.steps.push(SequenceStep {
            selector: selector.into(),
            kind,
            overlap_ms: None,
        });
        self
    }

    /// Append a step pulled `overlap_ms` earlier than the regular cadence.
    pub fn step_overlapping(
        mut self,
        selector: impl Into<String>,
        kind: EntranceKind,
        overlap_ms: f32,
    ) -> Self {
        self.steps.push(SequenceStep {
            selector: selector.into(),
            kind,
            overlap_ms: Some(overlap_ms),
        });
        self
    }

    /// Gate the whole sequence on a scroll condition.
    pub fn gated(mut self, gate: GateOptions) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Selectors of all steps, in order.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.selector.as_str())
    }

    /// Resolve the start offset of every step.
    ///
    /// Exposed for tests; dispatch uses the same arithmetic.
    pub fn offsets(&self) -> Vec<f32> {
        let mut offsets = Vec::with_capacity(self.steps.len());
        let mut cursor = self.base_delay_ms;
        for step in &self.steps {
            let start = match step.overlap_ms {
                Some(overlap) => {
                    let start = cursor - overlap.max(0.0);
                    if start < 0.0 {
                        warn!(
                            selector = %step.selector,
                            overlap_ms = overlap,
                            "sequence overlap reaches before the sequence start; clamping to 0"
                        );
                    }
                    start.max(0.0)
                }
                None => cursor,
            };
            offsets.push(start);
            cursor = start + self.step_ms;
        }
        offsets
    }
}

/// The intent dispatcher: entrance operations over an optional engine.
pub struct MotionController<E: Engine> {
    engine: Option<E>,
    registered: Vec<String>,
}

impl<E: Engine> MotionController<E> {
    /// Create a controller around the resolved engine capability.
    pub fn new(engine: Option<E>) -> Self {
        Self {
            engine,
            registered: Vec::new(),
        }
    }

    /// Whether the engine capability is present.
    ///
    /// Advisory: presence does not imply scroll gating works — gated
    /// operations probe that separately and degrade to ungated submission.
    pub fn engine_available(&self) -> bool {
        self.engine.is_some()
    }

    /// Mutable access to the engine, for the host's frame loop.
    pub fn engine_mut(&mut self) -> Option<&mut E> {
        self.engine.as_mut()
    }

    /// Every selector an entrance was dispatched for, in first-seen order.
    pub fn registered_selectors(&self) -> &[String] {
        &self.registered
    }

    fn register(&mut self, selector: &str) {
        if !self.registered.iter().any(|s| s == selector) {
            self.registered.push(selector.to_string());
        }
    }

    // ========================================================================
    // Entrance operations
    // ========================================================================

    /// Fade the matched elements in while rising from below.
    pub fn fade_up(
        &mut self,
        stage: &mut Stage,
        selector: &str,
        options: MotionOptions,
    ) -> Result<(), EngineError> {
        self.entrance(stage, EntranceKind::FadeUp, selector, options, false)
    }

    /// Fade the matched elements in while sliding from the left.
    pub fn fade_left(
        &mut self,
        stage: &mut Stage,
        selector: &str,
        options: MotionOptions,
    ) -> Result<(), EngineError> {
        self.entrance(stage, EntranceKind::FadeLeft, selector, options, false)
    }

    /// Fade the matched elements in while sliding from the right.
    pub fn fade_right(
        &mut self,
        stage: &mut Stage,
        selector: &str,
        options: MotionOptions,
    ) -> Result<(), EngineError> {
        self.entrance(stage, EntranceKind::FadeRight, selector, options, false)
    }

    /// Grow the matched elements in from slightly shrunken, with overshoot.
    pub fn scale_in(
        &mut self,
        stage: &mut Stage,
        selector: &str,
        options: MotionOptions,
    ) -> Result<(), EngineError> {
        self.entrance(stage, EntranceKind::ScaleIn, selector, options, false)
    }

    /// Fade a group in with a stagger between members.
    ///
    /// Uses the shallower grouped rise and the default stagger when the
    /// options leave it at zero.
    pub fn stagger_group(
        &mut self,
        stage: &mut Stage,
        selector: &str,
        mut options: MotionOptions,
    ) -> Result<(), EngineError> {
        if options.stagger_ms <= 0.0 {
            options.stagger_ms = presets::GROUP_STAGGER_MS;
        }
        self.entrance(stage, EntranceKind::FadeUp, selector, options, true)
    }

    fn entrance(
        &mut self,
        stage: &mut Stage,
        kind: EntranceKind,
        selector: &str,
        options: MotionOptions,
        grouped: bool,
    ) -> Result<(), EngineError> {
        self.register(selector);

        if self.engine.is_none() {
            return Ok(());
        }

        let targets = stage.query(selector);
        if targets.is_empty() {
            return Ok(());
        }

        let (from, to) = if grouped {
            kind.group_property_sets()
        } else {
            kind.property_sets()
        };

        let mut spec = kind.spec().with_delay(options.delay_ms);
        if let Some(duration) = options.duration_ms {
            if duration > 0.0 {
                spec.duration_ms = duration;
            }
        }

        let mut request = TweenRequest::from_to(targets, from, to, spec.clamped())
            .with_stagger(options.stagger_ms.max(0.0));
        if let Some(gate) = self.resolve_gate(stage, selector, options.gate.as_ref()) {
            request = request.with_gate(gate);
        }

        self.submit(stage, request)
    }

    /// Play an entrance sequence: each step a fixed offset after the
    /// previous one, overlapping by design.
    pub fn sequence(&mut self, stage: &mut Stage, sequence: Sequence) -> Result<(), EngineError> {
        let selectors: Vec<String> = sequence.selectors().map(str::to_string).collect();
        for selector in &selectors {
            self.register(selector);
        }

        if self.engine.is_none() {
            return Ok(());
        }

        let offsets = sequence.offsets();
        let mut timeline = Timeline::new();
        for (step, offset) in sequence.steps.iter().zip(offsets) {
            let targets = stage.query(&step.selector);
            if targets.is_empty() {
                continue;
            }
            let (from, to) = step.kind.property_sets();
            timeline = timeline.entry(
                TimelineEntry::new(targets, offset, step.kind.spec()).from_to(from, to),
            );
        }
        if timeline.is_empty() {
            return Ok(());
        }

        // Gate resolution uses the first step as the anchor target.
        if let Some(first) = selectors.first() {
            if let Some(gate) = self.resolve_gate(stage, first, sequence.gate.as_ref()) {
                timeline = timeline.with_gate(gate);
            }
        }

        let Some(engine) = self.engine.as_mut() else {
            return Ok(());
        };
        let outcome = engine.submit_timeline(timeline);
        self.after_submit(stage, outcome.map(|_| ()))
    }

    /// Swap the header between its transparent and solid states as the page
    /// scrolls past `threshold_y`.
    pub fn header_scroll_effect(
        &mut self,
        stage: &mut Stage,
        selector: &str,
        threshold_y: f64,
    ) -> Result<(), EngineError> {
        let Some(engine) = self.engine.as_mut() else {
            return Ok(());
        };
        if !engine.supports_scroll_gating() {
            // Header keeps its initial state; nothing is ever hidden by this.
            return Ok(());
        }

        let targets = stage.query(selector);
        if targets.is_empty() {
            return Ok(());
        }

        let spec = TweenSpec::new(presets::HOVER_DURATION_MS)
            .with_easing(cue_tween::EasingFunction::power_out(2.0));
        let solid = PropertySet::new().with(
            cue_tween::StyleProperty::BackgroundColor,
            color::from_srgba(17, 24, 39, 0.95),
        );
        let clear = PropertySet::new().with(
            cue_tween::StyleProperty::BackgroundColor,
            color::from_srgba(17, 24, 39, 0.0),
        );

        let enter = TweenRequest::to(targets.clone(), solid, spec.clone());
        let exit = TweenRequest::to(targets, clear, spec);
        let outcome = engine.submit_scroll_toggle(ScrollToggle::new(threshold_y, enter, exit));
        self.after_submit(stage, outcome)
    }

    // ========================================================================
    // Interaction routing and fallback
    // ========================================================================

    /// Route a pointer event through the interaction binder, submitting
    /// whatever feedback requests it produces.
    pub fn route_pointer(
        &mut self,
        stage: &mut Stage,
        binder: &InteractionBinder,
        event: &PointerEvent,
    ) -> Result<(), EngineError> {
        if self.engine.is_none() {
            return Ok(());
        }

        for request in binder.requests_for(stage, event) {
            self.submit(stage, request)?;
        }
        Ok(())
    }

    /// Arm the deferred visibility pass for everything registered so far.
    pub fn arm_fallback(&mut self, stage: &mut Stage) {
        fallback::schedule(stage, self.registered.clone());
    }

    fn resolve_gate(
        &mut self,
        stage: &Stage,
        target_selector: &str,
        options: Option<&GateOptions>,
    ) -> Option<ScrollGate> {
        let options = options?;
        let engine = self.engine.as_ref()?;
        if !engine.supports_scroll_gating() {
            // Plugin absent: degrade to an ungated entrance rather than
            // leaving content waiting on a gate that can never fire.
            warn!(selector = %target_selector, "scroll gating unsupported; running ungated");
            return None;
        }

        let trigger_selector = options.trigger.as_deref().unwrap_or(target_selector);
        let trigger = stage.query(trigger_selector).into_iter().next()?;
        Some(
            ScrollGate::new(trigger)
                .with_threshold(options.threshold)
                .with_replay_on_exit(options.replay_on_exit),
        )
    }

    fn submit(&mut self, stage: &mut Stage, request: TweenRequest) -> Result<(), EngineError> {
        let Some(engine) = self.engine.as_mut() else {
            return Ok(());
        };
        let outcome = engine.submit(request);
        self.after_submit(stage, outcome.map(|_| ()))
    }

    /// On a submission error, log it and converge everything registered to
    /// the visible state immediately — the error itself stays diagnostic.
    fn after_submit(
        &mut self,
        stage: &mut Stage,
        outcome: Result<(), EngineError>,
    ) -> Result<(), EngineError> {
        if let Err(error) = &outcome {
            warn!(%error, "engine rejected animation request; forcing content visible");
            fallback::ensure_visible_all(stage, &self.registered);
        }
        outcome
    }
}
