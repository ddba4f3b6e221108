//! Timelines: ordered groups of tween entries sharing one clock.
//!
//! A timeline places entries at absolute offsets from its start; submitting
//! it fans every entry out into tweens whose delays encode the offsets.
//! Overlap policy (an entry starting before the previous one finishes) is
//! entirely in the offsets the caller computes; the timeline itself is a
//! dumb container.
//!
//! # Example
//!
//! ```
//! use cue_tween::easing::EasingFunction;
//! use cue_tween::timeline::{Timeline, TimelineEntry};
//! use cue_tween::tween::TweenSpec;
//! use cue_tween::types::{PropertySet, StyleProperty};
//!
//! let spec = TweenSpec::new(800.0).with_easing(EasingFunction::power_out(3.0));
//! let hidden = PropertySet::new().with(StyleProperty::Opacity, 0.0);
//! let shown = PropertySet::new().with(StyleProperty::Opacity, 1.0);
//!
//! let timeline = Timeline::new()
//!     .entry(TimelineEntry::new(vec!["hero-title".into()], 200.0, spec.clone())
//!         .from_to(hidden.clone(), shown.clone()))
//!     .entry(TimelineEntry::new(vec!["hero-subtitle".into()], 400.0, spec)
//!         .from_to(hidden, shown));
//!
//! assert_eq!(timeline.entries.len(), 2);
//! assert_eq!(timeline.duration_ms(), 1200.0);
//! ```

use serde::{Deserialize, Serialize};

use super::scroll::ScrollGate;
use super::tween::TweenSpec;
use super::types::PropertySet;

/// One entry in a timeline: a tween request body at an absolute offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Element ids this entry animates.
    pub targets: Vec<String>,
    /// Initial property values; `None` starts from current values.
    pub from: Option<PropertySet>,
    /// Final property values.
    pub to: PropertySet,
    /// Offset from the timeline start, in milliseconds.
    pub offset_ms: f32,
    /// Timing for the entry's tweens (delay is relative to the offset).
    pub spec: TweenSpec,
    /// Extra delay applied per successive target.
    pub stagger_ms: f32,
}

impl TimelineEntry {
    /// Create an entry with the given targets, offset, and timing.
    pub fn new(targets: Vec<String>, offset_ms: f32, spec: TweenSpec) -> Self {
        Self {
            targets,
            from: None,
            to: PropertySet::new(),
            offset_ms,
            spec,
            stagger_ms: 0.0,
        }
    }

    /// Set explicit initial and final states.
    pub fn from_to(mut self, from: PropertySet, to: PropertySet) -> Self {
        self.from = Some(from);
        self.to = to;
        self
    }

    /// Set only the final state (tween from current values).
    pub fn to(mut self, to: PropertySet) -> Self {
        self.from = None;
        self.to = to;
        self
    }

    /// Set the per-target stagger interval.
    pub fn with_stagger(mut self, stagger_ms: f32) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    /// The time at which this entry's last tween ends, relative to the
    /// timeline start (ignoring stagger).
    pub fn end_ms(&self) -> f32 {
        self.offset_ms + self.spec.delay_ms + self.spec.duration_ms
    }
}

/// An ordered group of tween entries placed on one clock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Entries in submission order.
    pub entries: Vec<TimelineEntry>,
    /// Optional scroll condition gating the whole timeline.
    pub gate: Option<ScrollGate>,
}

impl Timeline {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn entry(mut self, entry: TimelineEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Gate the whole timeline on a scroll condition.
    pub fn with_gate(mut self, gate: ScrollGate) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Total span of the timeline in milliseconds.
    pub fn duration_ms(&self) -> f32 {
        self.entries
            .iter()
            .map(TimelineEntry::end_ms)
            .fold(0.0, f32::max)
    }

    /// Check if the timeline has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
