//! Tween lifecycle events.
//!
//! Events can be polled after each engine update to respond to tween state
//! changes (a scroll reveal finishing, a gated group activating, and so on).
//!
//! # Usage
//!
//! ```ignore
//! let mut engine = TweenEngine::new();
//! // ... submit requests ...
//! engine.update(16.67);
//! for event in engine.drain_events() {
//!     if event.is_ended() {
//!         println!("tween finished on {}", event.target());
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::types::{StyleProperty, TweenId};

/// Event emitted when a tween changes state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TweenEvent {
    /// Tween has started (spawned and past validation).
    Started {
        /// The tween instance ID.
        tween_id: TweenId,
        /// The element this tween is applied to.
        target: String,
        /// The property being tweened.
        property: StyleProperty,
    },
    /// Tween has completed normally.
    Ended {
        /// The tween instance ID.
        tween_id: TweenId,
        /// The element this tween was applied to.
        target: String,
        /// The property that was tweened.
        property: StyleProperty,
    },
    /// Tween was cancelled before completion.
    Cancelled {
        /// The tween instance ID.
        tween_id: TweenId,
        /// The element this tween was applied to.
        target: String,
        /// The property that was being tweened.
        property: StyleProperty,
    },
}

impl TweenEvent {
    /// Get the element id for this event.
    pub fn target(&self) -> &str {
        match self {
            Self::Started { target, .. }
            | Self::Ended { target, .. }
            | Self::Cancelled { target, .. } => target,
        }
    }

    /// Get the tween ID for this event.
    pub fn tween_id(&self) -> TweenId {
        match self {
            Self::Started { tween_id, .. }
            | Self::Ended { tween_id, .. }
            | Self::Cancelled { tween_id, .. } => *tween_id,
        }
    }

    /// Get the property for this event.
    pub fn property(&self) -> StyleProperty {
        match self {
            Self::Started { property, .. }
            | Self::Ended { property, .. }
            | Self::Cancelled { property, .. } => *property,
        }
    }

    /// Check if this is a "started" event.
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started { .. })
    }

    /// Check if this is an "ended" event.
    pub fn is_ended(&self) -> bool {
        matches!(self, Self::Ended { .. })
    }

    /// Check if this is a "cancelled" event.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Queue for collecting tween events during update cycles.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<TweenEvent>,
}

impl EventQueue {
    /// Create a new empty event queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event onto the queue.
    pub fn push(&mut self, event: TweenEvent) {
        self.events.push_back(event);
    }

    /// Drain all queued events.
    pub fn drain(&mut self) -> Vec<TweenEvent> {
        self.events.drain(..).collect()
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
