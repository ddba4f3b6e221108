//! Property tween engine for scene elements.
//!
//! This crate provides:
//! - **Tweens**: Interpolation of element style properties over time
//! - **Timelines**: Ordered tween groups with overlapping offsets
//! - **Scroll gating**: Requests held until a trigger scrolls into view
//! - **Easing Functions**: CSS curves plus power/back/elastic variants
//! - **Tween Events**: Lifecycle notifications polled after each update
//!
//! # Architecture
//!
//! ```text
//! TweenEngine
//!   ├── Active tweens (per target+property, newest request wins)
//!   ├── Pending gates (scroll-triggered requests and timelines)
//!   └── Resolved values (written out through a StyleSink each frame)
//! ```
//!
//! The engine knows nothing about any concrete scene: positions come in
//! through `ViewQuery` and resolved styles go out through `StyleSink`.

pub mod color;
pub mod easing;
pub mod engine;
pub mod events;
pub mod interpolate;
pub mod scroll;
pub mod timeline;
pub mod tween;
pub mod types;

pub use easing::EasingFunction;
pub use engine::{EngineError, StyleSink, TweenEngine};
pub use events::{EventQueue, TweenEvent};
pub use interpolate::Interpolate;
pub use scroll::{ScrollGate, ScrollToggle, ViewQuery};
pub use timeline::{Timeline, TimelineEntry};
pub use tween::{ActiveTween, TweenRequest, TweenSpec};
pub use types::{
    PlaybackState, PropertySet, StyleProperty, StyleValue, StyleValueKind, TweenId,
};
