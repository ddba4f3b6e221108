//! In-memory stage and the motion layer that animates it.
//!
//! This crate provides:
//! - **Stage**: an element tree with selectors, styles, a scrollable
//!   viewport, and a one-shot deferred-callback queue
//! - **Motion**: entrance-animation intents dispatched to an injected
//!   engine capability, with a guaranteed visibility fallback
//! - **Interactions**: hover and pointer-tilt feedback bindings
//!
//! The tween engine itself lives in `cue-tween`; the stage implements its
//! `ViewQuery`/`StyleSink` traits so the two compose without either knowing
//! the other's internals.

pub mod element;
pub mod events;
pub mod motion;
pub mod selector;
pub mod stage;
pub mod style;

pub use element::{Element, Rect};
pub use events::{PointerEvent, PointerKind};
pub use motion::{
    EntranceKind, InteractionBinder, MotionController, MotionOptions, Sequence,
    init_entrance_animations, init_header_scroll_effect, init_hover_effects,
};
pub use selector::Selector;
pub use stage::{Stage, Viewport};
pub use style::ComputedStyle;
