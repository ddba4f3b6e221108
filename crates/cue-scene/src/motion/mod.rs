//! The motion layer: entrance intents, fallback visibility, interactions.
//!
//! This module turns semantic intents ("fade this in when scrolled into
//! view") into engine requests, and guarantees the one invariant the page
//! depends on: content targeted by an entrance ends up visible within a
//! bounded time, whatever happens to the engine.
//!
//! # Architecture
//!
//! ```text
//! MotionController (holds Option<Engine>)
//!   ├── entrance intents → TweenRequest / Timeline submissions
//!   ├── error branch → fallback::ensure_visible_all (immediate)
//!   └── route_pointer → InteractionBinder requests
//!
//! fallback (bypasses the engine, writes styles directly)
//!   └── deferred one-shot pass over registered selectors
//! ```

pub mod bootstrap;
pub mod capability;
pub mod dispatch;
pub mod fallback;
pub mod interact;
pub mod presets;

pub use bootstrap::{
    HERO_SELECTORS, REVEAL_SELECTOR, init_entrance_animations, init_header_scroll_effect,
    init_hover_effects,
};
pub use capability::Engine;
pub use dispatch::{GateOptions, MotionController, MotionOptions, Sequence, SequenceStep};
pub use fallback::{FALLBACK_DELAY_MS, ensure_visible, ensure_visible_all};
pub use interact::{InteractionBinder, TILT_MAX_DEG, tilt_angles};
pub use presets::EntranceKind;
