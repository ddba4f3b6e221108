//! Fallback visibility enforcement.
//!
//! The one correctness-critical guarantee of the motion layer: elements
//! targeted by entrance animations must end up visible even if the engine
//! never runs. Enforcement writes styles directly on the stage, bypassing
//! the engine entirely, and is idempotent — forcing an already-visible
//! element is harmless.

use tracing::debug;

use crate::stage::Stage;

/// How long degraded content may stay hidden before it is forced visible.
/// Fixed by design; callers cannot extend the window.
pub const FALLBACK_DELAY_MS: f64 = 100.0;

/// Force every still-hidden element matching the selector to a fully
/// visible, untransformed state.
///
/// Elements that already have a positive opacity are left alone so a
/// completed or in-flight entrance is not clobbered.
pub fn ensure_visible(stage: &mut Stage, selector: &str) {
    for id in stage.query(selector) {
        if let Some(style) = stage.style_mut(&id) {
            if style.is_hidden() {
                debug!(target_id = %id, "forcing hidden element visible");
                style.opacity = Some(1.0);
                style.reset_transform();
            }
        }
    }
}

/// Enforce visibility for every selector in the list.
pub fn ensure_visible_all(stage: &mut Stage, selectors: &[String]) {
    for selector in selectors {
        ensure_visible(stage, selector);
    }
}

/// Arm the one-shot deferred enforcement pass for the given selectors.
///
/// Fires once, [`FALLBACK_DELAY_MS`] from now on the stage clock; not
/// cancellable.
pub fn schedule(stage: &mut Stage, selectors: Vec<String>) {
    debug!(count = selectors.len(), "arming deferred visibility fallback");
    stage.defer(FALLBACK_DELAY_MS, move |stage| {
        ensure_visible_all(stage, &selectors);
    });
}
