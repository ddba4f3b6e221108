//! Landing-page bootstrap: the named entry points page code calls.
//!
//! Each function is independently callable and safe when the engine is
//! absent — degradation means static, visible content, never missing
//! content. Submission errors are logged and swallowed here, after the
//! dispatcher has already forced the affected content visible.

use tracing::debug;

use super::capability::Engine;
use super::dispatch::{MotionController, MotionOptions, Sequence};
use super::fallback;
use super::interact::InteractionBinder;
use super::presets::EntranceKind;
use crate::stage::Stage;

/// Hero content that must show immediately when degraded.
pub const HERO_SELECTORS: [&str; 3] = ["#hero-title", "#hero-subtitle", "#hero-cta"];

/// Class carried by every entrance-animated element.
pub const REVEAL_SELECTOR: &str = ".reveal";

/// Wire up every entrance animation on the page.
///
/// With no engine, hero content is forced visible immediately and the
/// deferred fallback pass covers the rest.
pub fn init_entrance_animations<E: Engine>(controller: &mut MotionController<E>, stage: &mut Stage) {
    if !controller.engine_available() {
        debug!("animation engine unavailable; showing static content");
        for selector in HERO_SELECTORS {
            fallback::ensure_visible(stage, selector);
        }
        fallback::schedule(stage, vec![REVEAL_SELECTOR.to_string()]);
        return;
    }

    // Above the fold: the hero plays immediately, steps overlapping.
    let hero = HERO_SELECTORS
        .iter()
        .fold(Sequence::new(), |seq, selector| {
            seq.step(*selector, EntranceKind::FadeUp)
        });
    let _ = controller.sequence(stage, hero);

    // Below the fold: everything reveals as it scrolls into view.
    let _ = controller.stagger_group(stage, ".feature-card", MotionOptions::new().gated());
    let _ = controller.fade_left(stage, "#problem-section", MotionOptions::new().gated());
    let _ = controller.fade_right(stage, "#solution-section", MotionOptions::new().gated());
    let _ = controller.scale_in(stage, "#video-player", MotionOptions::new().gated());

    // The call-to-action block chains in once its title appears.
    let cta = [
        "#cta-title",
        "#cta-subtitle",
        "#cta-stats",
        "#cta-form",
        "#trust-indicators",
    ]
    .iter()
    .fold(Sequence::new().starting_at(0.0), |seq, selector| {
        seq.step(*selector, EntranceKind::FadeUp)
    })
    .gated(Default::default());
    let _ = controller.sequence(stage, cta);
}

/// Register the page's hover and tilt feedback bindings.
pub fn init_hover_effects(binder: &mut InteractionBinder) {
    binder.bind_button_hover(".cta-button");
    binder.bind_card_lift(".feature-card");
    binder.bind_tilt(".showcase-card");
}

/// Swap the header between transparent and solid once the page scrolls.
pub fn init_header_scroll_effect<E: Engine>(
    controller: &mut MotionController<E>,
    stage: &mut Stage,
) {
    let _ = controller.header_scroll_effect(stage, "#site-header", 50.0);
}
