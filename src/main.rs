//! Demo driver: wires the landing-page scene, plays the entrance
//! animations, and simulates a visitor scrolling and hovering.
//!
//! Run with `CUE_NO_ENGINE=1` to watch the fallback path keep everything
//! visible without an engine.

use anyhow::Result;

use cue_config::CueConfig;
use cue_scene::motion::presets::GROUP_STAGGER_MS;
use cue_scene::{
    Element, InteractionBinder, MotionController, MotionOptions, PointerEvent, Stage,
    init_entrance_animations, init_header_scroll_effect, init_hover_effects,
};
use cue_tween::TweenEngine;

/// Build the landing-page scene: header, hero, feature grid, story
/// sections, video, showcase, and the call-to-action block.
fn build_stage(width: f64, height: f64) -> Stage {
    let mut stage = Stage::with_viewport(width, height);

    stage.insert(Element::new("site-header").visible().rect(0.0, 0.0, width, 64.0));

    stage.insert(Element::new("hero-title").class("reveal").rect(160.0, 180.0, 960.0, 72.0));
    stage.insert(Element::new("hero-subtitle").class("reveal").rect(160.0, 280.0, 960.0, 40.0));
    stage.insert(Element::new("hero-cta").class("reveal").class("cta-button").rect(160.0, 360.0, 220.0, 56.0));

    for i in 0..3 {
        stage.insert(
            Element::new(format!("card-{}", i + 1))
                .class("feature-card")
                .class("reveal")
                .rect(160.0 + i as f64 * 340.0, 900.0, 300.0, 260.0),
        );
    }

    stage.insert(Element::new("problem-section").class("reveal").rect(160.0, 1350.0, 460.0, 320.0));
    stage.insert(Element::new("solution-section").class("reveal").rect(660.0, 1350.0, 460.0, 320.0));
    stage.insert(Element::new("video-player").class("reveal").rect(260.0, 1800.0, 760.0, 430.0));

    for i in 0..2 {
        stage.insert(
            Element::new(format!("showcase-{}", i + 1))
                .class("showcase-card")
                .class("reveal")
                .rect(160.0 + i as f64 * 520.0, 2350.0, 480.0, 320.0),
        );
    }

    stage.insert(Element::new("cta-title").class("reveal").rect(160.0, 2800.0, 960.0, 56.0));
    stage.insert(Element::new("cta-subtitle").class("reveal").rect(160.0, 2880.0, 960.0, 36.0));
    stage.insert(Element::new("cta-stats").class("reveal").rect(160.0, 2940.0, 960.0, 80.0));
    stage.insert(Element::new("cta-form").class("reveal").class("cta-button").rect(160.0, 3040.0, 420.0, 56.0));
    stage.insert(Element::new("trust-indicators").class("reveal").rect(160.0, 3120.0, 960.0, 40.0));

    stage
}

fn visible_count(stage: &Stage) -> usize {
    stage
        .query(".reveal")
        .iter()
        .filter(|id| stage.style(id).is_some_and(|s| !s.is_hidden()))
        .count()
}

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let mut config = CueConfig::load_or_default();
    config.merge_with_env();

    let mut stage = build_stage(config.demo.viewport_width, config.demo.viewport_height);
    let total = stage.query(".reveal").len();

    let engine = if config.demo.no_engine {
        None
    } else {
        Some(TweenEngine::new())
    };
    let mut controller = MotionController::new(engine);
    let mut binder = InteractionBinder::new();

    init_entrance_animations(&mut controller, &mut stage);
    init_header_scroll_effect(&mut controller, &mut stage);
    init_hover_effects(&mut binder);

    // The showcase grid is wired by hand so config timing overrides apply.
    let mut showcase = MotionOptions::new().gated();
    showcase.stagger_ms = config.motion.stagger_ms.unwrap_or(GROUP_STAGGER_MS);
    if let Some(duration) = config.motion.duration_ms {
        showcase = showcase.duration(duration);
    }
    if let Some(threshold) = config.motion.gate_threshold {
        showcase = showcase.gate(cue_scene::motion::GateOptions::default().threshold(threshold));
    }
    let _ = controller.stagger_group(&mut stage, ".showcase-card", showcase);

    log::info!(
        "landing page ready: {total} animated elements, engine {}",
        if controller.engine_available() { "present" } else { "absent" }
    );

    // A visitor session: read the hero, scroll the page, poke at things.
    let frame_ms = config.demo.frame_ms.max(1.0) as f64;
    let scroll_plan = [
        (0, 0.0),
        (90, 700.0),
        (150, 1400.0),
        (210, 2100.0),
        (270, 2800.0),
    ];

    for frame in 0..360u32 {
        if let Some((_, y)) = scroll_plan.iter().find(|(f, _)| *f == frame) {
            stage.scroll_to(*y);
            log::info!("scrolled to {y}px");
        }

        // Hover the hero button for a moment
        if frame == 30 {
            controller.route_pointer(&mut stage, &binder, &PointerEvent::enter("hero-cta"))?;
        }
        if frame == 60 {
            controller.route_pointer(&mut stage, &binder, &PointerEvent::leave("hero-cta"))?;
        }

        // Sweep the pointer across the first showcase card
        if (300..320).contains(&frame) {
            let t = (frame - 300) as f64 / 19.0;
            let x = 160.0 + 480.0 * t;
            let y = 2350.0 + 320.0 * t;
            controller.route_pointer(&mut stage, &binder, &PointerEvent::moved("showcase-1", x, y))?;
        }
        if frame == 320 {
            controller.route_pointer(&mut stage, &binder, &PointerEvent::leave("showcase-1"))?;
        }

        stage.advance(frame_ms);
        if let Some(engine) = controller.engine_mut() {
            engine.on_scroll(&stage);
            engine.update(frame_ms as f32);
            engine.apply_to(&mut stage);
            for event in engine.drain_events() {
                log::debug!("{event:?}");
            }
        }

        if frame % 60 == 0 {
            log::info!(
                "frame {frame}: {}/{} elements visible",
                visible_count(&stage),
                total
            );
        }
    }

    let visible = visible_count(&stage);
    log::info!("session done: {visible}/{total} elements visible");
    if visible != total {
        for id in stage.query(".reveal") {
            if stage.style(&id).is_some_and(|s| s.is_hidden()) {
                log::warn!("still hidden: {id}");
            }
        }
    }

    Ok(())
}
