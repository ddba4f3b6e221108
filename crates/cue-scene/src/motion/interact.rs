//! Hover and pointer-tilt micro-interactions.
//!
//! The binder holds persistent bindings (selector + feedback property sets)
//! and turns routed pointer events into short, ungated tween requests. It
//! never mutates styles itself; requests flow through the dispatcher so
//! conflict resolution and error handling stay on one path.

use cue_tween::{EasingFunction, PropertySet, StyleProperty, TweenRequest, TweenSpec};

use super::presets::{self, HoverPreset};
use crate::element::Rect;
use crate::events::{PointerEvent, PointerKind};
use crate::selector::Selector;
use crate::stage::Stage;

/// Extreme tilt rotation at the element edges, in degrees.
pub const TILT_MAX_DEG: f64 = 10.0;
/// Duration of the tilt-follow tween while the pointer moves.
pub const TILT_RESPONSE_MS: f32 = 300.0;
/// Duration of the springy return to flat on pointer leave.
pub const TILT_RETURN_MS: f32 = 800.0;

/// A hover binding: enter/leave property sets for every element matching a
/// selector.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverBinding {
    /// Which elements this binding covers.
    pub selector: Selector,
    /// Properties tweened to on pointer enter.
    pub enter: PropertySet,
    /// Properties tweened to on pointer leave.
    pub leave: PropertySet,
    /// Timing for both directions.
    pub spec: TweenSpec,
}

/// A tilt binding: pointer-position-driven 3D rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct TiltBinding {
    /// Which elements this binding covers.
    pub selector: Selector,
    /// Extreme rotation at the element edges, in degrees.
    pub max_deg: f64,
}

/// Map a document-space pointer position to (rotate_x, rotate_y) degrees.
///
/// Vertical position maps linearly onto [-max, +max] for the X axis;
/// horizontal position maps onto the mirrored [+max, -max] for the Y axis.
/// The exact center therefore yields zero on both axes.
pub fn tilt_angles(rect: &Rect, x: f64, y: f64, max_deg: f64) -> (f64, f64) {
    if rect.w <= 0.0 || rect.h <= 0.0 {
        return (0.0, 0.0);
    }
    let local_x = ((x - rect.x) / rect.w).clamp(0.0, 1.0);
    let local_y = ((y - rect.y) / rect.h).clamp(0.0, 1.0);

    let rotate_x = -max_deg + local_y * 2.0 * max_deg;
    let rotate_y = max_deg - local_x * 2.0 * max_deg;
    (rotate_x, rotate_y)
}

/// Persistent hover and tilt bindings.
#[derive(Debug, Clone, Default)]
pub struct InteractionBinder {
    hovers: Vec<HoverBinding>,
    tilts: Vec<TiltBinding>,
}

impl InteractionBinder {
    /// An empty binder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind arbitrary enter/leave property sets to a selector.
    pub fn bind_hover(
        &mut self,
        selector: &str,
        enter: PropertySet,
        leave: PropertySet,
        spec: TweenSpec,
    ) {
        self.hovers.push(HoverBinding {
            selector: Selector::parse(selector),
            enter,
            leave,
            spec,
        });
    }

    /// Bind the button hover preset (grow slightly, snap back).
    pub fn bind_button_hover(&mut self, selector: &str) {
        let HoverPreset { enter, leave, spec } = presets::button_hover();
        self.bind_hover(selector, enter, leave, spec);
    }

    /// Bind the card lift preset (lift and grow slightly).
    pub fn bind_card_lift(&mut self, selector: &str) {
        let HoverPreset { enter, leave, spec } = presets::card_lift();
        self.bind_hover(selector, enter, leave, spec);
    }

    /// Bind the pointer tilt effect to a selector.
    pub fn bind_tilt(&mut self, selector: &str) {
        self.tilts.push(TiltBinding {
            selector: Selector::parse(selector),
            max_deg: TILT_MAX_DEG,
        });
    }

    /// Number of bindings held.
    pub fn len(&self) -> usize {
        self.hovers.len() + self.tilts.len()
    }

    /// Whether the binder holds no bindings.
    pub fn is_empty(&self) -> bool {
        self.hovers.is_empty() && self.tilts.is_empty()
    }

    /// Translate a pointer event into the feedback requests it triggers.
    ///
    /// Events on elements without matching bindings produce nothing.
    pub fn requests_for(&self, stage: &Stage, event: &PointerEvent) -> Vec<TweenRequest> {
        let Some(element) = stage.element(&event.target) else {
            return Vec::new();
        };

        let mut requests = Vec::new();

        for hover in self.hovers.iter().filter(|h| h.selector.matches(element)) {
            let props = match event.kind {
                PointerKind::Enter => hover.enter.clone(),
                PointerKind::Leave => hover.leave.clone(),
                PointerKind::Move => continue,
            };
            requests.push(TweenRequest::to(
                vec![element.id.clone()],
                props,
                hover.spec.clone(),
            ));
        }

        for tilt in self.tilts.iter().filter(|t| t.selector.matches(element)) {
            match event.kind {
                PointerKind::Move => {
                    let (rotate_x, rotate_y) =
                        tilt_angles(&element.rect, event.x, event.y, tilt.max_deg);
                    requests.push(TweenRequest::to(
                        vec![element.id.clone()],
                        PropertySet::new()
                            .with(StyleProperty::RotateX, rotate_x)
                            .with(StyleProperty::RotateY, rotate_y),
                        TweenSpec::new(TILT_RESPONSE_MS)
                            .with_easing(EasingFunction::power_out(2.0)),
                    ));
                }
                PointerKind::Leave => {
                    requests.push(TweenRequest::to(
                        vec![element.id.clone()],
                        PropertySet::new()
                            .with(StyleProperty::RotateX, 0.0)
                            .with(StyleProperty::RotateY, 0.0),
                        TweenSpec::new(TILT_RETURN_MS)
                            .with_easing(EasingFunction::elastic_out(1.0, 0.5)),
                    ));
                }
                PointerKind::Enter => {}
            }
        }

        requests
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use cue_tween::StyleValue;

    fn stage_with_card() -> Stage {
        let mut stage = Stage::new();
        stage.insert(
            Element::new("showcase-1")
                .class("showcase-card")
                .visible()
                .rect(100.0, 200.0, 400.0, 300.0),
        );
        stage.insert(
            Element::new("cta-button")
                .class("cta-button")
                .visible()
                .rect(0.0, 0.0, 120.0, 40.0),
        );
        stage
    }

    #[test]
    fn test_tilt_center_is_flat() {
        let rect = Rect::new(100.0, 200.0, 400.0, 300.0);
        let (cx, cy) = rect.center();
        let (rx, ry) = tilt_angles(&rect, cx, cy, TILT_MAX_DEG);
        assert_eq!(rx, 0.0);
        assert_eq!(ry, 0.0);
    }

    #[test]
    fn test_tilt_corners_reach_extremes() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let max = TILT_MAX_DEG;

        // Top-left: pointer above center tilts away (-X), left of center (+Y)
        assert_eq!(tilt_angles(&rect, 0.0, 0.0, max), (-max, max));
        // Top-right
        assert_eq!(tilt_angles(&rect, 200.0, 0.0, max), (-max, -max));
        // Bottom-left
        assert_eq!(tilt_angles(&rect, 0.0, 100.0, max), (max, max));
        // Bottom-right
        assert_eq!(tilt_angles(&rect, 200.0, 100.0, max), (max, -max));
    }

    #[test]
    fn test_tilt_out_of_bounds_clamps() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let (rx, ry) = tilt_angles(&rect, -50.0, 500.0, TILT_MAX_DEG);
        assert_eq!((rx, ry), (TILT_MAX_DEG, TILT_MAX_DEG));
    }

    #[test]
    fn test_degenerate_rect_is_flat() {
        let rect = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(tilt_angles(&rect, 10.0, 10.0, TILT_MAX_DEG), (0.0, 0.0));
    }

    #[test]
    fn test_hover_enter_and_leave_requests() {
        let stage = stage_with_card();
        let mut binder = InteractionBinder::new();
        binder.bind_button_hover(".cta-button");

        let enter = binder.requests_for(&stage, &PointerEvent::enter("cta-button"));
        assert_eq!(enter.len(), 1);
        assert_eq!(
            enter[0].to.get(StyleProperty::Scale),
            Some(&StyleValue::from(1.05))
        );
        assert!(enter[0].gate.is_none());

        let leave = binder.requests_for(&stage, &PointerEvent::leave("cta-button"));
        assert_eq!(
            leave[0].to.get(StyleProperty::Scale),
            Some(&StyleValue::from(1.0))
        );
    }

    #[test]
    fn test_unbound_element_produces_nothing() {
        let stage = stage_with_card();
        let mut binder = InteractionBinder::new();
        binder.bind_button_hover(".cta-button");

        assert!(binder
            .requests_for(&stage, &PointerEvent::enter("showcase-1"))
            .is_empty());
        assert!(binder
            .requests_for(&stage, &PointerEvent::enter("missing"))
            .is_empty());
    }

    #[test]
    fn test_tilt_move_tracks_pointer() {
        let stage = stage_with_card();
        let mut binder = InteractionBinder::new();
        binder.bind_tilt(".showcase-card");

        // Bottom-right corner of showcase-1 (rect 100,200 400x300)
        let requests =
            binder.requests_for(&stage, &PointerEvent::moved("showcase-1", 500.0, 500.0));
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].to.get(StyleProperty::RotateX),
            Some(&StyleValue::from(TILT_MAX_DEG))
        );
        assert_eq!(
            requests[0].to.get(StyleProperty::RotateY),
            Some(&StyleValue::from(-TILT_MAX_DEG))
        );
    }

    #[test]
    fn test_tilt_leave_springs_back_flat() {
        let stage = stage_with_card();
        let mut binder = InteractionBinder::new();
        binder.bind_tilt(".showcase-card");

        let requests = binder.requests_for(&stage, &PointerEvent::leave("showcase-1"));
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].to.get(StyleProperty::RotateX),
            Some(&StyleValue::from(0.0))
        );
        assert!(matches!(
            requests[0].spec.easing,
            EasingFunction::ElasticOut { .. }
        ));
        assert_eq!(requests[0].spec.duration_ms, TILT_RETURN_MS);
    }
}
