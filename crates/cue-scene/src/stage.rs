//! The stage: an in-memory element tree with a scrollable viewport and a
//! one-shot deferred-callback queue.
//!
//! The stage stands in for the document: it owns elements and their styles,
//! answers selector queries, and advances a millisecond clock that fires
//! deferred callbacks (the fallback enforcer's timer). It implements the
//! engine-facing `ViewQuery` and `StyleSink` traits so the tween engine can
//! read positions and write resolved styles without knowing this type.

use tracing::trace;

use cue_tween::{StyleProperty, StyleSink, StyleValue, ViewQuery};

use super::element::{Element, Rect};
use super::selector::Selector;
use super::style::ComputedStyle;

/// The visible window onto the stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Viewport width in pixels.
    pub width: f64,
    /// Viewport height in pixels.
    pub height: f64,
    /// Vertical scroll offset in pixels.
    pub scroll_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            scroll_y: 0.0,
        }
    }
}

/// A one-shot callback scheduled on the stage clock.
struct Deferred {
    due_ms: f64,
    callback: Box<dyn FnOnce(&mut Stage)>,
}

impl std::fmt::Debug for Deferred {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deferred").field("due_ms", &self.due_ms).finish()
    }
}

/// An in-memory element tree with viewport and clock.
#[derive(Debug, Default)]
pub struct Stage {
    elements: Vec<Element>,
    viewport: Viewport,
    deferred: Vec<Deferred>,
    clock_ms: f64,
}

impl Stage {
    /// Create an empty stage with the default viewport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stage with the given viewport size.
    pub fn with_viewport(width: f64, height: f64) -> Self {
        Self {
            viewport: Viewport {
                width,
                height,
                scroll_y: 0.0,
            },
            ..Self::default()
        }
    }

    // ========================================================================
    // Elements
    // ========================================================================

    /// Add an element to the stage.
    ///
    /// Elements keep insertion (document) order; a duplicate id replaces the
    /// existing element.
    pub fn insert(&mut self, element: Element) {
        if let Some(existing) = self.elements.iter_mut().find(|e| e.id == element.id) {
            *existing = element;
        } else {
            self.elements.push(element);
        }
    }

    /// Ids of all elements matching the selector, in document order.
    pub fn query(&self, selector: &str) -> Vec<String> {
        let selector = Selector::parse(selector);
        self.elements
            .iter()
            .filter(|e| selector.matches(e))
            .map(|e| e.id.clone())
            .collect()
    }

    /// Look up an element by id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Look up an element mutably by id.
    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Read an element's style.
    pub fn style(&self, id: &str) -> Option<&ComputedStyle> {
        self.element(id).map(|e| &e.style)
    }

    /// Mutate an element's style.
    pub fn style_mut(&mut self, id: &str) -> Option<&mut ComputedStyle> {
        self.element_mut(id).map(|e| &mut e.style)
    }

    /// Read an element's rectangle.
    pub fn rect(&self, id: &str) -> Option<Rect> {
        self.element(id).map(|e| e.rect)
    }

    /// Topmost element under the given document-space point.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&Element> {
        self.elements.iter().rev().find(|e| e.rect.contains(x, y))
    }

    /// Number of elements on the stage.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the stage has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // ========================================================================
    // Viewport
    // ========================================================================

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Scroll to the given vertical offset.
    pub fn scroll_to(&mut self, y: f64) {
        self.viewport.scroll_y = y.max(0.0);
    }

    // ========================================================================
    // Clock and deferred callbacks
    // ========================================================================

    /// Current stage clock in milliseconds.
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Schedule a one-shot callback `delay_ms` from now.
    pub fn defer(&mut self, delay_ms: f64, callback: impl FnOnce(&mut Stage) + 'static) {
        self.deferred.push(Deferred {
            due_ms: self.clock_ms + delay_ms.max(0.0),
            callback: Box::new(callback),
        });
    }

    /// Number of deferred callbacks not yet fired.
    pub fn pending_deferred(&self) -> usize {
        self.deferred.len()
    }

    /// Advance the clock, firing every deferred callback that came due.
    ///
    /// Each callback fires exactly once; callbacks may schedule further
    /// callbacks, which are picked up on later advances.
    pub fn advance(&mut self, delta_ms: f64) {
        self.clock_ms += delta_ms.max(0.0);

        loop {
            let due = self
                .deferred
                .iter()
                .position(|d| d.due_ms <= self.clock_ms);
            let Some(index) = due else { break };
            let deferred = self.deferred.remove(index);
            trace!(due_ms = deferred.due_ms, "firing deferred callback");
            (deferred.callback)(self);
        }
    }
}

impl ViewQuery for Stage {
    fn element_top(&self, id: &str) -> Option<f64> {
        self.rect(id).map(|r| r.y)
    }

    fn viewport_height(&self) -> f64 {
        self.viewport.height
    }

    fn scroll_y(&self) -> f64 {
        self.viewport.scroll_y
    }
}

impl StyleSink for Stage {
    fn apply_style(&mut self, target: &str, property: StyleProperty, value: &StyleValue) {
        if let Some(style) = self.style_mut(target) {
            style.apply(property, value);
        }
    }
}
