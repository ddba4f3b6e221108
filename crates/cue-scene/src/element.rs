//! Stage elements: the animatable units of the scene.

use serde::{Deserialize, Serialize};

use super::style::ComputedStyle;

/// Axis-aligned rectangle in document space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// Create a rectangle from position and size.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Whether the given document-space point lies inside.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// One element on the stage.
///
/// Elements are addressed by id (unique) and classes (shared), like their
/// document counterparts. Geometry is static: layout is not this crate's
/// concern, so rects are assigned at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Unique id, without the `#` prefix.
    pub id: String,
    /// Class names, without the `.` prefix.
    pub classes: Vec<String>,
    /// Position and size in document space.
    pub rect: Rect,
    /// Current visual style.
    pub style: ComputedStyle,
}

impl Element {
    /// Create an element with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            classes: Vec::new(),
            rect: Rect::default(),
            style: ComputedStyle::default(),
        }
    }

    /// Add a class name.
    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.classes.push(name.into());
        self
    }

    /// Set the element's rectangle.
    pub fn rect(mut self, x: f64, y: f64, w: f64, h: f64) -> Self {
        self.rect = Rect::new(x, y, w, h);
        self
    }

    /// Mark the element visible from the start (opacity 1).
    ///
    /// Elements default to unset opacity, the state entrance targets are in
    /// before any animation or fallback touches them.
    pub fn visible(mut self) -> Self {
        self.style.opacity = Some(1.0);
        self
    }

    /// Whether the element carries the given class.
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }
}
