//! Pointer event data for stage elements.
//!
//! The stage does not keep listener callbacks; interested parties (the
//! interaction binder) receive events through explicit routing calls, which
//! keeps all style mutation on one code path.

use serde::{Deserialize, Serialize};

/// Kind of pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    /// Pointer entered the element.
    Enter,
    /// Pointer left the element.
    Leave,
    /// Pointer moved while over the element.
    Move,
}

/// Pointer event data.
///
/// Coordinates are in document space; consumers convert to element-local
/// space through the element's rect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,
    /// Id of the element under the pointer.
    pub target: String,
    /// X coordinate in document space.
    pub x: f64,
    /// Y coordinate in document space.
    pub y: f64,
}

impl PointerEvent {
    /// Pointer entered the given element.
    pub fn enter(target: impl Into<String>) -> Self {
        Self {
            kind: PointerKind::Enter,
            target: target.into(),
            x: 0.0,
            y: 0.0,
        }
    }

    /// Pointer left the given element.
    pub fn leave(target: impl Into<String>) -> Self {
        Self {
            kind: PointerKind::Leave,
            target: target.into(),
            x: 0.0,
            y: 0.0,
        }
    }

    /// Pointer moved over the given element.
    pub fn moved(target: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Move,
            target: target.into(),
            x,
            y,
        }
    }
}
