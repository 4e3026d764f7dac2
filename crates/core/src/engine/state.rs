//! Gesture phase and drag-session types.

use crate::geometry::{Point, Rect};
use crate::transform::ResizeAnchor;
use serde::{Deserialize, Serialize};

/// How a single-pointer drag is interpreted.
///
/// Chosen when the pointer goes down: inside the central third of the
/// selection the drag moves it, anywhere else it drags the nearest corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchMode {
    Move,
    #[default]
    Resize,
}

impl TouchMode {
    /// Classifies a pointer position against the current selection.
    pub fn classify(point: Point, selection: &Rect) -> Self {
        let move_region = selection.inset(selection.width() / 3.0, selection.height() / 3.0);
        if move_region.contains(point) {
            TouchMode::Move
        } else {
            TouchMode::Resize
        }
    }
}

/// Phase of the pinch gesture stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinchPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

/// What the current drag does with each pointer sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum DragAction {
    Move,
    Resize(ResizeAnchor),
}

impl DragAction {
    pub(crate) fn mode(&self) -> TouchMode {
        match self {
            DragAction::Move => TouchMode::Move,
            DragAction::Resize(_) => TouchMode::Resize,
        }
    }
}

/// Lives from pointer-down until pointer-up or cancel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct GestureSession {
    pub(crate) action: DragAction,
    pub(crate) last_touch: Point,
}

impl GestureSession {
    pub(crate) fn begin(point: Point, selection: &Rect) -> Self {
        let action = match TouchMode::classify(point, selection) {
            TouchMode::Move => DragAction::Move,
            TouchMode::Resize => DragAction::Resize(ResizeAnchor::grab(point, selection)),
        };
        Self {
            action,
            last_touch: point,
        }
    }
}
