//! Candidate rectangles produced from gesture input.
//!
//! Nothing here validates its output. Every candidate goes through
//! [`Constraints`](crate::constraints::Constraints) before the engine
//! commits it.

use crate::geometry::{Corner, Point, Rect, Size};

/// Range a pinch scale factor is clamped to for one selection size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    pub min: f64,
    pub max: f64,
}

impl ScaleLimits {
    /// `min` is the larger of the per-axis ratios needed to reach
    /// `min_size`; `max` is the smaller of the per-axis ratios that still
    /// fit in `container`.
    pub fn new(selection: Size, container: Size, min_size: Size) -> Self {
        let min = (min_size.width / selection.width).max(min_size.height / selection.height);
        let max = (container.width / selection.width).min(container.height / selection.height);
        Self { min, max }
    }

    /// Pins `scale` into `[min, max]`.
    ///
    /// The lower bound is tested first. If the limits ever cross, a scale at
    /// or below `min` yields `min` and anything above it yields `max`.
    pub fn clamp(&self, scale: f64) -> f64 {
        if scale <= self.min {
            self.min
        } else if scale >= self.max {
            self.max
        } else {
            scale
        }
    }
}

/// Resizes `size` by `scale` while keeping the result centred on `center`.
pub fn scale_around(center: Point, size: Size, scale: f64) -> Rect {
    let scaled = size.scaled(scale);
    let origin = Point::new(
        center.x - scaled.width / 2.0,
        center.y - scaled.height / 2.0,
    );
    Rect::from_origin_size(origin, scaled)
}

/// New origin for a selection of `selection` size dragged so that it is
/// centred on `touch`, kept inside `container`.
///
/// Each axis clamps against its low bound first and its high bound second,
/// so the high bound wins when the selection does not fit. Horizontally half
/// the border is kept free at both edges; vertically the selection may touch
/// the container edges.
pub fn move_to(touch: Point, selection: Size, container: Size, border_width: f64) -> Point {
    let half_border = border_width / 2.0;

    let mut x = touch.x - selection.width / 2.0;
    x = x.max(half_border);
    x = x.min(container.width - selection.width - half_border);

    let mut y = touch.y - selection.height / 2.0;
    y = y.max(0.0);
    y = y.min(container.height - selection.height);

    Point::new(x, y)
}

/// The fixed corner of a vertex-resize drag.
///
/// Grabbed once when the drag starts. Every later sample spans a new
/// rectangle between the anchor and the touch point, however far the
/// pointer wanders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeAnchor {
    /// The corner the user grabbed.
    pub grabbed: Corner,
    /// Position of the corner diagonally opposite the grabbed one.
    pub point: Point,
}

impl ResizeAnchor {
    pub fn grab(start: Point, frame: &Rect) -> Self {
        let grabbed = frame.nearest_corner(start);
        Self {
            grabbed,
            point: frame.opposite_corner(grabbed),
        }
    }

    pub fn resize_to(&self, touch: Point) -> Rect {
        Rect::from_two_points(self.point, touch)
    }
}
