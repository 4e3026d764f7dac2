//! Acceptance rules for candidate selection rectangles.
//!
//! A candidate has to pass three checks before it may replace the current
//! selection. The size checks only reject a rectangle that breaks the limit
//! on *both* axes at once; a rectangle that is too wide but not too tall (or
//! too narrow but tall enough) passes them and is left to the bounds check.

use std::fmt;

use crate::geometry::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Why a candidate rectangle was turned down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// At least one corner lies outside the container.
    OutOfBounds,
    /// Wider and taller than the container.
    Oversize,
    /// Narrower and shorter than the minimum size.
    Undersize,
    /// Zero or non-finite width or height. Not produced by
    /// [`Constraints::check`]; the engine tests it before committing.
    NoArea,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rejection::OutOfBounds => "a corner lies outside the container",
            Rejection::Oversize => "wider and taller than the container",
            Rejection::Undersize => "narrower and shorter than the minimum size",
            Rejection::NoArea => "zero or non-finite width or height",
        };
        f.write_str(text)
    }
}

/// The limits a committed selection has to respect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub container: Size,
    pub min_size: Size,
}

impl Constraints {
    pub fn new(container: Size, min_size: Size) -> Self {
        Self { container, min_size }
    }

    /// Runs the bounds, oversize and undersize checks in that order.
    pub fn check(&self, candidate: &Rect) -> Result<(), Rejection> {
        if self.is_out_of_bounds(candidate) {
            return Err(Rejection::OutOfBounds);
        }
        if self.is_oversize(candidate) {
            return Err(Rejection::Oversize);
        }
        if self.is_undersize(candidate) {
            return Err(Rejection::Undersize);
        }
        Ok(())
    }

    pub fn is_valid(&self, candidate: &Rect) -> bool {
        self.check(candidate).is_ok()
    }

    /// True unless all four edges lie within `[0, width] x [0, height]`.
    ///
    /// Written as a negated conjunction so NaN coordinates count as outside.
    pub fn is_out_of_bounds(&self, candidate: &Rect) -> bool {
        let inside = candidate.min_x() >= 0.0
            && candidate.max_x() <= self.container.width
            && candidate.min_y() >= 0.0
            && candidate.max_y() <= self.container.height;
        !inside
    }

    pub fn is_oversize(&self, candidate: &Rect) -> bool {
        candidate.width() > self.container.width && candidate.height() > self.container.height
    }

    pub fn is_undersize(&self, candidate: &Rect) -> bool {
        candidate.width() < self.min_size.width && candidate.height() < self.min_size.height
    }
}
