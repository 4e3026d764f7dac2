//! Area Selector Core Library
//!
//! The geometry engine behind an interactive image-crop area selector. Given
//! a fixed container rectangle and a selection rectangle inside it, the
//! engine interprets pinch, drag and corner-drag input and keeps the
//! selection valid at all times.
//!
//! # Overview
//!
//! Rendering is left to the host. It forwards pointer and pinch events to an
//! [`AreaSelector`] and redraws whenever the selector reports a commit. The
//! library handles:
//!
//! - **Geometry**: points, sizes, rectangles and corner lookup via [`geometry`]
//! - **Validation**: bounds and size limits via [`constraints`]
//! - **Transforms**: scale, move and vertex resize via [`transform`]
//! - **Interaction**: the gesture state machine via [`engine`]
//! - **Replay**: recorded gesture scripts via [`script`]
//!
//! # Quick Start
//!
//! ```ignore
//! use area_selector_core::{AreaSelector, Point, Rect};
//!
//! let mut selector = AreaSelector::configure(
//!     Rect::new(0.0, 0.0, 300.0, 300.0),
//!     Rect::new(50.0, 50.0, 100.0, 100.0),
//! )?;
//! selector.set_commit_listener(|rect| println!("redraw {rect:?}"));
//!
//! selector.on_pointer_down(Point::new(100.0, 100.0));
//! selector.on_pointer_move(Point::new(220.0, 220.0));
//! selector.on_pointer_up(Point::new(220.0, 220.0));
//! ```
//!
//! # Threading
//!
//! All calls are expected on one thread, in the order the host received
//! the events. [`AreaSelector`] is `!Send`; its commit listener is a plain
//! `FnMut` that may capture UI state.

pub mod config;
pub mod constraints;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod script;
pub mod transform;

// Re-export primary types for convenience
pub use config::SelectorConfig;
pub use constraints::{Constraints, Rejection};
pub use engine::{AreaSelector, PinchPhase, TouchMode};
pub use error::{Result, SelectorError};
pub use geometry::{Corner, Point, Rect, Size};
pub use script::{GestureScript, InputEvent};

/// Initializes the library by loading environment variables.
///
/// Call this once at application startup before [`SelectorConfig::load`].
/// This loads `.env` files if present.
pub fn init() {
    let _ = dotenvy::dotenv();
}
