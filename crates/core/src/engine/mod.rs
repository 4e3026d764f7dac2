//! Interaction state machine for the selection rectangle.
//!
//! # Architecture
//!
//! - [`state`]: touch modes, pinch phases and the per-drag session
//! - [`selector`]: the [`AreaSelector`] that dispatches input and commits
//!
//! Two independent gesture streams feed the selector. Pointer input
//! (`down`, `move`, `up`, `cancel`) either moves the selection or drags one
//! of its corners; pinch input scales it about its center. Both share only
//! the committed selection.
//!
//! # Usage
//!
//! ```ignore
//! use area_selector_core::engine::{AreaSelector, PinchPhase};
//! use area_selector_core::geometry::{Point, Rect};
//!
//! let mut selector = AreaSelector::configure(
//!     Rect::new(0.0, 0.0, 300.0, 300.0),
//!     Rect::new(50.0, 50.0, 100.0, 100.0),
//! )?;
//! selector.set_commit_listener(|rect| redraw_mask(rect));
//!
//! selector.on_pinch(PinchPhase::Changed, 2.0);
//! selector.on_pointer_down(Point::new(100.0, 100.0));
//! selector.on_pointer_move(Point::new(220.0, 220.0));
//! selector.on_pointer_up(Point::new(220.0, 220.0));
//! ```

mod selector;
mod state;

pub use selector::{AreaSelector, CommitListener};
pub use state::{PinchPhase, TouchMode};
