//! Recorded gesture scripts.
//!
//! A script captures a container, an initial selection and the sequence of
//! inputs a host delivered. Replaying it through a fresh [`AreaSelector`]
//! reproduces every commit, which makes scripts handy for bug reports and
//! regression tests.
//!
//! ```json
//! {
//!   "container": { "origin": { "x": 0, "y": 0 }, "size": { "width": 300, "height": 300 } },
//!   "selection": { "origin": { "x": 50, "y": 50 }, "size": { "width": 100, "height": 100 } },
//!   "events": [
//!     { "type": "pinch", "phase": "changed", "scale": 2.0 },
//!     { "type": "pointer_down", "x": 100, "y": 100 },
//!     { "type": "pointer_move", "x": 220, "y": 220 },
//!     { "type": "pointer_up", "x": 220, "y": 220 }
//!   ]
//! }
//! ```

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use crate::config::SelectorConfig;
use crate::engine::{AreaSelector, PinchPhase};
use crate::error::Result;
use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One input delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    PointerCancel,
    Pinch { phase: PinchPhase, scale: f64 },
}

impl InputEvent {
    /// Delivers the event to `selector`.
    pub fn apply(&self, selector: &mut AreaSelector) {
        match *self {
            InputEvent::PointerDown { x, y } => selector.on_pointer_down(Point::new(x, y)),
            InputEvent::PointerMove { x, y } => {
                selector.on_pointer_move(Point::new(x, y));
            }
            InputEvent::PointerUp { x, y } => selector.on_pointer_up(Point::new(x, y)),
            InputEvent::PointerCancel => selector.on_pointer_cancel(),
            InputEvent::Pinch { phase, scale } => {
                selector.on_pinch(phase, scale);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    pub container: Rect,
    pub selection: Rect,
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

impl GestureScript {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Runs every event through a freshly configured selector and returns
    /// the committed selections in order.
    ///
    /// # Errors
    ///
    /// Fails only if the script's container or initial selection is
    /// rejected at setup.
    pub fn replay(&self, config: SelectorConfig) -> Result<Vec<Rect>> {
        let mut selector = AreaSelector::with_config(config, self.container, self.selection)?;

        let commits = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&commits);
        selector.set_commit_listener(move |rect| sink.borrow_mut().push(rect));

        for event in &self.events {
            event.apply(&mut selector);
        }

        drop(selector);
        let commits = commits.take();
        debug!(events = self.events.len(), commits = commits.len(), "Script replayed");
        Ok(commits)
    }
}
