//! The selection state machine.
//!
//! [`AreaSelector`] owns the committed selection and turns pointer and pinch
//! input into new candidates. The host serializes every call on one thread;
//! nothing in here blocks or suspends, and each input is handled to
//! completion (classify, transform, validate, commit) before returning.

use tracing::{debug, trace};

use super::state::{DragAction, GestureSession, PinchPhase, TouchMode};
use crate::config::SelectorConfig;
use crate::constraints::{Constraints, Rejection};
use crate::error::{Result, SelectorError};
use crate::geometry::{Point, Rect, Size};
use crate::transform::{move_to, scale_around, ScaleLimits};

/// Callback run once for every committed selection.
pub type CommitListener = Box<dyn FnMut(Rect)>;

/// Interactive crop-area selector over a fixed container.
pub struct AreaSelector {
    config: SelectorConfig,
    container: Rect,
    constraints: Constraints,
    selection: Rect,
    touch_mode: TouchMode,
    session: Option<GestureSession>,
    scale: f64,
    listener: Option<CommitListener>,
}

impl AreaSelector {
    /// Creates a selector with the default 50x50 minimum and no border.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidContainer`] for empty or non-finite
    /// bounds and [`SelectorError::InvalidSelection`] if `initial` does not
    /// pass the constraints.
    pub fn configure(container: Rect, initial: Rect) -> Result<Self> {
        Self::with_config(SelectorConfig::default(), container, initial)
    }

    /// Creates a selector with custom tunables.
    ///
    /// # Errors
    ///
    /// Same as [`AreaSelector::configure`].
    pub fn with_config(config: SelectorConfig, container: Rect, initial: Rect) -> Result<Self> {
        let constraints = constraints_for(&config, &container)?;
        admit(&constraints, &initial).map_err(|reason| SelectorError::InvalidSelection {
            selection: initial,
            reason,
        })?;

        debug!(
            container_width = container.width(),
            container_height = container.height(),
            ?initial,
            "Area selector configured"
        );

        Ok(Self {
            config,
            container,
            constraints,
            selection: initial,
            touch_mode: TouchMode::default(),
            session: None,
            scale: 1.0,
            listener: None,
        })
    }

    /// Registers the callback that receives every committed selection,
    /// replacing any previous one.
    pub fn set_commit_listener(&mut self, listener: impl FnMut(Rect) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn current_selection(&self) -> Rect {
        self.selection
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Move/resize classification from the latest pointer-down or pointer-up.
    pub fn touch_mode(&self) -> TouchMode {
        self.touch_mode
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Latest pointer position of the active drag.
    pub fn last_touch(&self) -> Option<Point> {
        self.session.map(|session| session.last_touch)
    }

    /// Scale factor last applied by the pinch stream.
    pub fn pinch_scale(&self) -> f64 {
        self.scale
    }

    /// Starts a drag session and freezes its mode (and anchor, for resize).
    pub fn on_pointer_down(&mut self, point: Point) {
        let session = GestureSession::begin(point, &self.selection);
        self.touch_mode = session.action.mode();
        debug!(x = point.x, y = point.y, mode = ?self.touch_mode, "Drag started");
        self.session = Some(session);
    }

    /// Feeds one pointer sample to the active drag.
    ///
    /// Returns whether a new selection was committed. Samples arriving with
    /// no active drag are ignored.
    pub fn on_pointer_move(&mut self, point: Point) -> bool {
        let Some(session) = self.session.as_mut() else {
            trace!(x = point.x, y = point.y, "Pointer move without a drag, ignoring");
            return false;
        };
        session.last_touch = point;

        let candidate = match session.action {
            DragAction::Move => {
                let origin = move_to(
                    point,
                    self.selection.size,
                    self.container.size,
                    self.config.border_width,
                );
                Rect::from_origin_size(origin, self.selection.size)
            }
            DragAction::Resize(anchor) => anchor.resize_to(point),
        };
        self.try_commit(candidate)
    }

    /// Ends the drag session.
    ///
    /// The release point is classified again so that [`touch_mode`] reflects
    /// where the pointer was lifted; the next pointer-down classifies anew.
    ///
    /// [`touch_mode`]: AreaSelector::touch_mode
    pub fn on_pointer_up(&mut self, point: Point) {
        self.touch_mode = TouchMode::classify(point, &self.selection);
        if self.session.take().is_some() {
            debug!(x = point.x, y = point.y, next_mode = ?self.touch_mode, "Drag ended");
        }
    }

    /// Abandons the drag session. Already committed selections stay.
    pub fn on_pointer_cancel(&mut self) {
        if self.session.take().is_some() {
            debug!("Drag cancelled");
        }
    }

    /// Feeds one update from the pinch gesture stream.
    ///
    /// `Changed` and `Ended` scale the selection about its center by the
    /// clamped factor; `Cancelled` and `Failed` reset the factor to 1.
    /// Returns whether a new selection was committed.
    pub fn on_pinch(&mut self, phase: PinchPhase, scale_factor: f64) -> bool {
        match phase {
            PinchPhase::Began => false,
            PinchPhase::Changed | PinchPhase::Ended => {
                let limits = ScaleLimits::new(
                    self.selection.size,
                    self.container.size,
                    self.config.min_size,
                );
                self.scale = limits.clamp(scale_factor);
                trace!(requested = scale_factor, applied = self.scale, ?phase, "Pinch");
                let candidate =
                    scale_around(self.selection.center(), self.selection.size, self.scale);
                self.try_commit(candidate)
            }
            PinchPhase::Cancelled | PinchPhase::Failed => {
                self.scale = 1.0;
                debug!(?phase, "Pinch abandoned");
                false
            }
        }
    }

    /// Swaps in new container bounds, for example after a rotation.
    ///
    /// A selection that still fits is kept as is and `Ok(false)` is
    /// returned. Otherwise the selection is shrunk to the container, pushed
    /// back inside it and committed. Any drag in progress is dropped, since
    /// its anchor refers to the old layout.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidContainer`] for empty or non-finite
    /// bounds and [`SelectorError::InvalidSelection`] if even the refitted
    /// selection breaks a constraint. The selector is unchanged on error.
    pub fn resize_container(&mut self, container: Rect) -> Result<bool> {
        let constraints = constraints_for(&self.config, &container)?;
        if constraints.is_valid(&self.selection) {
            self.container = container;
            self.constraints = constraints;
            self.session = None;
            return Ok(false);
        }

        let refitted = refit(&self.selection, container.size);
        admit(&constraints, &refitted)
            .map_err(|reason| SelectorError::InvalidSelection {
                selection: refitted,
                reason,
            })?;

        self.container = container;
        self.constraints = constraints;
        self.session = None;
        self.commit(refitted);
        Ok(true)
    }

    fn try_commit(&mut self, candidate: Rect) -> bool {
        match admit(&self.constraints, &candidate) {
            Ok(()) => {
                self.commit(candidate);
                true
            }
            Err(reason) => {
                trace!(?candidate, %reason, "Candidate rejected");
                false
            }
        }
    }

    fn commit(&mut self, selection: Rect) {
        self.selection = selection;
        debug!(
            x = selection.min_x(),
            y = selection.min_y(),
            width = selection.width(),
            height = selection.height(),
            "Selection committed"
        );
        if let Some(listener) = self.listener.as_mut() {
            listener(selection);
        }
    }
}

/// The constraints plus a positive, finite extent on both axes. The
/// undersize check only needs one side to be long enough, so a zero-width
/// sliver passes it.
fn admit(constraints: &Constraints, candidate: &Rect) -> std::result::Result<(), Rejection> {
    let Size { width, height } = candidate.size;
    let has_area = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
    if !has_area {
        return Err(Rejection::NoArea);
    }
    constraints.check(candidate)
}

fn constraints_for(config: &SelectorConfig, container: &Rect) -> Result<Constraints> {
    let Size { width, height } = container.size;
    let usable = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
    if !usable {
        return Err(SelectorError::InvalidContainer { width, height });
    }
    Ok(Constraints::new(container.size, config.min_size))
}

/// Shrinks `selection` to fit `container` and slides it back inside.
fn refit(selection: &Rect, container: Size) -> Rect {
    let width = selection.width().min(container.width);
    let height = selection.height().min(container.height);
    let x = selection.min_x().max(0.0).min(container.width - width);
    let y = selection.min_y().max(0.0).min(container.height - height);
    Rect::new(x, y, width, height)
}
