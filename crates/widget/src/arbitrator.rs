//! Decide which scroll surface owns a vertical drag.
//!
//! A collapsing header screen nests two scroll surfaces: the outer one drives
//! the height of the header, the inner one scrolls the content of the selected
//! tab. The [`Arbitrator`] receives the drag and scroll notifications of both
//! and corrects their offsets so that:
//!
//! - pulling the content down first scrolls the inner list to its top, then
//!   expands the header;
//! - pulling the content up first collapses the header, then scrolls the
//!   inner list.
//!
//! Every correction skips writing an offset the surface already has, since a
//! write triggers a new scroll notification on the platform side.
use crate::Listener;
use crate::core::scrollable::{self, AbsoluteOffset, Scrollable, Surfaces};
use crate::core::shell;
use crate::core::surface::Id;

/// The surface that currently owns the vertical drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    /// The outer surface moves and the header resizes.
    Outer,
    /// The inner surface scrolls freely and the outer one is held in place.
    Inner,
}

/// The arbitration state of a screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    /// Whether the outer surface is allowed to move.
    pub main_scroll_enabled: bool,
    /// The offset of the outer surface when its last drag began.
    pub main_offset_before_drag: AbsoluteOffset,
    /// The outer surface, recorded when it is first dragged.
    pub outer: Option<Id>,
    /// The inner surface that was dragged last.
    pub active_inner: Option<Id>,
    /// The offset of the active inner surface at its last drag-begin or
    /// recognized direction change.
    pub inner_offset_before_drag: AbsoluteOffset,
}

impl Default for State {
    fn default() -> Self {
        Self {
            main_scroll_enabled: true,
            main_offset_before_drag: AbsoluteOffset::ZERO,
            outer: None,
            active_inner: None,
            inner_offset_before_drag: AbsoluteOffset::ZERO,
        }
    }
}

/// The scroll arbitrator of a collapsing header screen.
///
/// It never owns a surface. Surfaces are identified by [`Id`] and resolved
/// through [`Surfaces`] on every notification; when a lookup fails, the
/// header is considered to be at its bounds and nothing is written.
#[derive(Debug, Default)]
pub struct Arbitrator {
    state: State,
    layout: Option<shell::Handle>,
}

impl Arbitrator {
    /// Creates a new [`Arbitrator`] with the outer surface enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [`shell::Handle`] used to request a new layout pass whenever
    /// the header must follow the outer surface.
    pub fn set_layout_handle(&mut self, handle: impl Into<Option<shell::Handle>>) {
        self.layout = handle.into();
    }

    /// Returns the current [`State`].
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Returns the current [`Owner`] of the drag.
    pub fn owner(&self) -> Owner {
        if self.state.main_scroll_enabled {
            Owner::Outer
        } else {
            Owner::Inner
        }
    }

    /// Returns a [`Listener`] for the outer surface.
    pub fn outer(&mut self) -> Outer<'_> {
        Outer { arbitrator: self }
    }

    /// Returns a [`Listener`] for inner surfaces.
    pub fn inner(&mut self) -> Inner<'_> {
        Inner { arbitrator: self }
    }

    /// The user started dragging the outer surface.
    pub fn outer_drag_began(&mut self, id: Id, surfaces: &dyn Surfaces) {
        self.state.outer = Some(id);

        if let Some(outer) = surfaces.surface(id) {
            self.state.main_offset_before_drag = outer.offset();
        }
    }

    /// The outer surface moved.
    ///
    /// While enabled, the header follows it through a new layout pass.
    /// Otherwise it is snapped back to where its drag began.
    pub fn outer_scrolled(&mut self, id: Id, surfaces: &mut dyn Surfaces) {
        if self.state.main_scroll_enabled {
            self.request_relayout();
            return;
        }

        let Some(outer) = surfaces.surface_mut(id) else {
            return;
        };

        if scrollable::update(outer, self.state.main_offset_before_drag) {
            log::trace!("{id} snapped back to {:?}", self.state.main_offset_before_drag);
        }
    }

    /// The user started dragging an inner surface.
    ///
    /// Dragging a different surface than the last one means the selected tab
    /// changed; arbitration restarts with the outer surface enabled.
    pub fn inner_drag_began(&mut self, id: Id, surfaces: &dyn Surfaces) {
        if let Some(previous) = self.state.active_inner.filter(|active| *active != id) {
            log::debug!("inner surface changed from {previous} to {id}");
            self.state.main_scroll_enabled = true;
        }

        self.state.active_inner = Some(id);

        if let Some(inner) = surfaces.surface(id) {
            self.state.inner_offset_before_drag = inner.offset();
        }
    }

    /// An inner surface moved.
    ///
    /// Notifications of any surface other than the active one are discarded:
    /// a surface that just lost focus may still report its deceleration.
    pub fn inner_scrolled(&mut self, id: Id, surfaces: &mut dyn Surfaces) {
        if self.state.active_inner != Some(id) {
            return;
        }

        let Some(offset) = surfaces.surface(id).map(Scrollable::offset) else {
            return;
        };

        if offset.y == self.state.inner_offset_before_drag.y {
            return;
        }

        if offset.y < self.state.inner_offset_before_drag.y {
            self.pull_down(id, offset, surfaces);
        } else {
            self.pull_up(id, offset, surfaces);
        }
    }

    /// Returns whether the header is collapsed.
    ///
    /// Defaults to `true` while the outer surface is unknown.
    pub fn header_is_min(&self, surfaces: &dyn Surfaces) -> bool {
        self.state
            .outer
            .and_then(|id| surfaces.surface(id))
            .is_none_or(|outer| outer.offset().y == 0.0)
    }

    /// Returns whether the header is fully expanded.
    ///
    /// Defaults to `true` while the outer surface is unknown.
    pub fn header_is_max(&self, surfaces: &dyn Surfaces) -> bool {
        self.state
            .outer
            .and_then(|id| surfaces.surface(id))
            .is_none_or(|outer| outer.top_inset() == outer.offset().y.abs())
    }

    // The list scrolls up to its top first, then the header expands.
    fn pull_down(&mut self, id: Id, offset: AbsoluteOffset, surfaces: &mut dyn Surfaces) {
        if offset.y > 0.0 || self.header_is_max(surfaces) {
            self.state.main_scroll_enabled = false;
            self.state.inner_offset_before_drag = offset;
            return;
        }

        log::trace!("{id} reached its top, expanding header");
        self.state.main_scroll_enabled = true;

        // No overscroll on the list while the header grows
        if let Some(inner) = surfaces.surface_mut(id) {
            let _ = scrollable::update(inner, AbsoluteOffset::ZERO);
        }

        self.state.inner_offset_before_drag = AbsoluteOffset::ZERO;
    }

    // The header collapses first, then the list scrolls.
    fn pull_up(&mut self, id: Id, offset: AbsoluteOffset, surfaces: &mut dyn Surfaces) {
        if self.header_is_min(surfaces) {
            self.state.main_scroll_enabled = false;
            self.state.inner_offset_before_drag = offset;
            return;
        }

        self.state.main_scroll_enabled = true;

        // Rebound of an overscroll; pinning it would loop forever
        if offset.y <= 0.0 {
            return;
        }

        log::trace!("header collapsing, pinning {id}");

        if let Some(inner) = surfaces.surface_mut(id) {
            let _ = scrollable::update(inner, self.state.inner_offset_before_drag);
        }
    }

    fn request_relayout(&self) {
        if let Some(layout) = &self.layout {
            layout.invalidate_layout();
        }
    }
}

/// The [`Listener`] of the outer surface of an [`Arbitrator`].
#[derive(Debug)]
pub struct Outer<'a> {
    arbitrator: &'a mut Arbitrator,
}

impl Listener for Outer<'_> {
    fn on_drag_begin(&mut self, id: Id, surfaces: &mut dyn Surfaces) {
        self.arbitrator.outer_drag_began(id, surfaces);
    }

    fn on_scroll_changed(&mut self, id: Id, surfaces: &mut dyn Surfaces) {
        self.arbitrator.outer_scrolled(id, surfaces);
    }
}

/// The [`Listener`] of the inner surfaces of an [`Arbitrator`].
#[derive(Debug)]
pub struct Inner<'a> {
    arbitrator: &'a mut Arbitrator,
}

impl Listener for Inner<'_> {
    fn on_drag_begin(&mut self, id: Id, surfaces: &mut dyn Surfaces) {
        self.arbitrator.inner_drag_began(id, surfaces);
    }

    fn on_scroll_changed(&mut self, id: Id, surfaces: &mut dyn Surfaces) {
        self.arbitrator.inner_scrolled(id, surfaces);
    }
}
