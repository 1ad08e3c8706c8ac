//! Observe the gestures of scroll surfaces.
use crate::core::Surfaces;
use crate::core::surface::Id;

/// An observer of the drag and scroll notifications of scroll surfaces.
///
/// A host registers one [`Listener`] per surface and calls it every time the
/// platform reports a drag-begin or an offset change. The surfaces themselves
/// are passed along, so a listener never needs to hold on to them.
pub trait Listener {
    /// The user started dragging the surface with the given [`Id`].
    fn on_drag_begin(&mut self, id: Id, surfaces: &mut dyn Surfaces);

    /// The offset of the surface with the given [`Id`] changed.
    fn on_scroll_changed(&mut self, id: Id, surfaces: &mut dyn Surfaces);
}
