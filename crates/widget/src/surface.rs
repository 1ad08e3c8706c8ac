//! A scroll surface owned by a host.
use crate::core::surface::Id;
use crate::core::{AbsoluteOffset, Rectangle, Scrollable, Size};

/// A rectangular region whose content can be scrolled.
///
/// A [`ScrollSurface`] distinguishes two kinds of writes:
///
/// - [`set_offset`](Self::set_offset) is the platform moving the surface
///   under the finger of the user.
/// - [`Scrollable::scroll_to`] is a programmatic correction. It marks the
///   surface as needing a new scroll notification, since the platform reports
///   any offset change back to its listener.
#[derive(Debug, Clone)]
pub struct ScrollSurface {
    id: Id,
    bounds: Rectangle,
    content_size: Size,
    offset: AbsoluteOffset,
    top_inset: f32,
    bounces: bool,
    needs_notification: bool,
}

impl ScrollSurface {
    /// Creates the outer surface of a collapsing header.
    ///
    /// It never bounces: its offset stays within `[-top_inset, 0]` as long as
    /// its content is the size of its bounds.
    pub fn outer(top_inset: f32) -> Self {
        let mut outer = Self {
            bounces: false,
            ..Self::new()
        };

        outer.set_top_inset(top_inset);
        outer
    }

    /// Creates an inner content surface.
    ///
    /// It bounces: negative offsets model a pull-to-refresh overscroll.
    pub fn inner() -> Self {
        Self::new()
    }

    fn new() -> Self {
        Self {
            id: Id::unique(),
            bounds: Rectangle::ZERO,
            content_size: Size::ZERO,
            offset: AbsoluteOffset::ZERO,
            top_inset: 0.0,
            bounces: true,
            needs_notification: false,
        }
    }

    /// Returns the [`Id`] of the surface.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the bounds of the surface, relative to its parent.
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Sets the bounds of the surface.
    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
    }

    /// Returns the size of the content of the surface.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Sets the size of the content of the surface.
    pub fn set_content_size(&mut self, content_size: Size) {
        self.content_size = content_size;
    }

    /// Sets the top content inset of the surface.
    ///
    /// Negative and NaN insets are treated as zero.
    pub fn set_top_inset(&mut self, top_inset: f32) {
        self.top_inset = top_inset.max(0.0);
    }

    /// Returns whether the surface bounces past its edges.
    pub fn bounces(&self) -> bool {
        self.bounces
    }

    /// Moves the surface as the platform would while the user drags it.
    ///
    /// Returns whether the offset changed.
    pub fn set_offset(&mut self, offset: AbsoluteOffset) -> bool {
        let offset = self.clamp(offset);

        if offset == self.offset {
            return false;
        }

        self.offset = offset;
        true
    }

    /// Takes the pending scroll notification caused by a programmatic write.
    pub fn take_notification(&mut self) -> bool {
        std::mem::take(&mut self.needs_notification)
    }

    fn clamp(&self, offset: AbsoluteOffset) -> AbsoluteOffset {
        if self.bounces {
            return offset;
        }

        let max_x = (self.content_size.width - self.bounds.width).max(0.0);
        let max_y = (self.content_size.height - self.bounds.height).max(0.0);

        AbsoluteOffset {
            x: offset.x.clamp(0.0, max_x),
            y: offset.y.clamp(-self.top_inset, max_y),
        }
    }
}

impl Scrollable for ScrollSurface {
    fn offset(&self) -> AbsoluteOffset {
        self.offset
    }

    fn scroll_to(&mut self, offset: AbsoluteOffset) {
        if self.set_offset(offset) {
            self.needs_notification = true;
        }
    }

    fn top_inset(&self) -> f32 {
        self.top_inset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outer_surface_clamps_to_inset() {
        let mut outer = ScrollSurface::outer(100.0);
        assert!(!outer.bounces());

        assert!(outer.set_offset(AbsoluteOffset::vertical(-250.0)));
        assert_eq!(outer.offset(), AbsoluteOffset::vertical(-100.0));

        assert!(outer.set_offset(AbsoluteOffset::new(12.0, 40.0)));
        assert_eq!(outer.offset(), AbsoluteOffset::ZERO);
    }

    #[test]
    fn test_invalid_outer_inset_is_zero() {
        let mut outer = ScrollSurface::outer(-10.0);
        assert_eq!(outer.top_inset(), 0.0);

        assert!(!outer.set_offset(AbsoluteOffset::vertical(-5.0)));
        assert_eq!(outer.offset(), AbsoluteOffset::ZERO);

        let mut outer = ScrollSurface::outer(f32::NAN);
        assert_eq!(outer.top_inset(), 0.0);

        assert!(!outer.set_offset(AbsoluteOffset::vertical(-5.0)));
        assert_eq!(outer.offset(), AbsoluteOffset::ZERO);
    }

    #[test]
    fn test_inner_surface_bounces() {
        let mut inner = ScrollSurface::inner();
        assert!(inner.bounces());

        assert!(inner.set_offset(AbsoluteOffset::vertical(-30.0)));
        assert_eq!(inner.offset(), AbsoluteOffset::vertical(-30.0));
        assert!(!inner.set_offset(AbsoluteOffset::vertical(-30.0)));
    }

    #[test]
    fn test_programmatic_write_needs_notification() {
        let mut inner = ScrollSurface::inner();

        assert!(inner.set_offset(AbsoluteOffset::vertical(5.0)));
        assert!(!inner.take_notification());

        inner.scroll_to(AbsoluteOffset::ZERO);
        assert!(inner.take_notification());
        assert!(!inner.take_notification());

        inner.scroll_to(AbsoluteOffset::ZERO);
        assert!(!inner.take_notification());
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(ScrollSurface::inner().id(), ScrollSurface::inner().id());
    }
}
