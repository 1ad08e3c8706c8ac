//! Operate on surfaces that can be scrolled.
use crate::surface::Id;

/// The internal state of a surface that can be scrolled.
///
/// Offsets follow the platform convention of a scroll view with a top content
/// inset: a surface at rest sits at `y == 0.0`, and pulling its content down
/// past the top yields negative offsets, down to `-top_inset` when the surface
/// does not bounce.
pub trait Scrollable {
    /// Returns the current [`AbsoluteOffset`] of the surface.
    fn offset(&self) -> AbsoluteOffset;

    /// Scrolls the surface to the given [`AbsoluteOffset`].
    ///
    /// Implementors report a new scroll notification to their listener when
    /// the offset actually changes.
    fn scroll_to(&mut self, offset: AbsoluteOffset);

    /// Returns the top content inset of the surface.
    ///
    /// Only the outer surface of a collapsing header has one.
    fn top_inset(&self) -> f32 {
        0.0
    }
}

/// A lookup of the scroll surfaces owned by a host.
///
/// The arbitrator only ever holds surface [`Id`]s and resolves them through
/// this trait on every event. A lookup that fails means the surface is gone.
pub trait Surfaces {
    /// Returns the surface with the given [`Id`], if it still exists.
    fn surface(&self, id: Id) -> Option<&dyn Scrollable>;

    /// Returns the surface with the given [`Id`] mutably, if it still exists.
    fn surface_mut(&mut self, id: Id) -> Option<&mut dyn Scrollable>;
}

/// Scrolls the given surface to `offset`, unless it is already there.
///
/// Returns whether a write happened. Skipping equal writes breaks the feedback
/// loop between an offset write and the scroll notification it triggers.
pub fn update(surface: &mut dyn Scrollable, offset: AbsoluteOffset) -> bool {
    if surface.offset() == offset {
        return false;
    }

    surface.scroll_to(offset);
    true
}

/// The amount of absolute offset in each direction of a [`Scrollable`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbsoluteOffset<T = f32> {
    /// The amount of horizontal offset
    pub x: T,
    /// The amount of vertical offset
    pub y: T,
}

impl AbsoluteOffset {
    /// An offset pointing at the resting position of a [`Scrollable`].
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new [`AbsoluteOffset`].
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vertical-only [`AbsoluteOffset`].
    pub const fn vertical(y: f32) -> Self {
        Self { x: 0.0, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(AbsoluteOffset, usize);

    impl Scrollable for Fixed {
        fn offset(&self) -> AbsoluteOffset {
            self.0
        }

        fn scroll_to(&mut self, offset: AbsoluteOffset) {
            self.0 = offset;
            self.1 += 1;
        }
    }

    #[test]
    fn test_update_skips_equal_offset() {
        let mut surface = Fixed(AbsoluteOffset::vertical(10.0), 0);

        assert!(!update(&mut surface, AbsoluteOffset::vertical(10.0)));
        assert_eq!(surface.1, 0);

        assert!(update(&mut surface, AbsoluteOffset::ZERO));
        assert_eq!(surface.0, AbsoluteOffset::ZERO);
        assert_eq!(surface.1, 1);
    }

    #[test]
    fn test_default_top_inset() {
        let surface = Fixed(AbsoluteOffset::ZERO, 0);

        assert_eq!(surface.top_inset(), 0.0);
    }
}
