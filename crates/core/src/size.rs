/// An amount of space in 2 dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size<T = f32> {
    /// The width.
    pub width: T,
    /// The height.
    pub height: T,
}

impl<T> Size<T> {
    /// Creates a new  [`Size`] with the given width and height.
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

impl Size {
    /// A [`Size`] with zero width and height.
    pub const ZERO: Size = Size::new(0., 0.);

    /// Shrinks the [`Size`] by the given amounts, never going below zero.
    pub fn shrink(self, horizontal: f32, vertical: f32) -> Self {
        Size {
            width: (self.width - horizontal).max(0.0),
            height: (self.height - vertical).max(0.0),
        }
    }
}
