/// An amount of space to pad for each side of a box.
///
/// The host uses it to describe the safe area of the screen:
///
/// ```
/// # use nested_scroll_core::Padding;
/// #
/// let safe_area = Padding {
///     top: 44.0,
///     right: 0.0,
///     bottom: 34.0,
///     left: 0.0,
/// };
///
/// assert_eq!(safe_area.vertical(), 78.0);
/// assert_eq!(Padding::ZERO.horizontal(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    /// Top padding
    pub top: f32,
    /// Right padding
    pub right: f32,
    /// Bottom padding
    pub bottom: f32,
    /// Left padding
    pub left: f32,
}

impl Padding {
    /// Padding of zero
    pub const ZERO: Padding = Padding {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Returns the total amount of vertical [`Padding`].
    pub fn vertical(self) -> f32 {
        self.top + self.bottom
    }

    /// Returns the total amount of horizontal [`Padding`].
    pub fn horizontal(self) -> f32 {
        self.left + self.right
    }
}
