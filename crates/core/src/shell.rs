//! Invalidate the layout of a host.
use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A connection to the layout state of a host.
///
/// The host owns the [`Shell`] and runs its layout pass whenever the layout
/// has been invalidated. Collaborators that must trigger a new layout pass
/// receive a [`Handle`] instead of the [`Shell`] itself.
///
/// Invalidations are coalesced: invalidating twice before the next pass
/// results in a single pass.
///
/// ```
/// use nested_scroll_core::Shell;
///
/// let mut shell = Shell::new();
/// let handle = shell.handle();
///
/// handle.invalidate_layout();
/// handle.invalidate_layout();
///
/// let mut passes = 0;
/// shell.revalidate_layout(|| passes += 1);
/// shell.revalidate_layout(|| passes += 1);
///
/// assert_eq!(passes, 1);
/// ```
#[derive(Debug, Default)]
pub struct Shell {
    is_layout_invalid: Rc<Cell<bool>>,
}

impl Shell {
    /// Creates a new [`Shell`] with a valid layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a [`Handle`] that can invalidate the layout of this [`Shell`].
    pub fn handle(&self) -> Handle {
        Handle {
            is_layout_invalid: Rc::downgrade(&self.is_layout_invalid),
        }
    }

    /// Returns whether the current layout is invalid or not.
    #[must_use]
    pub fn is_layout_invalid(&self) -> bool {
        self.is_layout_invalid.get()
    }

    /// Invalidates the current layout.
    ///
    /// The host will run its layout pass before presenting the next frame.
    pub fn invalidate_layout(&mut self) {
        self.is_layout_invalid.set(true);
    }

    /// Triggers the given function if the layout is invalid, cleaning it in the
    /// process.
    pub fn revalidate_layout(&mut self, f: impl FnOnce()) {
        if self.is_layout_invalid.replace(false) {
            f();
        }
    }
}

/// A fire-and-forget handle to invalidate the layout of a [`Shell`].
///
/// A [`Handle`] does not keep its [`Shell`] alive; once the shell is dropped,
/// invalidating through the handle does nothing.
#[derive(Clone)]
pub struct Handle {
    is_layout_invalid: Weak<Cell<bool>>,
}

impl Handle {
    /// Invalidates the layout of the [`Shell`], if it still exists.
    pub fn invalidate_layout(&self) {
        if let Some(is_layout_invalid) = self.is_layout_invalid.upgrade() {
            is_layout_invalid.set(true);
        }
    }

    /// Returns whether the [`Shell`] of this [`Handle`] still exists.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.is_layout_invalid.strong_count() > 0
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("is_alive", &self.is_alive())
            .finish()
    }
}
