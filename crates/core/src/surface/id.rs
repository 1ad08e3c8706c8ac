use std::fmt;
use std::sync::atomic::{self, AtomicU64};

/// The identity of a scroll surface.
///
/// The arbitrator refers back to the surfaces of a screen by [`Id`] and asks
/// the host to resolve them on every notification. An [`Id`] never keeps a
/// surface alive, so a tab that was removed simply stops resolving.
///
/// Ids are also how a stale notification is told apart from one of the
/// active surface: two surfaces are the same only if their ids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Id(u64);

static NEXT_SURFACE: AtomicU64 = AtomicU64::new(1);

impl Id {
    /// Returns an [`Id`] no other surface of the process has.
    pub fn unique() -> Self {
        Self(NEXT_SURFACE.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}
