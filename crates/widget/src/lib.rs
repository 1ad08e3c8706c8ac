//! Scroll arbitration between a collapsing header and tabbed content.
//!
//! A [`Host`] owns an outer scroll surface driving the height of a header and
//! a [`Tabs`] container whose selected tab exposes an inner scroll surface.
//! Every drag and scroll notification of those surfaces is forwarded to an
//! [`Arbitrator`], which decides which surface owns the gesture and corrects
//! offsets so both surfaces read as a single continuous scroll.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use nested_scroll_core as core;

pub mod arbitrator;
pub mod host;
pub mod listener;
pub mod surface;
pub mod tabs;

pub use arbitrator::{Arbitrator, Owner};
pub use host::Host;
pub use listener::Listener;
pub use surface::ScrollSurface;
pub use tabs::Tabs;
