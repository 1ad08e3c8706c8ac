//! nested_scroll coordinates a collapsing header with the scrollable content
//! of a tabbed screen.
//!
//! Two scroll surfaces are nested on such a screen. The outer one drives the
//! height of the header; the inner one scrolls the content of the selected
//! tab. Dragging the content must feel like a single scroll:
//!
//! - pulling up first collapses the header, then scrolls the list;
//! - pulling down first scrolls the list back to its top, then expands the
//!   header.
//!
//! The [`Arbitrator`] implements that policy as a plain state machine. The
//! [`Host`] plays the part of the screen: it owns the surfaces, lays out the
//! header and the tab container, and relays every drag and scroll
//! notification to the arbitrator.
//!
//! # The Pocket Guide
//! Create a [`Host`] with some [`Settings`] and add your tabs:
//!
//! ```
//! use nested_scroll::{Host, Padding, Settings, Size};
//!
//! let mut host = Host::new(Settings::new(100.0, 200.0));
//! let _feed = host.add_tab();
//!
//! host.layout(Size::new(390.0, 844.0), Padding::ZERO);
//! host.on_appear();
//! ```
//!
//! Forward the gestures of your platform as they happen:
//!
//! ```
//! # use nested_scroll::{AbsoluteOffset, Host, Owner, Padding, Settings, Size};
//! # let mut host = Host::new(Settings::new(100.0, 200.0));
//! # let feed = host.add_tab();
//! # host.layout(Size::new(390.0, 844.0), Padding::ZERO);
//! # host.on_appear();
//! // Expand the header halfway
//! host.drag_outer_begin();
//! host.scroll_outer_to(AbsoluteOffset::vertical(-50.0));
//!
//! // Pulling the list up collapses the header first
//! host.drag_inner_begin(feed);
//! host.scroll_inner_to(feed, AbsoluteOffset::vertical(10.0));
//!
//! assert_eq!(host.arbitrator().owner(), Owner::Outer);
//! assert_eq!(host.inner_offset(feed), Some(AbsoluteOffset::ZERO));
//! ```
//!
//! And run a layout pass before presenting every frame:
//!
//! ```
//! # use nested_scroll::{AbsoluteOffset, Host, Padding, Settings, Size};
//! # let mut host = Host::new(Settings::new(100.0, 200.0));
//! # let _ = host.add_tab();
//! # host.layout(Size::new(390.0, 844.0), Padding::ZERO);
//! # host.on_appear();
//! # host.drag_outer_begin();
//! # host.scroll_outer_to(AbsoluteOffset::vertical(-50.0));
//! if host.layout_if_needed() {
//!     assert_eq!(host.header_height(), 150.0);
//! }
//! ```
//!
//! Screens that manage their own surfaces can talk to an [`Arbitrator`]
//! directly through the [`Listener`] trait and their own [`Surfaces`].
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use nested_scroll_core as core;
pub use nested_scroll_widget as widget;

pub use crate::core::settings;
pub use crate::core::shell;
pub use crate::core::surface;
pub use crate::core::{
    AbsoluteOffset, Padding, Point, Rectangle, Scrollable, Settings, Shell, Size, Surfaces,
};

pub use crate::widget::arbitrator;
pub use crate::widget::{Arbitrator, Host, Listener, Owner, ScrollSurface, Tabs};
