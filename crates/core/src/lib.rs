//! The core library of `nested_scroll`.
//!
//! This library holds basic types that can be reused and re-exported by the
//! other crates of the workspace: geometry, surface identity, the
//! [`Scrollable`] abstraction the arbitrator talks to and the [`Shell`] used to
//! invalidate layout.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod scrollable;
pub mod settings;
pub mod shell;
pub mod surface;

mod padding;
mod point;
mod rectangle;
mod size;

pub use padding::Padding;
pub use point::Point;
pub use rectangle::Rectangle;
pub use scrollable::{AbsoluteOffset, Scrollable, Surfaces};
pub use settings::Settings;
pub use shell::Shell;
pub use size::Size;
