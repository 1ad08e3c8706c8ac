//! Identify scroll surfaces.
mod id;

pub use id::Id;
