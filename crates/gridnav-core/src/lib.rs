//! **gridnav-core** — geometry primitives shared by the *gridnav* crates.
//!
//! Grid cells are addressed by integer [`Point`]s inside a half-open
//! [`Range`]; world-space positions use the floating-point [`Vec2`].

pub mod geom;
pub mod vec2;

pub use geom::{Point, Range, RangeIter};
pub use vec2::Vec2;
