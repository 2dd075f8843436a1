//! **tilepath-core** — coordinate primitives shared by the *tilepath* crates.
//!
//! A map cell is identified by a [`Point`]; a map's extent is a half-open
//! [`Range`].

pub mod geom;

pub use geom::{Point, Range, RangeIter};
