#![doc = document_features::document_features!()]
//! Incremental layout of rectangles into a compact, roughly circular tag cloud.
//!
//! Rectangles are placed one at a time by a [`LayoutEngine`](layout::LayoutEngine):
//! it walks an Archimedean [`Spiral`](spiral::Spiral) outwards from the cloud center until
//! it finds a free position and then nudges the rectangle back towards the center.

/// Geometric primitives and their relations
pub mod geometry;

/// Placement of rectangles around a fixed center
pub mod layout;

/// Infinite spiral of candidate positions
pub mod spiral;

/// Exporting layouts to external representations
pub mod io;

/// Configuration, errors and helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use util::{LayoutError, Result};
