/// External (serializable) representations of layouts
pub mod ext_repr;

/// Conversion between layouts and their external representation
mod export;

/// Rendering of layouts to SVG
#[cfg(feature = "svg")]
pub mod svg;

#[doc(inline)]
pub use export::{export, import};
