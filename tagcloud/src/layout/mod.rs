mod engine;
mod snapshot;

#[doc(inline)]
pub use engine::LayoutEngine;
#[doc(inline)]
pub use engine::Placement;
#[doc(inline)]
pub use snapshot::LayoutSnapshot;
