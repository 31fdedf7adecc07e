mod point;
mod rect;
mod size;

#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use rect::{MAX_COORD, Rect};
#[doc(inline)]
pub use size::Size;
