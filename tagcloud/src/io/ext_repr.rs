use serde::{Deserialize, Serialize};

/// External representation of a placed rectangle
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// External representation of a layout
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLayout {
    /// Center of the cloud, `[x, y]`
    pub center: (i32, i32),
    /// Rectangles in placement order
    pub rects: Vec<ExtRect>,
}
