use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

use crate::geometry::primitives::{Point, Rect};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Empty space around the outermost rectangle
    #[serde(default = "default_padding")]
    pub padding: i32,
    ///Minimum width (and height) of the canvas
    #[serde(default = "default_min_side")]
    pub min_side: i32,
    ///Mark the center of the cloud
    #[serde(default = "default_true")]
    pub center_marker: bool,
    ///Print the number of rectangles in the top left corner
    #[serde(default = "default_true")]
    pub label: bool,
    ///Draw the bounding box of the cloud
    #[serde(default)]
    pub bbox: bool,
}

fn default_padding() -> i32 {
    30
}

fn default_min_side() -> i32 {
    400
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            padding: default_padding(),
            min_side: default_min_side(),
            center_marker: true,
            label: true,
            bbox: false,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width: f32,
    pub background_fill: Color,
    pub rect_fill: Color,
    pub rect_fill_opacity: f32,
    pub rect_stroke: Color,
    pub center_fill: Color,
    pub label_fill: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::CLASSIC
    }
}

impl SvgLayoutTheme {
    pub const CLASSIC: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width: 1.5,
        background_fill: Color(0xFF, 0xFF, 0xFF), // WHITE
        rect_fill: Color(0x00, 0x00, 0xFF),       // BLUE
        rect_fill_opacity: 0.16,
        rect_stroke: Color(0x00, 0x00, 0xFF),
        center_fill: Color(0xFF, 0x00, 0x00), // RED
        label_fill: Color(0x00, 0x00, 0x00),
    };

    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width: 2.0,
        background_fill: Color(0xCC, 0x82, 0x4A),
        rect_fill: Color(0xFF, 0xC8, 0x79),
        rect_fill_opacity: 0.9,
        rect_stroke: Color(0x00, 0x00, 0x00),
        center_fill: Color(0xFF, 0x00, 0x00),
        label_fill: Color(0x2D, 0x2D, 0x2D),
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width: 2.5,
        background_fill: Color(0xD3, 0xD3, 0xD3),
        rect_fill: Color(0x7A, 0x7A, 0x7A),
        rect_fill_opacity: 0.9,
        rect_stroke: Color(0x00, 0x00, 0x00),
        center_fill: Color(0xD0, 0x00, 0x00),
        label_fill: Color(0x00, 0x00, 0x00),
    };
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction) as u8;
    let g = (g as f32 * fraction) as u8;
    let b = (b as f32 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s}, expected #RRGGBB"
        );
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).with_context(|| format!("invalid color: {s}"))
        };
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub fn rect_data(rect: &Rect) -> Data {
    let (x_min, y_min) = (rect.left() as f32, rect.top() as f32);
    let (x_max, y_max) = (rect.right() as f32, rect.bottom() as f32);
    Data::new()
        .move_to((x_min, y_min))
        .line_to((x_max, y_min))
        .line_to((x_max, y_max))
        .line_to((x_min, y_max))
        .close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn point(Point(x, y): Point, fill: Option<&str>, rad: Option<f32>) -> Circle {
    Circle::new()
        .set("cx", x as f32)
        .set("cy", y as f32)
        .set("r", rad.unwrap_or(0.5))
        .set("fill", fill.unwrap_or("black"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_hex_round_trip() {
        let color = Color::from_str("#FFC879").unwrap();
        assert_eq!(color, Color(0xFF, 0xC8, 0x79));
        assert_eq!(color.to_string(), "#FFC879");
        assert_eq!(Color::from_str("00ff00").unwrap(), Color(0, 0xFF, 0));
    }

    #[test]
    fn invalid_colors_are_rejected() {
        assert!(Color::from_str("#FFF").is_err());
        assert!(Color::from_str("#GG0000").is_err());
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }

    #[test]
    fn brightness() {
        assert_eq!(
            change_brightness(Color(200, 100, 10), 0.5),
            Color(100, 50, 5)
        );
    }

    #[test]
    fn options_deserialize_from_partial_json() {
        let options: SvgDrawOptions = serde_json::from_str(r#"{"bbox": true}"#).unwrap();
        assert!(options.bbox);
        assert_eq!(options.padding, 30);
        assert_eq!(options.min_side, 400);
        assert_eq!(options.theme, SvgLayoutTheme::CLASSIC);
    }
}
