use anyhow::{Result, ensure};
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use crate::layout::LayoutSnapshot;

/// Side of the (square) canvas needed to show every rectangle with the cloud center in the middle.
pub fn canvas_side(s_layout: &LayoutSnapshot, options: &SvgDrawOptions) -> i64 {
    let (cx, cy) = (s_layout.center.x() as i64, s_layout.center.y() as i64);
    let (max_dx, max_dy) = s_layout
        .rects
        .iter()
        .fold((0, 0), |(max_dx, max_dy), r| {
            (
                max_dx
                    .max(cx - r.left() as i64)
                    .max(r.right() as i64 - cx),
                max_dy
                    .max(cy - r.top() as i64)
                    .max(r.bottom() as i64 - cy),
            )
        });

    [
        2 * max_dx + 2 * options.padding as i64,
        2 * max_dy + 2 * options.padding as i64,
        options.min_side as i64,
    ]
    .into_iter()
    .max()
    .unwrap_or(options.min_side as i64)
}

/// Renders a layout on a square canvas centered on the cloud center.
pub fn layout_to_svg(s_layout: &LayoutSnapshot, options: SvgDrawOptions) -> Result<Document> {
    ensure!(!s_layout.is_empty(), "rectangles list cannot be empty");

    let theme = &options.theme;
    let side = canvas_side(s_layout, &options) as f32;
    let (cx, cy) = (s_layout.center.x() as f32, s_layout.center.y() as f32);
    let (x_min, y_min) = (cx - side / 2.0, cy - side / 2.0);

    let background = Rectangle::new()
        .set("x", x_min)
        .set("y", y_min)
        .set("width", side)
        .set("height", side)
        .set("fill", theme.background_fill.to_string());

    let rects_group = {
        let stroke = theme.rect_stroke.to_string();
        let fill = theme.rect_fill.to_string();
        let fill_opacity = theme.rect_fill_opacity.to_string();
        let stroke_width = theme.stroke_width.to_string();

        s_layout
            .rects
            .iter()
            .enumerate()
            .fold(Group::new().set("id", "rects"), |group, (i, rect)| {
                group.add(
                    svg_util::data_to_path(
                        svg_util::rect_data(rect),
                        &[
                            ("fill", &*fill),
                            ("fill-opacity", &*fill_opacity),
                            ("stroke", &*stroke),
                            ("stroke-width", &*stroke_width),
                        ],
                    )
                    .add(Title::new(format!("rect {i}: {rect}"))),
                )
            })
    };

    let mut document = Document::new()
        .set("viewBox", (x_min, y_min, side, side))
        .set("width", side)
        .set("height", side)
        .add(background)
        .add(rects_group);

    if options.bbox {
        if let Some(bbox) = s_layout.bbox() {
            let stroke = svg_util::change_brightness(theme.rect_stroke, 0.5).to_string();
            let dash = format!("{}", 4.0 * theme.stroke_width);
            let stroke_width = format!("{}", 0.5 * theme.stroke_width);
            document = document.add(
                svg_util::data_to_path(
                    svg_util::rect_data(&bbox),
                    &[
                        ("fill", "none"),
                        ("stroke", &*stroke),
                        ("stroke-width", &*stroke_width),
                        ("stroke-dasharray", &*dash),
                    ],
                )
                .set("id", "bbox"),
            );
        }
    }

    if options.center_marker {
        let fill = theme.center_fill.to_string();
        document = document.add(
            svg_util::point(s_layout.center, Some(&*fill), Some(4.0)).set("id", "center"),
        );
    }

    if options.label {
        let label = Text::new(format!("Rectangles: {}", s_layout.n_rects()))
            .set("x", x_min + 10.0)
            .set("y", y_min + 20.0)
            .set("font-size", 10.0 * side / 400.0)
            .set("font-family", "monospace")
            .set("fill", theme.label_fill.to_string())
            .set("id", "label");
        document = document.add(label);
    }

    Ok(document)
}
