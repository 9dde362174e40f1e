// Copyright 2025 the Densir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG writer for `densir_demo`.

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::Color;

/// Horizontal text anchoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TextAnchor {
    Middle,
    End,
}

/// One drawable item.
#[derive(Clone, Debug)]
pub(crate) enum Mark {
    Path {
        path: BezPath,
        fill: Option<Color>,
        stroke: Color,
        stroke_width: f64,
    },
    Rule {
        from: Point,
        to: Point,
        stroke: Color,
    },
    Text {
        pos: Point,
        text: String,
        font_size: f64,
        anchor: TextAnchor,
        fill: Color,
    },
}

impl Mark {
    fn bounds(&self) -> Rect {
        match self {
            Self::Path { path, .. } => path.bounding_box(),
            Self::Rule { from, to, .. } => Rect::from_points(*from, *to),
            Self::Text {
                pos,
                text,
                font_size,
                anchor,
                ..
            } => estimate_text_bounds(*pos, *font_size, *anchor, text),
        }
    }
}

/// Marks in paint order, plus the view box they are drawn into.
#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    marks: Vec<(i32, Mark)>,
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    pub(crate) fn push(&mut self, z_index: i32, mark: Mark) {
        self.marks.push((z_index, mark));
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = match (self.view_box, self.content_bounds()) {
            (Some(a), Some(b)) => a.union(b),
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => Rect::new(0.0, 0.0, 100.0, 100.0),
        };
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            "viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\">\n",
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));

        // Stable sort keeps insertion order within a layer.
        let mut order: Vec<&(i32, Mark)> = self.marks.iter().collect();
        order.sort_by_key(|(z, _)| *z);

        for (_z, mark) in order {
            match mark {
                Mark::Path {
                    path,
                    fill,
                    stroke,
                    stroke_width,
                } => {
                    out.push_str(&format!(r#"<path d="{}""#, path.to_svg()));
                    match fill {
                        Some(fill) => write_paint_attr(&mut out, "fill", *fill),
                        None => out.push_str(r#" fill="none""#),
                    }
                    if *stroke_width > 0.0 {
                        write_paint_attr(&mut out, "stroke", *stroke);
                        out.push_str(&format!(r#" stroke-width="{stroke_width}""#));
                    }
                    out.push_str("/>\n");
                }
                Mark::Rule { from, to, stroke } => {
                    out.push_str(&format!(
                        r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                        from.x, from.y, to.x, to.y
                    ));
                    write_paint_attr(&mut out, "stroke", *stroke);
                    out.push_str("/>\n");
                }
                Mark::Text {
                    pos,
                    text,
                    font_size,
                    anchor,
                    fill,
                } => {
                    out.push_str(&format!(
                        r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="middle""#,
                        pos.x, pos.y, font_size
                    ));
                    out.push_str(match anchor {
                        TextAnchor::Middle => r#" text-anchor="middle""#,
                        TextAnchor::End => r#" text-anchor="end""#,
                    });
                    write_paint_attr(&mut out, "fill", *fill);
                    out.push('>');
                    out.push_str(&escape_xml(text));
                    out.push_str("</text>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }

    fn content_bounds(&self) -> Option<Rect> {
        let rect = self
            .marks
            .iter()
            .map(|(_z, mark)| mark.bounds())
            .reduce(|a, b| a.union(b))?;
        // Small margin so strokes at the edge are not clipped.
        Some(rect.inflate(10.0, 10.0))
    }
}

fn estimate_text_bounds(pos: Point, font_size: f64, anchor: TextAnchor, text: &str) -> Rect {
    // Rough heuristic: ~0.6em average glyph width.
    let width = 0.6 * font_size * text.chars().count() as f64;
    let half_height = 0.5 * font_size;
    let (x0, x1) = match anchor {
        TextAnchor::Middle => (pos.x - width / 2.0, pos.x + width / 2.0),
        TextAnchor::End => (pos.x - width, pos.x),
    };
    Rect::new(x0, pos.y - half_height, x1, pos.y + half_height)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    out.push_str(&format!(
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    ));
    if rgba.a != 255 {
        out.push_str(&format!(
            r#" {name}-opacity="{}""#,
            f64::from(rgba.a) / 255.0
        ));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn writes_marks_in_layer_order() {
        let mut scene = SvgScene::default();
        scene.set_view_box(Rect::new(0.0, 0.0, 200.0, 100.0));
        scene.push(
            2,
            Mark::Text {
                pos: Point::new(50.0, 50.0),
                text: "A & <B>".to_string(),
                font_size: 10.0,
                anchor: TextAnchor::Middle,
                fill: css::BLACK,
            },
        );
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 10.0));
        path.close_path();
        scene.push(
            1,
            Mark::Path {
                path,
                fill: Some(css::BLACK.with_alpha(0.5)),
                stroke: css::BLACK,
                stroke_width: 1.0,
            },
        );

        let svg = scene.to_svg_string();
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>\n"));
        let path_at = svg.find("<path").unwrap();
        let text_at = svg.find("<text").unwrap();
        assert!(path_at < text_at);
        assert!(svg.contains("A &amp; &lt;B&gt;"));
        assert!(svg.contains(r##"fill="#000000""##));
        assert!(svg.contains("fill-opacity="));
    }

    #[test]
    fn view_box_grows_to_fit_content() {
        let mut scene = SvgScene::default();
        scene.set_view_box(Rect::new(0.0, 0.0, 10.0, 10.0));
        scene.push(
            0,
            Mark::Rule {
                from: Point::new(0.0, 0.0),
                to: Point::new(100.0, 0.0),
                stroke: css::BLACK,
            },
        );
        let svg = scene.to_svg_string();
        assert!(svg.contains(r#"viewBox="-10 -10 120 20""#), "{svg}");
    }

    #[test]
    fn writes_every_attribute() {
        let mut scene = SvgScene::default();
        scene.set_view_box(Rect::new(0.0, 0.0, 200.0, 100.0));
        let mut path = BezPath::new();
        path.move_to((11.0, 12.0));
        path.line_to((13.0, 14.0));
        let d = path.to_svg();
        scene.push(
            0,
            Mark::Path {
                path,
                fill: None,
                stroke: css::RED,
                stroke_width: 1.5,
            },
        );
        scene.push(
            0,
            Mark::Rule {
                from: Point::new(15.0, 16.0),
                to: Point::new(17.0, 18.0),
                stroke: css::BLUE,
            },
        );
        scene.push(
            0,
            Mark::Text {
                pos: Point::new(40.0, 30.0),
                text: "7.5".to_string(),
                font_size: 11.0,
                anchor: TextAnchor::End,
                fill: css::BLACK,
            },
        );

        let svg = scene.to_svg_string();
        let lines: Vec<&str> = svg.lines().collect();
        assert_eq!(
            lines[0],
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 100" width="200" height="100">"#
        );
        assert_eq!(
            lines[1],
            format!(r##"<path d="{d}" fill="none" stroke="#ff0000" stroke-width="1.5"/>"##)
        );
        assert_eq!(
            lines[2],
            r##"<line x1="15" y1="16" x2="17" y2="18" stroke="#0000ff"/>"##
        );
        assert_eq!(
            lines[3],
            r##"<text x="40" y="30" font-size="11" dominant-baseline="middle" text-anchor="end" fill="#000000">7.5</text>"##
        );
        assert_eq!(lines[4], "</svg>");
    }
}
