// Copyright 2025 the Densir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turns a laid-out violin plot into SVG marks with axes.

use densir_shape::ViolinPlot;
use kurbo::{Affine, Point, Rect};
use peniko::Color;
use peniko::color::palette::css;

use crate::svg::{Mark, SvgScene, TextAnchor};

const Z_VIOLIN: i32 = 1;
const Z_AXIS: i32 = 2;

const TICK_SIZE: f64 = 6.0;
const LABEL_GAP: f64 = 3.0;

/// Margins, colors, and axis settings around the plot area.
#[derive(Clone, Debug)]
pub(crate) struct ChartStyle {
    /// Space around the plot area: left, top, right, bottom.
    pub(crate) margin: (f64, f64, f64, f64),
    pub(crate) fill: Color,
    pub(crate) stroke: Color,
    pub(crate) axis: Color,
    pub(crate) font_size: f64,
    pub(crate) tick_count: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            margin: (50.0, 30.0, 30.0, 40.0),
            fill: Color::from_rgb8(0x69, 0xb3, 0xa2).with_alpha(0.8),
            stroke: css::BLACK,
            axis: Color::from_rgb8(0x44, 0x44, 0x44),
            font_size: 11.0,
            tick_count: 10,
        }
    }
}

/// Builds the scene for `plot`, whose outlines are in plot-area pixels of `size`.
pub(crate) fn violin_scene(plot: &ViolinPlot, size: (f64, f64), style: &ChartStyle) -> SvgScene {
    let (width, height) = size;
    let (left, top, right, bottom) = style.margin;
    let to_chart = Affine::translate((left, top));

    let mut scene = SvgScene::default();
    scene.set_view_box(Rect::new(0.0, 0.0, left + width + right, top + height + bottom));

    for violin in plot.violins() {
        let path = to_chart * violin.outline.to_path();
        scene.push(
            Z_VIOLIN,
            Mark::Path {
                path,
                fill: violin.outline.is_closed().then_some(style.fill),
                stroke: style.stroke,
                stroke_width: 1.0,
            },
        );
    }

    // Value axis on the left.
    let base = Point::new(left, top + height);
    scene.push(
        Z_AXIS,
        Mark::Rule {
            from: Point::new(left, top),
            to: base,
            stroke: style.axis,
        },
    );
    let ticks = plot.value_ticks(style.tick_count);
    let decimals = tick_decimals(&ticks);
    for t in ticks {
        let y = top + plot.value_scale().map(t);
        scene.push(
            Z_AXIS,
            Mark::Rule {
                from: Point::new(left - TICK_SIZE, y),
                to: Point::new(left, y),
                stroke: style.axis,
            },
        );
        scene.push(
            Z_AXIS,
            Mark::Text {
                pos: Point::new(left - TICK_SIZE - LABEL_GAP, y),
                text: format!("{t:.decimals$}"),
                font_size: style.font_size,
                anchor: TextAnchor::End,
                fill: style.axis,
            },
        );
    }

    // Group axis along the bottom.
    scene.push(
        Z_AXIS,
        Mark::Rule {
            from: base,
            to: Point::new(left + width, top + height),
            stroke: style.axis,
        },
    );
    let groups = plot.group_scale();
    for label in groups.labels() {
        let Ok(center) = groups.center_of(label) else {
            continue;
        };
        let (x, y) = (left + center, top + height);
        scene.push(
            Z_AXIS,
            Mark::Rule {
                from: Point::new(x, y),
                to: Point::new(x, y + TICK_SIZE),
                stroke: style.axis,
            },
        );
        scene.push(
            Z_AXIS,
            Mark::Text {
                pos: Point::new(x, y + TICK_SIZE + LABEL_GAP + style.font_size * 0.5),
                text: label.clone(),
                font_size: style.font_size,
                anchor: TextAnchor::Middle,
                fill: style.axis,
            },
        );
    }

    scene
}

/// Number of decimals needed to tell evenly spaced ticks apart.
fn tick_decimals(ticks: &[f64]) -> usize {
    let step = match ticks {
        [a, b, ..] => (b - a).abs(),
        _ => return 0,
    };
    if !(step > 0.0 && step < 1.0) {
        return 0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "step is in (0, 1), so the exponent is small and positive"
    )]
    {
        (-step.log10().floor()) as usize
    }
}

#[cfg(test)]
mod tests {
    use densir_shape::{Sample, Thresholds, ViolinPlotSpec};

    use super::*;

    fn plot() -> ViolinPlot {
        let samples: Vec<Sample> = [("A", 1.0), ("A", 2.0), ("B", 3.0), ("B", 9.0)]
            .into_iter()
            .map(|(g, v)| Sample::new(g, v).unwrap())
            .collect();
        ViolinPlotSpec::new(200.0, 100.0)
            .with_domain((0.0, 10.0))
            .with_thresholds(Thresholds::Count(5))
            .build(&samples)
            .unwrap()
    }

    #[test]
    fn scene_has_one_path_per_group_and_labelled_axes() {
        let svg = violin_scene(&plot(), (200.0, 100.0), &ChartStyle::default()).to_svg_string();
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains(">A</text>"));
        assert!(svg.contains(">B</text>"));
        assert!(svg.contains(">10</text>"));
        assert!(svg.contains(r#"viewBox="0 0 280 170""#), "{svg}");
    }

    #[test]
    fn decimals_follow_the_tick_step() {
        assert_eq!(tick_decimals(&[0.0, 5.0, 10.0]), 0);
        assert_eq!(tick_decimals(&[0.0, 0.5, 1.0]), 1);
        assert_eq!(tick_decimals(&[0.0, 0.02]), 2);
        assert_eq!(tick_decimals(&[3.0]), 0);
    }
}
