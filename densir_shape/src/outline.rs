// Copyright 2025 the Densir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Density outline generation.
//!
//! An outline is built like a stacked area: one boundary per side of the violin axis, joined
//! into a single closed shape (or left open when only one side is wanted).

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use densir_scale::ContinuousScale;
use kurbo::{BezPath, CubicBez, ParamCurve, Point, Rect};

use crate::curve::{Bump, Interpolate, Linear};
use crate::{Bin, ShapeError};

/// Which point of a bin is placed on the value axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BinAnchor {
    /// The inclusive lower bound `x0`.
    #[default]
    Start,
    /// The midpoint of `[x0, x1]`.
    Middle,
}

impl BinAnchor {
    fn value(self, bin: &Bin) -> f64 {
        match self {
            Self::Start => bin.x0(),
            Self::Middle => bin.mid(),
        }
    }
}

/// Which boundaries of the violin to trace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutlineSide {
    /// Both boundaries, joined into one closed outline.
    #[default]
    Both,
    /// Only the boundary at negative offsets (left when vertical, top when horizontal).
    Start,
    /// Only the boundary at positive offsets (right when vertical, bottom when horizontal).
    End,
}

/// Direction of the value axis in screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Values run along y; widths extend along x.
    #[default]
    Vertical,
    /// Values run along x; widths extend along y.
    Horizontal,
}

/// Options for turning bins into a [`DensityOutline`].
#[derive(Clone, Debug)]
pub struct DensityOutlineSpec {
    /// Interpolation used along each boundary.
    pub curve: Arc<dyn Interpolate + Send + Sync>,
    /// Bin point placed on the value axis.
    pub anchor: BinAnchor,
    /// Boundaries to trace.
    pub side: OutlineSide,
    /// Direction of the value axis.
    pub orientation: Orientation,
    /// Screen position of the violin axis (x when vertical, y when horizontal).
    pub center: f64,
    /// Render points emitted per segment (the segment end point included).
    pub samples_per_segment: usize,
}

impl Default for DensityOutlineSpec {
    fn default() -> Self {
        Self {
            curve: Arc::new(Bump),
            anchor: BinAnchor::Start,
            side: OutlineSide::Both,
            orientation: Orientation::Vertical,
            center: 0.0,
            samples_per_segment: 8,
        }
    }
}

impl DensityOutlineSpec {
    /// Creates a spec with a bump curve, `x0` anchors, both sides, and a vertical axis at `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the interpolation strategy.
    pub fn with_curve(mut self, curve: impl Interpolate + Send + Sync + 'static) -> Self {
        self.curve = Arc::new(curve);
        self
    }

    /// Sets the bin anchor.
    pub fn with_anchor(mut self, anchor: BinAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets which boundaries are traced.
    pub fn with_side(mut self, side: OutlineSide) -> Self {
        self.side = side;
        self
    }

    /// Sets the value axis direction.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the screen position of the violin axis.
    pub fn with_center(mut self, center: f64) -> Self {
        self.center = center;
        self
    }

    /// Sets the number of render points sampled per segment.
    pub fn with_samples_per_segment(mut self, samples: usize) -> Self {
        self.samples_per_segment = samples;
        self
    }

    /// Builds the outline for `bins`.
    ///
    /// Each bin contributes one control point per traced side, at
    /// `value_scale(anchor(bin))` along the value axis and `±|width_scale(len)|` across it.
    pub fn build<V, W>(
        &self,
        bins: &[Bin],
        value_scale: &V,
        width_scale: &W,
    ) -> Result<DensityOutline, ShapeError>
    where
        V: ContinuousScale + ?Sized,
        W: ContinuousScale + ?Sized,
    {
        if bins.is_empty() {
            return Err(ShapeError::EmptyInput);
        }
        if self.samples_per_segment == 0 {
            return Err(ShapeError::InvalidSampleCount);
        }
        check_partition(bins)?;

        let mut upper = Vec::with_capacity(bins.len());
        for (index, bin) in bins.iter().enumerate() {
            let along = value_scale.map(self.anchor.value(bin));
            let half = width_scale.map(bin.len() as f64).abs();
            if !along.is_finite() || !half.is_finite() {
                return Err(ShapeError::NonFiniteCoordinate { index });
            }
            upper.push(Point::new(along, half));
        }
        let lower: Vec<Point> = upper.iter().map(|p| Point::new(p.x, -p.y)).collect();

        let mut control = Vec::with_capacity(2 * upper.len());
        let mut segments = Vec::with_capacity(2 * upper.len());
        let closed = match self.side {
            OutlineSide::Both => {
                self.boundary(&upper, 1.0, &mut segments);
                if let (Some(&a), Some(&b)) = (upper.last(), lower.last()) {
                    segments.push(line(a, b));
                }
                let back: Vec<Point> = lower.iter().rev().copied().collect();
                self.boundary(&back, -1.0, &mut segments);
                control.extend_from_slice(&upper);
                control.extend_from_slice(&back);
                true
            }
            OutlineSide::Start => {
                self.boundary(&lower, -1.0, &mut segments);
                control.extend_from_slice(&lower);
                false
            }
            OutlineSide::End => {
                self.boundary(&upper, 1.0, &mut segments);
                control.extend_from_slice(&upper);
                false
            }
        };

        for p in &mut control {
            *p = self.to_screen(*p);
        }
        for seg in &mut segments {
            seg.p0 = self.to_screen(seg.p0);
            seg.p1 = self.to_screen(seg.p1);
            seg.p2 = self.to_screen(seg.p2);
            seg.p3 = self.to_screen(seg.p3);
        }

        let n = self.samples_per_segment;
        let mut points = Vec::with_capacity(segments.len() * n + 1);
        points.extend(control.first().copied());
        for seg in &segments {
            for k in 1..n {
                points.push(seg.eval(k as f64 / n as f64));
            }
            points.push(seg.p3);
        }

        log::trace!(
            target: "densir_shape",
            "outline: {} bins, {} segments, {} points, closed: {closed}",
            bins.len(),
            segments.len(),
            points.len()
        );

        Ok(DensityOutline {
            control,
            segments,
            points,
            closed,
        })
    }

    /// Appends the smoothed segments through `control`, keeping every handle on the side of
    /// the axis given by `sign`.
    fn boundary(&self, control: &[Point], sign: f64, out: &mut Vec<CubicBez>) {
        let start = out.len();
        self.curve.segments(control, out);
        if out.len() - start != control.len().saturating_sub(1) {
            log::warn!(
                target: "densir_shape",
                "curve {:?} produced {} segments for {} points; using straight segments",
                self.curve,
                out.len() - start,
                control.len()
            );
            out.truncate(start);
            Linear.segments(control, out);
        }

        let side = |y: f64| if sign > 0.0 { y.max(0.0) } else { y.min(0.0) };
        for (seg, pair) in out[start..].iter_mut().zip(control.windows(2)) {
            seg.p0 = pair[0];
            seg.p3 = pair[1];
            seg.p1.y = side(seg.p1.y);
            seg.p2.y = side(seg.p2.y);
        }
    }

    fn to_screen(&self, p: Point) -> Point {
        match self.orientation {
            Orientation::Vertical => Point::new(self.center + p.y, p.x),
            Orientation::Horizontal => Point::new(p.x, self.center + p.y),
        }
    }
}

/// Builds a closed, bump-smoothed, vertical outline centered on `0`.
///
/// Equivalent to `DensityOutlineSpec::default().build(bins, value_scale, width_scale)`.
pub fn build_density_outline<V, W>(
    bins: &[Bin],
    value_scale: &V,
    width_scale: &W,
) -> Result<DensityOutline, ShapeError>
where
    V: ContinuousScale + ?Sized,
    W: ContinuousScale + ?Sized,
{
    DensityOutlineSpec::default().build(bins, value_scale, width_scale)
}

/// A smoothed boundary derived from bins, in screen coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityOutline {
    control: Vec<Point>,
    segments: Vec<CubicBez>,
    points: Vec<Point>,
    closed: bool,
}

impl DensityOutline {
    /// Ordered render points. Every control point appears, in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The per-bin control points the outline passes through, in traversal order.
    pub fn control_points(&self) -> &[Point] {
        &self.control
    }

    /// Cubic segments between consecutive control points.
    pub fn segments(&self) -> &[CubicBez] {
        &self.segments
    }

    /// Whether the outline is a closed shape.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns the outline as a path of exact cubic segments.
    pub fn to_path(&self) -> BezPath {
        let mut p = BezPath::new();
        let Some(&first) = self.control.first() else {
            return p;
        };
        p.move_to(first);
        for seg in &self.segments {
            p.curve_to(seg.p1, seg.p2, seg.p3);
        }
        if self.closed {
            p.close_path();
        }
        p
    }

    /// Axis-aligned bounds of the render points.
    pub fn bounding_box(&self) -> Rect {
        let mut pts = self.points.iter().copied();
        let Some(first) = pts.next() else {
            return Rect::ZERO;
        };
        pts.fold(Rect::from_points(first, first), |r, p| r.union_pt(p))
    }
}

fn check_partition(bins: &[Bin]) -> Result<(), ShapeError> {
    let mut prev: Option<&Bin> = None;
    for (index, bin) in bins.iter().enumerate() {
        let ok = bin.x0().is_finite()
            && bin.x1().is_finite()
            && bin.x0() <= bin.x1()
            && prev.is_none_or(|p| p.x1() == bin.x0());
        if !ok {
            return Err(ShapeError::MalformedBins { index });
        }
        prev = Some(bin);
    }
    Ok(())
}

fn line(p0: Point, p1: Point) -> CubicBez {
    CubicBez::new(p0, p0.lerp(p1, 1.0 / 3.0), p0.lerp(p1, 2.0 / 3.0), p1)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;

    use densir_scale::ScaleLinear;
    use kurbo::PathEl;

    use super::*;
    use crate::{CatmullRom, MonotoneX, Thresholds, compute_bins};

    fn bins_with_counts(counts: &[usize]) -> Vec<Bin> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &n)| {
                let x0 = i as f64 * 5.0;
                Bin::new(x0, x0 + 5.0, vec![x0; n])
            })
            .collect()
    }

    fn scales(max_len: f64) -> (ScaleLinear, ScaleLinear) {
        let value = ScaleLinear::new((0.0, 20.0), (400.0, 0.0)).unwrap();
        let width = ScaleLinear::new((0.0, max_len), (0.0, 50.0)).unwrap();
        (value, width)
    }

    fn contains_in_order(points: &[Point], control: &[Point]) -> bool {
        let mut it = points.iter();
        control.iter().all(|c| it.any(|p| p == c))
    }

    #[test]
    fn zero_counts_collapse_to_the_axis() {
        let bins = bins_with_counts(&[0, 0, 0, 0]);
        let (value, width) = scales(10.0);
        let outline = DensityOutlineSpec::new()
            .with_center(120.0)
            .build(&bins, &value, &width)
            .unwrap();
        assert!(outline.is_closed());
        assert!(outline.points().iter().all(|p| p.x == 120.0));
        assert_eq!(outline.bounding_box().width(), 0.0);
    }

    #[test]
    fn closed_outline_passes_through_control_points_in_order() {
        let bins = bins_with_counts(&[1, 4, 0, 3]);
        let (value, width) = scales(4.0);
        let outline = build_density_outline(&bins, &value, &width).unwrap();

        let control = outline.control_points();
        assert_eq!(control.len(), 8);
        // Up the positive side from the first bin, back down the negative side.
        assert_eq!(control[0], Point::new(12.5, 400.0));
        assert_eq!(control[1], Point::new(50.0, 300.0));
        assert_eq!(control[3], Point::new(37.5, 100.0));
        assert_eq!(control[4], Point::new(-37.5, 100.0));
        assert_eq!(control[7], Point::new(-12.5, 400.0));

        assert_eq!(outline.segments().len(), control.len() - 1);
        assert_eq!(outline.points().len(), outline.segments().len() * 8 + 1);
        assert!(contains_in_order(outline.points(), control));
    }

    #[test]
    fn closed_outline_is_mirrored() {
        let bins = bins_with_counts(&[2, 5, 1]);
        let (value, width) = scales(5.0);
        let outline = build_density_outline(&bins, &value, &width).unwrap();
        let pts = outline.points();
        let n = pts.len();
        // Positive side (first half) and reversed negative side mirror across x = 0.
        let side = (n - 1 - 8) / 2 + 1;
        for i in 0..side {
            let a = pts[i];
            let b = pts[n - 1 - i];
            assert!((a.x + b.x).abs() < 1e-9, "{a:?} vs {b:?}");
            assert!((a.y - b.y).abs() < 1e-9, "{a:?} vs {b:?}");
        }
        match outline.to_path().elements().last() {
            Some(PathEl::ClosePath) => {}
            other => panic!("expected a closed path, got {other:?}"),
        }
    }

    #[test]
    fn single_sides_stay_on_their_side_of_the_axis() {
        // A spike next to empty bins makes Catmull-Rom want to swing across the axis.
        let bins = bins_with_counts(&[0, 10, 0, 0, 9, 0]);
        let value = ScaleLinear::new((0.0, 30.0), (300.0, 0.0)).unwrap();
        let width = ScaleLinear::new((0.0, 10.0), (0.0, 40.0)).unwrap();
        for side in [OutlineSide::Start, OutlineSide::End] {
            let outline = DensityOutlineSpec::new()
                .with_curve(CatmullRom)
                .with_side(side)
                .with_center(100.0)
                .with_samples_per_segment(32)
                .build(&bins, &value, &width)
                .unwrap();
            assert!(!outline.is_closed());
            assert_eq!(outline.control_points().len(), bins.len());
            for p in outline.points() {
                match side {
                    OutlineSide::Start => assert!(p.x <= 100.0 + 1e-9, "{p:?}"),
                    _ => assert!(p.x >= 100.0 - 1e-9, "{p:?}"),
                }
            }
        }
    }

    #[test]
    fn narrow_first_bin_stays_inside_the_value_range() {
        // Nice ticks leave a 0.1-wide first bin next to 5-wide ones.
        let bins = compute_bins(
            &[4.95, 5.0, 6.0, 7.0, 8.0, 9.0, 12.0, 16.0, 20.0],
            (4.9, 20.0),
            &Thresholds::Nice(4),
        )
        .unwrap();
        assert_eq!(bins[0].x0(), 4.9);
        assert_eq!(bins[0].x1(), 5.0);
        let value = ScaleLinear::new((4.9, 20.0), (300.0, 0.0)).unwrap();
        let width = ScaleLinear::new((0.0, 5.0), (0.0, 40.0)).unwrap();
        let outline = DensityOutlineSpec::new()
            .with_curve(CatmullRom)
            .with_samples_per_segment(32)
            .build(&bins, &value, &width)
            .unwrap();
        let lo = outline
            .control_points()
            .iter()
            .map(|p| p.y)
            .fold(f64::INFINITY, f64::min);
        let hi = outline
            .control_points()
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(hi, 300.0);
        for p in outline.points() {
            assert!(p.y >= lo - 1e-9 && p.y <= hi + 1e-9, "{p:?}");
        }
    }

    #[test]
    fn horizontal_orientation_swaps_axes() {
        let bins = bins_with_counts(&[2]);
        let value = ScaleLinear::new((0.0, 20.0), (0.0, 400.0)).unwrap();
        let width = ScaleLinear::new((0.0, 2.0), (0.0, 30.0)).unwrap();
        let outline = DensityOutlineSpec::new()
            .with_orientation(Orientation::Horizontal)
            .with_anchor(BinAnchor::Middle)
            .with_center(50.0)
            .build(&bins, &value, &width)
            .unwrap();
        assert_eq!(
            outline.control_points(),
            &[Point::new(50.0, 80.0), Point::new(50.0, 20.0)]
        );
    }

    #[test]
    fn every_curve_is_deterministic_and_passes_through() {
        let bins = compute_bins(
            &[1.0, 2.0, 2.5, 7.0, 8.0, 8.5, 9.0, 14.0, 19.0, 20.0],
            (0.0, 20.0),
            &Thresholds::Count(5),
        )
        .unwrap();
        let (value, width) = scales(4.0);
        let specs = [
            DensityOutlineSpec::new().with_curve(Linear),
            DensityOutlineSpec::new().with_curve(Bump),
            DensityOutlineSpec::new().with_curve(CatmullRom),
            DensityOutlineSpec::new().with_curve(MonotoneX),
        ];
        for spec in &specs {
            let a = spec.build(&bins, &value, &width).unwrap();
            let b = spec.build(&bins, &value, &width).unwrap();
            assert_eq!(a, b, "{spec:?}");
            assert!(contains_in_order(a.points(), a.control_points()), "{spec:?}");
        }
    }

    #[test]
    fn closures_work_as_scales() {
        let bins = bins_with_counts(&[1, 2]);
        let outline =
            build_density_outline(&bins, &|v: f64| v * 10.0, &|n: f64| n * 3.0).unwrap();
        assert_eq!(outline.control_points()[1], Point::new(6.0, 50.0));
    }

    #[test]
    fn rejects_bad_input() {
        let (value, width) = scales(4.0);
        assert_eq!(
            build_density_outline(&[], &value, &width),
            Err(ShapeError::EmptyInput)
        );

        let gap = vec![Bin::new(0.0, 5.0, vec![]), Bin::new(6.0, 10.0, vec![])];
        assert_eq!(
            build_density_outline(&gap, &value, &width),
            Err(ShapeError::MalformedBins { index: 1 })
        );
        let reversed = vec![Bin::new(5.0, 0.0, vec![])];
        assert_eq!(
            build_density_outline(&reversed, &value, &width),
            Err(ShapeError::MalformedBins { index: 0 })
        );

        let bins = bins_with_counts(&[1, 2]);
        assert_eq!(
            build_density_outline(&bins, &|_: f64| f64::NAN, &width),
            Err(ShapeError::NonFiniteCoordinate { index: 0 })
        );
        assert_eq!(
            DensityOutlineSpec::new()
                .with_samples_per_segment(0)
                .build(&bins, &value, &width),
            Err(ShapeError::InvalidSampleCount)
        );
    }
}
