// Copyright 2025 the Densir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interpolation strategies for smoothing outline boundaries.
//!
//! Every strategy turns `n` ordered control points into `n - 1` cubic segments. Segment `i`
//! starts exactly at control point `i` and ends exactly at control point `i + 1`, so any
//! strategy passes through every control point in order.
//!
//! Control points are given in the outline's own frame: `x` runs along the value axis and `y`
//! is the signed offset from the violin axis.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{CubicBez, Point};

/// A curve family that smooths a polyline through ordered control points.
pub trait Interpolate: Debug {
    /// Appends one cubic segment per consecutive pair of `points` to `out`.
    ///
    /// Implementations must start segment `i` at `points[i]` and end it at `points[i + 1]`.
    fn segments(&self, points: &[Point], out: &mut Vec<CubicBez>);
}

/// Straight segments between control points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Linear;

/// Bump curves: horizontal tangents at every control point.
///
/// Each segment's handles sit at the midpoint of the pair along the value axis, so the offset
/// never overshoots either endpoint. Drawn vertically this is d3's `curveBumpY`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bump;

/// Uniform Catmull-Rom spline, with the end points repeated as phantom neighbours.
///
/// Handles are kept between their segment's endpoints along the value axis, so unevenly spaced
/// control points never make a segment run back past its neighbours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatmullRom;

/// Monotone cubic interpolation (Fritsch-Carlson / Steffen-style slope limiting).
///
/// Preserves monotonicity of the offset between control points, so no segment overshoots the
/// larger of its two endpoint offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MonotoneX;

impl Interpolate for Linear {
    fn segments(&self, points: &[Point], out: &mut Vec<CubicBez>) {
        out.extend(points.windows(2).map(|w| line(w[0], w[1])));
    }
}

impl Interpolate for Bump {
    fn segments(&self, points: &[Point], out: &mut Vec<CubicBez>) {
        out.extend(points.windows(2).map(|w| {
            let (p0, p1) = (w[0], w[1]);
            let xm = (p0.x + p1.x) * 0.5;
            CubicBez::new(p0, Point::new(xm, p0.y), Point::new(xm, p1.y), p1)
        }));
    }
}

impl Interpolate for CatmullRom {
    fn segments(&self, points: &[Point], out: &mut Vec<CubicBez>) {
        let n = points.len();
        if n < 2 {
            return;
        }
        for i in 0..n - 1 {
            let prev = points[i.saturating_sub(1)];
            let p0 = points[i];
            let p1 = points[i + 1];
            let next = points[(i + 2).min(n - 1)];
            let (lo, hi) = (p0.x.min(p1.x), p0.x.max(p1.x));
            let mut c1 = p0 + (p1 - prev) / 6.0;
            let mut c2 = p1 - (next - p0) / 6.0;
            c1.x = c1.x.clamp(lo, hi);
            c2.x = c2.x.clamp(lo, hi);
            out.push(CubicBez::new(p0, c1, c2, p1));
        }
    }
}

impl Interpolate for MonotoneX {
    fn segments(&self, points: &[Point], out: &mut Vec<CubicBez>) {
        let n = points.len();
        if n < 2 {
            return;
        }
        if n == 2 {
            out.push(line(points[0], points[1]));
            return;
        }

        let h: Vec<f64> = points.windows(2).map(|w| w[1].x - w[0].x).collect();
        let s: Vec<f64> = points
            .windows(2)
            .zip(&h)
            .map(|(w, &h)| if h == 0.0 { 0.0 } else { (w[1].y - w[0].y) / h })
            .collect();

        let mut m = Vec::with_capacity(n);
        m.push(0.0);
        for i in 1..n - 1 {
            m.push(interior_slope(h[i - 1], h[i], s[i - 1], s[i]));
        }
        m.push(0.0);
        m[0] = end_slope(h[0], s[0], m[1]);
        m[n - 1] = end_slope(h[n - 2], s[n - 2], m[n - 2]);

        for i in 0..n - 1 {
            let (p0, p1) = (points[i], points[i + 1]);
            let dx = h[i] / 3.0;
            out.push(CubicBez::new(
                p0,
                Point::new(p0.x + dx, p0.y + dx * m[i]),
                Point::new(p1.x - dx, p1.y - dx * m[i + 1]),
                p1,
            ));
        }
    }
}

fn line(p0: Point, p1: Point) -> CubicBez {
    CubicBez::new(p0, p0.lerp(p1, 1.0 / 3.0), p0.lerp(p1, 2.0 / 3.0), p1)
}

fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

fn interior_slope(h0: f64, h1: f64, s0: f64, s1: f64) -> f64 {
    let denom = h0 + h1;
    let p = if denom == 0.0 {
        0.0
    } else {
        (s0 * h1 + s1 * h0) / denom
    };
    let m = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if m.is_finite() { m } else { 0.0 }
}

fn end_slope(h: f64, s: f64, neighbour: f64) -> f64 {
    if h == 0.0 {
        neighbour
    } else {
        (3.0 * s - neighbour) * 0.5
    }
}
