// Copyright 2025 the Densir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous linear scales and "nice" tick generation.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::{ContinuousScale, ScaleError};

/// A linear mapping from a closed numeric domain to a pixel range.
///
/// Values outside the domain extrapolate linearly unless clamping is enabled with
/// [`ScaleLinear::with_clamp`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
    clamp: bool,
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    ///
    /// The domain must satisfy `min <= max` with finite bounds and a finite width
    /// (`max - min` must not overflow). The same holds for the range, which may be reversed
    /// (e.g. `(height, 0.0)` for a y axis).
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Result<Self, ScaleError> {
        let (d0, d1) = domain;
        if !d0.is_finite() || !d1.is_finite() || d0 > d1 || !(d1 - d0).is_finite() {
            return Err(ScaleError::InvalidDomain { min: d0, max: d1 });
        }
        let (r0, r1) = range;
        if !(r1 - r0).is_finite() {
            return Err(ScaleError::NonFiniteRange(r0, r1));
        }
        Ok(Self {
            domain,
            range,
            clamp: false,
        })
    }

    /// Creates a scale over the symmetric domain `[-max_abs, max_abs]`.
    ///
    /// Violin widths use this shape: a bin population `n` maps to `+n` on one side of the
    /// violin axis and `-n` on the other.
    pub fn symmetric(max_abs: f64, range: (f64, f64)) -> Result<Self, ScaleError> {
        let m = max_abs.abs();
        Self::new((-m, m), range)
    }

    /// Enables or disables clamping of mapped values to the range interval.
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Maps a value from domain space into range space.
    ///
    /// A degenerate domain (`min == max`) maps every input to the range start.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        let y = r0 + t * (r1 - r0);
        if self.clamp {
            y.clamp(r0.min(r1), r0.max(r1))
        } else {
            y
        }
    }

    /// Maps a range value back into domain space.
    ///
    /// A degenerate domain or range inverts to the domain start.
    pub fn invert(&self, y: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 || d1 == d0 {
            return d0;
        }
        let t = (y - r0) / denom;
        let x = d0 + t * (d1 - d0);
        if self.clamp { x.clamp(d0, d1) } else { x }
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns “nice-ish” tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }

    /// Returns a copy of this scale with its domain extended to the outer nice ticks.
    pub fn nice(&self, count: usize) -> Self {
        Self {
            domain: nice_domain(self.domain, count),
            ..*self
        }
    }
}

impl ContinuousScale for ScaleLinear {
    fn map(&self, value: f64) -> f64 {
        Self::map(self, value)
    }
}

fn nice_domain(domain: (f64, f64), count: usize) -> (f64, f64) {
    let ticks = nice_ticks(domain.0, domain.1, count);
    match (ticks.first(), ticks.last()) {
        (Some(&first), Some(&last)) if ticks.len() >= 2 => (first, last),
        _ => domain,
    }
}

/// Returns tick values at a 1/2/5 × 10^k step, from the last multiple of the step at or below
/// `min` to the first multiple at or above `max`.
///
/// Returns an empty vector for `count == 0`, for non-finite bounds, and when the span or the
/// extended tick range overflows. Returns `[min]` for an empty span.
pub fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    if !span.is_finite() {
        return Vec::new();
    }
    let step0 = span / count as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;
    if !(stop - start).is_finite() {
        return Vec::new();
    }

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    // Multiply rather than accumulate so every tick is an exact multiple of `step`.
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn maps_domain_linearly_onto_range() {
        let s = ScaleLinear::new((0.0, 10.0), (0.0, 200.0)).unwrap();
        assert_eq!(s.map(0.0), 0.0);
        assert_eq!(s.map(5.0), 100.0);
        assert_eq!(s.map(10.0), 200.0);
    }

    #[test]
    fn extrapolates_unless_clamped() {
        let s = ScaleLinear::new((0.0, 10.0), (0.0, 200.0)).unwrap();
        assert_eq!(s.map(20.0), 400.0);
        assert_eq!(s.map(-5.0), -100.0);
        let c = s.with_clamp(true);
        assert_eq!(c.map(20.0), 200.0);
        assert_eq!(c.map(-5.0), 0.0);
    }

    #[test]
    fn reversed_range_maps_and_clamps() {
        let s = ScaleLinear::new((0.0, 20.0), (400.0, 0.0))
            .unwrap()
            .with_clamp(true);
        assert_eq!(s.map(0.0), 400.0);
        assert_eq!(s.map(20.0), 0.0);
        assert_eq!(s.map(30.0), 0.0);
        assert_eq!(s.invert(100.0), 15.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let s = ScaleLinear::new((5.0, 5.0), (0.0, 200.0)).unwrap();
        assert_eq!(s.map(5.0), 0.0);
        for v in [-1.0e300, -1.0, 0.0, 5.0, 7.5, 1.0e300] {
            let y = s.map(v);
            assert!(y.is_finite(), "map({v}) = {y}");
            assert_eq!(y, 0.0);
        }
        assert_eq!(s.invert(120.0), 5.0);
    }

    #[test]
    fn rejects_reversed_or_non_finite_domain() {
        assert_eq!(
            ScaleLinear::new((10.0, 0.0), (0.0, 1.0)),
            Err(ScaleError::InvalidDomain {
                min: 10.0,
                max: 0.0
            })
        );
        assert!(matches!(
            ScaleLinear::new((0.0, f64::INFINITY), (0.0, 1.0)),
            Err(ScaleError::InvalidDomain { .. })
        ));
        assert!(matches!(
            ScaleLinear::new((0.0, 1.0), (f64::NAN, 1.0)),
            Err(ScaleError::NonFiniteRange(..))
        ));
    }

    #[test]
    fn rejects_domain_wider_than_f64() {
        assert_eq!(
            ScaleLinear::new((-1e308, 1e308), (0.0, 200.0)),
            Err(ScaleError::InvalidDomain {
                min: -1e308,
                max: 1e308
            })
        );
        assert!(matches!(
            ScaleLinear::symmetric(f64::MAX, (-1.0, 1.0)),
            Err(ScaleError::InvalidDomain { .. })
        ));
        assert!(matches!(
            ScaleLinear::new((0.0, 1.0), (-f64::MAX, f64::MAX)),
            Err(ScaleError::NonFiniteRange(..))
        ));

        // The widest accepted domain still maps without NaN.
        let s = ScaleLinear::new((-8e307, 8e307), (0.0, 200.0)).unwrap();
        assert_eq!(s.map(0.0), 100.0);
        assert_eq!(s.map(8e307), 200.0);
        assert_eq!(s.map(-8e307), 0.0);
    }

    #[test]
    fn invert_undoes_map() {
        let s = ScaleLinear::new((-3.0, 17.0), (12.0, 612.0)).unwrap();
        for v in [-3.0, 0.0, 4.25, 17.0] {
            assert!((s.invert(s.map(v)) - v).abs() < 1e-9);
        }
    }

    #[test]
    fn symmetric_scale_is_centered() {
        let w = ScaleLinear::symmetric(4.0, (-50.0, 50.0)).unwrap();
        assert_eq!(w.domain(), (-4.0, 4.0));
        assert_eq!(w.map(0.0), 0.0);
        assert_eq!(w.map(4.0), 50.0);
        assert_eq!(w.map(-2.0), -25.0);
    }

    #[test]
    fn nice_ticks_cover_domain_with_round_steps() {
        let ticks = nice_ticks(0.0, 20.0, 14);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&20.0));
        assert_eq!(ticks.len(), 21);

        let ticks = nice_ticks(0.51, 19.93, 4);
        assert_eq!(ticks, std::vec![0.0, 5.0, 10.0, 15.0, 20.0]);
    }

    #[test]
    fn nice_ticks_edge_cases() {
        assert!(nice_ticks(0.0, 1.0, 0).is_empty());
        assert!(nice_ticks(f64::NAN, 1.0, 5).is_empty());
        assert_eq!(nice_ticks(3.0, 3.0, 5), std::vec![3.0]);
        assert_eq!(nice_ticks(10.0, 0.0, 2), std::vec![0.0, 5.0, 10.0]);
        assert!(nice_ticks(-1e308, 1e308, 4).is_empty());
        assert!(nice_ticks(0.0, 1.7e308, 1).is_empty());
    }

    #[test]
    fn nice_extends_domain_outward() {
        let plain = ScaleLinear::new((0.51, 19.93), (0.0, 1.0)).unwrap();
        assert_eq!(plain.nice(4).domain(), (0.0, 20.0));
    }
}
