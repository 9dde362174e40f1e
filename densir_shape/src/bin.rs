// Copyright 2025 the Densir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partitioning values into contiguous bins.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::{Sample, ShapeError};

/// A contiguous interval of the domain plus the values that fell inside it.
///
/// Bins are half-open `[x0, x1)`, except the last bin of a partition, which also contains `x1`.
/// The population is always `values().len()`; there is no separately stored count.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bin {
    x0: f64,
    x1: f64,
    values: Vec<f64>,
}

impl Bin {
    /// Creates a bin from its bounds and contained values.
    ///
    /// Bins produced by [`compute_bins`] always satisfy the partition invariants; hand-built bins
    /// are checked when they are turned into an outline.
    pub fn new(x0: f64, x1: f64, values: Vec<f64>) -> Self {
        Self { x0, x1, values }
    }

    /// Inclusive lower bound.
    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Upper bound (exclusive, or inclusive for the last bin).
    pub fn x1(&self) -> f64 {
        self.x1
    }

    /// Midpoint of the interval.
    pub fn mid(&self) -> f64 {
        self.x0 + (self.x1 - self.x0) * 0.5
    }

    /// The values assigned to this bin, in input order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values in this bin.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no value fell in this bin.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Largest `n` accepted by [`Thresholds::Count`] and [`Thresholds::Nice`].
pub const MAX_BINS: usize = 10_000;

/// How the domain is split into bins.
#[derive(Clone, Debug, PartialEq)]
pub enum Thresholds {
    /// `n` bins of equal width, for `1 <= n <= MAX_BINS`.
    Count(usize),
    /// Boundaries on the "nice" ticks of the domain for roughly `n` intervals.
    ///
    /// Ticks on or outside the domain bounds are dropped, so the first and last bins may be
    /// narrower than the others.
    Nice(usize),
    /// Explicit inner boundaries.
    ///
    /// Boundaries are sorted and deduplicated; those on or outside the domain bounds are dropped.
    Explicit(Vec<f64>),
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::Nice(14)
    }
}

impl Thresholds {
    /// Bins asked for, counting only the explicit boundaries that survived filtering.
    fn requested_bins(&self, inner: &[f64]) -> usize {
        match self {
            Self::Count(n) | Self::Nice(n) => *n,
            Self::Explicit(_) => inner.len() + 1,
        }
    }

    /// Returns the sorted boundaries strictly inside `(min, max)`.
    fn inner_boundaries(&self, min: f64, max: f64) -> Result<Vec<f64>, ShapeError> {
        let mut inner = match self {
            Self::Count(n) | Self::Nice(n) if *n == 0 || *n > MAX_BINS => {
                return Err(ShapeError::InvalidThresholdCount);
            }
            Self::Count(n) => {
                let width = (max - min) / *n as f64;
                (1..*n).map(|i| min + width * i as f64).collect()
            }
            Self::Nice(n) => densir_scale::nice_ticks(min, max, *n),
            Self::Explicit(t) => {
                if let Some(&bad) = t.iter().find(|t| !t.is_finite()) {
                    return Err(ShapeError::NonFiniteThreshold(bad));
                }
                let mut t = t.clone();
                t.sort_by(f64::total_cmp);
                t
            }
        };
        inner.retain(|&t| t > min && t < max);
        inner.dedup();
        Ok(inner)
    }
}

/// Partitions `[min, max]` and assigns each value to the bin containing it.
///
/// - A value `v` lands in the bin with `x0 <= v < x1`. A value equal to `max` lands in the last
///   bin.
/// - Values outside `[min, max]` (including infinities) are dropped.
/// - `NaN` values are rejected with [`ShapeError::NonFiniteValue`].
/// - When `min == max`, a single closed bin `[min, min]` is produced if one bin was requested,
///   and [`ShapeError::DegenerateDomain`] is returned otherwise. Explicit thresholds never
///   request more than one bin here, since none lie inside the empty interval.
/// - A domain whose width `max - min` overflows is rejected with [`ShapeError::InvalidDomain`].
pub fn compute_bins(
    values: &[f64],
    domain: (f64, f64),
    thresholds: &Thresholds,
) -> Result<Vec<Bin>, ShapeError> {
    let (min, max) = domain;
    if !min.is_finite() || !max.is_finite() || min > max || !(max - min).is_finite() {
        return Err(ShapeError::InvalidDomain { min, max });
    }
    if values.is_empty() {
        return Err(ShapeError::EmptyInput);
    }

    let inner = thresholds.inner_boundaries(min, max)?;
    let requested = thresholds.requested_bins(&inner);
    if min == max && requested > 1 {
        return Err(ShapeError::DegenerateDomain {
            value: min,
            bins: requested,
        });
    }

    let mut bins: Vec<Bin> = Vec::with_capacity(inner.len() + 1);
    let mut x0 = min;
    for &x1 in inner.iter().chain(core::iter::once(&max)) {
        bins.push(Bin::new(x0, x1, Vec::new()));
        x0 = x1;
    }

    let mut dropped = 0_usize;
    for (index, &v) in values.iter().enumerate() {
        if v.is_nan() {
            return Err(ShapeError::NonFiniteValue { index });
        }
        if v < min || v > max {
            dropped += 1;
            continue;
        }
        // Number of inner boundaries at or below `v`; `max` itself falls past every boundary.
        let i = inner.partition_point(|&t| t <= v);
        bins[i].values.push(v);
    }

    log::trace!(
        target: "densir_shape",
        "binned {} values into {} bins over [{min}, {max}] ({dropped} outside the domain)",
        values.len(),
        bins.len()
    );
    Ok(bins)
}

/// The bins computed for one group of samples.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GroupBins {
    /// The group label.
    pub group: String,
    /// Bins over the shared domain.
    pub bins: Vec<Bin>,
}

impl GroupBins {
    /// Population of the largest bin in this group.
    pub fn max_len(&self) -> usize {
        self.bins.iter().map(Bin::len).max().unwrap_or(0)
    }
}

/// Groups samples by label (in first-seen order) and bins each group over `domain`.
pub fn bin_groups(
    samples: &[Sample],
    domain: (f64, f64),
    thresholds: &Thresholds,
) -> Result<Vec<GroupBins>, ShapeError> {
    if samples.is_empty() {
        return Err(ShapeError::EmptyInput);
    }

    let mut order: Vec<(&str, Vec<f64>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for sample in samples {
        let slot = *index.entry(sample.group()).or_insert_with(|| {
            order.push((sample.group(), Vec::new()));
            order.len() - 1
        });
        order[slot].1.push(sample.value());
    }

    log::debug!(
        target: "densir_shape",
        "binning {} samples in {} groups",
        samples.len(),
        order.len()
    );

    order
        .into_iter()
        .map(|(group, values)| {
            Ok(GroupBins {
                group: group.to_string(),
                bins: compute_bins(&values, domain, thresholds)?,
            })
        })
        .collect()
}

/// Population of the largest bin across all groups.
pub fn max_bin_len(groups: &[GroupBins]) -> usize {
    groups.iter().map(GroupBins::max_len).max().unwrap_or(0)
}
