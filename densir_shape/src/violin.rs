// Copyright 2025 the Densir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouped violin layout.
//!
//! This wires the pieces together: samples are grouped and binned over a shared domain, groups
//! are laid out left to right on a band scale, and each group gets a vertical outline centered
//! in its band.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use densir_scale::{ScaleBand, ScaleLinear};

use crate::curve::Interpolate;
use crate::outline::{BinAnchor, DensityOutline, DensityOutlineSpec, Orientation, OutlineSide};
use crate::{Bin, Sample, ShapeError, Thresholds, bin_groups, domain_of, max_bin_len};

/// Layout options for a grouped violin plot.
#[derive(Clone, Debug)]
pub struct ViolinPlotSpec {
    /// Plot width in pixels (the band scale range is `[0, width]`).
    pub width: f64,
    /// Plot height in pixels (the value scale range is `[height, 0]`).
    pub height: f64,
    /// Binning domain. When `None`, the extent of the samples is used.
    pub domain: Option<(f64, f64)>,
    /// How each group's values are binned.
    pub thresholds: Thresholds,
    /// Band padding fraction in `[0, 1)`.
    pub padding: f64,
    /// When set, the value scale domain is extended to nice ticks for roughly this many intervals.
    pub nice: Option<usize>,
    /// Outline options. `center` and `orientation` are set per group by the layout.
    pub outline: DensityOutlineSpec,
}

impl Default for ViolinPlotSpec {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            domain: None,
            thresholds: Thresholds::default(),
            padding: 0.05,
            nice: None,
            outline: DensityOutlineSpec::default(),
        }
    }
}

impl ViolinPlotSpec {
    /// Creates a spec for a `width` × `height` plot with default options.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Fixes the binning domain instead of using the sample extent.
    pub fn with_domain(mut self, domain: (f64, f64)) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Sets the binning rule.
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Sets the band padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Extends the value scale to nice ticks (or not, with `None`).
    pub fn with_nice(mut self, tick_count: Option<usize>) -> Self {
        self.nice = tick_count;
        self
    }

    /// Sets the interpolation strategy for every outline.
    pub fn with_curve(mut self, curve: impl Interpolate + Send + Sync + 'static) -> Self {
        self.outline = self.outline.with_curve(curve);
        self
    }

    /// Sets which boundaries every outline traces.
    pub fn with_side(mut self, side: OutlineSide) -> Self {
        self.outline = self.outline.with_side(side);
        self
    }

    /// Sets the bin anchor for every outline.
    pub fn with_anchor(mut self, anchor: BinAnchor) -> Self {
        self.outline = self.outline.with_anchor(anchor);
        self
    }

    /// Sets the number of render points sampled per outline segment.
    pub fn with_samples_per_segment(mut self, samples: usize) -> Self {
        self.outline = self.outline.with_samples_per_segment(samples);
        self
    }

    /// Lays out one violin per group of `samples`.
    ///
    /// The width scale maps `[-m, m]` onto `[-bandwidth / 2, bandwidth / 2]`, where `m` is the
    /// largest bin population across all groups (at least `1`, so all-empty bins stay finite).
    pub fn build(&self, samples: &[Sample]) -> Result<ViolinPlot, ShapeError> {
        let domain = match self.domain {
            Some(domain) => domain,
            None => domain_of(samples)?,
        };
        let groups = bin_groups(samples, domain, &self.thresholds)?;

        let mut value_scale = ScaleLinear::new(domain, (self.height, 0.0))?;
        if let Some(count) = self.nice {
            value_scale = value_scale.nice(count);
        }
        let group_scale = ScaleBand::new(
            groups.iter().map(|g| g.group.as_str()),
            (0.0, self.width),
            self.padding,
        )?;
        let max_len = max_bin_len(&groups).max(1);
        let half = group_scale.bandwidth() * 0.5;
        let width_scale = ScaleLinear::symmetric(max_len as f64, (-half, half))?;

        log::debug!(
            target: "densir_shape",
            "violin layout: {} groups over [{}, {}], largest bin {max_len}",
            groups.len(),
            domain.0,
            domain.1
        );

        let mut violins = Vec::with_capacity(groups.len());
        for g in groups {
            let outline = self
                .outline
                .clone()
                .with_orientation(Orientation::Vertical)
                .with_center(group_scale.center_of(&g.group)?)
                .build(&g.bins, &value_scale, &width_scale)?;
            violins.push(Violin {
                group: g.group,
                bins: g.bins,
                outline,
            });
        }

        Ok(ViolinPlot {
            value_scale,
            group_scale,
            width_scale,
            violins,
        })
    }
}

/// One group's bins and outline.
#[derive(Clone, Debug, PartialEq)]
pub struct Violin {
    /// The group label.
    pub group: String,
    /// The group's bins over the shared domain.
    pub bins: Vec<Bin>,
    /// The outline, in plot pixels.
    pub outline: DensityOutline,
}

/// A laid-out violin plot: the scales used plus one [`Violin`] per group, in first-seen order.
#[derive(Clone, Debug, PartialEq)]
pub struct ViolinPlot {
    value_scale: ScaleLinear,
    group_scale: ScaleBand,
    width_scale: ScaleLinear,
    violins: Vec<Violin>,
}

impl ViolinPlot {
    /// The vertical value scale (`[height, 0]` range).
    pub fn value_scale(&self) -> &ScaleLinear {
        &self.value_scale
    }

    /// The horizontal band scale over group labels.
    pub fn group_scale(&self) -> &ScaleBand {
        &self.group_scale
    }

    /// The symmetric scale from bin population to horizontal offset.
    pub fn width_scale(&self) -> &ScaleLinear {
        &self.width_scale
    }

    /// The violins, in group order.
    pub fn violins(&self) -> &[Violin] {
        &self.violins
    }

    /// Nice tick values that fall inside the value scale domain.
    pub fn value_ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = self.value_scale.domain();
        let mut ticks = self.value_scale.ticks(count);
        ticks.retain(|&t| t >= lo && t <= hi);
        ticks
    }
}
