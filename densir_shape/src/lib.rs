// Copyright 2025 the Densir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distribution shapes for `densir`.
//!
//! This crate turns numeric samples into the geometry of a violin plot:
//! - [`compute_bins`] partitions a domain into contiguous bins and assigns each value to one.
//! - [`build_density_outline`] maps bins through a value scale and a width scale and smooths
//!   the result with an [`Interpolate`] strategy into a [`DensityOutline`].
//! - [`ViolinPlotSpec`] does both for every group of a sample set and lays the groups out on a
//!   band scale.
//!
//! Everything is a pure function of its inputs. Outlines are `kurbo` geometry; turning them into
//! pixels is left to the caller.
//!
//! ```
//! use densir_scale::ScaleLinear;
//! use densir_shape::{Thresholds, build_density_outline, compute_bins};
//!
//! let bins = compute_bins(&[1.0, 2.0, 2.5, 7.0], (0.0, 10.0), &Thresholds::Count(2)).unwrap();
//! assert_eq!(bins[0].len(), 3);
//!
//! let y = ScaleLinear::new((0.0, 10.0), (100.0, 0.0)).unwrap();
//! let w = ScaleLinear::new((0.0, 3.0), (0.0, 30.0)).unwrap();
//! let outline = build_density_outline(&bins, &y, &w).unwrap();
//! assert!(outline.is_closed());
//! assert_eq!(outline.control_points().len(), 4);
//! ```
//!
//! ## Features
//!
//! - `std`: use the standard library for float math.
//! - `libm` (default): use `libm` for float math in `no_std` builds.
//! - `serde`: (de)serialize [`Sample`] as `{ "name": .., "value": .. }` and serialize [`Bin`].

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod bin;
mod curve;
mod error;
mod outline;
mod sample;
mod violin;

pub use bin::{Bin, GroupBins, MAX_BINS, Thresholds, bin_groups, compute_bins, max_bin_len};
pub use curve::{Bump, CatmullRom, Interpolate, Linear, MonotoneX};
pub use error::{SampleError, ShapeError};
pub use outline::{
    BinAnchor, DensityOutline, DensityOutlineSpec, Orientation, OutlineSide, build_density_outline,
};
pub use sample::{Sample, domain_of};
pub use violin::{Violin, ViolinPlot, ViolinPlotSpec};

pub use densir_scale::{ContinuousScale, ScaleBand, ScaleLinear};
