// Copyright 2025 the Densir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales for `densir`.
//!
//! A scale is an immutable mapping from a logical domain into a pixel range:
//! - [`ScaleLinear`] maps a closed numeric interval linearly (and back, via
//!   [`ScaleLinear::invert`]).
//! - [`ScaleBand`] maps an ordered set of category labels to equal slots and exposes the
//!   band width left after padding.
//!
//! Scales are plain values. Rebuild one whenever its data or pixel dimensions change; share it
//! freely otherwise.
//!
//! ```
//! use densir_scale::{ScaleBand, ScaleLinear};
//!
//! let y = ScaleLinear::new((0.0, 10.0), (0.0, 200.0)).unwrap();
//! assert_eq!(y.map(5.0), 100.0);
//!
//! let x = ScaleBand::new(["A", "B", "C"], (0.0, 300.0), 0.0).unwrap();
//! assert_eq!(x.position_of("A").unwrap(), 0.0);
//! assert_eq!(x.bandwidth(), 100.0);
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod band;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod linear;

pub use band::ScaleBand;
pub use error::ScaleError;
pub use linear::{ScaleLinear, nice_ticks};

/// A pure numeric mapping from domain values to range values.
///
/// Shape builders take scales through this trait, so a [`ScaleLinear`] or any
/// `Fn(f64) -> f64` can be plugged in.
pub trait ContinuousScale {
    /// Maps a domain value into range space.
    fn map(&self, value: f64) -> f64;
}

impl<F> ContinuousScale for F
where
    F: Fn(f64) -> f64,
{
    fn map(&self, value: f64) -> f64 {
        self(value)
    }
}
