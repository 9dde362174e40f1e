// Copyright 2025 the Densir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for binning and outline construction.

use densir_scale::ScaleError;

/// Errors returned when validating a [`crate::Sample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SampleError {
    /// The group label is empty.
    #[error("sample group label is empty")]
    EmptyGroup,
    /// The value is `NaN` or infinite.
    #[error("sample value is not finite")]
    NonFiniteValue,
}

/// Errors returned by the distribution shape builder.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// The binning domain is reversed (`min > max`) or has a non-finite bound.
    #[error("invalid domain [{min}, {max}]")]
    InvalidDomain {
        /// Lower bound as given.
        min: f64,
        /// Upper bound as given.
        max: f64,
    },
    /// `min == max` while more than one bin was requested.
    #[error("cannot split the single-point domain [{value}, {value}] into {bins} bins")]
    DegenerateDomain {
        /// The domain bound.
        value: f64,
        /// The number of bins requested.
        bins: usize,
    },
    /// No samples, values, or bins were supplied.
    #[error("no input to bin")]
    EmptyInput,
    /// A threshold count of zero, or more than [`MAX_BINS`](crate::MAX_BINS).
    #[error("threshold count must be between 1 and 10000")]
    InvalidThresholdCount,
    /// An explicit threshold is `NaN` or infinite.
    #[error("threshold {0} is not finite")]
    NonFiniteThreshold(f64),
    /// An input value is `NaN`.
    #[error("value at index {index} is NaN")]
    NonFiniteValue {
        /// Position of the offending value in the input.
        index: usize,
    },
    /// Bins are not ordered, not contiguous, or have non-finite bounds.
    #[error("bin {index} does not continue the previous bin")]
    MalformedBins {
        /// Index of the first offending bin.
        index: usize,
    },
    /// A scale produced a non-finite coordinate for a bin.
    #[error("scales produced a non-finite coordinate for bin {index}")]
    NonFiniteCoordinate {
        /// Index of the offending bin.
        index: usize,
    },
    /// `samples_per_segment` was zero.
    #[error("samples per segment must be at least 1")]
    InvalidSampleCount,
    /// A sample failed validation.
    #[error(transparent)]
    Sample(#[from] SampleError),
    /// A scale could not be built or queried.
    #[error(transparent)]
    Scale(#[from] ScaleError),
}
