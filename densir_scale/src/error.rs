// Copyright 2025 the Densir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale construction and lookup errors.

extern crate alloc;

use alloc::string::String;

/// Errors returned when building or querying a scale.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScaleError {
    /// The domain is reversed (`min > max`) or has a non-finite bound.
    #[error("invalid domain [{min}, {max}]")]
    InvalidDomain {
        /// Lower bound as given.
        min: f64,
        /// Upper bound as given.
        max: f64,
    },
    /// A range bound is not finite.
    #[error("range bounds must be finite, got [{0}, {1}]")]
    NonFiniteRange(f64, f64),
    /// Band padding outside `[0, 1)`.
    #[error("band padding must be in [0, 1), got {0}")]
    InvalidPadding(f64),
    /// A categorical domain listed the same label twice.
    #[error("category `{0}` appears more than once")]
    DuplicateCategory(String),
    /// A categorical scale was queried with a label it does not contain.
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    /// A categorical domain with no labels.
    #[error("categorical domain is empty")]
    EmptyDomain,
}
