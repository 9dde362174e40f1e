// Copyright 2025 the Densir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated observations.

extern crate alloc;

use alloc::string::String;

use crate::{SampleError, ShapeError};

/// One observation: a group label and a finite numeric value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawSample", into = "RawSample")
)]
pub struct Sample {
    group: String,
    value: f64,
}

impl Sample {
    /// Creates a sample, rejecting empty group labels and non-finite values.
    pub fn new(group: impl Into<String>, value: f64) -> Result<Self, SampleError> {
        let group = group.into();
        if group.is_empty() {
            return Err(SampleError::EmptyGroup);
        }
        if !value.is_finite() {
            return Err(SampleError::NonFiniteValue);
        }
        Ok(Self { group, value })
    }

    /// Returns the group label.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Returns the value.
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Wire shape of a sample: `{ "name": "A", "value": 10.75 }`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawSample {
    #[serde(alias = "group")]
    name: String,
    value: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSample> for Sample {
    type Error = SampleError;

    fn try_from(raw: RawSample) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.value)
    }
}

#[cfg(feature = "serde")]
impl From<Sample> for RawSample {
    fn from(sample: Sample) -> Self {
        Self {
            name: sample.group,
            value: sample.value,
        }
    }
}

/// Returns the `(min, max)` of the sample values.
pub fn domain_of(samples: &[Sample]) -> Result<(f64, f64), ShapeError> {
    let mut values = samples.iter().map(Sample::value);
    let first = values.next().ok_or(ShapeError::EmptyInput)?;
    Ok(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}
