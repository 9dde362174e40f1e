// Copyright 2025 the Densir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorical band scales.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::ScaleError;

/// A categorical scale dividing a pixel range into one equal slot per label.
///
/// Each slot is `step()` wide. The band drawn inside a slot starts at the slot start and is
/// `bandwidth() = step() * (1 - padding)` wide.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleBand {
    labels: Vec<String>,
    index: HashMap<String, usize>,
    range: (f64, f64),
    padding: f64,
}

impl ScaleBand {
    /// Creates a band scale over `labels` (in order) spanning `range`.
    ///
    /// Labels must be unique and non-empty as a set, and `padding` must be in `[0, 1)`.
    pub fn new<I, S>(labels: I, range: (f64, f64), padding: f64) -> Result<Self, ScaleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (r0, r1) = range;
        if !r0.is_finite() || !r1.is_finite() {
            return Err(ScaleError::NonFiniteRange(r0, r1));
        }
        if !(0.0..1.0).contains(&padding) {
            return Err(ScaleError::InvalidPadding(padding));
        }

        let mut out = Vec::new();
        let mut index = HashMap::new();
        for label in labels {
            let label = label.as_ref();
            if index.contains_key(label) {
                return Err(ScaleError::DuplicateCategory(label.to_string()));
            }
            index.insert(label.to_string(), out.len());
            out.push(label.to_string());
        }
        if out.is_empty() {
            return Err(ScaleError::EmptyDomain);
        }
        log::trace!(
            target: "densir_scale",
            "band scale: {} labels over [{r0}, {r1}], padding {padding}",
            out.len()
        );

        Ok(Self {
            labels: out,
            index,
            range,
            padding,
        })
    }

    /// Returns the number of categories.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always `false`: construction rejects an empty domain.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the labels in slot order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns the padding fraction.
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Returns the width of one slot (band plus padding).
    pub fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        (r1 - r0) / self.labels.len() as f64
    }

    /// Returns the band width after padding is applied.
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Returns the slot index of `label`.
    pub fn index_of(&self, label: &str) -> Result<usize, ScaleError> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| ScaleError::UnknownCategory(label.to_string()))
    }

    /// Returns the start pixel of `label`'s slot.
    pub fn position_of(&self, label: &str) -> Result<f64, ScaleError> {
        let i = self.index_of(label)?;
        Ok(self.range.0 + self.step() * i as f64)
    }

    /// Returns the pixel at the middle of `label`'s band.
    pub fn center_of(&self, label: &str) -> Result<f64, ScaleError> {
        Ok(self.position_of(label)? + self.bandwidth() * 0.5)
    }
}
