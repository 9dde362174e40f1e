// Copyright 2025 the Densir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `libm` fallbacks for the float methods tick generation needs.
//!
//! `core` has no `floor`, `ceil`, `round`, `log10`, or `powf` on `f64`. With `std` enabled the
//! inherent methods are used and this module is not compiled.

pub(crate) trait FloatExt {
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn round(self) -> Self;
    fn log10(self) -> Self;
    fn powf(self, exp: Self) -> Self;
}

#[cfg(feature = "libm")]
impl FloatExt for f64 {
    #[inline]
    fn floor(self) -> Self {
        libm::floor(self)
    }

    #[inline]
    fn ceil(self) -> Self {
        libm::ceil(self)
    }

    #[inline]
    fn round(self) -> Self {
        libm::round(self)
    }

    #[inline]
    fn log10(self) -> Self {
        libm::log10(self)
    }

    #[inline]
    fn powf(self, exp: Self) -> Self {
        libm::pow(self, exp)
    }
}

#[cfg(not(feature = "libm"))]
compile_error!("densir_scale needs the `std` or `libm` feature for float math");
