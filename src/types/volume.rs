// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Volume type for main zone attenuation.
//!
//! The receiver expresses volume as a decibel level carried on the wire as
//! an integer value plus a decimal exponent (`Val=-205, Exp=1` is -20.5 dB).
//! [`Volume`] stores the level in tenths of a decibel so that equality
//! checks never depend on floating point rounding.

use std::fmt;

use crate::error::ValueError;

/// Main zone volume level in decibels.
///
/// Levels requested by a user are quantized to the receiver's 0.5 dB step
/// (half-way values round away from zero) and must lie within
/// [`Volume::MIN_DB`]..=[`Volume::MAX_DB`]. Levels read back from the
/// receiver are taken as-is.
///
/// # Examples
///
/// ```
/// use yamaha_remote::types::Volume;
///
/// let vol = Volume::new(-20.3).unwrap();
/// assert_eq!(vol.db(), -20.5);
/// assert_eq!(vol.tenths(), -205);
///
/// // Out of range levels are rejected
/// assert!(Volume::new(30.0).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Volume(i32);

impl Volume {
    /// Lowest level accepted by the receiver.
    pub const MIN_DB: f64 = -80.0;

    /// Highest level accepted by the receiver.
    pub const MAX_DB: f64 = 16.0;

    /// Step size of user requested levels.
    pub const STEP_DB: f64 = 0.5;

    /// 0.0 dB, the reference level.
    pub const ZERO: Self = Self(0);

    /// Creates a volume from a decibel level, quantized to 0.5 dB.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NotFinite` for NaN or infinite input, and
    /// `ValueError::OutOfRange` if the quantized level lies outside the
    /// receiver's range.
    pub fn new(db: f64) -> Result<Self, ValueError> {
        if !db.is_finite() {
            return Err(ValueError::NotFinite);
        }
        let quantized = Self::quantize(db);
        if !(Self::MIN_DB..=Self::MAX_DB).contains(&quantized) {
            return Err(ValueError::OutOfRange {
                min: Self::MIN_DB,
                max: Self::MAX_DB,
                actual: db,
            });
        }
        Ok(Self::from_db_unchecked(quantized))
    }

    /// Creates a volume, clamping to the valid range after quantization.
    ///
    /// NaN maps to [`Volume::ZERO`].
    ///
    /// # Examples
    ///
    /// ```
    /// use yamaha_remote::types::Volume;
    ///
    /// assert_eq!(Volume::clamped(-95.0).db(), -80.0);
    /// assert_eq!(Volume::clamped(3.3).db(), 3.5);
    /// ```
    #[must_use]
    pub fn clamped(db: f64) -> Self {
        if db.is_nan() {
            return Self::ZERO;
        }
        Self::from_db_unchecked(Self::quantize(db.clamp(Self::MIN_DB, Self::MAX_DB)))
    }

    /// Creates a volume directly from tenths of a decibel.
    #[must_use]
    pub const fn from_tenths(tenths: i32) -> Self {
        Self(tenths)
    }

    /// Creates a volume from the receiver's `Val`/`Exp` representation.
    ///
    /// The level is `value / 10^exp` dB; precision finer than 0.1 dB is
    /// rounded away.
    ///
    /// # Examples
    ///
    /// ```
    /// use yamaha_remote::types::Volume;
    ///
    /// assert_eq!(Volume::from_device(-300, 1).db(), -30.0);
    /// assert_eq!(Volume::from_device(-45, 0).db(), -45.0);
    /// ```
    #[must_use]
    pub fn from_device(value: i32, exp: i32) -> Self {
        Self::from_db_unchecked(f64::from(value) / 10f64.powi(exp))
    }

    /// Returns the level in decibels.
    #[must_use]
    pub fn db(&self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// Returns the level in tenths of a decibel, the `Val` sent at `Exp=1`.
    #[must_use]
    pub const fn tenths(&self) -> i32 {
        self.0
    }

    /// Rounds to the nearest 0.5 dB step, half-way values away from zero.
    fn quantize(db: f64) -> f64 {
        (db / Self::STEP_DB).round() * Self::STEP_DB
    }

    // Callers bound the input to the receiver range, far inside i32.
    #[allow(clippy::cast_possible_truncation)]
    fn from_db_unchecked(db: f64) -> Self {
        Self((db * 10.0).round() as i32)
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} dB", self.db())
    }
}

impl TryFrom<f64> for Volume {
    type Error = ValueError;

    fn try_from(db: f64) -> Result<Self, Self::Error> {
        Self::new(db)
    }
}
