//! Birth seed and balance-of-dasha calculation.
//!
//! The seed is the Moon's nakshatra at birth plus the fraction of that
//! nakshatra still ahead of the Moon. The lord of the nakshatra rules the
//! mahadasha in progress at birth, and the same fraction of its period is
//! the balance remaining.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DashaError;
use crate::graha::Graha;
use crate::nakshatra::nakshatra_from_longitude;
use crate::time::{datetime_to_jd, jd_to_datetime};
use crate::util::ensure_finite;

use super::sequence::{VIMSHOTTARI_GRAHAS, vimshottari_years};
use super::types::DAYS_PER_YEAR;

/// Inputs that fully determine a birth's dasha timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthSeed {
    /// Birth instant, JD UTC.
    pub birth_jd: f64,
    /// Moon's nakshatra index at birth (0 = Ashwini); reduced mod 9.
    pub nakshatra_index: i64,
    /// Fraction of the birth lord's period still to run, in (0, 1].
    pub fraction_remaining: f64,
}

impl BirthSeed {
    /// Create a validated seed.
    pub fn new(
        birth_jd: f64,
        nakshatra_index: i64,
        fraction_remaining: f64,
    ) -> Result<Self, DashaError> {
        let seed = Self {
            birth_jd,
            nakshatra_index,
            fraction_remaining,
        };
        seed.validate()?;
        Ok(seed)
    }

    /// Create a seed from a UTC birth instant.
    pub fn from_utc(
        birth: chrono::DateTime<chrono::Utc>,
        nakshatra_index: i64,
        fraction_remaining: f64,
    ) -> Result<Self, DashaError> {
        Self::new(
            datetime_to_jd(birth),
            nakshatra_index,
            fraction_remaining,
        )
    }

    /// Derive the seed from the Moon's sidereal longitude at birth.
    pub fn from_moon_longitude(birth_jd: f64, moon_sidereal_lon: f64) -> Result<Self, DashaError> {
        if !moon_sidereal_lon.is_finite() {
            return Err(DashaError::InvalidInput("moon longitude must be finite"));
        }
        let info = nakshatra_from_longitude(moon_sidereal_lon);
        Self::new(
            birth_jd,
            i64::from(info.nakshatra_index),
            info.fraction_remaining(),
        )
    }

    /// Check every field, rejecting rather than clamping.
    pub fn validate(&self) -> Result<(), DashaError> {
        if !self.birth_jd.is_finite() {
            return Err(DashaError::InvalidInput("birth instant must be finite"));
        }
        if jd_to_datetime(self.birth_jd).is_none() {
            return Err(DashaError::InvalidInput(
                "birth instant outside the representable date range",
            ));
        }
        if self.nakshatra_index < 0 {
            return Err(DashaError::InvalidInput(
                "nakshatra index must be non-negative",
            ));
        }
        if !self.fraction_remaining.is_finite()
            || self.fraction_remaining <= 0.0
            || self.fraction_remaining > 1.0
        {
            return Err(DashaError::InvalidInput(
                "fraction remaining must be in (0, 1]",
            ));
        }
        Ok(())
    }

    /// Lord of the mahadasha running at birth.
    pub fn birth_graha(&self) -> Graha {
        VIMSHOTTARI_GRAHAS[self.nakshatra_index.rem_euclid(9) as usize]
    }
}

/// Convert a nakshatra index received as a float into an integer index.
///
/// Rejects NaN, infinities, negative and non-integral values.
pub fn nakshatra_index_from_f64(value: f64) -> Result<i64, DashaError> {
    if !value.is_finite() {
        return Err(DashaError::InvalidInput("nakshatra index must be finite"));
    }
    if value < 0.0 {
        return Err(DashaError::InvalidInput(
            "nakshatra index must be non-negative",
        ));
    }
    if value.fract() != 0.0 {
        return Err(DashaError::InvalidInput("nakshatra index must be an integer"));
    }
    // i64::MAX rounds up to 2^63 as f64, which does not fit.
    if value >= i64::MAX as f64 {
        return Err(DashaError::InvalidInput("nakshatra index out of range"));
    }
    Ok(value as i64)
}

/// Resolved start of the birth mahadasha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthBalance {
    /// Lord of the mahadasha running at birth.
    pub graha: Graha,
    /// Full period of that lord in years.
    pub total_years: f64,
    /// Years remaining at birth.
    pub balance_years: f64,
    /// Years already elapsed at birth.
    pub elapsed_years: f64,
    /// Start of the birth mahadasha, JD UTC.
    pub anchor_jd: f64,
}

/// Resolve where the birth mahadasha truly began.
///
/// The elapsed part of the birth lord's period is subtracted from the birth
/// instant as `elapsed_years * 365.2422` days.
pub fn vimshottari_birth_balance(seed: &BirthSeed) -> Result<BirthBalance, DashaError> {
    seed.validate()?;
    let graha = seed.birth_graha();
    let total_years = vimshottari_years(graha);
    let balance_years = total_years * seed.fraction_remaining;
    let elapsed_years = total_years - balance_years;
    let anchor_jd = ensure_finite(
        seed.birth_jd - elapsed_years * DAYS_PER_YEAR,
        "non-finite anchor instant",
    )?;

    debug!(
        graha = graha.name(),
        balance_years,
        elapsed_years,
        anchor_jd,
        "resolved birth balance"
    );
    Ok(BirthBalance {
        graha,
        total_years,
        balance_years,
        elapsed_years,
        anchor_jd,
    })
}
