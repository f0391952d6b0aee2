//! Vimshottari timeline for a birth.

use tracing::debug;

use crate::error::DashaError;

use super::balance::{BirthSeed, vimshottari_birth_balance};
use super::subperiod::build_periods;
use super::types::{MAX_DASHA_DEPTH, VIMSHOTTARI_TOTAL_YEARS, VimshottariTimeline};

/// Build the full 120-year, three-level timeline for a birth seed.
///
/// The first mahadasha starts at the anchor, before birth unless the Moon
/// was exactly at the start of its nakshatra.
pub fn vimshottari_timeline(seed: &BirthSeed) -> Result<VimshottariTimeline, DashaError> {
    let balance = vimshottari_birth_balance(seed)?;
    let mahadashas = build_periods(
        balance.graha,
        balance.anchor_jd,
        VIMSHOTTARI_TOTAL_YEARS,
        MAX_DASHA_DEPTH,
    )?;
    debug!(
        birth_jd = seed.birth_jd,
        anchor_jd = balance.anchor_jd,
        periods = mahadashas.len(),
        "vimshottari timeline built"
    );

    Ok(VimshottariTimeline {
        birth_jd: seed.birth_jd,
        anchor_jd: balance.anchor_jd,
        balance_years: balance.balance_years,
        mahadashas,
    })
}
