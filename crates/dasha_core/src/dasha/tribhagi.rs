//! Tribhagi view: each mahadasha split 1/4, 1/2, 1/4.
//!
//! The parts re-cut time only. Antardashas are attached by overlap and keep
//! their Vimshottari boundaries, so an attached child can run past the end
//! of its part and the children of a part do not sum to the part's length.

use tracing::debug;

use crate::error::DashaError;

use super::balance::BirthSeed;
use super::types::{ALL_TRIBHAGI_PARTS, DashaPeriod, TribhagiPart, TribhagiPeriod};
use super::vimshottari::vimshottari_timeline;

/// Split each mahadasha into its three Tribhagi parts.
///
/// Output is chronological: all parts of the first mahadasha, then the next.
pub fn tribhagi_periods(mahadashas: &[DashaPeriod]) -> Vec<TribhagiPeriod> {
    let mut parts = Vec::with_capacity(mahadashas.len() * ALL_TRIBHAGI_PARTS.len());

    for md in mahadashas {
        let duration = md.duration_days();
        let mut cursor = md.start_jd;
        for part in ALL_TRIBHAGI_PARTS {
            let end = match part {
                TribhagiPart::Paschima => md.end_jd,
                _ => cursor + duration * part.ratio(),
            };
            let children = md
                .children
                .iter()
                .filter(|ad| ad.start_jd < end && ad.end_jd > cursor)
                .cloned()
                .collect();
            parts.push(TribhagiPeriod {
                graha: md.graha,
                part,
                start_jd: cursor,
                end_jd: end,
                children,
            });
            cursor = end;
        }
    }

    debug!(parts = parts.len(), "tribhagi periods built");
    parts
}

/// Build the Vimshottari timeline for a seed and return its Tribhagi parts.
pub fn tribhagi_timeline(seed: &BirthSeed) -> Result<Vec<TribhagiPeriod>, DashaError> {
    let timeline = vimshottari_timeline(seed)?;
    Ok(tribhagi_periods(&timeline.mahadashas))
}

/// Which Tribhagi part of `[start_jd, end_jd)` contains `jd`.
///
/// Classified by elapsed ratio: below 0.25 Purva, below 0.75 Madhya,
/// otherwise Paschima. Returns `None` for an empty or inverted span.
pub fn tribhagi_phase(start_jd: f64, end_jd: f64, jd: f64) -> Option<TribhagiPart> {
    let total = end_jd - start_jd;
    if total.is_nan() || total <= 0.0 {
        return None;
    }
    let ratio = (jd - start_jd) / total;
    if ratio < 0.25 {
        Some(TribhagiPart::Purva)
    } else if ratio < 0.75 {
        Some(TribhagiPart::Madhya)
    } else {
        Some(TribhagiPart::Paschima)
    }
}
