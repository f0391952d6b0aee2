//! Active-period snapshots: build the timeline, then drill down at one instant.
//!
//! `Ok(None)` means the query instant lies outside the resolved 120-year
//! cycle. That is an ordinary outcome, distinct from an `Err` for bad input.

use tracing::debug;

use crate::config::DashaConfig;
use crate::error::DashaError;
use crate::util::ensure_finite;

use super::balance::BirthSeed;
use super::query::{TimeSpan, active_descendants, find_active_period};
use super::tribhagi::tribhagi_periods;
use super::types::{
    ActivePeriod, DashaLevel, DashaMode, DashaPeriod, DashaSnapshot, TribhagiPeriod,
    VimshottariTimeline, validate_max_level,
};
use super::vimshottari::vimshottari_timeline;

fn active_from_period(period: &DashaPeriod) -> ActivePeriod {
    ActivePeriod {
        level: period.level,
        graha: period.graha,
        part: None,
        start_jd: period.start_jd,
        end_jd: period.end_jd,
    }
}

/// Active maha/antar/pratyantar chain at `query_jd` within a built timeline.
///
/// `max_level` is the deepest level index to resolve and must be in `0..=2`.
pub fn snapshot_from_timeline(
    timeline: &VimshottariTimeline,
    query_jd: f64,
    max_level: u8,
) -> Result<Option<DashaSnapshot>, DashaError> {
    validate_max_level(max_level)?;
    let chain = active_descendants(&timeline.mahadashas, query_jd, usize::from(max_level) + 1);
    if chain.is_empty() {
        return Ok(None);
    }
    Ok(Some(DashaSnapshot {
        mode: DashaMode::Vimshottari,
        query_jd,
        periods: chain.into_iter().map(active_from_period).collect(),
    }))
}

/// Active Tribhagi part, then overlapping antardasha chain, at `query_jd`.
///
/// `max_level` 0 stops at the part; 1 adds the antardasha; 2 adds the
/// pratyantardasha. Anything deeper is rejected.
pub fn snapshot_from_tribhagi(
    parts: &[TribhagiPeriod],
    query_jd: f64,
    max_level: u8,
) -> Result<Option<DashaSnapshot>, DashaError> {
    validate_max_level(max_level)?;
    let Some(idx) = find_active_period(parts, query_jd) else {
        return Ok(None);
    };
    let part = &parts[idx];
    let mut periods = vec![ActivePeriod {
        level: DashaLevel::Mahadasha,
        graha: part.graha,
        part: Some(part.part),
        start_jd: part.start_jd,
        end_jd: part.end_jd,
    }];
    periods.extend(
        active_descendants(part.children(), query_jd, usize::from(max_level))
            .into_iter()
            .map(active_from_period),
    );
    Ok(Some(DashaSnapshot {
        mode: DashaMode::Tribhagi,
        query_jd,
        periods,
    }))
}

/// Vimshottari snapshot for a birth seed.
pub fn vimshottari_snapshot(
    seed: &BirthSeed,
    query_jd: f64,
    max_level: u8,
) -> Result<Option<DashaSnapshot>, DashaError> {
    validate_max_level(max_level)?;
    ensure_finite(query_jd, "non-finite query instant")?;
    let timeline = vimshottari_timeline(seed)?;
    let snapshot = snapshot_from_timeline(&timeline, query_jd, max_level)?;
    debug!(query_jd, found = snapshot.is_some(), "vimshottari snapshot");
    Ok(snapshot)
}

/// Tribhagi snapshot for a birth seed.
pub fn tribhagi_snapshot(
    seed: &BirthSeed,
    query_jd: f64,
    max_level: u8,
) -> Result<Option<DashaSnapshot>, DashaError> {
    validate_max_level(max_level)?;
    ensure_finite(query_jd, "non-finite query instant")?;
    let timeline = vimshottari_timeline(seed)?;
    let parts = tribhagi_periods(&timeline.mahadashas);
    let snapshot = snapshot_from_tribhagi(&parts, query_jd, max_level)?;
    debug!(query_jd, found = snapshot.is_some(), "tribhagi snapshot");
    Ok(snapshot)
}

/// Snapshot in the mode and depth selected by `config`.
pub fn dasha_snapshot(
    seed: &BirthSeed,
    query_jd: f64,
    config: &DashaConfig,
) -> Result<Option<DashaSnapshot>, DashaError> {
    config.validate()?;
    match config.mode {
        DashaMode::Vimshottari => vimshottari_snapshot(seed, query_jd, config.max_level),
        DashaMode::Tribhagi => tribhagi_snapshot(seed, query_jd, config.max_level),
    }
}
