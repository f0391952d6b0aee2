//! Proportional sub-period generation.
//!
//! Every level uses the same pattern: a span of `basis_years` is divided
//! among the 9 lords in cycle order, each receiving
//! `vimshottari_years(lord) / 120` of it. Children of a period repeat the
//! pattern over the parent's own duration, starting from the parent's lord.

use tracing::trace;

use crate::error::DashaError;
use crate::graha::Graha;
use crate::util::ensure_finite;

use super::sequence::{vimshottari_sequence, vimshottari_years};
use super::types::{
    DAYS_PER_YEAR, DashaLevel, DashaPeriod, MAX_DASHA_DEPTH, VIMSHOTTARI_TOTAL_YEARS,
};

/// Snap the last child's end_jd to parent's end_jd to absorb floating-point drift.
///
/// Recurses down the chain of last children so every level stays tiled.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
        snap_last_child_end(&mut last.children, parent_end_jd);
    }
}

/// Build `depth` nested levels of periods starting at `start_jd`.
///
/// The first returned period is ruled by `start_graha`; the list spans
/// `basis_years * 365.2422` days. `depth` must be in `1..=3`; depth 3 yields
/// mahadashas, depth 2 antardashas and depth 1 pratyantardashas.
pub fn build_periods(
    start_graha: Graha,
    start_jd: f64,
    basis_years: f64,
    depth: u8,
) -> Result<Vec<DashaPeriod>, DashaError> {
    if depth == 0 || depth > MAX_DASHA_DEPTH {
        return Err(DashaError::InvalidInput("depth must be in 1..=3"));
    }
    ensure_finite(start_jd, "non-finite start instant")?;
    ensure_finite(basis_years, "non-finite basis duration")?;
    if basis_years <= 0.0 {
        return Err(DashaError::ArithmeticAnomaly("non-positive basis duration"));
    }
    let level = DashaLevel::from_u8(MAX_DASHA_DEPTH - depth)
        .ok_or(DashaError::InvalidInput("depth must be in 1..=3"))?;
    build_level(start_graha, start_jd, basis_years, level, depth)
}

fn build_level(
    start_graha: Graha,
    start_jd: f64,
    basis_years: f64,
    level: DashaLevel,
    depth: u8,
) -> Result<Vec<DashaPeriod>, DashaError> {
    let sequence = vimshottari_sequence(start_graha);
    let mut periods = Vec::with_capacity(sequence.len());
    let mut cursor = start_jd;

    for (order_0, graha) in sequence.into_iter().enumerate() {
        let duration_years = vimshottari_years(graha) * basis_years / VIMSHOTTARI_TOTAL_YEARS;
        let end = ensure_finite(
            cursor + duration_years * DAYS_PER_YEAR,
            "non-finite period end",
        )?;
        if end <= cursor {
            // Span too small to register against the start instant in f64.
            return Err(DashaError::ArithmeticAnomaly("period collapsed to zero length"));
        }

        let children = match (depth > 1, level.child_level()) {
            (true, Some(child_level)) => {
                let mut children =
                    build_level(graha, cursor, duration_years, child_level, depth - 1)?;
                snap_last_child_end(&mut children, end);
                children
            }
            _ => Vec::new(),
        };

        trace!(
            graha = graha.name(),
            level = level.name(),
            start_jd = cursor,
            end_jd = end,
            "period built"
        );
        periods.push(DashaPeriod {
            graha,
            level,
            order: (order_0 as u16) + 1,
            start_jd: cursor,
            end_jd: end,
            children,
        });
        cursor = end;
    }

    Ok(periods)
}
