//! Point-in-time lookup over ordered period lists.

use super::types::{DashaPeriod, MAX_DASHA_DEPTH, TribhagiPeriod};

/// A half-open `[start_jd, end_jd)` interval that may carry sub-periods.
pub trait TimeSpan {
    /// JD UTC, inclusive.
    fn start_jd(&self) -> f64;
    /// JD UTC, exclusive.
    fn end_jd(&self) -> f64;
    /// Nested antardasha-style sub-periods, empty at the deepest level.
    fn children(&self) -> &[DashaPeriod];

    /// Whether `jd` falls inside this span.
    fn contains_jd(&self, jd: f64) -> bool {
        self.start_jd() <= jd && jd < self.end_jd()
    }
}

impl TimeSpan for DashaPeriod {
    fn start_jd(&self) -> f64 {
        self.start_jd
    }

    fn end_jd(&self) -> f64 {
        self.end_jd
    }

    fn children(&self) -> &[DashaPeriod] {
        &self.children
    }
}

impl TimeSpan for TribhagiPeriod {
    fn start_jd(&self) -> f64 {
        self.start_jd
    }

    fn end_jd(&self) -> f64 {
        self.end_jd
    }

    fn children(&self) -> &[DashaPeriod] {
        &self.children
    }
}

/// Index of the period active at `jd` in a list sorted by start.
///
/// Start is inclusive and end exclusive, so an instant on a shared boundary
/// belongs to the later period. Returns `None` before the first start, at or
/// after the last end, and for NaN.
pub fn find_active_period<T: TimeSpan>(periods: &[T], jd: f64) -> Option<usize> {
    let after = periods.partition_point(|p| p.start_jd() <= jd);
    let idx = after.checked_sub(1)?;
    periods[idx].contains_jd(jd).then_some(idx)
}

/// Follow the active period down through `children` from `periods`.
///
/// Stops after `max_depth` matches, at an empty child list, or where no
/// child contains `jd`.
pub fn active_descendants(
    periods: &[DashaPeriod],
    jd: f64,
    max_depth: usize,
) -> Vec<&DashaPeriod> {
    let mut chain = Vec::with_capacity(max_depth.min(usize::from(MAX_DASHA_DEPTH)));
    let mut current = periods;
    while chain.len() < max_depth {
        let Some(idx) = find_active_period(current, jd) else {
            break;
        };
        let matched = &current[idx];
        chain.push(matched);
        current = matched.children();
    }
    chain
}

/// Full active chain at `jd`, down to the deepest built level.
pub fn active_chain(periods: &[DashaPeriod], jd: f64) -> Vec<&DashaPeriod> {
    active_descendants(periods, jd, usize::MAX)
}
