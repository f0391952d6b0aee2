//! Core types for dasha (planetary period) calculations.
//!
//! A Vimshottari timeline is a tree of [`DashaPeriod`]s three levels deep.
//! The Tribhagi view re-cuts each mahadasha into three [`TribhagiPeriod`]s.
//! Instants are Julian Dates (UTC) throughout.

use serde::{Deserialize, Serialize};

use crate::error::DashaError;
use crate::graha::Graha;

/// Year length used for all dasha period arithmetic, in days.
///
/// Periods are laid out as flat day offsets, not calendar years.
pub const DAYS_PER_YEAR: f64 = 365.2422;

/// Length of one full Vimshottari cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Number of levels built for a timeline (maha, antar, pratyantar).
pub const MAX_DASHA_DEPTH: u8 = 3;

/// Deepest level index a snapshot can resolve (0 = mahadasha).
pub const MAX_DASHA_LEVEL: u8 = MAX_DASHA_DEPTH - 1;

/// Default deepest level for snapshots.
pub const DEFAULT_DASHA_LEVEL: u8 = MAX_DASHA_LEVEL;

/// Reject a snapshot level deeper than the tree holds.
pub fn validate_max_level(max_level: u8) -> Result<(), DashaError> {
    if max_level > MAX_DASHA_LEVEL {
        return Err(DashaError::InvalidInput("max_level must be in 0..=2"));
    }
    Ok(())
}

/// Hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
}

impl DashaLevel {
    /// Create from raw u8 value.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            _ => None,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }
}

/// A single dasha period with its nested sub-periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaPeriod {
    /// The graha ruling this period.
    pub graha: Graha,
    /// Hierarchical level.
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
    /// Sub-periods tiling `[start_jd, end_jd)`; empty at the deepest level.
    pub children: Vec<DashaPeriod>,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }
}

/// One of the three Tribhagi parts of a mahadasha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TribhagiPart {
    /// First quarter of the mahadasha.
    Purva = 1,
    /// Middle half.
    Madhya = 2,
    /// Last quarter.
    Paschima = 3,
}

/// All three parts in chronological order.
pub const ALL_TRIBHAGI_PARTS: [TribhagiPart; 3] = [
    TribhagiPart::Purva,
    TribhagiPart::Madhya,
    TribhagiPart::Paschima,
];

impl TribhagiPart {
    /// 1-based part number.
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Share of the mahadasha covered by this part.
    pub const fn ratio(self) -> f64 {
        match self {
            Self::Purva | Self::Paschima => 0.25,
            Self::Madhya => 0.50,
        }
    }

    /// Traditional name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Purva => "Purva",
            Self::Madhya => "Madhya",
            Self::Paschima => "Paschima",
        }
    }
}

/// A Tribhagi window over one mahadasha.
///
/// `children` are the mahadasha's antardashas overlapping the window, copied
/// unchanged; they may extend past `start_jd`/`end_jd`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TribhagiPeriod {
    /// The mahadasha lord.
    pub graha: Graha,
    /// Which third of the mahadasha this is.
    pub part: TribhagiPart,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
    /// Overlapping antardashas of the source mahadasha.
    pub children: Vec<DashaPeriod>,
}

impl TribhagiPeriod {
    /// Duration of the window in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }
}

/// Complete Vimshottari timeline for one birth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VimshottariTimeline {
    /// Birth JD UTC.
    pub birth_jd: f64,
    /// Start of the mahadasha in progress at birth (JD UTC).
    pub anchor_jd: f64,
    /// Years of the birth mahadasha remaining at birth.
    pub balance_years: f64,
    /// The 9 mahadashas with their sub-period trees.
    pub mahadashas: Vec<DashaPeriod>,
}

impl VimshottariTimeline {
    /// End of the 120-year cycle (JD UTC, exclusive).
    pub fn end_jd(&self) -> f64 {
        self.mahadashas
            .last()
            .map_or(self.anchor_jd, |p| p.end_jd)
    }
}

/// Which period structure a query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashaMode {
    /// Three-level maha/antar/pratyantar tree.
    #[default]
    Vimshottari,
    /// Tribhagi parts with overlapping antardashas.
    Tribhagi,
}

impl DashaMode {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vimshottari => "Vimshottari",
            Self::Tribhagi => "Tribhagi",
        }
    }
}

/// One resolved level of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivePeriod {
    /// Level of the matched period (the Tribhagi part reports Mahadasha).
    pub level: DashaLevel,
    /// Ruling graha.
    pub graha: Graha,
    /// Tribhagi part, only set for the top level of a Tribhagi snapshot.
    pub part: Option<TribhagiPart>,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
}

impl ActivePeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }
}

/// Active periods at a specific instant, one per resolved level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaSnapshot {
    /// Which structure produced this snapshot.
    pub mode: DashaMode,
    /// The queried JD UTC.
    pub query_jd: f64,
    /// Active periods: periods[0] is the top level, then deeper levels.
    pub periods: Vec<ActivePeriod>,
}
