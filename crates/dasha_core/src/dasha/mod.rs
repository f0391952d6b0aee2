//! Dasha (planetary period) calculations for Vedic astrology.
//!
//! Implements the Vimshottari system and its Tribhagi view:
//! - Vimshottari: 120-year cycle, 3 nested levels
//!   (Mahadasha, Antardasha, Pratyantardasha), 729 leaf periods
//! - Tribhagi: each mahadasha re-cut 1/4, 1/2, 1/4
//!
//! Computation tiers:
//! - Birth balance: seed to anchor instant
//! - Period tree: proportional subdivision to a fixed depth
//! - Snapshot: active chain at one instant

pub mod balance;
pub mod query;
pub mod sequence;
pub mod snapshot;
pub mod subperiod;
pub mod tribhagi;
pub mod types;
pub mod vimshottari;

pub use balance::{BirthBalance, BirthSeed, nakshatra_index_from_f64, vimshottari_birth_balance};
pub use query::{TimeSpan, active_chain, active_descendants, find_active_period};
pub use sequence::{
    VIMSHOTTARI_GRAHAS, VIMSHOTTARI_YEARS, rotate_from, vimshottari_position, vimshottari_sequence,
    vimshottari_years,
};
pub use snapshot::{
    dasha_snapshot, snapshot_from_timeline, snapshot_from_tribhagi, tribhagi_snapshot,
    vimshottari_snapshot,
};
pub use subperiod::{build_periods, snap_last_child_end};
pub use tribhagi::{tribhagi_periods, tribhagi_phase, tribhagi_timeline};
pub use types::{
    ALL_TRIBHAGI_PARTS, ActivePeriod, DAYS_PER_YEAR, DEFAULT_DASHA_LEVEL, DashaLevel, DashaMode,
    DashaPeriod, DashaSnapshot, MAX_DASHA_DEPTH, MAX_DASHA_LEVEL, TribhagiPart, TribhagiPeriod,
    VIMSHOTTARI_TOTAL_YEARS, VimshottariTimeline, validate_max_level,
};
pub use vimshottari::vimshottari_timeline;
