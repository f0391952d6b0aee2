//! Vimshottari dasha timelines and their Tribhagi view.
//!
//! This crate provides:
//! - Birth balance resolution from a nakshatra seed or Moon longitude
//! - The 120-year, three-level Vimshottari period tree
//! - The Tribhagi 1/4, 1/2, 1/4 re-partition of each mahadasha
//! - Active-period snapshots at any instant inside the cycle
//!
//! All computation is pure: every call rebuilds its tree from the seed.
//! Instants are Julian Dates (UTC); see [`time`] for `chrono` conversions.

pub mod config;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod time;
pub mod util;

pub use config::DashaConfig;
pub use dasha::{
    ActivePeriod, BirthSeed, DashaLevel, DashaMode, DashaPeriod, DashaSnapshot, TribhagiPart,
    TribhagiPeriod, VimshottariTimeline, dasha_snapshot, tribhagi_periods, tribhagi_snapshot,
    tribhagi_timeline, vimshottari_snapshot, vimshottari_timeline,
};
pub use error::DashaError;
pub use graha::{ALL_GRAHAS, Graha};
pub use nakshatra::{ALL_NAKSHATRAS_27, Nakshatra, NakshatraInfo, nakshatra_from_longitude};
pub use time::{datetime_to_jd, format_jd, jd_to_datetime, parse_utc, parse_utc_jd};
