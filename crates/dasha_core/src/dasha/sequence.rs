//! Vimshottari graha order and period weights.
//!
//! Provenance: BPHS, Vimshottari dasha chapter. The nine lords run in a
//! fixed cycle and their periods add up to 120 years.

use crate::graha::Graha;

/// Vimshottari graha sequence: Ketu, Shukra, Surya, Chandra, Mangal, Rahu, Guru, Shani, Buddh.
pub const VIMSHOTTARI_GRAHAS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Vimshottari periods in years, parallel to [`VIMSHOTTARI_GRAHAS`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Full mahadasha length of a graha in years.
pub const fn vimshottari_years(graha: Graha) -> f64 {
    match graha {
        Graha::Ketu => 7.0,
        Graha::Shukra => 20.0,
        Graha::Surya => 6.0,
        Graha::Chandra => 10.0,
        Graha::Mangal => 7.0,
        Graha::Rahu => 18.0,
        Graha::Guru => 16.0,
        Graha::Shani => 19.0,
        Graha::Buddh => 17.0,
    }
}

/// Position of a graha in the Vimshottari cycle (Ketu = 0).
pub fn vimshottari_position(graha: Graha) -> usize {
    match graha {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// Rotate `order` so that it begins at `start`, keeping cyclic adjacency.
///
/// Returns `None` when `start` is not in `order`.
pub fn rotate_from<T: Copy + PartialEq>(order: &[T], start: T) -> Option<Vec<T>> {
    let pos = order.iter().position(|e| *e == start)?;
    let n = order.len();
    Some((0..n).map(|i| order[(pos + i) % n]).collect())
}

/// The 9 Vimshottari lords in cycle order, starting from `start`.
pub fn vimshottari_sequence(start: Graha) -> [Graha; 9] {
    let pos = vimshottari_position(start);
    let mut seq = VIMSHOTTARI_GRAHAS;
    seq.rotate_left(pos);
    seq
}
