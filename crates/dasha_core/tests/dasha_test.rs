//! Integration tests for the dasha timeline engine.
//!
//! Pure math only: seeds are given directly, no ephemeris needed.

use chrono::{TimeZone, Utc};
use dasha_core::dasha::{
    DAYS_PER_YEAR, DashaLevel, DashaMode, TribhagiPart, build_periods, find_active_period,
    snapshot_from_timeline, snapshot_from_tribhagi, tribhagi_periods, vimshottari_birth_balance,
};
use dasha_core::{
    BirthSeed, DashaConfig, DashaError, Graha, dasha_snapshot, datetime_to_jd, format_jd,
    tribhagi_snapshot, tribhagi_timeline, vimshottari_snapshot, vimshottari_timeline,
};

fn jd(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> f64 {
    datetime_to_jd(Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap())
}

/// Born 1990-01-01T00:00Z in Bharani (index 1, Shukra) with half the
/// nakshatra still ahead of the Moon.
fn fixture_seed() -> BirthSeed {
    BirthSeed::new(jd(1990, 1, 1, 0, 0, 0), 1, 0.5).unwrap()
}

fn fixture_query() -> f64 {
    jd(2026, 1, 3, 0, 0, 0)
}

/// Anchor is birth minus 10 * 365.2422 days, not ten calendar years.
#[test]
fn fixture_anchor_uses_fixed_year() {
    let seed = fixture_seed();
    let balance = vimshottari_birth_balance(&seed).unwrap();
    assert_eq!(balance.graha, Graha::Shukra);
    assert_eq!(balance.balance_years, 10.0);
    assert_eq!(balance.elapsed_years, 10.0);
    assert!((balance.anchor_jd - 2_444_240.078).abs() < 1e-8);
    assert_eq!(format_jd(balance.anchor_jd), "1980-01-01T13:52:19.200Z");
    // Calendar subtraction would land on midnight.
    assert!((balance.anchor_jd - jd(1980, 1, 1, 0, 0, 0) - 0.578).abs() < 1e-8);
}

#[test]
fn fixture_mahadasha_boundaries() {
    let timeline = vimshottari_timeline(&fixture_seed()).unwrap();
    let lords: Vec<Graha> = timeline.mahadashas.iter().map(|p| p.graha).collect();
    assert_eq!(
        lords,
        vec![
            Graha::Shukra,
            Graha::Surya,
            Graha::Chandra,
            Graha::Mangal,
            Graha::Rahu,
            Graha::Guru,
            Graha::Shani,
            Graha::Buddh,
            Graha::Ketu,
        ]
    );
    let rahu = &timeline.mahadashas[4];
    let expected_start = timeline.anchor_jd + 43.0 * DAYS_PER_YEAR;
    assert!((rahu.start_jd - expected_start).abs() < 1e-8);
    assert_eq!(format_jd(rahu.start_jd), "2022-12-31T23:49:20.640Z");
}

/// Pinned regression: Rahu mahadasha, Tribhagi part 1, Guru antardasha.
#[test]
fn fixture_tribhagi_resolves_rahu_part_one() {
    let snap = tribhagi_snapshot(&fixture_seed(), fixture_query(), 2)
        .unwrap()
        .expect("2026-01-03 lies inside the cycle");
    assert_eq!(snap.mode, DashaMode::Tribhagi);
    assert_eq!(snap.periods[0].graha, Graha::Rahu);
    assert_eq!(snap.periods[0].part, Some(TribhagiPart::Purva));
    assert_eq!(format_jd(snap.periods[0].end_jd), "2027-07-02T13:58:48.000Z");
    assert_eq!(snap.periods[1].graha, Graha::Guru);
    assert_eq!(snap.periods[1].level, DashaLevel::Antardasha);
    assert_eq!(snap.periods[2].graha, Graha::Guru);
}

#[test]
fn fixture_vimshottari_chain() {
    let snap = vimshottari_snapshot(&fixture_seed(), fixture_query(), 2)
        .unwrap()
        .unwrap();
    let chain: Vec<(DashaLevel, Graha)> = snap.periods.iter().map(|p| (p.level, p.graha)).collect();
    assert_eq!(
        chain,
        vec![
            (DashaLevel::Mahadasha, Graha::Rahu),
            (DashaLevel::Antardasha, Graha::Guru),
            (DashaLevel::Pratyantardasha, Graha::Guru),
        ]
    );
    assert_eq!(format_jd(snap.periods[1].start_jd), "2025-09-13T03:31:01.056Z");
    assert!(snap.periods[2].end_jd < jd(2026, 1, 9, 0, 0, 0));
}

/// The Purva part of Rahu carries the Guru antardasha whole, including the
/// stretch after the part has ended.
#[test]
fn fixture_part_children_are_unscaled() {
    let parts = tribhagi_timeline(&fixture_seed()).unwrap();
    let idx = find_active_period(&parts, fixture_query()).unwrap();
    let part = &parts[idx];
    let lords: Vec<Graha> = part.children.iter().map(|c| c.graha).collect();
    assert_eq!(lords, vec![Graha::Rahu, Graha::Guru]);
    let child_days: f64 = part.children.iter().map(|c| c.duration_days()).sum();
    assert!(child_days > part.duration_days());
    assert!(part.children[1].end_jd > part.end_jd);
}

#[test]
fn modes_agree_on_top_level_lord() {
    let seed = fixture_seed();
    let timeline = vimshottari_timeline(&seed).unwrap();
    let parts = tribhagi_periods(&timeline.mahadashas);
    let mut jd = timeline.anchor_jd;
    while jd < timeline.end_jd() {
        let v = snapshot_from_timeline(&timeline, jd, 0).unwrap().unwrap();
        let t = snapshot_from_tribhagi(&parts, jd, 0).unwrap().unwrap();
        assert_eq!(v.periods[0].graha, t.periods[0].graha);
        jd += 97.3;
    }
}

#[test]
fn config_snapshot_matches_direct_call() {
    let config = DashaConfig {
        mode: DashaMode::Tribhagi,
        max_level: 2,
    };
    let via_config = dasha_snapshot(&fixture_seed(), fixture_query(), &config).unwrap();
    let direct = tribhagi_snapshot(&fixture_seed(), fixture_query(), 2).unwrap();
    assert_eq!(via_config, direct);
}

#[test]
fn rebuild_is_deterministic() {
    let a = vimshottari_timeline(&fixture_seed()).unwrap();
    let b = vimshottari_timeline(&fixture_seed()).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        tribhagi_timeline(&fixture_seed()).unwrap(),
        tribhagi_timeline(&fixture_seed()).unwrap()
    );
}

#[test]
fn cycle_edges() {
    let seed = fixture_seed();
    let timeline = vimshottari_timeline(&seed).unwrap();
    let start = timeline.anchor_jd;
    let end = timeline.end_jd();

    let at_start = vimshottari_snapshot(&seed, start, 2).unwrap().unwrap();
    assert_eq!(at_start.periods[0].graha, Graha::Shukra);
    assert_eq!(vimshottari_snapshot(&seed, start - 1e-6, 2), Ok(None));
    assert_eq!(vimshottari_snapshot(&seed, end, 2), Ok(None));
    assert_eq!(tribhagi_snapshot(&seed, end, 2), Ok(None));

    let last = vimshottari_snapshot(&seed, end - 1e-6, 2).unwrap().unwrap();
    assert_eq!(last.periods[0].graha, Graha::Ketu);
    assert_eq!(last.periods.len(), 3);
}

/// The instant Purva ends is already Madhya, still inside the Guru antardasha.
#[test]
fn tribhagi_part_boundary_goes_forward() {
    let seed = fixture_seed();
    let parts = tribhagi_timeline(&seed).unwrap();
    let idx = find_active_period(&parts, fixture_query()).unwrap();
    let purva_end = parts[idx].end_jd;
    assert_eq!(parts[idx + 1].start_jd, purva_end);

    let snap = tribhagi_snapshot(&seed, purva_end, 2).unwrap().unwrap();
    assert_eq!(snap.periods[0].graha, Graha::Rahu);
    assert_eq!(snap.periods[0].part, Some(TribhagiPart::Madhya));
    assert_eq!(snap.periods[0].start_jd, purva_end);
    assert_eq!(snap.periods[1].graha, Graha::Guru);
    assert!(snap.periods[1].start_jd < purva_end);

    let before = tribhagi_snapshot(&seed, purva_end - 1e-6, 0).unwrap().unwrap();
    assert_eq!(before.periods[0].part, Some(TribhagiPart::Purva));
}

/// A birth too far out for f64 day arithmetic is refused, not collapsed.
#[test]
fn degenerate_durations_are_rejected() {
    assert!(matches!(
        BirthSeed::new(1e20, 0, 1.0),
        Err(DashaError::InvalidInput(_))
    ));
    let hand_built = BirthSeed {
        birth_jd: 1e20,
        nakshatra_index: 0,
        fraction_remaining: 1.0,
    };
    assert!(vimshottari_timeline(&hand_built).is_err());
    assert!(tribhagi_snapshot(&hand_built, 1e20, 2).is_err());
    assert!(matches!(
        build_periods(Graha::Ketu, 1e20, 120.0, 3),
        Err(DashaError::ArithmeticAnomaly(_))
    ));
}

#[test]
fn snapshot_level_past_tree_depth_is_rejected() {
    let seed = fixture_seed();
    let timeline = vimshottari_timeline(&seed).unwrap();
    assert!(matches!(
        snapshot_from_timeline(&timeline, fixture_query(), 3),
        Err(DashaError::InvalidInput(_))
    ));
    assert!(matches!(
        vimshottari_snapshot(&seed, fixture_query(), 9),
        Err(DashaError::InvalidInput(_))
    ));
}

/// A mahadasha boundary instant belongs to the following mahadasha.
#[test]
fn mahadasha_boundary_goes_forward() {
    let seed = fixture_seed();
    let timeline = vimshottari_timeline(&seed).unwrap();
    let boundary = timeline.mahadashas[0].end_jd;
    let snap = vimshottari_snapshot(&seed, boundary, 2).unwrap().unwrap();
    assert_eq!(snap.periods[0].graha, Graha::Surya);
    assert_eq!(snap.periods[1].graha, Graha::Surya);
    assert_eq!(snap.periods[2].graha, Graha::Surya);
}

#[test]
fn moon_longitude_seed_matches_index_seed() {
    // 20 deg: Bharani (index 1), 6.667 deg in, half remaining.
    let birth = jd(1990, 1, 1, 0, 0, 0);
    let from_lon = BirthSeed::from_moon_longitude(birth, 20.0).unwrap();
    assert_eq!(from_lon.nakshatra_index, 1);
    assert!((from_lon.fraction_remaining - 0.5).abs() < 1e-12);
    let a = vimshottari_snapshot(&from_lon, fixture_query(), 2).unwrap().unwrap();
    let b = vimshottari_snapshot(&fixture_seed(), fixture_query(), 2).unwrap().unwrap();
    let lords =
        |s: &dasha_core::DashaSnapshot| s.periods.iter().map(|p| p.graha).collect::<Vec<_>>();
    assert_eq!(lords(&a), lords(&b));
}

#[test]
fn invalid_seeds_fail_synchronously() {
    let birth = jd(1990, 1, 1, 0, 0, 0);
    assert!(matches!(
        BirthSeed::new(birth, -1, 0.5),
        Err(DashaError::InvalidInput(_))
    ));
    assert!(matches!(
        BirthSeed::new(birth, 1, 0.0),
        Err(DashaError::InvalidInput(_))
    ));
    assert!(matches!(
        BirthSeed::new(birth, 1, 1.5),
        Err(DashaError::InvalidInput(_))
    ));
    assert!(matches!(
        BirthSeed::new(birth, 1, f64::NAN),
        Err(DashaError::InvalidInput(_))
    ));
}
