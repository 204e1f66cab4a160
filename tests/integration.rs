use chrono::{TimeZone, Utc};
use qtty::Days;
use skyephem::{
    ecliptic_to_equatorial, equatorial_to_horizontal, julian_day_number, moon_horizontal,
    moon_phase, sun_horizontal, Direction, EclipticCoordinate, GregorianDateTime, JulianDay,
    Observer, SkyClock, SkyState,
};

#[test]
fn calendar_fixed_points() {
    assert_eq!(julian_day_number(2000, 1, 1), 2_451_545);
    let jd = GregorianDateTime::new(1999, 12, 31, 0, 0, 0.0)
        .unwrap()
        .to_julian_day();
    assert_eq!(jd.value(), 2_451_543.5);
}

#[test]
fn chrono_and_calendar_paths_agree() {
    let utc = Utc.with_ymd_and_hms(2015, 3, 20, 9, 46, 30).unwrap();
    let via_chrono = JulianDay::from_utc(utc);
    let via_calendar = GregorianDateTime::from(utc.naive_utc()).to_julian_day();
    assert!((via_chrono.value() - via_calendar.value()).abs() < 1e-8);
}

#[test]
fn sun_and_moon_scenario_at_j2000() {
    let observer = Observer::new(0.0, 0.0);
    let sun = sun_horizontal(JulianDay::J2000, observer);
    assert!((sun.azimuth - 246.560719).abs() < 1e-9);
    assert!((sun.altitude - 10.381452221507427).abs() < 1e-9);

    let moon = moon_horizontal(JulianDay::J2000, observer);
    assert!((moon.azimuth - 254.07707063737323).abs() < 1e-9);
    assert!((moon.altitude + 46.43548493152848).abs() < 1e-9);
}

#[test]
fn pipeline_by_hand_matches_convenience_functions() {
    let jd = JulianDay::new(2_458_849.75);
    let observer = Observer::new(2.35, 48.85);

    let ecl = skyephem::moon_ecliptic(jd);
    let (ra, dec) = ecliptic_to_equatorial(ecl.longitude, ecl.latitude);
    let eq = EclipticCoordinate::new(ecl.longitude, ecl.latitude).to_equatorial();
    assert!((eq.right_ascension - ra.to_degrees()).abs() < 1e-9);
    assert!((eq.declination - dec.to_degrees()).abs() < 1e-9);

    let by_hand = equatorial_to_horizontal(jd, observer, eq);
    assert_eq!(by_hand, moon_horizontal(jd, observer));
    assert_eq!(
        Direction::from(by_hand),
        skyephem::moon_direction(jd, observer)
    );
}

#[test]
fn observers_are_independent_values() {
    let jd = JulianDay::new(2_460_310.5);
    let north = Observer::new(10.0, 60.0);
    let south = Observer::new(10.0, -60.0);
    let a = sun_horizontal(jd, north);
    let _ = sun_horizontal(jd, south);
    assert_eq!(a, sun_horizontal(jd, north));
}

#[test]
fn concurrent_queries_are_deterministic() {
    let jd = JulianDay::new(2_459_000.123);
    let expected = SkyState::compute(jd, Observer::DEFAULT);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || SkyState::compute(jd, Observer::DEFAULT)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn clock_drives_a_day_of_sky() {
    let mut clock = SkyClock::new(JulianDay::J2000);
    let mut min_alt = f64::MAX;
    let mut max_alt = f64::MIN;
    // 50 s of real time at the default scale is one Julian day.
    for _ in 0..500 {
        clock.advance(0.1);
        let sky = clock.state(Observer::new(0.0, 45.0));
        min_alt = min_alt.min(sky.sun.altitude);
        max_alt = max_alt.max(sky.sun.altitude);
        assert!((0.0..4.0).contains(&sky.moon_phase));
    }
    assert!((clock.julian_day() - JulianDay::J2000 - Days::new(1.0)).value().abs() < 1e-6);
    assert!(min_alt < 0.0 && max_alt > 0.0, "sun never crossed the horizon");
}

#[test]
fn phase_cycle_over_a_month() {
    let start = JulianDay::new(2_460_000.0);
    let samples: Vec<f64> = (0..30)
        .map(|i| moon_phase(start + Days::new(i as f64)))
        .collect();
    let max = samples.iter().cloned().fold(f64::MIN, f64::max);
    let min = samples.iter().cloned().fold(f64::MAX, f64::min);
    assert!(max > 1.8);
    assert!(min < 0.2);
}

#[cfg(feature = "serde")]
#[test]
fn serde_sky_clock_and_observer() {
    let clock = SkyClock::with_time_scale(JulianDay::J2000, 0.5);
    let json = serde_json::to_string(&clock).unwrap();
    assert!(json.contains("2451545"));
    assert!(json.contains("time_scale"));
    let back: SkyClock = serde_json::from_str(&json).unwrap();
    assert_eq!(back, clock);

    let dt: GregorianDateTime =
        serde_json::from_str(r#"{"year":2000,"month":1,"day":1,"hour":12,"minute":0,"second":0.0}"#)
            .unwrap();
    assert_eq!(dt.to_julian_day(), JulianDay::J2000);
}
