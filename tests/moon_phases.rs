//! Moon phase instants, Moon age and illumination over complete lunations.

use lunisolar_positioning::phase::SYNODIC_MONTH;
use lunisolar_positioning::time::{CalendarDate, DeltaT, julian_day_from_calendar};
use lunisolar_positioning::{Error, MoonPhase, Observer, SunMoonCalculator};

/// Published instants (UT) are rounded to the minute; the model agrees within a few minutes.
const TOLERANCE_DAYS: f64 = 5.0 / 1440.0;

fn calculator(year: i32, month: u32, day: u32, hour: u32) -> SunMoonCalculator {
    let observer = Observer::new(0.0, 0.0, 0.0).unwrap();
    let date = CalendarDate::new(year, month, day, hour, 0, 0.0).unwrap();
    SunMoonCalculator::from_calendar(observer, &date).unwrap()
}

#[test]
fn test_published_phases() {
    let cases = [
        ((2024, 1, 11), MoonPhase::New, (2024, 1, 11, 11, 57)),
        ((2024, 4, 8), MoonPhase::New, (2024, 4, 8, 18, 21)), // total solar eclipse
        ((2024, 1, 25), MoonPhase::Full, (2024, 1, 25, 17, 54)),
        ((1999, 8, 11), MoonPhase::New, (1999, 8, 11, 11, 8)), // total solar eclipse
    ];

    for ((year, month, day), phase, (ey, em, ed, eh, emin)) in cases {
        let found = calculator(year, month, day, 0)
            .moon_phase_instant(phase)
            .unwrap();
        let expected = julian_day_from_calendar(ey, em, ed, eh, emin, 0.0);
        assert!(
            (found - expected).abs() < TOLERANCE_DAYS,
            "{phase:?} near {year}-{month}-{day}: off by {:.1} min",
            (found - expected) * 1440.0
        );
    }
}

#[test]
fn test_successive_new_moons() {
    let mut jd = julian_day_from_calendar(2024, 1, 1, 0, 0, 0.0);
    let observer = Observer::new(0.0, 0.0, 0.0).unwrap();
    let mut previous: Option<f64> = None;
    for _ in 0..13 {
        let session = SunMoonCalculator::new(observer, jd, DeltaT::estimate(2024, 6, 1)).unwrap();
        let new_moon = session.moon_phase_instant(MoonPhase::New).unwrap();
        if let Some(previous) = previous {
            // Lunations vary between about 29.27 and 29.83 days
            let lunation = new_moon - previous;
            assert!((29.2..29.9).contains(&lunation), "lunation of {lunation} days");
        }
        previous = Some(new_moon);
        jd = new_moon + SYNODIC_MONTH;
    }
}

#[test]
fn test_phases_are_ordered_within_a_lunation() {
    // Start right after the new moon of 2024-01-11
    let session = calculator(2024, 1, 11, 13);
    let new = session.moon_phase_instant(MoonPhase::New).unwrap();
    let quarter = session
        .moon_phase_instant_for_fraction(0.25)
        .unwrap()
        .unwrap();
    let full = calculator(2024, 1, 25, 0)
        .moon_phase_instant(MoonPhase::Full)
        .unwrap();

    assert!(new < quarter && quarter < full);
    assert!((quarter - new - SYNODIC_MONTH / 4.0).abs() < 1.5);
}

#[test]
fn test_arbitrary_fraction_validation() {
    let session = calculator(2024, 1, 11, 0);
    assert!(matches!(
        session.moon_phase_instant_for_fraction(1.0),
        Err(Error::InvalidPhaseFraction { .. })
    ));
    assert!(session.moon_phase_instant_for_fraction(-0.25).is_err());
    assert!(session.moon_phase_instant_for_fraction(f64::NAN).is_err());
    assert!(session.moon_phase_instant_for_fraction(0.125).unwrap().is_some());
}

#[test]
fn test_age_and_illumination_through_a_lunation() {
    let observer = Observer::new(48.21, 16.37, 190.0).unwrap();
    let new_moon = calculator(2024, 1, 11, 0)
        .moon_phase_instant(MoonPhase::New)
        .unwrap();

    let mut previous_age = -1.0;
    let mut brightest = (0.0, 0.0);
    for step in 1..56 {
        let jd = new_moon + f64::from(step) * 0.5;
        let ephemerides = SunMoonCalculator::new(observer, jd, 69.2).unwrap().compute();
        let age = ephemerides.moon_age();

        assert!(age > previous_age, "age decreased at step {step}");
        assert!((0.0..SYNODIC_MONTH).contains(&age));
        previous_age = age;

        let illumination = ephemerides.moon().illumination();
        assert!((0.0..=100.0).contains(&illumination));
        if illumination > brightest.0 {
            brightest = (illumination, age);
        }
    }

    // Fully lit at about half the cycle
    assert!(brightest.0 > 99.0);
    assert!((brightest.1 - SYNODIC_MONTH / 2.0).abs() < 1.0);
}

#[test]
fn test_bright_limb_faces_the_sun() {
    // Waxing crescent in the evening: the Sun is west of the Moon
    let waxing = calculator(2024, 1, 14, 18).moon_appearance();
    let limb = waxing.bright_limb_angle().to_degrees();
    assert!(limb > 180.0 && limb < 360.0, "waxing limb at {limb}°");

    // Waning crescent: the Sun is east of the Moon
    let waning = calculator(2024, 2, 6, 6).moon_appearance();
    let limb = waning.bright_limb_angle().to_degrees();
    assert!(limb > 0.0 && limb < 180.0, "waning limb at {limb}°");

    assert!(waxing.phase_angle().to_degrees() < 90.0);
    assert!(waning.phase_angle().to_degrees() > 270.0);
}
