//! Illumination, Moon age and Moon phase instants.

use log::{debug, warn};

use crate::epoch::EpochState;
use crate::error::check_phase_fraction;
use crate::math::{TWO_PI, atan2, clamp_unit, cos, normalize_radians, sin, sqrt};
use crate::sun::AU;
use crate::time::SECONDS_PER_DAY;
use crate::types::{Ephemeris, MoonAppearance};

/// Mean length of the synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;

/// Mean Earth–Moon distance in kilometers.
const MEAN_LUNAR_DISTANCE: f64 = 384_400.0;

/// Convergence threshold of the phase search as a fraction of the cycle (10 s out of 30 days).
const PHASE_ACCURACY: f64 = 10.0 / (30.0 * SECONDS_PER_DAY);

/// Iteration cap of the phase search.
pub const MAX_PHASE_ITERATIONS: usize = 100;

/// Computes the illuminated fraction of a body's disk in percent.
///
/// Solves the Sun–Earth–body triangle from the two geocentric distances and the elongation
/// between both bodies. `sun` and `body` must be for the same instant.
#[must_use]
pub fn illumination(sun: &Ephemeris, body: &Ephemeris) -> f64 {
    let cos_elongation = clamp_unit(
        sin(sun.declination()) * sin(body.declination())
            + cos(sun.declination())
                * cos(body.declination())
                * cos(body.right_ascension() - sun.right_ascension()),
    );

    let sun_distance = sun.distance();
    let body_distance = body.distance();
    let sun_body_distance = sqrt(
        (sun_distance * sun_distance + body_distance * body_distance
            - 2.0 * sun_distance * body_distance * cos_elongation)
            .max(0.0),
    );
    let cos_phase = clamp_unit(
        (sun_body_distance * sun_body_distance + body_distance * body_distance
            - sun_distance * sun_distance)
            / (2.0 * sun_body_distance * body_distance),
    );
    100.0 * (1.0 + cos_phase) * 0.5
}

/// Computes the Moon's age in days from the ecliptic longitudes of Moon and Sun (radians).
#[must_use]
pub fn moon_age(moon_longitude: f64, sun_longitude: f64) -> f64 {
    normalize_radians(moon_longitude - sun_longitude) * SYNODIC_MONTH / TWO_PI
}

/// Searches the instant closest to the epoch when the Moon reaches a phase.
///
/// # Arguments
/// * `epoch` - Starting instant (ΔT and longitude are reused)
/// * `fraction` - Target phase as a fraction of the synodic month: 0 new, 0.25 first quarter,
///   0.5 full, 0.75 last quarter
///
/// # Returns
/// The Julian Day (UT) of the phase, within about 10 seconds, or `None` if the search did not
/// converge within [`MAX_PHASE_ITERATIONS`] steps. The search moves backwards when less than
/// half a cycle has elapsed since the phase, forwards otherwise.
///
/// A `fraction` outside [0, 1) has no solution and gives `None`;
/// [`SunMoonCalculator::moon_phase_instant_for_fraction`](crate::SunMoonCalculator::moon_phase_instant_for_fraction)
/// reports it as an error instead.
#[must_use]
pub fn moon_phase_instant(epoch: &EpochState, fraction: f64) -> Option<f64> {
    if check_phase_fraction(fraction).is_err() {
        warn!("phase fraction {fraction} outside [0, 1)");
        return None;
    }

    let mut jd = epoch.jd_ut();
    let mut state = *epoch;
    for iteration in 0..MAX_PHASE_ITERATIONS {
        let moon = crate::moon::position(&state).position();
        let sun = crate::sun::position(&state);

        let mut residual = normalize_radians(moon.longitude() - sun.longitude()) / TWO_PI - fraction;
        if residual < 0.0 {
            residual += 1.0;
        }
        if residual < PHASE_ACCURACY || residual > 1.0 - PHASE_ACCURACY {
            debug!("phase {fraction} found at jd {jd:.6} after {iteration} steps");
            return Some(jd);
        }

        if residual < 0.5 {
            jd -= residual * SYNODIC_MONTH;
        } else {
            jd += (1.0 - residual) * SYNODIC_MONTH;
        }
        state = epoch.at(jd);
    }

    warn!("phase {fraction} search did not converge within {MAX_PHASE_ITERATIONS} steps");
    None
}

/// Computes the position angle of the Moon's bright limb in radians, in [0, 2π).
///
/// Measured from the north point of the disk towards the east (Meeus, Astronomical
/// Algorithms, eq. 48.5).
#[must_use]
pub fn bright_limb_angle(sun: &Ephemeris, moon: &Ephemeris) -> f64 {
    let ra_difference = sun.right_ascension() - moon.right_ascension();
    normalize_radians(atan2(
        cos(sun.declination()) * sin(ra_difference),
        sin(sun.declination()) * cos(moon.declination())
            - cos(sun.declination()) * sin(moon.declination()) * cos(ra_difference),
    ))
}

/// Apparent diameter of the Moon relative to its diameter at the mean distance.
///
/// The reference is the mean Earth–Moon distance of 384 400 km, so the ratio is
/// `384400 km / distance`: about 1.06 at perigee and 0.94 at apogee.
#[must_use]
pub fn relative_size(distance_au: f64) -> f64 {
    MEAN_LUNAR_DISTANCE / (distance_au * AU)
}

/// Describes the apparent lunar disk from Sun and Moon ephemerides of the same instant.
#[must_use]
pub fn appearance(sun: &Ephemeris, moon: &Ephemeris) -> MoonAppearance {
    MoonAppearance {
        phase_angle: normalize_radians(moon.ecliptic_longitude() - sun.ecliptic_longitude()),
        bright_limb_angle: bright_limb_angle(sun, moon),
        relative_size: relative_size(moon.distance()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{PI, degrees_to_radians, radians_to_degrees};
    use crate::time::calendar_from_julian_day;

    fn body(right_ascension: f64, declination: f64, distance: f64) -> Ephemeris {
        Ephemeris {
            azimuth: 0.0,
            elevation: 0.0,
            rise: None,
            set: None,
            transit: None,
            transit_elevation: None,
            right_ascension,
            declination,
            distance,
            ecliptic_longitude: right_ascension,
            ecliptic_latitude: 0.0,
            angular_radius: 0.0,
            illumination: 100.0,
        }
    }

    fn reference_epoch() -> EpochState {
        EpochState::new(2_459_375.25, 72.26330697303638, degrees_to_radians(-4.0))
    }

    #[test]
    fn test_illumination_extremes() {
        let sun = body(0.0, 0.0, 1.0);
        let full = body(PI, 0.0, 0.00257);
        let new = body(0.0, 0.0, 0.00257);
        let quarter = body(PI / 2.0, 0.0, 0.00257);

        assert!(illumination(&sun, &full) > 99.99);
        assert!(illumination(&sun, &new) < 0.01);
        assert!((illumination(&sun, &quarter) - 50.0).abs() < 0.2);
    }

    #[test]
    fn test_illumination_near_new_moon() {
        use crate::topocentric::transform;
        use crate::types::{Observer, Twilight, Vantage};

        let epoch = reference_epoch();
        let observer = Observer::new(40.0, -4.0, 0.0).unwrap();
        let sun = transform(
            &epoch,
            &observer,
            &crate::sun::position(&epoch),
            Twilight::Horizon,
            Vantage::Topocentric,
        );
        let moon = transform(
            &epoch,
            &observer,
            &crate::moon::position(&epoch).position(),
            Twilight::Horizon,
            Vantage::Topocentric,
        );
        assert!((illumination(&sun, &moon) - 0.5452493653609114).abs() < 1e-7);
    }

    #[test]
    fn test_moon_age() {
        assert_eq!(moon_age(1.0, 1.0), 0.0);
        assert!((moon_age(PI, 0.0) - SYNODIC_MONTH / 2.0).abs() < 1e-12);
        // Moon just behind the Sun: almost a full cycle
        assert!(moon_age(-0.001, 0.0) > SYNODIC_MONTH - 0.01);
    }

    #[test]
    fn test_phase_instants_around_reference() {
        let epoch = reference_epoch();
        let expected = [
            (0.0, 2_459_375.952843387),  // new moon 2021-06-10 10:52 UT
            (0.25, 2_459_383.662647885), // first quarter 2021-06-18 03:54 UT
            (0.5, 2_459_360.967822665),  // full moon 2021-05-26 11:13 UT
            (0.75, 2_459_367.808378714), // last quarter 2021-06-02 07:24 UT
        ];
        for (fraction, jd) in expected {
            let found = moon_phase_instant(&epoch, fraction).unwrap();
            assert!((found - jd).abs() < 1e-6, "phase {fraction}: {found} vs {jd}");
        }

        let new_moon = calendar_from_julian_day(moon_phase_instant(&epoch, 0.0).unwrap());
        assert_eq!((new_moon.month(), new_moon.day(), new_moon.hour()), (6, 10, 10));
    }

    #[test]
    fn test_phase_instant_hits_target_fraction() {
        let epoch = EpochState::new(2_460_310.5, 69.0, 0.0);
        for fraction in [0.1, 0.33, 0.6, 0.9] {
            let jd = moon_phase_instant(&epoch, fraction).unwrap();
            let state = epoch.at(jd);
            let age = moon_age(
                crate::moon::position(&state).position().longitude(),
                crate::sun::position(&state).longitude(),
            ) / SYNODIC_MONTH;
            let residual = (age - fraction).abs();
            assert!(residual.min(1.0 - residual) < 2.0 * PHASE_ACCURACY);
            assert!((jd - epoch.jd_ut()).abs() < SYNODIC_MONTH);
        }
    }

    #[test]
    fn test_relative_size_against_mean_distance() {
        assert!((relative_size(MEAN_LUNAR_DISTANCE / AU) - 1.0).abs() < 1e-12);
        // Perigee and apogee of a typical lunation
        assert!((relative_size(363_300.0 / AU) - 1.0581).abs() < 1e-4);
        assert!((relative_size(405_500.0 / AU) - 0.9480).abs() < 1e-4);
    }

    #[test]
    fn test_phase_instant_rejects_fraction_outside_cycle() {
        let epoch = reference_epoch();
        for fraction in [1.0, 1.25, -0.25, f64::NAN, f64::INFINITY] {
            assert_eq!(moon_phase_instant(&epoch, fraction), None, "fraction {fraction}");
        }
    }

    #[test]
    fn test_bright_limb_points_towards_sun() {
        // Sun due east of the Moon on the equator: bright limb at position angle 90°
        let sun = body(degrees_to_radians(10.0), 0.0, 1.0);
        let moon = body(0.0, 0.0, 0.00257);
        assert!((radians_to_degrees(bright_limb_angle(&sun, &moon)) - 90.0).abs() < 1e-9);

        // Sun due west: 270°
        let sun = body(degrees_to_radians(350.0), 0.0, 1.0);
        assert!((radians_to_degrees(bright_limb_angle(&sun, &moon)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_appearance() {
        let sun = body(0.0, 0.0, 1.0);
        let moon = body(PI / 2.0, 0.0, MEAN_LUNAR_DISTANCE / AU);
        let appearance = appearance(&sun, &moon);
        assert!((appearance.relative_size() - 1.0).abs() < 1e-12);
        assert!((appearance.phase_angle() - PI / 2.0).abs() < 1e-12);
        assert!((radians_to_degrees(appearance.bright_limb_angle()) - 270.0).abs() < 1e-9);
    }
}
