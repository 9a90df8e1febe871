//! Solar position model.
//!
//! Apparent geocentric ecliptic longitude and radius vector of the Sun from a 50-term
//! harmonic series, corrected for aberration. The solar ecliptic latitude is neglected.
//! Accuracy is in the order of a few arcseconds for several centuries around J2000.

#![allow(clippy::unreadable_literal)]

use crate::epoch::EpochState;
use crate::math::{atan, cos, mul_add, normalize_radians, sin};
use crate::time::DAYS_PER_CENTURY;
use crate::types::{Body, BodyPosition};

mod coefficients;
use coefficients::SUN_TERMS;

/// Astronomical unit in kilometers.
pub(crate) const AU: f64 = 149_597_870.691;

/// Light time for one AU in days.
const LIGHT_TIME_DAYS_PER_AU: f64 = 0.00577551833109;

/// Mean longitude at J2000.0 in radians.
const MEAN_LONGITUDE_J2000: f64 = 4.9353929;

/// Mean motion in radians per 10,000 Julian years.
const MEAN_MOTION: f64 = 62833.196168;

/// Constant part of the radius vector in AU.
const MEAN_DISTANCE: f64 = 1.0001026;

/// Finite-difference step for the longitude rate, in days.
const RATE_STEP_DAYS: f64 = 0.5;

/// Computes the apparent geocentric position of the Sun.
///
/// Returns ecliptic longitude (radians, referred to the mean equinox of date, without
/// nutation), latitude 0, distance in AU and the apparent angular radius.
#[must_use]
pub fn position(epoch: &EpochState) -> BodyPosition {
    let t2 = epoch.centuries() * 0.01;
    let t2_later = (epoch.centuries() + RATE_STEP_DAYS / DAYS_PER_CENTURY) * 0.01;

    let (longitude_sum, radius_sum) = series(t2);
    let (longitude_sum_later, _) = series(t2_later);

    let longitude = normalize_radians(
        MEAN_LONGITUDE_J2000 + normalize_radians(MEAN_MOTION * t2) + longitude_sum / 1e7,
    );
    let distance = MEAN_DISTANCE + radius_sum / 1e7;

    // Aberration: longitude rate times light time
    let rate = ((longitude_sum_later - longitude_sum) / 1e7 + MEAN_MOTION * (t2_later - t2))
        / RATE_STEP_DAYS;
    let longitude = longitude - rate * distance * LIGHT_TIME_DAYS_PER_AU;

    BodyPosition::new(
        longitude,
        0.0,
        distance,
        atan(Body::Sun.equatorial_radius() / (AU * distance)),
    )
}

fn series(t2: f64) -> (f64, f64) {
    let mut longitude = 0.0;
    let mut radius = 0.0;
    for [l_amplitude, r_amplitude, phase, rate] in SUN_TERMS {
        let u = normalize_radians(mul_add(rate, t2, phase));
        longitude += l_amplitude * sin(u);
        radius += r_amplitude * cos(u);
    }
    (longitude, radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{degrees_to_radians, radians_to_degrees};

    fn reference_epoch() -> EpochState {
        EpochState::new(2_459_375.25, 72.26330697303638, degrees_to_radians(-4.0))
    }

    #[test]
    fn test_reference_position() {
        let sun = position(&reference_epoch());

        // Ecliptic longitude close to 79.1° in early June; distance near aphelion
        let longitude = radians_to_degrees(sun.longitude());
        assert!((longitude - 79.1).abs() < 0.2, "longitude {longitude}");
        assert_eq!(sun.latitude(), 0.0);
        assert!((sun.distance() - 1.01522).abs() < 1e-4);
        assert!((radians_to_degrees(sun.angular_radius()) * 60.0 - 15.76).abs() < 0.02);
    }

    #[test]
    fn test_distance_extremes() {
        // Perihelion in early January, aphelion in early July
        let perihelion = position(&EpochState::new(2_459_583.5, 69.0, 0.0)); // 2022-01-04
        let aphelion = position(&EpochState::new(2_459_765.5, 69.0, 0.0)); // 2022-07-04
        assert!((perihelion.distance() - 0.98329).abs() < 1e-4);
        assert!((aphelion.distance() - 1.01671).abs() < 1e-4);
        assert!(perihelion.angular_radius() > aphelion.angular_radius());
    }

    #[test]
    fn test_equinox_longitude() {
        // March equinox 2021: 2021-03-20 09:37 UT
        let sun = position(&EpochState::new(2_459_293.900_7, 69.0, 0.0));
        let longitude = radians_to_degrees(sun.longitude());
        let offset = if longitude > 180.0 { longitude - 360.0 } else { longitude };
        assert!(offset.abs() < 0.01, "offset {offset}");
    }
}
