//! Epoch-dependent state: time since J2000, nutation, mean obliquity and local sidereal time.
//!
//! An [`EpochState`] is a plain value computed from a Julian Day (UT), a fixed ΔT and the
//! observer longitude. Iterative solvers derive a new state for every trial instant with
//! [`EpochState::at`] instead of mutating a shared one.

#![allow(clippy::unreadable_literal)]

use crate::math::{cos, degrees_to_radians, floor, normalize_radians, polynomial, sin};
use crate::time::{DAYS_PER_CENTURY, J2000_JDN, SECONDS_PER_DAY};

/// Mean obliquity of the ecliptic at J2000.0 in degrees.
const MEAN_OBLIQUITY_J2000: f64 = 23.4392911111111;

/// Mean obliquity correction polynomial in units of 10,000 Julian years (arcseconds).
const OBLIQUITY_COEFFS: [f64; 11] = [
    0.0, -4680.93, -1.55, 1999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];

/// Greenwich mean sidereal time at 0h UT, in seconds of time (T0 in centuries).
const GMST_COEFFS: [f64; 4] = [24110.54841, 8640184.812866, 0.093104, -6.2e-6];

/// Derivative of [`GMST_COEFFS`] used for the sidereal rate.
const SIDEREAL_RATE_COEFFS: [f64; 3] = [8640184.812866, 0.186208, -1.86e-5];

/// Time-derived quantities for one instant.
///
/// Sidereal time is normalized to [0, 2π). The nutation angles are corrections of some tens
/// of arcseconds and keep their sign instead of being wrapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochState {
    jd_ut: f64,
    delta_t: f64,
    observer_longitude: f64,
    t: f64,
    // Signed, within about ±0.006°
    nutation_longitude: f64,
    // Signed, within about ±0.003°
    nutation_obliquity: f64,
    mean_obliquity: f64,
    local_sidereal_time: f64,
}

impl EpochState {
    /// Computes the epoch state.
    ///
    /// # Arguments
    /// * `jd_ut` - Julian Day in Universal Time
    /// * `delta_t` - TT − UT in seconds
    /// * `observer_longitude` - Observer longitude in radians (east positive)
    #[must_use]
    pub fn new(jd_ut: f64, delta_t: f64, observer_longitude: f64) -> Self {
        let t = (jd_ut + delta_t / SECONDS_PER_DAY - J2000_JDN) / DAYS_PER_CENTURY;

        let m1 = degrees_to_radians(polynomial(&[124.90, -1934.134, 0.002063], t));
        let m2 = degrees_to_radians(polynomial(&[201.11, 72001.5377, 0.00057], t));
        let nutation_longitude =
            degrees_to_radians(-0.0047785 * sin(m1) - 0.0003667 * sin(m2));
        let nutation_obliquity =
            degrees_to_radians(0.002558 * cos(m1) - 0.00015339 * cos(m2));

        let correction = polynomial(&OBLIQUITY_COEFFS, t / 100.0) / 3600.0;
        let mean_obliquity = degrees_to_radians(MEAN_OBLIQUITY_J2000 + correction);

        let local_sidereal_time = local_apparent_sidereal_time(
            jd_ut,
            observer_longitude,
            nutation_longitude * cos(mean_obliquity + nutation_obliquity),
        );

        Self {
            jd_ut,
            delta_t,
            observer_longitude,
            t,
            nutation_longitude,
            nutation_obliquity,
            mean_obliquity,
            local_sidereal_time,
        }
    }

    /// Recomputes the state for another instant, keeping ΔT and the observer longitude.
    #[must_use]
    pub fn at(&self, jd_ut: f64) -> Self {
        Self::new(jd_ut, self.delta_t, self.observer_longitude)
    }

    /// Julian Day (UT) of this state.
    #[must_use]
    pub const fn jd_ut(&self) -> f64 {
        self.jd_ut
    }

    /// TT − UT in seconds.
    #[must_use]
    pub const fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Observer longitude in radians used for the sidereal time.
    #[must_use]
    pub const fn observer_longitude(&self) -> f64 {
        self.observer_longitude
    }

    /// Julian centuries of TT since J2000.0.
    #[must_use]
    pub const fn centuries(&self) -> f64 {
        self.t
    }

    /// Nutation in longitude in radians.
    ///
    /// Signed and not wrapped to [0, 2π): a value of -0.0047° is returned as such.
    #[must_use]
    pub const fn nutation_longitude(&self) -> f64 {
        self.nutation_longitude
    }

    /// Nutation in obliquity in radians, signed and not wrapped to [0, 2π).
    #[must_use]
    pub const fn nutation_obliquity(&self) -> f64 {
        self.nutation_obliquity
    }

    /// Mean obliquity of the ecliptic in radians.
    #[must_use]
    pub const fn mean_obliquity(&self) -> f64 {
        self.mean_obliquity
    }

    /// Local apparent sidereal time in radians, in [0, 2π).
    #[must_use]
    pub const fn local_sidereal_time(&self) -> f64 {
        self.local_sidereal_time
    }

    /// Julian Day of the 0h UT that starts the civil day of this instant.
    #[must_use]
    pub fn day_start(&self) -> f64 {
        floor(self.jd_ut - 0.5) + 0.5
    }
}

fn local_apparent_sidereal_time(
    jd_ut: f64,
    observer_longitude: f64,
    equation_of_equinoxes: f64,
) -> f64 {
    let jd0 = floor(jd_ut - 0.5) + 0.5;
    let t0 = (jd0 - J2000_JDN) / DAYS_PER_CENTURY;
    let seconds = (jd_ut - jd0) * SECONDS_PER_DAY;

    let gmst0 = polynomial(&GMST_COEFFS, t0);
    let sidereal_rate =
        1.0 + polynomial(&SIDEREAL_RATE_COEFFS, t0) / (SECONDS_PER_DAY * DAYS_PER_CENTURY);
    let gmst = degrees_to_radians((gmst0 + sidereal_rate * seconds) * (15.0 / 3600.0));

    normalize_radians(gmst + observer_longitude + equation_of_equinoxes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{TWO_PI, radians_to_degrees};

    #[test]
    fn test_reference_instant() {
        // 2021-06-09 18:00 UT, observer at 4° W
        let epoch = EpochState::new(2_459_375.25, 72.26330697303638, degrees_to_radians(-4.0));

        assert!((epoch.local_sidereal_time() - 2.867954124371522).abs() < 1e-9);
        assert!((epoch.nutation_longitude() - -8.10161778689522e-5).abs() < 1e-12);
        assert!((epoch.mean_obliquity() - 0.40904415320576754).abs() < 1e-12);
        assert!((epoch.centuries() - 0.2143806).abs() < 1e-6);
    }

    #[test]
    fn test_j2000_values() {
        let epoch = EpochState::new(J2000_JDN, 0.0, 0.0);
        assert_eq!(epoch.centuries(), 0.0);
        assert!((radians_to_degrees(epoch.mean_obliquity()) - MEAN_OBLIQUITY_J2000).abs() < 1e-12);
        // GMST at J2000.0 is 18h 41m 50.55s = 280.46°
        assert!((radians_to_degrees(epoch.local_sidereal_time()) - 280.46).abs() < 0.01);
    }

    #[test]
    fn test_nutation_is_small_and_signed() {
        for day in 0..400 {
            let epoch = EpochState::new(J2000_JDN + f64::from(day) * 17.3, 64.0, 0.0);
            assert!(radians_to_degrees(epoch.nutation_longitude()).abs() < 0.006);
            assert!(radians_to_degrees(epoch.nutation_obliquity()).abs() < 0.003);
        }

        // Negative nutation stays negative rather than close to a full turn
        let epoch = EpochState::new(2_459_375.25, 70.0, 0.0);
        assert!(epoch.nutation_longitude() < 0.0);
        assert!(epoch.nutation_longitude() > -1e-4);
    }

    #[test]
    fn test_sidereal_time_normalized_and_includes_longitude() {
        let east = EpochState::new(2_459_375.25, 70.0, degrees_to_radians(170.0));
        let west = EpochState::new(2_459_375.25, 70.0, degrees_to_radians(-170.0));
        for epoch in [east, west] {
            assert!((0.0..TWO_PI).contains(&epoch.local_sidereal_time()));
        }
        let diff = normalize_radians(east.local_sidereal_time() - west.local_sidereal_time());
        assert!((radians_to_degrees(diff) - 340.0).abs() < 1e-9);
    }

    #[test]
    fn test_at_keeps_delta_t_and_longitude() {
        let epoch = EpochState::new(2_459_375.25, 72.0, 0.3);
        let later = epoch.at(2_459_376.0);
        assert_eq!(later.delta_t(), 72.0);
        assert_eq!(later.observer_longitude(), 0.3);
        assert_eq!(later, EpochState::new(2_459_376.0, 72.0, 0.3));
    }

    #[test]
    fn test_day_start() {
        let epoch = EpochState::new(2_459_375.25, 0.0, 0.0);
        assert_eq!(epoch.day_start(), 2_459_374.5);
        let midnight = EpochState::new(2_459_374.5, 0.0, 0.0);
        assert_eq!(midnight.day_start(), 2_459_374.5);
    }
}
