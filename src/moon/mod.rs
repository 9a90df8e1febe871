//! Lunar position model.
//!
//! Geocentric ecliptic longitude, latitude and distance of the Moon from a truncated
//! Brown/Eckert lunar theory: six fundamental arguments with planetary perturbations,
//! followed by periodic series for longitude, horizontal parallax and latitude.
//! Accuracy is roughly 10″ in longitude and 4″ in latitude.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::epoch::EpochState;
use crate::math::{
    TWO_PI, atan, cos, degrees_to_radians, normalize_radians, powi, radians_to_degrees, sin,
};
use crate::phase::SYNODIC_MONTH;
use crate::sun::AU;
use crate::time::DAYS_PER_CENTURY;
use crate::topocentric::EARTH_RADIUS;
use crate::types::{Body, BodyPosition};

mod coefficients;
use coefficients::{LATITUDE_TERMS, LONGITUDE_TERMS, PARALLAX_TERMS, PeriodicTerm};

/// Constant part of the horizontal parallax in degrees.
const MEAN_PARALLAX: f64 = 0.950724;

/// Geocentric Moon position together with the raw phase argument of the theory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    position: BodyPosition,
    phase_argument: f64,
}

impl LunarPosition {
    /// Gets the ecliptic position.
    #[must_use]
    pub const fn position(&self) -> BodyPosition {
        self.position
    }

    /// Gets the mean elongation (argument of phase) in radians, perturbations included.
    #[must_use]
    pub const fn phase_argument(&self) -> f64 {
        self.phase_argument
    }

    /// Gets the Moon's age in days.
    ///
    /// With the Sun's ecliptic longitude for the same instant, the age follows from the
    /// true elongation. Without it the mean elongation is used, which is less accurate.
    #[must_use]
    pub fn age(&self, sun_longitude: Option<f64>) -> f64 {
        let elongation = sun_longitude.map_or(self.phase_argument, |sun| {
            self.position.longitude() - sun
        });
        normalize_radians(elongation) * SYNODIC_MONTH / TWO_PI
    }
}

/// Computes the geocentric position of the Moon.
///
/// Longitude is referred to the mean equinox of date, without nutation. Distance is in AU.
#[must_use]
pub fn position(epoch: &EpochState) -> LunarPosition {
    let t = epoch.centuries();
    // Time variable of the theory: centuries since 1900 January 0.5
    let td = t + 1.0;
    let td2 = t * t;
    let revolutions = td * DAYS_PER_CENTURY * 360.0;

    let argument = |base: f64, period: f64, quadratic: f64| {
        normalize_radians(degrees_to_radians(base + revolutions / period + quadratic * td2))
    };

    let mean_longitude = argument(270.434164, 27.32158213, -(1.133e-3 - 1.9e-6 * td));
    let sun_anomaly = argument(358.475833, 365.2596407, -(1.5e-4 + 3.3e-6 * td));
    let moon_anomaly = argument(296.104608, 27.55455094, 9.192e-3 + 1.44e-5 * td);
    let elongation = argument(350.737486, 29.53058868, -(1.436e-3 - 1.9e-6 * td));
    let latitude_argument = argument(11.250889, 27.21222039, -(3.211e-3 + 3e-7 * td));
    let node = normalize_radians(degrees_to_radians(
        259.183275 - revolutions / 6798.363307 + (2.078e-3 + 2.2e-6 * td) * td2,
    ));

    // Planetary perturbations
    let a = degrees_to_radians(51.2 + 20.2 * td);
    let s1 = sin(a);
    let s2 = sin(node);
    let b = 346.56 + (132.87 - 9.1731e-3 * td) * td;
    let s3 = 3.964e-3 * sin(degrees_to_radians(b));
    let c = node + degrees_to_radians(275.05 - 2.3 * td);
    let s4 = sin(c);

    let mean_longitude = radians_to_degrees(mean_longitude) + (2.33e-4 * s1 + s3 + 1.964e-3 * s2);
    let sun_anomaly = sun_anomaly - degrees_to_radians(1.778e-3 * s1);
    let moon_anomaly = moon_anomaly + degrees_to_radians(8.17e-4 * s1 + s3 + 2.541e-3 * s2);
    let latitude_argument =
        latitude_argument + degrees_to_radians(s3 - 2.4691e-2 * s2 - 4.328e-3 * s4);
    let elongation = elongation + degrees_to_radians(2.011e-3 * s1 + s3 + 1.964e-3 * s2);

    let eccentricity = 1.0 - (2.495e-3 + 7.52e-6 * td) * td;
    let arguments = Arguments {
        elongation,
        sun_anomaly,
        moon_anomaly,
        latitude_argument,
        eccentricity,
    };

    let longitude = degrees_to_radians(mean_longitude + arguments.series(&LONGITUDE_TERMS, sin));

    let parallax = MEAN_PARALLAX + arguments.series(&PARALLAX_TERMS, cos);
    let distance_earth_radii = 1.0 / sin(degrees_to_radians(parallax));

    let w1 = 4.664e-4 * cos(node);
    let w2 = 7.54e-5 * cos(c);
    let latitude =
        degrees_to_radians(arguments.series(&LATITUDE_TERMS, sin)) * (1.0 - w1 - w2);

    let distance_km = distance_earth_radii * EARTH_RADIUS;
    LunarPosition {
        position: BodyPosition::new(
            longitude,
            latitude,
            distance_km / AU,
            atan(Body::Moon.equatorial_radius() / distance_km),
        ),
        phase_argument: elongation,
    }
}

struct Arguments {
    elongation: f64,
    sun_anomaly: f64,
    moon_anomaly: f64,
    latitude_argument: f64,
    eccentricity: f64,
}

impl Arguments {
    fn series(&self, terms: &[PeriodicTerm], f: fn(f64) -> f64) -> f64 {
        terms
            .iter()
            .map(|term| {
                let angle = f64::from(term.elongation) * self.elongation
                    + f64::from(term.sun_anomaly) * self.sun_anomaly
                    + f64::from(term.moon_anomaly) * self.moon_anomaly
                    + f64::from(term.argument_of_latitude) * self.latitude_argument;
                term.coefficient * powi(self.eccentricity, term.eccentricity_power) * f(angle)
            })
            .sum()
    }
}
