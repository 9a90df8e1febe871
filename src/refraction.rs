//! Atmospheric refraction.
//!
//! Bennett's formula gives the refraction for an apparent elevation. Converting a geometric
//! elevation into an apparent one therefore needs a short fixed-point iteration.
//! The atmosphere is fixed at 1010 mbar and 10 °C.

use crate::math::{HALF_PI, degrees_to_radians, radians_to_degrees, tan};

/// Atmospheric pressure in millibars.
const PRESSURE: f64 = 1010.0;

/// Air temperature in kelvin.
const TEMPERATURE: f64 = 283.15;

/// Below this geometric elevation (radians) no correction is applied.
const MIN_ELEVATION: f64 = degrees_to_radians(-3.0);

/// Convergence threshold of the inversion in radians.
const TOLERANCE: f64 = degrees_to_radians(0.001);

const MAX_ITERATIONS: usize = 8;

/// Converts an apparent elevation into the geometric (true) elevation.
///
/// The result is capped at π/2.
#[must_use]
pub fn geometric_elevation(apparent: f64) -> f64 {
    let degrees = radians_to_degrees(apparent);
    let arcminutes = tan(HALF_PI - degrees_to_radians(degrees + 7.31 / (degrees + 4.4))).abs();
    let refraction = degrees_to_radians(arcminutes) / 60.0 * (0.28 * PRESSURE / TEMPERATURE);
    (apparent - refraction).min(HALF_PI)
}

/// Converts a geometric elevation into the apparent elevation seen through the atmosphere.
///
/// Elevations at or below -3° are returned unchanged. The result is capped at π/2.
///
/// # Example
/// ```
/// use lunisolar_positioning::refraction::apparent_elevation;
///
/// // About 29′ of refraction near the horizon
/// let lifted = apparent_elevation(0.0).to_degrees();
/// assert!((lifted - 0.48).abs() < 0.01);
/// assert_eq!(apparent_elevation(-0.1), -0.1);
/// ```
#[must_use]
pub fn apparent_elevation(geometric: f64) -> f64 {
    if geometric <= MIN_ELEVATION {
        return geometric;
    }

    let mut apparent = geometric;
    let mut previous = geometric;
    for _ in 0..MAX_ITERATIONS {
        apparent = geometric - (geometric_elevation(apparent) - apparent);
        if (previous - apparent).abs() < TOLERANCE {
            break;
        }
        previous = apparent;
    }
    apparent.min(HALF_PI)
}
