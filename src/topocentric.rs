//! Geocentric ecliptic to topocentric horizontal coordinates.
//!
//! Applies nutation, rotates into the equatorial frame, removes the observer's offset from the
//! Earth's center, and derives azimuth, elevation and first estimates of rise, set and transit
//! from the hour angle.

#![allow(clippy::many_single_char_names)]

use crate::epoch::EpochState;
use crate::math::{
    HALF_PI, PI, TWO_PI, acos, asin, atan2, clamp_unit, cos, degrees_to_radians, floor,
    normalize_radians, sin, sqrt,
};
use crate::refraction::apparent_elevation;
use crate::sun::AU;
use crate::types::{BodyPosition, Ephemeris, Observer, Twilight, Vantage};

/// Equatorial radius of the Earth in kilometers.
pub(crate) const EARTH_RADIUS: f64 = 6378.1366;

/// Earth flattening denominator (1/f).
const INVERSE_FLATTENING: f64 = 298.257;

/// Geodetic minus geocentric latitude amplitude in degrees.
const LATITUDE_REDUCTION: f64 = 0.1925;

/// Sidereal days per solar day.
const SIDEREAL_DAY_RATIO: f64 = 1.00273781191135448;

/// Converts a geocentric ecliptic position into an [`Ephemeris`] for the observer.
///
/// In [`Vantage::Topocentric`] mode the elevation is corrected for refraction and rise, set
/// and transit are first estimates from the current hour angle; they still have to be refined
/// with [`crate::riseset::refine`]. Rise and set are `None` when the body never crosses the
/// event elevation. In [`Vantage::Geocentric`] mode no parallax or refraction is applied and
/// all events are `None`.
///
/// Illumination is initialized to 100; see [`crate::phase::illumination`].
#[must_use]
pub fn transform(
    epoch: &EpochState,
    observer: &Observer,
    position: &BodyPosition,
    twilight: Twilight,
    vantage: Vantage,
) -> Ephemeris {
    let longitude = position.longitude() + epoch.nutation_longitude();
    let latitude = position.latitude() + epoch.nutation_obliquity();

    // Ecliptic rectangular
    let x = position.distance() * cos(longitude) * cos(latitude);
    let y = position.distance() * sin(longitude) * cos(latitude);
    let z = position.distance() * sin(latitude);

    // Equatorial rectangular
    let (sin_obliquity, cos_obliquity) = (sin(epoch.mean_obliquity()), cos(epoch.mean_obliquity()));
    let (mut x, mut y, mut z) = (
        x,
        y * cos_obliquity - z * sin_obliquity,
        y * sin_obliquity + z * cos_obliquity,
    );

    if vantage == Vantage::Topocentric {
        let (ox, oy, oz) = observer_offset(observer, epoch.local_sidereal_time());
        x -= ox;
        y -= oy;
        z -= oz;
    }

    let (right_ascension, declination) = if x == 0.0 && y == 0.0 {
        (0.0, if z < 0.0 { -HALF_PI } else { HALF_PI })
    } else {
        (atan2(y, x), atan2(z / sqrt(x * x + y * y), 1.0))
    };
    let distance = sqrt(x * x + y * y + z * z);

    let hour_angle = epoch.local_sidereal_time() - right_ascension;
    let (sin_lat, cos_lat) = (sin(observer.latitude()), cos(observer.latitude()));
    let (sin_dec, cos_dec) = (sin(declination), cos(declination));

    let elevation = asin(clamp_unit(sin_lat * sin_dec + cos_lat * cos_dec * cos(hour_angle)));
    let azimuth = normalize_radians(
        PI + atan2(
            sin(hour_angle),
            cos(hour_angle) * sin_lat - sin_dec * cos_lat / cos_dec,
        ),
    );

    let mut ephemeris = Ephemeris {
        azimuth,
        elevation,
        rise: None,
        set: None,
        transit: None,
        transit_elevation: None,
        right_ascension: normalize_radians(right_ascension),
        declination,
        distance,
        ecliptic_longitude: longitude,
        ecliptic_latitude: latitude,
        angular_radius: position.angular_radius(),
        illumination: 100.0,
    };

    if vantage == Vantage::Geocentric {
        return ephemeris;
    }

    ephemeris.elevation = apparent_elevation(elevation);

    let events = EventEstimator {
        jd: epoch.jd_ut(),
        day_start: epoch.day_start(),
        local_sidereal_time: epoch.local_sidereal_time(),
        right_ascension,
    };
    ephemeris.transit = Some(events.crossing(0.0));
    ephemeris.transit_elevation = Some(apparent_elevation(asin(clamp_unit(
        sin_dec * sin_lat + cos_dec * cos_lat,
    ))));

    let event_elevation = twilight.elevation_angle(position.angular_radius());
    let cos_hour_angle = (sin(event_elevation) - sin_lat * sin_dec) / (cos_lat * cos_dec);
    if cos_hour_angle.abs() <= 1.0 {
        let half_arc = acos(cos_hour_angle).abs();
        ephemeris.rise = Some(events.crossing(-half_arc));
        ephemeris.set = Some(events.crossing(half_arc));
    }

    ephemeris
}

/// Observer position relative to the Earth's center, equatorial frame, AU.
fn observer_offset(observer: &Observer, local_sidereal_time: f64) -> (f64, f64, f64) {
    let latitude = observer.latitude();
    let geocentric_latitude =
        latitude - degrees_to_radians(LATITUDE_REDUCTION) * sin(2.0 * latitude);
    let sin_lat = sin(latitude);
    let geocentric_radius = 1.0 - sin_lat * sin_lat / INVERSE_FLATTENING;
    let radius = (geocentric_radius * EARTH_RADIUS + observer.altitude() * 0.001) / AU;

    let cos_geocentric = cos(geocentric_latitude);
    (
        radius * cos_geocentric * cos(local_sidereal_time),
        radius * cos_geocentric * sin(local_sidereal_time),
        radius * sin(geocentric_latitude),
    )
}

/// Converts hour angles into event instants near the current Julian Day.
struct EventEstimator {
    jd: f64,
    day_start: f64,
    local_sidereal_time: f64,
    right_ascension: f64,
}

impl EventEstimator {
    /// Instant when the body reaches the given hour angle (0 = meridian, negative = east).
    ///
    /// Looks forward by default. The backward solution is taken if it is closer and still
    /// falls on the same UT day.
    fn crossing(&self, hour_angle: f64) -> f64 {
        let angle = normalize_radians(self.right_ascension + hour_angle - self.local_sidereal_time);
        let days_per_radian = 1.0 / (SIDEREAL_DAY_RATIO * TWO_PI);
        let forward = days_per_radian * angle;
        let backward = days_per_radian * (angle - TWO_PI);

        let backward_day = floor(self.jd + backward - 0.5) + 0.5;
        if backward_day == self.day_start && backward.abs() < forward.abs() {
            self.jd + backward
        } else {
            self.jd + forward
        }
    }
}
