//! Core data types for Sun and Moon ephemeris calculations.
//!
//! Angles are stored in radians. Degree getters are provided for display purposes.

use crate::error::{check_altitude, check_coordinates, check_depression_angle};
use crate::math::{degrees_to_radians, radians_to_degrees};
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};

/// Standard altitude of the upper limb at rise/set in degrees (refraction at the horizon).
const HORIZON_REFRACTION_DEGREES: f64 = -34.0 / 60.0;

/// A ground-based observer.
///
/// # Example
/// ```
/// # use lunisolar_positioning::Observer;
/// let madrid = Observer::new(40.0, -4.0, 667.0).unwrap();
/// assert_eq!(madrid.latitude_degrees(), 40.0);
/// assert!(Observer::new(91.0, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observer {
    /// Longitude in radians, east positive
    longitude: f64,
    /// Geodetic latitude in radians
    latitude: f64,
    /// Altitude above sea level in meters
    altitude: f64,
}

impl Observer {
    /// Creates an observer from degrees and meters.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to +90)
    /// * `longitude` - Longitude in degrees (-180 to +180, east positive)
    /// * `altitude` - Altitude above sea level in meters
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidLongitude` or `InvalidAltitude` for out-of-range values.
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        check_altitude(altitude)?;
        Ok(Self {
            longitude: degrees_to_radians(longitude),
            latitude: degrees_to_radians(latitude),
            altitude,
        })
    }

    /// Creates an observer from radians and meters without validation.
    #[must_use]
    pub const fn from_radians(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude,
        }
    }

    /// Gets the longitude in radians (east positive).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the latitude in radians.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the altitude in meters.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude_degrees(&self) -> f64 {
        radians_to_degrees(self.longitude)
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude_degrees(&self) -> f64 {
        radians_to_degrees(self.latitude)
    }
}

/// Elevation that defines rise and set events.
///
/// Corresponds to the horizon (with refraction and the body's semi-diameter) and to the
/// usual twilight definitions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Twilight {
    /// Upper limb on the horizon: −34′ minus the body's angular radius
    #[default]
    Horizon,
    /// Civil twilight (6° below the horizon)
    Civil,
    /// Nautical twilight (12° below the horizon)
    Nautical,
    /// Astronomical twilight (18° below the horizon)
    Astronomical,
    /// Custom elevation angle in degrees
    Custom(f64),
}

impl Twilight {
    /// Creates a custom twilight with the specified elevation angle in degrees.
    ///
    /// # Errors
    /// Returns `InvalidDepressionAngle` if the angle is outside -90 to +90 degrees.
    pub fn custom(elevation_degrees: f64) -> Result<Self> {
        check_depression_angle(elevation_degrees)?;
        Ok(Self::Custom(elevation_degrees))
    }

    /// Gets the event elevation in radians for a body of the given angular radius.
    ///
    /// Only [`Twilight::Horizon`] depends on the angular radius.
    #[must_use]
    pub const fn elevation_angle(&self, angular_radius: f64) -> f64 {
        match self {
            Self::Horizon => degrees_to_radians(HORIZON_REFRACTION_DEGREES) - angular_radius,
            Self::Civil => degrees_to_radians(-6.0),
            Self::Nautical => degrees_to_radians(-12.0),
            Self::Astronomical => degrees_to_radians(-18.0),
            Self::Custom(angle) => degrees_to_radians(*angle),
        }
    }
}

impl Eq for Twilight {}

impl core::hash::Hash for Twilight {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::Horizon => 0.hash(state),
            Self::Civil => 1.hash(state),
            Self::Nautical => 2.hash(state),
            Self::Astronomical => 3.hash(state),
            Self::Custom(angle) => {
                4.hash(state);
                // -0.0 == +0.0, so they must hash alike
                let normalized = if *angle == 0.0 { 0.0 } else { *angle };
                normalized.to_bits().hash(state);
            }
        }
    }
}

/// Kind of horizon/meridian event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// Crossing the event elevation while ascending
    Rise,
    /// Crossing the event elevation while descending
    Set,
    /// Crossing the local meridian
    Transit,
}

impl Event {
    /// All event kinds in computation order.
    pub const ALL: [Self; 3] = [Self::Rise, Self::Set, Self::Transit];
}

/// Where the body is observed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vantage {
    /// From the observer's position on the surface, with parallax, refraction and events
    #[default]
    Topocentric,
    /// From the Earth's center: no parallax, no refraction, no rise/set/transit
    Geocentric,
}

/// Solar system bodies with their equatorial radii.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Body {
    /// Mercury
    Mercury,
    /// Venus
    Venus,
    /// Mars
    Mars,
    /// Jupiter
    Jupiter,
    /// Saturn
    Saturn,
    /// Uranus
    Uranus,
    /// Neptune
    Neptune,
    /// The Moon
    Moon,
    /// The Sun
    Sun,
    /// Earth–Moon barycenter
    EarthMoonBarycenter,
}

impl Body {
    /// Gets the equatorial radius in kilometers.
    #[must_use]
    pub const fn equatorial_radius(&self) -> f64 {
        match self {
            Self::Mercury => 2439.7,
            Self::Venus => 6051.8,
            Self::Mars => 3396.19,
            Self::Jupiter => 71492.0,
            Self::Saturn => 60268.0,
            Self::Uranus => 25559.0,
            Self::Neptune => 24764.0,
            Self::Moon => 1737.4,
            Self::Sun => 696_000.0,
            Self::EarthMoonBarycenter => 0.0,
        }
    }
}

/// Principal moon phases as fractions of the synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoonPhase {
    /// Conjunction with the Sun
    New,
    /// Moon 90° east of the Sun
    FirstQuarter,
    /// Opposition to the Sun
    Full,
    /// Moon 90° west of the Sun
    LastQuarter,
}

impl MoonPhase {
    /// All phases in cycle order.
    pub const ALL: [Self; 4] = [Self::New, Self::FirstQuarter, Self::Full, Self::LastQuarter];

    /// Gets the phase as a fraction of the synodic month.
    #[must_use]
    pub const fn fraction(&self) -> f64 {
        match self {
            Self::New => 0.0,
            Self::FirstQuarter => 0.25,
            Self::Full => 0.5,
            Self::LastQuarter => 0.75,
        }
    }
}

/// Ecliptic position produced by the Sun and Moon models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    longitude: f64,
    latitude: f64,
    distance: f64,
    angular_radius: f64,
}

impl BodyPosition {
    /// Creates a body position.
    ///
    /// # Arguments
    /// * `longitude` - Ecliptic longitude in radians
    /// * `latitude` - Ecliptic latitude in radians
    /// * `distance` - Geocentric distance in AU
    /// * `angular_radius` - Apparent angular radius in radians
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64, distance: f64, angular_radius: f64) -> Self {
        Self {
            longitude,
            latitude,
            distance,
            angular_radius,
        }
    }

    /// Gets the ecliptic longitude in radians.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the ecliptic latitude in radians.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the geocentric distance in AU.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Gets the angular radius in radians.
    #[must_use]
    pub const fn angular_radius(&self) -> f64 {
        self.angular_radius
    }
}

/// Position and events of one body for one observer and instant.
///
/// Rise, set and transit are Julian Days (UT). `None` means the event does not happen on
/// this local day for this observer, or could not be determined to one second.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ephemeris {
    pub(crate) azimuth: f64,
    pub(crate) elevation: f64,
    pub(crate) rise: Option<f64>,
    pub(crate) set: Option<f64>,
    pub(crate) transit: Option<f64>,
    pub(crate) transit_elevation: Option<f64>,
    pub(crate) right_ascension: f64,
    pub(crate) declination: f64,
    pub(crate) distance: f64,
    pub(crate) ecliptic_longitude: f64,
    pub(crate) ecliptic_latitude: f64,
    pub(crate) angular_radius: f64,
    pub(crate) illumination: f64,
}

impl Ephemeris {
    /// Gets the azimuth in radians (0 = North, increasing towards East).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the elevation in radians, refraction corrected for topocentric positions.
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Gets the azimuth in degrees.
    #[must_use]
    pub const fn azimuth_degrees(&self) -> f64 {
        radians_to_degrees(self.azimuth)
    }

    /// Gets the elevation in degrees.
    #[must_use]
    pub const fn elevation_degrees(&self) -> f64 {
        radians_to_degrees(self.elevation)
    }

    /// Gets the rise instant as a Julian Day (UT).
    #[must_use]
    pub const fn rise(&self) -> Option<f64> {
        self.rise
    }

    /// Gets the set instant as a Julian Day (UT).
    #[must_use]
    pub const fn set(&self) -> Option<f64> {
        self.set
    }

    /// Gets the transit instant as a Julian Day (UT).
    #[must_use]
    pub const fn transit(&self) -> Option<f64> {
        self.transit
    }

    /// Gets the instant of an event as a Julian Day (UT).
    #[must_use]
    pub const fn event(&self, event: Event) -> Option<f64> {
        match event {
            Event::Rise => self.rise,
            Event::Set => self.set,
            Event::Transit => self.transit,
        }
    }

    /// Gets the elevation at transit in radians, refraction corrected.
    #[must_use]
    pub const fn transit_elevation(&self) -> Option<f64> {
        self.transit_elevation
    }

    /// Gets the right ascension in radians, in [0, 2π).
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Gets the declination in radians.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the distance in AU.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Gets the ecliptic longitude in radians, nutation included.
    #[must_use]
    pub const fn ecliptic_longitude(&self) -> f64 {
        self.ecliptic_longitude
    }

    /// Gets the ecliptic latitude in radians.
    #[must_use]
    pub const fn ecliptic_latitude(&self) -> f64 {
        self.ecliptic_latitude
    }

    /// Gets the angular radius in radians.
    #[must_use]
    pub const fn angular_radius(&self) -> f64 {
        self.angular_radius
    }

    /// Gets the illuminated fraction of the disk in percent.
    ///
    /// The Sun always reports 100.
    #[must_use]
    pub const fn illumination(&self) -> f64 {
        self.illumination
    }

    /// Checks if the body is above the mathematical horizon.
    #[must_use]
    pub fn is_above_horizon(&self) -> bool {
        self.elevation > 0.0
    }

    /// Gets the instant of an event as a chrono `DateTime<Utc>`.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn event_datetime(&self, event: Event) -> Option<DateTime<Utc>> {
        self.event(event)
            .and_then(crate::time::datetime_from_julian_day)
    }

    pub(crate) const fn set_event(&mut self, event: Event, value: Option<f64>) {
        match event {
            Event::Rise => self.rise = value,
            Event::Set => self.set = value,
            Event::Transit => self.transit = value,
        }
    }
}

/// Ephemerides of the Sun and the Moon for one observer and instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ephemerides {
    pub(crate) sun: Ephemeris,
    pub(crate) moon: Ephemeris,
    pub(crate) moon_age: f64,
}

impl Ephemerides {
    /// Gets the Sun ephemeris.
    #[must_use]
    pub const fn sun(&self) -> &Ephemeris {
        &self.sun
    }

    /// Gets the Moon ephemeris.
    #[must_use]
    pub const fn moon(&self) -> &Ephemeris {
        &self.moon
    }

    /// Gets the Moon's age in days since the last new moon.
    #[must_use]
    pub const fn moon_age(&self) -> f64 {
        self.moon_age
    }

    /// Gets the Moon's age as a fraction of the synodic month, in [0, 1).
    #[must_use]
    pub fn moon_phase_fraction(&self) -> f64 {
        self.moon_age / crate::phase::SYNODIC_MONTH
    }
}

/// Orientation and apparent size of the lunar disk.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoonAppearance {
    pub(crate) phase_angle: f64,
    pub(crate) bright_limb_angle: f64,
    pub(crate) relative_size: f64,
}

impl MoonAppearance {
    /// Gets the elongation of the Moon from the Sun in ecliptic longitude, radians in [0, 2π).
    #[must_use]
    pub const fn phase_angle(&self) -> f64 {
        self.phase_angle
    }

    /// Gets the position angle of the bright limb in radians, measured from north through east.
    #[must_use]
    pub const fn bright_limb_angle(&self) -> f64 {
        self.bright_limb_angle
    }

    /// Gets the apparent diameter relative to the diameter at the mean distance of 384 400 km.
    #[must_use]
    pub const fn relative_size(&self) -> f64 {
        self.relative_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PI;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_observer_creation() {
        let observer = Observer::new(40.0, -4.0, 0.0).unwrap();
        assert!((observer.latitude() - degrees_to_radians(40.0)).abs() < EPSILON);
        assert!((observer.longitude() - degrees_to_radians(-4.0)).abs() < EPSILON);
        assert_eq!(observer.altitude(), 0.0);

        assert!(Observer::new(-91.0, 0.0, 0.0).is_err());
        assert!(Observer::new(0.0, 181.0, 0.0).is_err());
        assert!(Observer::new(0.0, 0.0, f64::NAN).is_err());

        let raw = Observer::from_radians(PI / 4.0, -PI / 2.0, 100.0);
        assert!((raw.latitude_degrees() - 45.0).abs() < EPSILON);
        assert!((raw.longitude_degrees() + 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_twilight_elevation_angles() {
        let radius = degrees_to_radians(0.25);
        assert!(
            (Twilight::Horizon.elevation_angle(radius) - degrees_to_radians(-34.0 / 60.0 - 0.25))
                .abs()
                < EPSILON
        );
        assert_eq!(Twilight::Civil.elevation_angle(radius), degrees_to_radians(-6.0));
        assert_eq!(Twilight::Nautical.elevation_angle(radius), degrees_to_radians(-12.0));
        assert_eq!(
            Twilight::Astronomical.elevation_angle(radius),
            degrees_to_radians(-18.0)
        );

        let custom = Twilight::custom(-3.0).unwrap();
        assert_eq!(custom.elevation_angle(radius), degrees_to_radians(-3.0));
        assert!(Twilight::custom(-95.0).is_err());
        assert_eq!(Twilight::default(), Twilight::Horizon);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_twilight_hash_normalizes_zero_sign() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Twilight::Custom(0.0));
        set.insert(Twilight::Custom(-0.0));
        set.insert(Twilight::Civil);

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_body_radii() {
        assert_eq!(Body::Sun.equatorial_radius(), 696_000.0);
        assert_eq!(Body::Moon.equatorial_radius(), 1737.4);
        assert_eq!(Body::Jupiter.equatorial_radius(), 71492.0);
        assert_eq!(Body::EarthMoonBarycenter.equatorial_radius(), 0.0);
    }

    #[test]
    fn test_moon_phase_fractions() {
        let fractions = MoonPhase::ALL.map(|phase| phase.fraction());
        assert_eq!(fractions, [0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_ephemeris_events() {
        let mut ephemeris = Ephemeris {
            azimuth: PI,
            elevation: 0.1,
            rise: Some(1.0),
            set: None,
            transit: Some(2.0),
            transit_elevation: Some(1.0),
            right_ascension: 0.0,
            declination: 0.0,
            distance: 1.0,
            ecliptic_longitude: 0.0,
            ecliptic_latitude: 0.0,
            angular_radius: 0.0,
            illumination: 100.0,
        };
        assert!(ephemeris.is_above_horizon());
        assert!((ephemeris.azimuth_degrees() - 180.0).abs() < EPSILON);
        assert_eq!(ephemeris.event(Event::Rise), Some(1.0));
        assert_eq!(ephemeris.event(Event::Set), None);

        ephemeris.set_event(Event::Set, Some(3.0));
        ephemeris.set_event(Event::Rise, None);
        assert_eq!(ephemeris.set(), Some(3.0));
        assert_eq!(ephemeris.rise(), None);
        assert_eq!(ephemeris.transit(), Some(2.0));
    }
}
