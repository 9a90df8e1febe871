//! Composed Sun and Moon computation for one observer and instant.

use log::debug;

use crate::epoch::EpochState;
use crate::error::check_phase_fraction;
use crate::phase::{appearance, illumination};
use crate::riseset::refine_all;
use crate::time::{CalendarDate, DeltaT};
use crate::topocentric::transform;
use crate::types::{
    BodyPosition, Ephemerides, Ephemeris, MoonAppearance, MoonPhase, Observer, Twilight, Vantage,
};
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone, Utc};

/// Computes Sun and Moon ephemerides for an observer and instant.
///
/// Positions and first event estimates are computed at `jd_ut`, then rise, set and transit
/// of both bodies are refined. The Moon's illumination is derived from the Sun ephemeris and
/// the Moon's age from the elongation in ecliptic longitude.
///
/// # Arguments
/// * `observer` - Observer location
/// * `jd_ut` - Julian Day in Universal Time
/// * `delta_t` - TT − UT in seconds, see [`DeltaT::estimate`]
/// * `twilight` - Event elevation for rise and set
#[must_use]
pub fn compute_ephemerides(
    observer: &Observer,
    jd_ut: f64,
    delta_t: f64,
    twilight: Twilight,
) -> Ephemerides {
    let epoch = EpochState::new(jd_ut, delta_t, observer.longitude());

    let sun_estimate = transform(
        &epoch,
        observer,
        &crate::sun::position(&epoch),
        twilight,
        Vantage::Topocentric,
    );
    let sun = refine_all(&epoch, observer, crate::sun::position, twilight, sun_estimate);

    let lunar = crate::moon::position(&epoch);
    let moon_estimate = transform(
        &epoch,
        observer,
        &lunar.position(),
        twilight,
        Vantage::Topocentric,
    );
    let mut moon = refine_all(&epoch, observer, moon_position, twilight, moon_estimate);
    moon.illumination = illumination(&sun, &moon);

    Ephemerides {
        sun,
        moon,
        moon_age: lunar.age(Some(sun.ecliptic_longitude())),
    }
}

fn moon_position(epoch: &EpochState) -> BodyPosition {
    crate::moon::position(epoch).position()
}

/// A computation session bound to an observer, an instant, ΔT and a twilight setting.
///
/// The session is an immutable value; every method derives what it needs from its own
/// [`EpochState`], so sessions can be shared between threads.
///
/// # Example
/// ```
/// use lunisolar_positioning::{Observer, SunMoonCalculator, Twilight};
/// use lunisolar_positioning::time::CalendarDate;
///
/// let observer = Observer::new(40.0, -4.0, 0.0).unwrap();
/// let date = CalendarDate::new(2021, 6, 9, 18, 0, 0.0).unwrap();
/// let calculator = SunMoonCalculator::from_calendar(observer, &date)
///     .unwrap()
///     .with_twilight(Twilight::Civil);
///
/// let ephemerides = calculator.compute();
/// assert!(ephemerides.sun().is_above_horizon());
/// assert!(ephemerides.moon().illumination() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunMoonCalculator {
    observer: Observer,
    epoch: EpochState,
    twilight: Twilight,
}

impl SunMoonCalculator {
    /// Creates a session for a Julian Day (UT) and an explicit ΔT.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the Julian Day or ΔT is not finite.
    pub fn new(observer: Observer, jd_ut: f64, delta_t: f64) -> Result<Self> {
        if !jd_ut.is_finite() {
            return Err(Error::invalid_datetime("julian day must be finite"));
        }
        if !delta_t.is_finite() {
            return Err(Error::invalid_datetime("delta T must be finite"));
        }

        debug!(
            "session at jd {jd_ut:.6} (ΔT {delta_t:.2} s) for {:.4}°, {:.4}°",
            observer.latitude_degrees(),
            observer.longitude_degrees()
        );
        Ok(Self {
            observer,
            epoch: EpochState::new(jd_ut, delta_t, observer.longitude()),
            twilight: Twilight::default(),
        })
    }

    /// Creates a session for a calendar date in UT, estimating ΔT from the date.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the resulting instant is not finite.
    pub fn from_calendar(observer: Observer, date: &CalendarDate) -> Result<Self> {
        let delta_t = DeltaT::estimate(date.year(), date.month(), date.day());
        Self::new(observer, date.to_julian_day(), delta_t)
    }

    /// Creates a session for a date-time in any time zone, estimating ΔT from the UTC date.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the resulting instant is not finite.
    #[cfg(feature = "chrono")]
    pub fn from_datetime<Tz: TimeZone>(observer: Observer, datetime: &DateTime<Tz>) -> Result<Self> {
        let utc = datetime.with_timezone(&Utc);
        let delta_t = DeltaT::estimate_from_date_like(utc);
        Self::new(observer, crate::time::julian_day_from_datetime(&utc), delta_t)
    }

    /// Returns a copy of this session using another twilight definition for rise and set.
    #[must_use]
    pub const fn with_twilight(mut self, twilight: Twilight) -> Self {
        self.twilight = twilight;
        self
    }

    /// Gets the observer.
    #[must_use]
    pub const fn observer(&self) -> &Observer {
        &self.observer
    }

    /// Gets the epoch state of the session instant.
    #[must_use]
    pub const fn epoch(&self) -> &EpochState {
        &self.epoch
    }

    /// Gets the twilight setting.
    #[must_use]
    pub const fn twilight(&self) -> Twilight {
        self.twilight
    }

    /// Gets the session instant as a Julian Day (UT).
    #[must_use]
    pub const fn jd_ut(&self) -> f64 {
        self.epoch.jd_ut()
    }

    /// Computes topocentric Sun and Moon ephemerides with refined events.
    #[must_use]
    pub fn compute(&self) -> Ephemerides {
        compute_ephemerides(
            &self.observer,
            self.epoch.jd_ut(),
            self.epoch.delta_t(),
            self.twilight,
        )
    }

    /// Computes geocentric Sun and Moon positions without parallax, refraction or events.
    #[must_use]
    pub fn compute_geocentric(&self) -> Ephemerides {
        let sun = self.unrefined(&crate::sun::position(&self.epoch), Vantage::Geocentric);
        let lunar = crate::moon::position(&self.epoch);
        let mut moon = self.unrefined(&lunar.position(), Vantage::Geocentric);
        moon.illumination = illumination(&sun, &moon);

        Ephemerides {
            sun,
            moon,
            moon_age: lunar.age(Some(sun.ecliptic_longitude())),
        }
    }

    /// Describes the lunar disk as seen by the observer at the session instant.
    #[must_use]
    pub fn moon_appearance(&self) -> MoonAppearance {
        let sun = self.unrefined(&crate::sun::position(&self.epoch), Vantage::Topocentric);
        let moon = self.unrefined(&moon_position(&self.epoch), Vantage::Topocentric);
        appearance(&sun, &moon)
    }

    /// Finds the instant of a principal moon phase closest to the session instant.
    ///
    /// Returns the Julian Day (UT), or `None` if the search does not converge.
    #[must_use]
    pub fn moon_phase_instant(&self, phase: MoonPhase) -> Option<f64> {
        crate::phase::moon_phase_instant(&self.epoch, phase.fraction())
    }

    /// Finds the instant when the Moon reaches an arbitrary fraction of its cycle.
    ///
    /// # Errors
    /// Returns `InvalidPhaseFraction` if `fraction` is outside [0, 1).
    pub fn moon_phase_instant_for_fraction(&self, fraction: f64) -> Result<Option<f64>> {
        check_phase_fraction(fraction)?;
        Ok(crate::phase::moon_phase_instant(&self.epoch, fraction))
    }

    /// Finds the instant of a principal moon phase as a chrono `DateTime<Utc>`.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn moon_phase_datetime(&self, phase: MoonPhase) -> Option<DateTime<Utc>> {
        self.moon_phase_instant(phase)
            .and_then(crate::time::datetime_from_julian_day)
    }

    fn unrefined(&self, position: &BodyPosition, vantage: Vantage) -> Ephemeris {
        transform(&self.epoch, &self.observer, position, self.twilight, vantage)
    }
}
