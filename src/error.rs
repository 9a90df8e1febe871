//! Error types for the Sun and Moon ephemeris library.
//!
//! The numerical engine itself never fails: events that do not happen (or do not converge)
//! are reported as `None`. Errors only arise when validating caller input.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when building inputs for ephemeris calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid observer altitude (must be finite).
    InvalidAltitude {
        /// The invalid altitude value provided.
        value: f64,
    },
    /// Invalid depression angle for a custom twilight.
    InvalidDepressionAngle {
        /// The invalid angle value provided.
        value: f64,
    },
    /// Invalid calendar date or time components.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// Invalid moon phase target (must be in [0, 1)).
    InvalidPhaseFraction {
        /// The invalid fraction provided.
        value: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidAltitude { value } => {
                write!(f, "invalid altitude {value} m (must be finite)")
            }
            Self::InvalidDepressionAngle { value } => {
                write!(
                    f,
                    "invalid depression angle {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::InvalidPhaseFraction { value } => {
                write!(
                    f,
                    "invalid moon phase fraction {value} (must be in [0, 1))"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid altitude error.
    #[must_use]
    pub const fn invalid_altitude(value: f64) -> Self {
        Self::InvalidAltitude { value }
    }

    /// Creates an invalid depression angle error.
    #[must_use]
    pub const fn invalid_depression_angle(value: f64) -> Self {
        Self::InvalidDepressionAngle { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates an invalid phase fraction error.
    #[must_use]
    pub const fn invalid_phase_fraction(value: f64) -> Self {
        Self::InvalidPhaseFraction { value }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates the observer altitude is a finite number of meters.
///
/// # Errors
/// Returns `InvalidAltitude` for NaN or infinite values.
pub fn check_altitude(altitude: f64) -> Result<()> {
    if !altitude.is_finite() {
        return Err(Error::invalid_altitude(altitude));
    }
    Ok(())
}

/// Validates a custom twilight depression angle (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidDepressionAngle` if the angle is outside -90 to +90 degrees.
pub fn check_depression_angle(degrees: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&degrees) {
        return Err(Error::invalid_depression_angle(degrees));
    }
    Ok(())
}

/// Validates a moon phase target fraction lies in [0, 1).
///
/// # Errors
/// Returns `InvalidPhaseFraction` otherwise.
pub fn check_phase_fraction(fraction: f64) -> Result<()> {
    if !(0.0..1.0).contains(&fraction) {
        return Err(Error::invalid_phase_fraction(fraction));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(40.4).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(-4.0).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(-181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
    }

    #[test]
    fn test_coordinates_validation_reports_first_failure() {
        assert_eq!(
            check_coordinates(95.0, 200.0),
            Err(Error::invalid_latitude(95.0))
        );
        assert_eq!(
            check_coordinates(45.0, 200.0),
            Err(Error::invalid_longitude(200.0))
        );
    }

    #[test]
    fn test_altitude_validation() {
        assert!(check_altitude(0.0).is_ok());
        assert!(check_altitude(-420.0).is_ok());
        assert!(check_altitude(8848.0).is_ok());
        assert!(check_altitude(f64::NAN).is_err());
        assert!(check_altitude(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_depression_angle_validation() {
        assert!(check_depression_angle(-6.0).is_ok());
        assert!(check_depression_angle(0.0).is_ok());
        assert!(check_depression_angle(-90.5).is_err());
        assert!(check_depression_angle(f64::NAN).is_err());
    }

    #[test]
    fn test_phase_fraction_validation() {
        assert!(check_phase_fraction(0.0).is_ok());
        assert!(check_phase_fraction(0.75).is_ok());
        assert!(check_phase_fraction(1.0).is_err());
        assert!(check_phase_fraction(-0.1).is_err());
        assert!(check_phase_fraction(f64::NAN).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_phase_fraction(1.5);
        assert_eq!(
            err.to_string(),
            "invalid moon phase fraction 1.5 (must be in [0, 1))"
        );

        let err = Error::invalid_datetime("month must be between 1 and 12");
        assert_eq!(
            err.to_string(),
            "invalid date/time: month must be between 1 and 12"
        );
    }
}
