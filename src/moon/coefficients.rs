//! Periodic terms of the lunar theory.
//!
//! Each term is `coefficient · E^eccentricity_power · f(d·D + m·M + m'·M' + f·F)` where D is
//! the mean elongation, M and M' the mean anomalies of the Sun and the Moon, F the argument
//! of latitude and E the eccentricity factor of the Earth's orbit. Longitude and latitude
//! use the sine, parallax uses the cosine. Coefficients are in degrees.

#![allow(clippy::unreadable_literal)]

/// One periodic term of the lunar series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicTerm {
    /// Amplitude in degrees
    pub coefficient: f64,
    /// Power of the eccentricity factor E (0, 1 or 2)
    pub eccentricity_power: i32,
    /// Multiple of the mean elongation D
    pub elongation: i8,
    /// Multiple of the Sun's mean anomaly M
    pub sun_anomaly: i8,
    /// Multiple of the Moon's mean anomaly M'
    pub moon_anomaly: i8,
    /// Multiple of the argument of latitude F
    pub argument_of_latitude: i8,
}

impl PeriodicTerm {
    const fn new(
        coefficient: f64,
        eccentricity_power: i32,
        elongation: i8,
        sun_anomaly: i8,
        moon_anomaly: i8,
        argument_of_latitude: i8,
    ) -> Self {
        Self {
            coefficient,
            eccentricity_power,
            elongation,
            sun_anomaly,
            moon_anomaly,
            argument_of_latitude,
        }
    }
}

/// Longitude terms (degrees).
pub const LONGITUDE_TERMS: [PeriodicTerm; 50] = [
    PeriodicTerm::new(6.28875, 0, 0, 0, 1, 0),
    PeriodicTerm::new(1.274018, 0, 2, 0, -1, 0),
    PeriodicTerm::new(0.658309, 0, 2, 0, 0, 0),
    PeriodicTerm::new(0.213616, 0, 0, 0, 2, 0),
    PeriodicTerm::new(-0.185596, 1, 0, 1, 0, 0),
    PeriodicTerm::new(-0.114336, 0, 0, 0, 0, 2),
    PeriodicTerm::new(0.058793, 0, 2, 0, -2, 0),
    PeriodicTerm::new(0.057212, 1, 2, -1, -1, 0),
    PeriodicTerm::new(0.05332, 0, 2, 0, 1, 0),
    PeriodicTerm::new(0.045874, 1, 2, -1, 0, 0),
    PeriodicTerm::new(0.041024, 1, 0, -1, 1, 0),
    PeriodicTerm::new(-0.034718, 0, 1, 0, 0, 0),
    PeriodicTerm::new(-0.030465, 1, 0, 1, 1, 0),
    PeriodicTerm::new(0.015326, 0, 2, 0, 0, -2),
    PeriodicTerm::new(-0.012528, 0, 0, 0, 1, 2),
    PeriodicTerm::new(-0.01098, 0, 0, 0, -1, 2),
    PeriodicTerm::new(0.010674, 0, 4, 0, -1, 0),
    PeriodicTerm::new(0.010034, 0, 0, 0, 3, 0),
    PeriodicTerm::new(0.008548, 0, 4, 0, -2, 0),
    PeriodicTerm::new(-0.00791, 1, 2, 1, -1, 0),
    PeriodicTerm::new(-0.006783, 1, 2, 1, 0, 0),
    PeriodicTerm::new(0.005162, 0, -1, 0, 1, 0),
    PeriodicTerm::new(0.005, 1, 1, 1, 0, 0),
    PeriodicTerm::new(0.003862, 0, 4, 0, 0, 0),
    PeriodicTerm::new(0.004049, 1, 2, -1, 1, 0),
    PeriodicTerm::new(0.003996, 0, 2, 0, 2, 0),
    PeriodicTerm::new(0.003665, 0, 2, 0, -3, 0),
    PeriodicTerm::new(0.002695, 1, 0, -1, 2, 0),
    PeriodicTerm::new(0.002602, 0, -2, 0, 1, -2),
    PeriodicTerm::new(0.002396, 1, 2, -1, -2, 0),
    PeriodicTerm::new(-0.002349, 0, 1, 0, 1, 0),
    PeriodicTerm::new(0.002249, 2, 2, -2, 0, 0),
    PeriodicTerm::new(-0.002125, 1, 0, 1, 2, 0),
    PeriodicTerm::new(-0.002079, 2, 0, 2, 0, 0),
    PeriodicTerm::new(0.002059, 2, 2, -2, -1, 0),
    PeriodicTerm::new(-0.001773, 0, 2, 0, 1, -2),
    PeriodicTerm::new(-0.001595, 0, 2, 0, 0, 2),
    PeriodicTerm::new(0.00122, 1, 4, -1, -1, 0),
    PeriodicTerm::new(-0.00111, 0, 0, 0, 2, 2),
    PeriodicTerm::new(0.000892, 0, -3, 0, 1, 0),
    PeriodicTerm::new(-0.000811, 1, 2, 1, 1, 0),
    PeriodicTerm::new(0.000761, 1, 4, -1, -2, 0),
    PeriodicTerm::new(0.000704, 2, -2, -2, 1, 0),
    PeriodicTerm::new(0.000693, 1, 2, 1, -2, 0),
    PeriodicTerm::new(0.000598, 1, 2, -1, 0, -2),
    PeriodicTerm::new(0.00055, 0, 4, 0, 1, 0),
    PeriodicTerm::new(0.000538, 0, 0, 0, 4, 0),
    PeriodicTerm::new(0.000521, 1, 4, -1, 0, 0),
    PeriodicTerm::new(0.000486, 0, -1, 0, 2, 0),
    PeriodicTerm::new(0.000717, 2, 0, -2, 1, 0),
];

/// Horizontal parallax terms (degrees).
pub const PARALLAX_TERMS: [PeriodicTerm; 30] = [
    PeriodicTerm::new(0.051818, 0, 0, 0, 1, 0),
    PeriodicTerm::new(0.009531, 0, 2, 0, -1, 0),
    PeriodicTerm::new(0.007843, 0, 2, 0, 0, 0),
    PeriodicTerm::new(0.002824, 0, 0, 0, 2, 0),
    PeriodicTerm::new(0.000857, 0, 2, 0, 1, 0),
    PeriodicTerm::new(0.000533, 1, 2, -1, 0, 0),
    PeriodicTerm::new(0.000401, 1, 2, -1, -1, 0),
    PeriodicTerm::new(0.00032, 1, 0, -1, 1, 0),
    PeriodicTerm::new(-0.000271, 0, 1, 0, 0, 0),
    PeriodicTerm::new(-0.000264, 1, 0, 1, 1, 0),
    PeriodicTerm::new(-0.000198, 0, 0, 0, -1, 2),
    PeriodicTerm::new(0.000173, 0, 0, 0, 3, 0),
    PeriodicTerm::new(0.000167, 0, 4, 0, -1, 0),
    PeriodicTerm::new(-0.000111, 1, 0, 1, 0, 0),
    PeriodicTerm::new(0.000103, 0, 4, 0, -2, 0),
    PeriodicTerm::new(-8.4e-05, 0, -2, 0, 2, 0),
    PeriodicTerm::new(-8.3e-05, 1, 2, 1, 0, 0),
    PeriodicTerm::new(7.9e-05, 0, 2, 0, 2, 0),
    PeriodicTerm::new(7.2e-05, 0, 4, 0, 0, 0),
    PeriodicTerm::new(6.4e-05, 1, 2, -1, 1, 0),
    PeriodicTerm::new(-6.3e-05, 1, 2, 1, -1, 0),
    PeriodicTerm::new(4.1e-05, 1, 1, 1, 0, 0),
    PeriodicTerm::new(3.5e-05, 1, 0, -1, 2, 0),
    PeriodicTerm::new(-3.3e-05, 0, -2, 0, 3, 0),
    PeriodicTerm::new(-3e-05, 0, 1, 0, 1, 0),
    PeriodicTerm::new(-2.9e-05, 0, -2, 0, 0, 2),
    PeriodicTerm::new(-2.9e-05, 1, 0, 1, 2, 0),
    PeriodicTerm::new(2.6e-05, 2, 2, -2, 0, 0),
    PeriodicTerm::new(-2.3e-05, 0, -2, 0, 1, 2),
    PeriodicTerm::new(1.9e-05, 1, 4, -1, -1, 0),
];

/// Latitude terms (degrees).
pub const LATITUDE_TERMS: [PeriodicTerm; 45] = [
    PeriodicTerm::new(5.128189, 0, 0, 0, 0, 1),
    PeriodicTerm::new(0.280606, 0, 0, 0, 1, 1),
    PeriodicTerm::new(0.277693, 0, 0, 0, 1, -1),
    PeriodicTerm::new(0.173238, 0, 2, 0, 0, -1),
    PeriodicTerm::new(0.055413, 0, 2, 0, -1, 1),
    PeriodicTerm::new(0.046272, 0, 2, 0, -1, -1),
    PeriodicTerm::new(0.032573, 0, 2, 0, 0, 1),
    PeriodicTerm::new(0.017198, 0, 0, 0, 2, 1),
    PeriodicTerm::new(0.009267, 0, 2, 0, 1, -1),
    PeriodicTerm::new(0.008823, 0, 0, 0, 2, -1),
    PeriodicTerm::new(0.008247, 1, 2, -1, 0, -1),
    PeriodicTerm::new(0.004323, 0, 2, 0, -2, -1),
    PeriodicTerm::new(0.0042, 0, 2, 0, 1, 1),
    PeriodicTerm::new(0.003372, 1, -2, -1, 0, 1),
    PeriodicTerm::new(0.002472, 1, 2, -1, -1, 1),
    PeriodicTerm::new(0.002222, 1, 2, -1, 0, 1),
    PeriodicTerm::new(0.002072, 1, 2, -1, -1, -1),
    PeriodicTerm::new(0.001877, 1, 0, -1, 1, 1),
    PeriodicTerm::new(0.001828, 0, 4, 0, -1, -1),
    PeriodicTerm::new(-0.001803, 1, 0, 1, 0, 1),
    PeriodicTerm::new(-0.00175, 0, 0, 0, 0, 3),
    PeriodicTerm::new(0.00157, 1, 0, -1, 1, -1),
    PeriodicTerm::new(-0.001487, 0, 1, 0, 0, 1),
    PeriodicTerm::new(-0.001481, 1, 0, 1, 1, 1),
    PeriodicTerm::new(0.001417, 1, 0, -1, -1, 1),
    PeriodicTerm::new(0.00135, 1, 0, -1, 0, 1),
    PeriodicTerm::new(0.00133, 0, -1, 0, 0, 1),
    PeriodicTerm::new(0.001106, 0, 0, 0, 3, 1),
    PeriodicTerm::new(0.00102, 0, 4, 0, 0, -1),
    PeriodicTerm::new(0.000833, 0, 4, 0, -1, 1),
    PeriodicTerm::new(0.000781, 0, 0, 0, 1, -3),
    PeriodicTerm::new(0.00067, 0, 4, 0, -2, 1),
    PeriodicTerm::new(0.000606, 0, 2, 0, 0, -3),
    PeriodicTerm::new(0.000597, 0, 2, 0, 2, -1),
    PeriodicTerm::new(0.000492, 1, 2, -1, 1, -1),
    PeriodicTerm::new(0.00045, 0, -2, 0, 2, -1),
    PeriodicTerm::new(0.000439, 0, 0, 0, 3, -1),
    PeriodicTerm::new(0.000423, 0, 2, 0, 2, 1),
    PeriodicTerm::new(0.000422, 0, 2, 0, -3, -1),
    PeriodicTerm::new(-0.000367, 1, 2, 1, -1, 1),
    PeriodicTerm::new(-0.000353, 1, 2, 1, 0, 1),
    PeriodicTerm::new(0.000331, 0, 4, 0, 0, 1),
    PeriodicTerm::new(0.000317, 1, 2, -1, 1, 1),
    PeriodicTerm::new(0.000306, 2, 2, -2, 0, -1),
    PeriodicTerm::new(-0.000283, 0, 0, 0, 1, 3),
];
