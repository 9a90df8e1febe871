//! Time-related calculations: calendar dates, Julian Days and ΔT.
//!
//! Dates before 1582-10-15 are interpreted in the Julian calendar, later ones in the
//! Gregorian calendar. Conversions follow Meeus, "Astronomical Algorithms", chapter 7.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::cast_sign_loss)]

use crate::math::{floor, polynomial};
use crate::{Error, Result};
use core::fmt;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, TimeZone, Utc};

/// Seconds per day (86,400)
pub(crate) const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 TT)
pub(crate) const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
pub(crate) const DAYS_PER_CENTURY: f64 = 36_525.0;

/// First Julian Day of the Gregorian calendar (1582-10-15).
const GREGORIAN_CUTOVER_JDN: f64 = 2_299_161.0;

/// Julian Day of the Unix epoch (1970-01-01 00:00:00 UTC).
#[cfg(feature = "chrono")]
const UNIX_EPOCH_JDN: f64 = 2_440_587.5;

/// A calendar date and time of day in Universal Time.
///
/// Obtain one either through the validating constructor [`CalendarDate::new`] or by
/// converting a Julian Day with [`CalendarDate::from_julian_day`].
///
/// # Example
/// ```
/// # use lunisolar_positioning::time::CalendarDate;
/// let date = CalendarDate::new(2021, 6, 9, 18, 0, 0.0).unwrap();
/// assert_eq!(date.to_julian_day(), 2_459_375.25);
/// assert_eq!(date.to_string(), "2021-06-09 18:00:00 UT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

impl CalendarDate {
    /// Creates a validated calendar date.
    ///
    /// # Arguments
    /// * `year` - Year (astronomical numbering, 0 = 1 BCE)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month (1-31, checked against the month length)
    /// * `hour` - Hour (0-23)
    /// * `minute` - Minute (0-59)
    /// * `second` - Second (0-59, can include fractional seconds)
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if any component is out of range, or for the days
    /// 1582-10-05 through 1582-10-14 which do not exist.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if !(1..=31).contains(&day) {
            return Err(Error::invalid_datetime("day must be between 1 and 31"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }
        if day > days_in_month(year, month, day)? {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Recovers the calendar date from a Julian Day.
    ///
    /// The Julian/Gregorian switch is decided on the Julian Day value itself.
    #[must_use]
    pub fn from_julian_day(jd: f64) -> Self {
        calendar_from_julian_day(jd)
    }

    /// Converts this date to a Julian Day.
    #[must_use]
    pub fn to_julian_day(&self) -> f64 {
        julian_day_from_calendar(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Gets the minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Gets the second, including its fractional part.
    #[must_use]
    pub const fn second(&self) -> f64 {
        self.second
    }
}

impl fmt::Display for CalendarDate {
    /// Formats as `YYYY-MM-DD hh:mm:ss UT`, truncating fractional seconds.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02}-{:02} {:02}:{:02}:{:02} UT",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            floor(self.second) as u32
        )
    }
}

/// Converts calendar components in UT to a Julian Day.
///
/// Dates before 1582-10-15 use the Julian calendar. No validation is performed: calendar
/// nonsense such as day 32 silently yields a correspondingly shifted Julian Day.
///
/// # Example
/// ```
/// # use lunisolar_positioning::time::julian_day_from_calendar;
/// assert_eq!(julian_day_from_calendar(2000, 1, 1, 12, 0, 0.0), 2_451_545.0);
/// assert_eq!(julian_day_from_calendar(1582, 10, 4, 0, 0, 0.0) + 1.0,
///            julian_day_from_calendar(1582, 10, 15, 0, 0, 0.0));
/// ```
#[must_use]
pub fn julian_day_from_calendar(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> f64 {
    let julian_calendar = !is_gregorian_date(year, month, day);

    let mut y = f64::from(year);
    let mut m = f64::from(month);
    // January and February count as months 13 and 14 of the previous year
    if m < 3.0 {
        y -= 1.0;
        m += 12.0;
    }

    let b = if julian_calendar {
        0.0
    } else {
        let a = floor(y / 100.0);
        2.0 - a + floor(a / 4.0)
    };

    let day_fraction =
        (f64::from(hour) + (f64::from(minute) + second / 60.0) / 60.0) / 24.0;

    let day_number =
        floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + f64::from(day) + b - 1524.5;

    day_fraction + day_number
}

/// Converts a Julian Day back to calendar components in UT.
///
/// Round trips through [`julian_day_from_calendar`] reproduce the input to well below one
/// second for years -600 to 2200.
#[must_use]
pub fn calendar_from_julian_day(jd: f64) -> CalendarDate {
    let z = floor(jd + 0.5);
    let f = jd + 0.5 - z;

    let mut a = z;
    if z >= GREGORIAN_CUTOVER_JDN {
        let alpha = floor((z - 1_867_216.25) / 36_524.25);
        a += 1.0 + alpha - floor(alpha / 4.0);
    }
    let b = a + 1524.0;
    let c = floor((b - 122.1) / 365.25);
    let d = floor(c * 365.25);
    let e = floor((b - d) / 30.6001);

    let exact_day = f + b - d - floor(30.6001 * e);
    let day = floor(exact_day);
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    let seconds_of_day = (exact_day - day) * SECONDS_PER_DAY;
    let hour = floor(seconds_of_day / 3600.0);
    let minute = floor((seconds_of_day - hour * 3600.0) / 60.0);
    let second = seconds_of_day - hour * 3600.0 - minute * 60.0;

    CalendarDate {
        year: year as i32,
        month: month as u32,
        day: day as u32,
        hour: hour as u32,
        minute: minute as u32,
        second,
    }
}

/// Converts a timezone-aware chrono `DateTime` to a Julian Day in UT.
///
/// chrono uses the proleptic Gregorian calendar, so the conversion goes through the Unix
/// timestamp rather than calendar fields.
#[cfg(feature = "chrono")]
#[must_use]
pub fn julian_day_from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    let utc = datetime.with_timezone(&Utc);
    let seconds = utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) / 1e9;
    UNIX_EPOCH_JDN + seconds / SECONDS_PER_DAY
}

/// Converts a Julian Day in UT to a chrono `DateTime<Utc>`, rounded to the millisecond.
///
/// Returns `None` if the instant is outside chrono's representable range.
#[cfg(feature = "chrono")]
#[must_use]
pub fn datetime_from_julian_day(jd: f64) -> Option<DateTime<Utc>> {
    let millis = floor((jd - UNIX_EPOCH_JDN) * SECONDS_PER_DAY * 1000.0 + 0.5);
    if !millis.is_finite() || millis.abs() > 9.0e18 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

const fn is_gregorian_date(year: i32, month: u32, day: u32) -> bool {
    year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15)))
}

const fn is_leap_year(year: i32, is_gregorian: bool) -> bool {
    if is_gregorian {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year % 4 == 0
    }
}

fn days_in_month(year: i32, month: u32, day: u32) -> Result<u32> {
    if year == 1582 && month == 10 && (5..=14).contains(&day) {
        return Err(Error::invalid_datetime(
            "dates 1582-10-05 through 1582-10-14 do not exist in Gregorian calendar",
        ));
    }

    let is_gregorian = is_gregorian_date(year, month, day);
    let days = match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year, is_gregorian) {
                29
            } else {
                28
            }
        }
        _ => 31,
    };
    Ok(days)
}

/// ΔT (TT − UT) estimation.
///
/// Two degree-8 polynomial fits in the decimal year `year + (month - 1 + day/30) / 12`,
/// one for years before 1600 and one from 1600 on. Outside the open range (-600, 2200)
/// the estimate is 0.
pub struct DeltaT;

impl DeltaT {
    const BEFORE_1600: [f64; 9] = [
        10535.328003,
        -9.9952386275,
        0.00306730763,
        -7.7634069836e-6,
        3.1331045394e-9,
        8.2255308544e-12,
        -7.4861647156e-15,
        1.936246155e-18,
        -8.4892249378e-23,
    ];

    const FROM_1600: [f64; 9] = [
        -1027175.3477559977,
        2523.256625418965,
        -1.885686849058459,
        5.869246227888417e-5,
        3.3379295816475025e-7,
        1.7758961671447929e-10,
        -2.7889902806153024e-13,
        1.0224295822336825e-16,
        -1.2528102370680435e-20,
    ];

    /// Estimates ΔT in seconds for a calendar date.
    ///
    /// # Example
    /// ```
    /// # use lunisolar_positioning::time::DeltaT;
    /// let delta_t = DeltaT::estimate(2021, 6, 9);
    /// assert!(delta_t > 70.0 && delta_t < 75.0);
    /// assert_eq!(DeltaT::estimate(2500, 1, 1), 0.0);
    /// ```
    #[must_use]
    pub fn estimate(year: i32, month: u32, day: u32) -> f64 {
        if year <= -600 || year >= 2200 {
            return 0.0;
        }

        let x = f64::from(year) + (f64::from(month) - 1.0 + f64::from(day) / 30.0) / 12.0;
        if year < 1600 {
            polynomial(&Self::BEFORE_1600, x)
        } else {
            polynomial(&Self::FROM_1600, x)
        }
    }

    /// Estimates ΔT from any chrono date-like value (`DateTime`, `NaiveDate`, ...).
    #[cfg(feature = "chrono")]
    #[allow(clippy::needless_pass_by_value)]
    #[must_use]
    pub fn estimate_from_date_like<D: Datelike>(date: D) -> f64 {
        Self::estimate(date.year(), date.month(), date.day())
    }
}
