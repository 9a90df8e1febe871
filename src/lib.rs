//! # Lunisolar Positioning Library
//!
//! Low-precision ephemerides of the Sun and the Moon: positions, rise/set/transit times,
//! illumination, Moon age and Moon phase instants for an observer on the Earth.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The library combines compact analytical models that are accurate to a few arcseconds for
//! the Sun and about ten arcseconds for the Moon over several centuries around J2000:
//! - **Sun**: 50-term harmonic series in longitude and radius vector (Bretagnon & Simon)
//! - **Moon**: truncated Brown/Eckert lunar theory with periodic series for longitude,
//!   latitude and parallax
//!
//! Positions are transformed to topocentric horizontal coordinates (parallax, refraction) and
//! rise, set and transit are refined iteratively to one second. ΔT (TT − UT) is estimated
//! with polynomial fits for years -600 to 2200.
//!
//! ## Features
//!
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Stateless: every computation works on its own immutable [`epoch::EpochState`]
//! - Rise/set for the horizon or civil, nautical, astronomical or custom twilight
//! - Moon phases: new, first quarter, full, last quarter or any fraction of the cycle
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: `Serialize`/`Deserialize` for observers, ephemerides, dates and enums
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! lunisolar-positioning = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! lunisolar-positioning = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! lunisolar-positioning = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade: per-step traces of the
//! rise/set refinement, convergence at debug level, and a warning when an iterative search
//! gives up. No logger is installed by the library.
//!
//! ## References
//!
//! - Bretagnon, P.; Simon, J.-L. (1986). Planetary Programs and Tables from -4000 to +2800.
//!   Willmann-Bell.
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd ed. Willmann-Bell.
//! - Espenak, F.; Meeus, J. (2006). Five Millennium Canon of Solar Eclipses: -1999 to +3000.
//!   NASA/TP-2006-214141.
//!
//! ## Quick Start
//!
//! ### Sun and Moon (numeric API)
//! ```rust
//! use lunisolar_positioning::{compute_ephemerides, time::DeltaT, Observer, Twilight};
//! use lunisolar_positioning::time::{calendar_from_julian_day, julian_day_from_calendar};
//!
//! let observer = Observer::new(40.0, -4.0, 0.0).unwrap();
//! let jd = julian_day_from_calendar(2021, 6, 9, 18, 0, 0.0);
//! let ephemerides = compute_ephemerides(
//!     &observer,
//!     jd,
//!     DeltaT::estimate(2021, 6, 9),
//!     Twilight::Horizon,
//! );
//!
//! let sun = ephemerides.sun();
//! println!("Sun azimuth: {:.3}°", sun.azimuth_degrees());
//! println!("Sun elevation: {:.3}°", sun.elevation_degrees());
//! if let Some(set) = sun.set() {
//!     println!("Sunset: {}", calendar_from_julian_day(set));
//! }
//! println!("Moon age: {:.2} days", ephemerides.moon_age());
//! ```
//!
//! ### Moon phases (requires chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use lunisolar_positioning::{MoonPhase, Observer, SunMoonCalculator};
//! use chrono::{DateTime, FixedOffset};
//!
//! let observer = Observer::new(40.0, -4.0, 0.0).unwrap();
//! let now = "2021-06-09T20:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let calculator = SunMoonCalculator::from_datetime(observer, &now).unwrap();
//!
//! let full_moon = calculator.moon_phase_datetime(MoonPhase::Full).unwrap();
//! println!("Closest full moon: {full_moon}");
//! # }
//! ```
//!
//! ## Coordinate System
//!
//! - **Angles**: radians internally, degree getters for display
//! - **Azimuth**: 0 = North, measured clockwise (0 to 2π)
//! - **Elevation**: 0 = horizon, π/2 = zenith, refraction corrected for topocentric results
//! - **Event times**: Julian Days in UT; `None` when the event does not occur

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of reference values in tests
)]

// Public API exports
pub use crate::calculator::{SunMoonCalculator, compute_ephemerides};
pub use crate::epoch::EpochState;
pub use crate::error::{Error, Result};
pub use crate::moon::LunarPosition;
pub use crate::time::CalendarDate;
pub use crate::types::{
    Body, BodyPosition, Ephemerides, Ephemeris, Event, MoonAppearance, MoonPhase, Observer,
    Twilight, Vantage,
};

// Position models
pub mod moon;
pub mod sun;

// Engine stages
pub mod calculator;
pub mod epoch;
pub mod phase;
pub mod refraction;
pub mod riseset;
pub mod topocentric;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
