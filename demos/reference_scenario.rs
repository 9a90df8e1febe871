//! Prints Sun and Moon ephemerides for an observer near Madrid on 2021-06-09 at 18:00 UT.
//!
//! Run with `RUST_LOG=debug` to see the rise/set refinement converge.

use lunisolar_positioning::time::{CalendarDate, calendar_from_julian_day};
use lunisolar_positioning::{Ephemeris, Event, MoonPhase, Observer, SunMoonCalculator, Twilight};

fn print_ephemeris(name: &str, ephemeris: &Ephemeris) {
    println!("{name}");
    println!("  Azimuth:      {:>10.4}°", ephemeris.azimuth_degrees());
    println!("  Elevation:    {:>10.4}°", ephemeris.elevation_degrees());
    println!("  RA:           {:>10.4}°", ephemeris.right_ascension().to_degrees());
    println!("  Declination:  {:>10.4}°", ephemeris.declination().to_degrees());
    println!("  Distance:     {:>10.6} AU", ephemeris.distance());
    println!("  Illumination: {:>10.2} %", ephemeris.illumination());

    for event in Event::ALL {
        match ephemeris.event(event) {
            Some(jd) => println!("  {event:?}: {}", calendar_from_julian_day(jd)),
            None => println!("  {event:?}: does not occur"),
        }
    }
    if let Some(elevation) = ephemeris.transit_elevation() {
        println!("  Transit elevation: {:.4}°", elevation.to_degrees());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let observer = Observer::new(40.0, -4.0, 0.0)?;
    let date = CalendarDate::new(2021, 6, 9, 18, 0, 0.0)?;
    let calculator = SunMoonCalculator::from_calendar(observer, &date)?;

    println!("Observer at 40° N, 4° W on {date}");
    println!("ΔT: {:.2} s", calculator.epoch().delta_t());
    println!();

    let ephemerides = calculator.compute();
    print_ephemeris("Sun", ephemerides.sun());
    print_ephemeris("Moon", ephemerides.moon());
    println!("Moon age: {:.4} days", ephemerides.moon_age());

    let appearance = calculator.moon_appearance();
    println!(
        "Bright limb at {:.1}°, disk {:.3} of mean size",
        appearance.bright_limb_angle().to_degrees(),
        appearance.relative_size()
    );
    println!();

    println!("Closest phases:");
    for phase in MoonPhase::ALL {
        match calculator.moon_phase_instant(phase) {
            Some(jd) => println!("  {phase:?}: {}", calendar_from_julian_day(jd)),
            None => println!("  {phase:?}: search did not converge"),
        }
    }
    println!();

    println!("Sun with twilight definitions:");
    for twilight in [Twilight::Civil, Twilight::Nautical, Twilight::Astronomical] {
        let sun = *calculator.with_twilight(twilight).compute().sun();
        let describe = |jd: Option<f64>| {
            jd.map_or_else(|| "-".to_string(), |jd| calendar_from_julian_day(jd).to_string())
        };
        println!(
            "  {twilight:?}: begins {}, ends {}",
            describe(sun.rise()),
            describe(sun.set())
        );
    }

    Ok(())
}
